use serde::Deserialize;

/// Standard response envelope returned by the pfSense REST API.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Textual outcome, e.g. `"ok"` or `"not found"`.
    #[serde(default)]
    pub status: String,

    /// HTTP status code echoed by the appliance.
    #[serde(default)]
    pub code: u16,

    /// Machine-readable identifier of the response type.
    #[serde(default)]
    pub response_id: Option<String>,

    /// Human-readable message, populated on errors.
    #[serde(default)]
    pub message: Option<String>,

    /// The actual data returned, if any.
    pub data: Option<T>,
}
