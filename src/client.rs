use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::dhcp::DhcpHandler;
use crate::api::interfaces::InterfaceHandler;
use crate::api::vlans::VlanHandler;
use crate::models::ApiResponse;
use crate::{PfSenseError, PfSenseResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_USER_AGENT: &str = concat!("pfsense-client/", env!("CARGO_PKG_VERSION"));

/// Builder for pfSense client.
///
/// This builder provides a fluent API for creating pfSense clients
/// with validation at build time.
pub struct PfSenseClientBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    accept_invalid_certs: bool,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl Default for PfSenseClientBuilder {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            // pfSense ships with a self-signed web GUI certificate.
            accept_invalid_certs: true,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            http_client: None,
        }
    }
}

impl PfSenseClientBuilder {
    /// Sets the appliance URL, e.g. `https://192.168.1.1`.
    ///
    /// A path prefix is kept: endpoints are resolved below it.
    pub fn host(mut self, url: impl Into<String>) -> Self {
        self.host = Some(url.into());
        self
    }

    /// Sets the credentials used for HTTP basic authentication.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Sets whether invalid TLS certificates are accepted. Defaults to `true`.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets the HTTP request timeout. Defaults to five seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// The timeout, TLS and user agent settings of this builder are not
    /// applied to a custom client.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// No request is sent: credentials are attached to every call instead.
    pub fn build(self) -> PfSenseResult<PfSenseClient> {
        let host = self
            .host
            .ok_or_else(|| PfSenseError::ConfigurationError("Host is required".into()))?;
        let base_url = parse_base_url(&host)?;

        let username = self
            .username
            .filter(|username| !username.trim().is_empty())
            .ok_or_else(|| PfSenseError::ConfigurationError("Username is required".into()))?;

        let password = self
            .password
            .filter(|password| !password.expose_secret().trim().is_empty())
            .ok_or_else(|| PfSenseError::ConfigurationError("Password is required".into()))?;

        let user_agent = self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => ReqwestClient::builder()
                .timeout(self.timeout)
                .danger_accept_invalid_certs(self.accept_invalid_certs)
                .user_agent(user_agent.as_str())
                .build()
                .map_err(|e| {
                    PfSenseError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?,
        };

        Ok(PfSenseClient {
            base_url,
            username,
            password: Arc::new(password),
            accept_invalid_certs: self.accept_invalid_certs,
            timeout: self.timeout,
            user_agent,
            http_client,
        })
    }
}

fn parse_base_url(host: &str) -> PfSenseResult<Url> {
    let mut url = Url::parse(host.trim())
        .map_err(|e| PfSenseError::ConfigurationError(format!("Invalid host URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(PfSenseError::ConfigurationError(format!(
            "Invalid host URL: unsupported scheme `{}`",
            url.scheme()
        )));
    }

    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// The main pfSense client for interacting with the pfSense REST API.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Clone)]
pub struct PfSenseClient {
    base_url: Url,
    username: String,
    password: Arc<SecretString>,
    accept_invalid_certs: bool,
    timeout: Duration,
    user_agent: String,
    http_client: ReqwestClient,
}

impl fmt::Debug for PfSenseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PfSenseClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl PfSenseClient {
    pub fn builder() -> PfSenseClientBuilder {
        PfSenseClientBuilder::default()
    }

    /// The URL all endpoints are resolved against.
    pub fn host(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Gets the VLAN API interface.
    pub fn vlans(&self) -> VlanHandler {
        VlanHandler::new(self.clone())
    }

    /// Gets the interface API interface.
    pub fn interfaces(&self) -> InterfaceHandler {
        InterfaceHandler::new(self.clone())
    }

    /// Gets the DHCP API interface.
    pub fn dhcp(&self) -> DhcpHandler {
        DhcpHandler::new(self.clone())
    }

    fn endpoint_url(&self, endpoint: &str) -> PfSenseResult<Url> {
        if endpoint.contains('?') || endpoint.contains('#') {
            return Err(PfSenseError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }

        let relative = endpoint.trim_start_matches('/');
        // Anything that parses on its own carries a scheme (`http:x`, `vlan:1`).
        if relative.contains("://") || Url::parse(relative).is_ok() {
            return Err(PfSenseError::InvalidEndpoint(format!(
                "endpoint must be a relative path: {endpoint}"
            )));
        }

        // Relative join keeps any path prefix of the host.
        let url = self.base_url.join(relative)?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(PfSenseError::InvalidEndpoint(format!(
                "endpoint must stay below the host path: {endpoint}"
            )));
        }

        Ok(url)
    }

    /// Sends one request and returns the body of a 2xx response.
    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> PfSenseResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("{method} {url}");

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.username, Some(self.password.expose_secret()));

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(data) = body {
            request = request.json(data);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!("{method} {endpoint} failed with status {status}");
            return Err(error_from_response(status, &bytes));
        }

        Ok(bytes.to_vec())
    }

    /// Make a request to the pfSense API and return the envelope's `data`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use.
    /// * `endpoint` - Path relative to the host, e.g. `api/v2/interface/vlans`.
    /// * `query` - Query parameters, URL-encoded by the client.
    /// * `body` - Optional JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint carries a query string, a fragment or a scheme.
    /// - The request fails due to network issues.
    /// - The API answers with a non-2xx status ([`PfSenseError::Api`]).
    /// - The response has no `data` ([`PfSenseError::MissingData`]).
    /// - Deserialization of the response fails.
    pub async fn request<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> PfSenseResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = self.send(method, endpoint, query, body).await?;
        let api_response: ApiResponse<R> = serde_json::from_slice(&bytes)?;

        api_response.data.ok_or(PfSenseError::MissingData)
    }

    /// Like [`PfSenseClient::request`], but discards the response body.
    pub(crate) async fn execute<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> PfSenseResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, endpoint, query, body).await.map(|_| ())
    }

    /// Makes a raw request to the pfSense API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `vlans()`, `interfaces()`) when possible.
    ///
    /// Returns the envelope's `data`, or `Value::Null` when there is none.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::{PfSenseClient, PfSenseError};
    /// # use http::Method;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PfSenseError> {
    /// let client = PfSenseClient::builder()
    ///     .host("https://192.168.1.1")
    ///     .credentials("admin", "pfsense")
    ///     .build()?;
    ///
    /// let version = client
    ///     .raw_request(Method::GET, "api/v2/system/version", &[], None::<&()>)
    ///     .await?;
    ///
    /// println!("System version: {version}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> PfSenseResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let bytes = self.send(method, endpoint, query, body).await?;
        let api_response: ApiResponse<Value> = serde_json::from_slice(&bytes)?;

        Ok(api_response.data.unwrap_or(Value::Null))
    }
}

fn error_from_response(status: StatusCode, body: &[u8]) -> PfSenseError {
    let message = serde_json::from_slice::<ApiResponse<Value>>(body)
        .ok()
        .and_then(|api_response| api_response.message)
        .filter(|message| !message.is_empty());

    PfSenseError::Api {
        status: status.into(),
        message,
    }
}
