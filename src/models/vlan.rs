use serde::{Deserialize, Serialize};

/// Settings of a VLAN, as sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanRequest {
    /// Parent interface the VLAN is tagged on (e.g. `igb1`).
    #[serde(rename = "if")]
    pub interface: String,

    /// 802.1Q VLAN tag.
    pub tag: u16,

    /// Name of the VLAN interface, assigned by the appliance if omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlanif: Option<String>,

    /// 802.1p priority code point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcp: Option<u8>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
}

impl VlanRequest {
    /// Creates a request for `tag` on the parent `interface`.
    pub fn new(interface: impl Into<String>, tag: u16) -> Self {
        Self {
            interface: interface.into(),
            tag,
            ..Default::default()
        }
    }
}

/// A VLAN as stored on the appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    /// Position of the VLAN in the appliance configuration.
    pub id: u32,

    #[serde(flatten)]
    pub config: VlanRequest,
}

impl Vlan {
    /// The VLAN tag.
    pub fn tag(&self) -> u16 {
        self.config.tag
    }

    /// The parent interface.
    pub fn parent(&self) -> &str {
        &self.config.interface
    }
}

impl std::fmt::Display for Vlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.config.interface, self.config.tag)
    }
}
