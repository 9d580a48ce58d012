use serde::{Deserialize, Serialize};

/// A DHCP server lease, dynamic or static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhcpLease {
    /// Leased IPv4 address.
    pub ip: String,

    /// Lease kind, e.g. `"static"` or `"dynamic"`.
    #[serde(rename = "type", default)]
    pub lease_type: String,

    /// Client hardware address.
    pub mac: String,

    /// pfSense interface id serving the lease (e.g. `opt10`).
    #[serde(rename = "if", default)]
    pub interface: String,

    /// Lease start. Empty for static mappings.
    #[serde(default)]
    pub starts: String,

    /// Lease end. Empty for static mappings.
    #[serde(default)]
    pub ends: String,

    #[serde(default)]
    pub hostname: String,

    #[serde(default)]
    pub descr: String,

    /// Whether the client currently answers on the network.
    #[serde(default)]
    pub online: bool,

    /// Index into the interface's static mapping list, for static leases.
    #[serde(default)]
    pub staticmap_array_index: Option<u32>,

    /// Lease state as reported by the DHCP daemon, e.g. `"active"`.
    #[serde(default)]
    pub state: String,
}

impl DhcpLease {
    /// Returns true for leases backed by a static mapping.
    pub fn is_static(&self) -> bool {
        self.lease_type == "static"
    }
}
