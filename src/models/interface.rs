use serde::{Deserialize, Serialize};

/// Settings of an assigned interface, as sent on create and update.
///
/// Only `if` and `descr` are always sent; every other field is omitted
/// from the request body when unset so the appliance keeps its current
/// value (or its default on create).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRequest {
    /// Physical or virtual port backing the interface (e.g. `igb0`, `igb1.30`).
    #[serde(rename = "if", default)]
    pub interface: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    /// Descriptive name, also usable as an identifier.
    #[serde(default)]
    pub descr: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoofmac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediaopt: Option<String>,

    /// Block RFC 1918 private networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockpriv: Option<bool>,
    /// Block reserved and unassigned networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockbogons: Option<bool>,

    /// IPv4 configuration type, e.g. `static`, `dhcp` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typev4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddr: Option<String>,
    /// IPv4 prefix length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_subnet: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_retry: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_select_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_reboot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_backoff_cutoff: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_pt_initial_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_send_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_request_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_required_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_option_modifiers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adv_dhcp_config_file_override_path: Option<String>,

    /// IPv6 configuration type, e.g. `staticv6`, `dhcp6`, `track6` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typev6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddrv6: Option<String>,
    /// IPv6 prefix length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnetv6: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gatewayv6: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_6rd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_6rd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_6rd_v4plen: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track6_interface: Option<String>,
}

impl InterfaceRequest {
    /// Creates a request assigning `interface` under the description `descr`.
    ///
    /// Remaining fields can be filled in with struct update syntax:
    ///
    /// ```
    /// use pfsense_client::InterfaceRequest;
    ///
    /// let request = InterfaceRequest {
    ///     enable: Some(true),
    ///     typev4: Some("static".into()),
    ///     ipaddr: Some("10.30.0.1".into()),
    ///     subnet: Some(24),
    ///     ..InterfaceRequest::new("igb1.30", "CAMERAS")
    /// };
    /// assert_eq!(request.interface, "igb1.30");
    /// ```
    pub fn new(interface: impl Into<String>, descr: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            descr: descr.into(),
            ..Default::default()
        }
    }
}

/// An assigned interface as stored on the appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// pfSense interface id (`wan`, `lan`, `optN`).
    pub id: String,

    #[serde(flatten)]
    pub config: InterfaceRequest,
}

impl Interface {
    /// Returns true if the interface is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enable.unwrap_or(false)
    }
}

impl std::fmt::Display for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.config.descr, self.id)
    }
}
