//! # pfsense-client
//!
//! A Rust client library for the pfSense REST API (v2).
//!
//! This crate provides a type-safe, async interface to a pfSense firewall,
//! covering VLANs, assigned interfaces and DHCP server leases.
//!
//! ## Features
//!
//! - 🔐 HTTP basic authentication on every request
//! - 🏷️ VLAN management (list, get, create, update, delete)
//! - 🔌 Interface management, including applying staged changes
//! - 📋 DHCP lease listing
//! - 🛡️ Typed errors for every HTTP status the API returns
//!
//! ## Example
//!
//! ```rust,no_run
//! use pfsense_client::PfSenseClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PfSenseClient::builder()
//!         .host("https://192.168.1.1")
//!         .credentials("admin", "pfsense")
//!         .accept_invalid_certs(true)
//!         .build()?;
//!
//!     let vlan = client.vlans().create("igb1", 30).description("cameras").send().await?;
//!     println!("Created {} with id {}", vlan, vlan.id);
//!
//!     for lease in client.dhcp().list_leases().send().await? {
//!         println!("{} -> {}", lease.mac, lease.ip);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
pub mod models;

pub use api::dhcp::{DhcpHandler, ListLeasesBuilder};
pub use api::interfaces::{
    ApplyInterfacesBuilder, CreateInterfaceBuilder, DeleteInterfaceBuilder, GetInterfaceBuilder,
    InterfaceHandler, ListInterfacesBuilder, UpdateInterfaceBuilder,
};
pub use api::vlans::{
    CreateVlanBuilder, DeleteVlanBuilder, GetVlanBuilder, ListVlansBuilder, UpdateVlanBuilder,
    VlanHandler,
};
pub use client::{PfSenseClient, PfSenseClientBuilder};
pub use error::{ApiStatus, PfSenseError, PfSenseResult, UrlParseError};
pub use models::api_response::ApiResponse;
pub use models::dhcp::DhcpLease;
pub use models::interface::{Interface, InterfaceRequest};
pub use models::pagination::Pagination;
pub use models::vlan::{Vlan, VlanRequest};
