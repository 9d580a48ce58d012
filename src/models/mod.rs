//! Data models for the pfSense API.
//!
//! This module contains the various data structures used in the pfSense API.

pub mod api_response;
pub mod dhcp;
pub mod interface;
pub mod pagination;
pub mod vlan;

pub use api_response::ApiResponse;
