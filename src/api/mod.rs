//! Resource handlers, one per pfSense API area.

pub mod dhcp;
pub mod interfaces;
pub mod vlans;
