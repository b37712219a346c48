//! Per-guild channel allowlist storage and the access policy built on it.
//!
//! Hosts the durable guild-to-allowed-channel mapping consulted before any
//! like request is dispatched, plus the deny-by-default gate decision.

pub mod access_gate;
pub mod like_channel_store;

pub use access_gate::{check_channel_access, AccessDecision};
pub use like_channel_store::{ChannelToggle, LikeChannelConfigFile, LikeChannelStore};
