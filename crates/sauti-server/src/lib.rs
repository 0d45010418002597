//! Sauti gateway server - HTTP surface over the upstream synthesis client
//!
//! Exposed as a library so integration tests can build the router against a
//! mocked provider.

pub mod api;
pub mod error;
pub mod relay;
pub mod state;
