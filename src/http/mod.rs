//! HTTP layer — endpoint catalog, envelope interpretation, dispatcher.

pub mod client;
pub mod endpoint;
pub mod envelope;

pub use client::P2pHttp;
pub use endpoint::{Endpoint, Method};
