//! Callback adapters - Outbound notification transport.

mod http_client;

pub use http_client::{HttpCallbackClient, HttpCallbackConnector};
