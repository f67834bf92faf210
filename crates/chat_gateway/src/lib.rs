//! chat_gateway - Remote data gateway for the chat workspace
//!
//! The workspace core never talks to the network directly; everything goes
//! through the [`ChatGateway`] trait. [`HttpGateway`] is the production
//! implementation speaking the chat service's JSON API.

pub mod error;
pub mod gateway;
pub mod http;

// Re-exports
pub use error::{GatewayError, Result};
pub use gateway::ChatGateway;
pub use http::HttpGateway;
