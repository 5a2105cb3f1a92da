//! Transport boundary between the reconciliation engine and the server.
//!
//! The engine only ever sees [`GameService`]: two calls, each returning a
//! complete replacement [`protocol::Snapshot`] or a [`GatewayError`]. The
//! HTTP implementation speaks the server's two-endpoint POST contract; the
//! mock replays scripted results for tests.
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod service;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::HttpGateway;
pub use mock::MockGameService;
pub use service::GameService;
