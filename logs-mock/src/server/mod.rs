//! HTTP server for Logs Mock.
//!
//! Serves the list, detail and health endpoints as JSON with permissive
//! CORS, plus Prometheus metrics on `/metrics`.

mod config;
pub mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;
pub mod request;
pub mod response;

pub use config::{CliArgs, LogServerConfig};
pub use http::{LogServer, build_router};
