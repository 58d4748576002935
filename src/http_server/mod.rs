//! # HTTP adapter
//!
//! Thin transport around the engine. It validates input, calls `solve`,
//! and counts outcomes. No auth and no persistence.
//!
//! # Endpoints
//!
//! - `POST /solve` - Solve one question
//! - `GET /health` - Health check
//! - `GET /metrics` - Solve counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod solve_routes;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, ServeError, ServeResult};
pub use server::HttpServer;
pub use solve_routes::{SolveRequest, SolveState, REQUEST_ID_HEADER};
