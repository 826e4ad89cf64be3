//! codefp server - HTTP API for source-code similarity checks
//!
//! Wraps a process-wide [`matcher::Matcher`] behind a small JSON API. The
//! reference corpus is fingerprinted once at startup and shared read-only by
//! every request.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe, reports corpus size
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/plagiarism` - Score a submission against the corpus
//! - `POST /api/compare` - Similarity of two snippets
//! - `GET /api/corpus` - Reference entries and fingerprint sizes
//! - `POST /api/violation` - Log a proctoring violation
//! - `POST /api/telemetry` - Log a proctoring telemetry sample
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
