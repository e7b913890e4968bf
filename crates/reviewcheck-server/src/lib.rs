//! ReviewCheck Server
//!
//! Thin HTTP surface over the review classifiers. The router is exposed as a
//! library so it can be exercised without opening sockets.

pub mod config;
pub mod routes;
pub mod state;

pub use config::{Overrides, ServerConfig};
pub use routes::{create_router, AppError};
pub use state::AppState;
