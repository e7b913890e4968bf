//! ReviewCheck Core
//!
//! Core types and error handling shared across ReviewCheck components.
//!
//! This crate provides:
//! - The input [`Review`] record and the uniform [`ClassificationResult`]
//! - Moderation [`Flag`]s raised by either decision engine
//! - Model load diagnostics surfaced when no artifact is available
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{CandidateStatus, ClassificationResult, Flag, ModelDiagnostics, Review};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassificationResult, Flag, ModelDiagnostics, Review};
}
