//! Respira Core
//!
//! Core types shared across Respira components.
//!
//! This crate provides:
//! - The binary risk class and assessment types
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{RiskAssessment, RiskClass};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{RiskAssessment, RiskClass};
}
