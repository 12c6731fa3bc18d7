//! Core value types and errors for the Tessera layout engine.
//!
//! This crate provides the foundational types used by `tessera-layout`:
//! - Measurement constraints and integer geometry
//! - Density-independent units and layout direction
//! - Error types shared by every layout pass

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
