//! # Persona Library
//!
//! This library exposes the Persona command implementations for testing.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export persona_core for convenience
pub use persona_core;
