//! Shared types, errors, and configuration for Tirelire.
//!
//! This crate provides common types used across all other crates:
//! - Money stored as integer minor units (no floats)
//! - Typed IDs for type-safe entity references
//! - Locale tables for month names and number separators
//! - An injectable clock so "now" is never read from a hidden global
//! - Field-level validation errors
//! - Configuration management

pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use error::{ValidationError, ValidationErrors};
