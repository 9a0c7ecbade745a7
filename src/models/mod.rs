//! Data models for the taller TUI
//!
//! This module contains the core data structures:
//! - Workshop and registry types for loading talleres.json
//! - Enums for state management

pub mod enums;
pub mod workshop;

// Re-exports for convenient access
pub use enums::{CardState, GroupMode};
pub use workshop::{Registry, Workshop};
