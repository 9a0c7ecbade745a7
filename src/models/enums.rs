//! Enums used throughout the taller TUI
//!
//! This module contains the enum types used for state management
//! and UI rendering.

/// How the card list is arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    #[default]
    ByUnit, // Partition cards by their academic unit
    Flat,   // Single section with every card
}

impl GroupMode {
    pub fn toggle(&self) -> Self {
        match self {
            GroupMode::ByUnit => GroupMode::Flat,
            GroupMode::Flat => GroupMode::ByUnit,
        }
    }

    pub fn by_unit(&self) -> bool {
        matches!(self, GroupMode::ByUnit)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupMode::ByUnit => "Unidad",
            GroupMode::Flat => "Lista",
        }
    }
}

/// Card state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Selected,
    Normal,
}
