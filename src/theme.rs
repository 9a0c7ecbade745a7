//! Theme module for taller-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the catalog's "quiet lecture hall" aesthetic.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Card background color (#12161c)
pub const BG_CARD: Color = Color::Rgb(18, 22, 28);

/// Background for the selected card (#1a1f26)
pub const BG_SELECTED: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent - academic teal (#2dd4bf)
pub const ACCENT_PRIMARY: Color = Color::Rgb(45, 212, 191);

/// Amber for unit badges (#fbbf24)
pub const AMBER_BADGE: Color = Color::Rgb(251, 191, 36);

/// Green for successful action feedback (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Red for failed action feedback (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Borders
// ============================================================================

/// Rounded border set used by all cards and sections
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;
