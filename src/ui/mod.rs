//! UI module for taller-tui
//!
//! This module contains UI rendering functions for the TUI interface:
//! workshop cards, the grouped list, and the static page sections.

mod cards;
mod helpers;
mod list;
mod sections;

pub use cards::CARD_HEIGHT;
pub use list::render_workshop_list;
pub use sections::{render_contact, render_header, render_key_hints, render_status_line};
