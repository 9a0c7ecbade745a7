//! Application state and core logic for the taller TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the immutable workshop registry, the derived
//! grouped view, selection/scroll state, and the slot where spawned PDF
//! actions report back.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use reqwest::Client;
use tokio::runtime::Handle;
use tracing::info;

use crate::cli::CliConfig;
use crate::grouping::{group_workshops, GroupedView};
use crate::models::{GroupMode, Registry, Workshop};
use crate::pdf;
use crate::utils::suggested_filename;

/// A status-line message produced by a finished action
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub failed: bool,
}

impl StatusMessage {
    fn ok(text: String) -> Self {
        Self { text, failed: false }
    }

    fn err(text: String) -> Self {
        Self { text, failed: true }
    }
}

/// Application state
pub struct App {
    pub registry: Registry,
    pub group_mode: GroupMode,
    pub view: GroupedView,
    // Registry indices in display order; selection moves over this
    pub flattened: Vec<usize>,
    pub selected: usize,
    pub scroll_offset: usize,
    pub status: Option<StatusMessage>,
    // Spawned actions report here; the event loop polls it each tick
    pub pending_status: Arc<Mutex<Option<StatusMessage>>>,
    pub base_url: Option<String>,
    pub download_dir: PathBuf,
    pub client: Client,
}

impl App {
    pub fn new(registry: Registry, registry_source: Option<String>, config: &CliConfig) -> Self {
        let group_mode = if config.group_by_unit {
            GroupMode::ByUnit
        } else {
            GroupMode::Flat
        };
        let view = group_workshops(&registry, group_mode.by_unit());
        let flattened = view.flattened();
        let status = registry_source.map(|src| StatusMessage::ok(format!("Registro: {}", src)));

        Self {
            registry,
            group_mode,
            view,
            flattened,
            selected: 0,
            scroll_offset: 0,
            status,
            pending_status: Arc::new(Mutex::new(None)),
            base_url: config.base_url.clone(),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            client: Client::new(),
        }
    }

    /// Recompute the grouped view after a mode change, keeping the selection
    /// on a valid card
    pub fn rebuild_view(&mut self) {
        self.view = group_workshops(&self.registry, self.group_mode.by_unit());
        self.flattened = self.view.flattened();
        if !self.flattened.is_empty() && self.selected >= self.flattened.len() {
            self.selected = self.flattened.len() - 1;
        }
    }

    pub fn toggle_grouping(&mut self) {
        self.group_mode = self.group_mode.toggle();
        self.rebuild_view();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.flattened.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_workshop(&self) -> Option<&Workshop> {
        let idx = *self.flattened.get(self.selected)?;
        self.registry.workshops.get(idx)
    }

    /// Keep the selected card inside the visible window
    pub fn adjust_scroll(&mut self, visible_cards: usize) {
        if visible_cards == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_cards {
            self.scroll_offset = self.selected + 1 - visible_cards;
        }
    }

    /// Drain the latest action report into the status line
    pub fn poll_status(&mut self) {
        let Ok(mut slot) = self.pending_status.lock() else {
            return;
        };
        if let Some(message) = slot.take() {
            self.status = Some(message);
        }
    }

    /// Open the selected workshop's PDF in the external viewer.
    /// Fire and forget: the action runs as a spawned task and reports back
    /// through the pending-status slot.
    pub fn open_selected(&self, handle: &Handle) {
        let Some(workshop) = self.selected_workshop() else {
            return;
        };
        let name = workshop.name.clone();
        let ruta = workshop.resource_path.clone();
        let base = self.base_url.clone();
        let client = self.client.clone();
        let slot = Arc::clone(&self.pending_status);

        info!(id = %workshop.id, "open requested");
        handle.spawn(async move {
            let message = match pdf::open_resource(&client, &ruta, base.as_deref()).await {
                Ok(()) => StatusMessage::ok(format!("Abierto: {}", name)),
                Err(err) => StatusMessage::err(format!("{}: {}", name, err)),
            };
            if let Ok(mut slot) = slot.lock() {
                *slot = Some(message);
            }
        });
    }

    /// Download the selected workshop's PDF into the download directory
    pub fn download_selected(&self, handle: &Handle) {
        let Some(workshop) = self.selected_workshop() else {
            return;
        };
        let name = workshop.name.clone();
        let ruta = workshop.resource_path.clone();
        let filename = suggested_filename(&ruta);
        let base = self.base_url.clone();
        let dest_dir = self.download_dir.clone();
        let client = self.client.clone();
        let slot = Arc::clone(&self.pending_status);

        info!(id = %workshop.id, %filename, "download requested");
        handle.spawn(async move {
            let message =
                match pdf::download_resource(&client, &ruta, base.as_deref(), &filename, &dest_dir)
                    .await
                {
                    Ok(dest) => StatusMessage::ok(format!("Descargado en {}", dest.display())),
                    Err(err) => StatusMessage::err(format!("{}: {}", name, err)),
                };
            if let Ok(mut slot) = slot.lock() {
                *slot = Some(message);
            }
        });
    }
}
