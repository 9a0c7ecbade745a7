//! Workshop registry data structures
//!
//! This module contains the core data structures for loading and working with
//! talleres.json registry files.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default registry as fallback
const EMBEDDED_REGISTRY: &str = include_str!("../../talleres.json");

/// A single catalog entry describing one downloadable PDF resource.
///
/// The on-disk field names are the Spanish names used by the registry data
/// shape; the struct exposes idiomatic Rust names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Workshop {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "ruta")]
    pub resource_path: String,
    #[serde(default, rename = "unidad")]
    pub unit: Option<String>,
    #[serde(default, rename = "semana")]
    pub week: Option<u32>,
    #[serde(default, rename = "fechaPublicacion")]
    pub published: Option<String>,
}

/// Immutable workshop registry, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    pub workshops: Vec<Workshop>,
}

impl Registry {
    /// Parse a registry from a JSON array and validate its invariants.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let workshops: Vec<Workshop> = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        validate(&workshops)?;
        Ok(Self { workshops })
    }

    /// Load a registry from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolve the registry in order of priority:
    /// 1. Explicit path from the command line
    /// 2. ./talleres.json in the working directory
    /// 3. Embedded default registry
    ///
    /// Returns the registry and a description of where it came from (None for
    /// the embedded fallback). An explicit or local file that fails to load is
    /// an error rather than a silent fallback.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<(Self, Option<String>)> {
        if let Some(path) = explicit {
            let registry = Self::load(path)?;
            return Ok((registry, Some(path.display().to_string())));
        }

        let local = PathBuf::from("talleres.json");
        if local.exists() {
            let registry = Self::load(&local)?;
            return Ok((registry, Some(local.display().to_string())));
        }

        Ok((Self::from_json(EMBEDDED_REGISTRY)?, None))
    }

    /// Look up a workshop by its unique id
    #[allow(dead_code)]
    pub fn get(&self, id: &str) -> Option<&Workshop> {
        self.workshops.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }
}

/// Registry invariants: unique ids, non-empty resource paths.
fn validate(workshops: &[Workshop]) -> io::Result<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(workshops.len());
    for workshop in workshops {
        if workshop.resource_path.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("workshop '{}' has an empty resource path", workshop.id),
            ));
        }
        if seen.contains(&workshop.id.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("duplicate workshop id '{}'", workshop.id),
            ));
        }
        seen.push(&workshop.id);
    }
    Ok(())
}
