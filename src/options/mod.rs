//! Persisted arcball settings with TOML preset support.
//!
//! Options serialize to/from TOML so an application can restore the
//! arcball's constraint and orientation between sessions, or keep several
//! named presets in one directory.

mod arcball;
mod input;

use std::path::Path;

pub use arcball::ArcballOptions;
pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Constraint and orientation.
    pub arcball: ArcballOptions,
    /// Pointer bindings.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::Io`] if the file cannot be read and
    /// [`ArcballError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ArcballError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)?;
        log::debug!("loaded arcball options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), ArcballError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::debug!("saved arcball options to {}", path.display());
        Ok(())
    }

    /// List preset names (stems of the `.toml` files) in a directory, sorted.
    ///
    /// A missing directory has no presets. Other entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::Io`] if the directory exists but cannot be
    /// read.
    pub fn list_presets(dir: &Path) -> Result<Vec<String>, ArcballError> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no preset directory at {}", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let stem = path
                .extension()
                .filter(|ext| *ext == "toml")
                .and_then(|_| path.file_stem())
                .and_then(|stem| stem.to_str());
            match stem {
                Some(stem) => names.push(stem.to_owned()),
                None => log::trace!("skipping non-preset {}", path.display()),
            }
        }
        names.sort();
        Ok(names)
    }
}
