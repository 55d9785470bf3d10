//! Authoring configuration.
//!
//! Replaces the old process-wide "is editing allowed" flag with explicit
//! configuration handed to each editor at construction. Loaded from TOML with
//! serde defaults, so an absent file or an empty file both mean "everything
//! editable".

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use editkit_core::EditCapability;
use serde::{Deserialize, Serialize};

/// Top-level editkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthoringConfig {
    /// Master switch; `false` renders every editor read-only.
    #[serde(default = "default_true")]
    pub editable: bool,
    /// Editor surfaces forced read-only even when the master switch is on
    /// (e.g. `["hints", "concept_cards"]`).
    #[serde(default)]
    pub read_only_surfaces: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            editable: true,
            read_only_surfaces: Vec::new(),
        }
    }
}

impl AuthoringConfig {
    /// Capability handed to an editor on the named surface.
    pub fn capability_for(&self, surface: &str) -> EditCapability {
        let editable =
            self.editable && !self.read_only_surfaces.iter().any(|s| s == surface);
        EditCapability { editable }
    }
}

/// Load configuration from the well-known path: `editkit.toml` in the current
/// directory, falling back to defaults when the file does not exist.
pub fn load_config() -> Result<AuthoringConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default location.
///
/// An explicit path that does not exist is an error; the default location
/// being absent is not.
pub fn load_config_from(path: Option<&Path>) -> Result<AuthoringConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("editkit.toml");
        local.exists().then_some(local)
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config: AuthoringConfig = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            Ok(config)
        }
        None => Ok(AuthoringConfig::default()),
    }
}
