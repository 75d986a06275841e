use crate::rules::IgnoreRules;
use crate::spacing::Spacing;
use crate::HOME_DIR;

use color_eyre::Result;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// The `shoji.json` policy document reference
pub struct StaticConfig {
    /// Window class names which should never be managed (default: built-in list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_window_classes: Option<Vec<String>>,
    /// Process image names which should never be managed (default: built-in list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_processes: Option<Vec<String>>,
    /// Gap between tiled windows (default: 20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_gap: Option<i32>,
    /// Gap between tiled windows and the screen edges (default: 20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_gap: Option<i32>,
}

impl StaticConfig {
    /// Default location of the policy document, `~/shoji.json`, honouring
    /// `SHOJI_CONFIG_HOME` when set.
    #[must_use]
    pub fn config_path() -> PathBuf {
        HOME_DIR.join("shoji.json")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Self = serde_json::from_str(&content)?;
        tracing::info!("loaded policy document: {}", path.display());
        Ok(value)
    }

    /// Exclusion lists from this document; entries the document does not set
    /// fall back to the built-in defaults.
    #[must_use]
    pub fn ignore_rules(&self) -> IgnoreRules {
        let mut rules = IgnoreRules::default();

        if let Some(window_classes) = &self.ignored_window_classes {
            rules.window_classes.clone_from(window_classes);
        }

        if let Some(processes) = &self.ignored_processes {
            rules.processes.clone_from(processes);
        }

        rules
    }

    /// Spacing from this document, falling back to the built-in defaults.
    /// Negative gaps are clamped to 0; the layout engine has no use for them.
    #[must_use]
    pub fn spacing(&self) -> Spacing {
        let mut spacing = Spacing::default();

        if let Some(inner_gap) = self.inner_gap {
            spacing.inner_gap = inner_gap;
        }

        if let Some(outer_gap) = self.outer_gap {
            spacing.outer_gap = outer_gap;
        }

        if spacing.inner_gap < 0 {
            tracing::warn!("inner_gap must not be negative, clamping {} to 0", spacing.inner_gap);
            spacing.inner_gap = 0;
        }

        if spacing.outer_gap < 0 {
            tracing::warn!("outer_gap must not be negative, clamping {} to 0", spacing.outer_gap);
            spacing.outer_gap = 0;
        }

        spacing
    }
}
