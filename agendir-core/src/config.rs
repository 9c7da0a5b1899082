//! Global agendir configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgendirError, AgendirResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/agendir";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Global configuration at ~/.config/agendir/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct AgendirConfig {
    /// Where account snapshots are stored.
    #[serde(
        default = "default_data_path",
        skip_serializing_if = "is_default_data_path"
    )]
    pub data_dir: PathBuf,

    /// Calendar shown when the view doesn't name one ("all" if unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_calendar: Option<String>,

    /// Group the agenda into department sections by default.
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_by_department: bool,

    /// Source used when `refresh` doesn't name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl AgendirConfig {
    pub fn config_path() -> AgendirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendirError::Config("Could not determine config directory".into()))?
            .join("agendir");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/agendir/config.toml
    pub fn save(&self) -> AgendirResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| AgendirError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| AgendirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> AgendirResult<()> {
        let contents = format!(
            "\
# agendir configuration

# Where account snapshots are stored:
# data_dir = \"{}\"

# Calendar shown by default (a calendar id, or \"all\"):
# default_calendar = \"all\"

# Group the agenda into department sections by default:
# group_by_department = false

# Account source used by refresh:
# source = \"google\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
