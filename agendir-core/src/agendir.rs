//! Agendir environment handle.

use std::path::PathBuf;

use config::{Config, File};

use crate::agenda::CalendarSelection;
use crate::config::AgendirConfig;
use crate::error::{AgendirError, AgendirResult};
use crate::snapshot::SnapshotStore;
use crate::source::Source;

#[derive(Clone)]
pub struct Agendir {
    config: AgendirConfig,
}

impl Agendir {
    pub fn load() -> AgendirResult<Self> {
        let config_path = AgendirConfig::config_path()?;

        if !config_path.exists() {
            AgendirConfig::create_default_config(&config_path)?;
        }

        let config: AgendirConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| AgendirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendirError::Config(e.to_string()))?;

        Ok(Agendir { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Store holding the last-known account snapshot.
    pub fn snapshot(&self) -> SnapshotStore {
        SnapshotStore::at(self.data_path())
    }

    /// Selection used when the view doesn't name a calendar.
    pub fn default_selection(&self) -> CalendarSelection {
        CalendarSelection::from_arg(self.config.default_calendar.as_deref())
    }

    pub fn group_by_department(&self) -> bool {
        self.config.group_by_department
    }

    /// Source used when `refresh` doesn't name one.
    pub fn default_source(&self) -> Option<Source> {
        self.config.source.as_deref().map(Source::from_name)
    }

    /// Persist the default calendar selection ("all" clears it).
    pub fn set_default_calendar(&mut self, id: &str) -> AgendirResult<()> {
        self.config.default_calendar = match id {
            "all" => None,
            id => Some(id.to_string()),
        };
        self.config.save()
    }
}
