use clabyrinth::Dims;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;

pub const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_SIZE: Dims = Dims(5, 5);
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub highlight: Option<Dims>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size(mut self, value: Dims) -> Self {
        self.width = Some(value.0);
        self.height = Some(value.1);
        self
    }

    pub fn get_size(&self) -> Dims {
        Dims(
            self.width.unwrap_or(DEFAULT_SIZE.0),
            self.height.unwrap_or(DEFAULT_SIZE.1),
        )
    }

    pub fn set_highlight(mut self, value: Dims) -> Self {
        self.highlight = Some(value);
        self
    }

    pub fn get_highlight(&self) -> Dims {
        self.highlight.unwrap_or_default()
    }

    pub fn set_format(mut self, value: OutputFormat) -> Self {
        self.format = Some(value);
        self
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: log::LevelFilter) -> Self {
        self.log_level = Some(value.to_string());
        self
    }

    /// Unknown level names fall back to the default level.
    pub fn get_log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("labyrinth")
            .join("settings.ron")
    }

    pub fn from_ron(settings: &str) -> Result<Self, Error> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(settings)?)
    }

    /// Loads settings from `path`, writing the default settings there first if the file
    /// doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::from_ron(&fs::read_to_string(path)?)
        } else {
            Self::reset_config(path)?;
            Self::from_ron(DEFAULT_SETTINGS)
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
