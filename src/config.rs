// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration of a picker button, stored as TOML
//!
//! ```toml
//! color = "#00ff00"          # omit for "automatic"
//! default_color = "#000000"
//! default_text = "&Automatic"
//! track_selection = true
//!
//! [table]
//! columns = 2
//! colors = [
//!     { value = "#ff0000", label = "Red" },
//!     { value = "#ffffff" },
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ColorEntry, ColorTable, ColorTableError, ColorValue, Rgb};
use crate::settings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse picker config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize picker config")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid color table")]
    Table(#[from] ColorTableError),
}

/// The whole configuration surface of a `PickerButton`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial color; absent means automatic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    pub default_color: Rgb,
    pub show_default: bool,
    pub default_text: String,
    pub show_custom: bool,
    pub custom_text: String,
    pub show_tooltips: bool,
    pub track_selection: bool,
    /// Swatches; absent means the built-in table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    pub colors: Vec<EntryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub value: Rgb,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

fn default_columns() -> usize {
    settings::table::COLUMNS
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            color: None,
            default_color: settings::defaults::COLOR,
            show_default: settings::defaults::SHOW_DEFAULT,
            default_text: settings::defaults::DEFAULT_TEXT.to_string(),
            show_custom: settings::defaults::SHOW_CUSTOM,
            custom_text: settings::defaults::CUSTOM_TEXT.to_string(),
            show_tooltips: settings::defaults::SHOW_TOOLTIPS,
            track_selection: settings::defaults::TRACK_SELECTION,
            table: None,
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded picker config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The raw initial color
    pub fn color_value(&self) -> ColorValue {
        self.color.map_or(ColorValue::Automatic, ColorValue::Rgb)
    }

    /// The configured table, validated
    pub fn color_table(&self) -> Result<Option<ColorTable>, ConfigError> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        let entries = table
            .colors
            .iter()
            .map(|entry| ColorEntry::new(entry.value, entry.label.clone()))
            .collect();
        Ok(Some(ColorTable::new(entries, table.columns)?))
    }
}
