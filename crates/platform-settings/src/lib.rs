/* Copyright (C) 2025  the acc-switcher developers
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this repository.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Per-platform settings, persisted as a flat JSON object on disk.
//!
//! The contract is deliberately small: given a key and a default, return the
//! stored value or the default; given a key and a value, persist it
//! immediately. Unreadable or malformed files fall back to defaults instead
//! of refusing to start, so a corrupted settings file never locks the user
//! out.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// A JSON-file-backed key/value settings store.
///
/// Callers own the store and pass it around explicitly; there is no
/// process-wide "current settings" instance.
#[derive(Debug)]
pub struct SettingsFile {
    path: PathBuf,
    values: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize setting: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsFile {
    /// Loads the settings stored at `path`.
    ///
    /// A missing file is not an error; it yields an empty store so every
    /// lookup returns its default. Files that exist but do not parse as a
    /// JSON object are logged and treated the same way.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(values)) => values,
                Ok(_) => {
                    warn!(path = %path.display(), "settings file is not a JSON object; using defaults");
                    Map::new()
                }
                Err(error) => {
                    warn!(%error, path = %path.display(), "failed to parse settings file; using defaults");
                    Map::new()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, values })
    }

    /// The file this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value stored under `key`, or `default` if the key is
    /// absent or holds a value of the wrong shape.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        let Some(value) = self.values.get(key) else {
            return default;
        };

        match serde_json::from_value(value.clone()) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, key, "stored setting has an unexpected shape; using default");
                default
            }
        }
    }

    /// Stores `value` under `key` and persists the whole store to disk.
    pub fn set<T>(&mut self, key: &str, value: T) -> Result<(), SettingsError>
    where
        T: Serialize,
    {
        self.values.insert(key.to_owned(), serde_json::to_value(value)?);
        self.save()
    }

    /// Writes the current values back to the settings file.
    pub fn save(&self) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)?;

        Ok(())
    }
}
