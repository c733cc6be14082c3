//! Durable key-value preference store.
//!
//! The localStorage analog: a small JSON object on disk holding per-visitor
//! preferences. Today it carries a single entry, the language preference.
//! Reads treat a missing or corrupt file as empty; writes go through a
//! temp-file rename so a crash never leaves a half-written store behind.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open a store backed by the given file. The file does not need to
    /// exist yet; it is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value. Absent key, absent file, and unreadable file all
    /// behave the same: `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.read_entries()?;
        entries.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Persist a value, keeping any other entries in the file.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create preference directory {}",
                    parent.display()
                ))?;
            }
        }

        let body = serde_json::to_string_pretty(&Value::Object(entries))
            .context("Failed to serialize preferences")?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)
            .context(format!("Failed to write preference file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path).context(format!(
            "Failed to move preference file into place at {}",
            self.path.display()
        ))?;

        Ok(())
    }

    fn read_entries(&self) -> Option<Map<String, Value>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                debug!(path = %self.path.display(), "preference file is not a JSON object, treating as empty");
                None
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "preference file unreadable, treating as empty");
                None
            }
        }
    }
}
