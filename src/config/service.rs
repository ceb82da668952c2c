//! Loading, merging and saving the pattern file.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ini, validation, PatternConfig};

/// Persistence backend for the pattern configuration.
pub trait ConfigStore {
    /// Read the stored configuration. `Ok(None)` when nothing is stored yet.
    fn load(&self) -> Result<Option<PatternConfig>>;

    /// Replace the stored configuration.
    fn save(&self, config: &PatternConfig) -> Result<()>;
}

/// Pattern file on disk (`.gadd` in the working directory by default).
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<PatternConfig>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No pattern file, using defaults");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.path.display())
                })
            }
        };

        let config = ini::decode(&content)
            .with_context(|| format!("Failed to parse config file: {}", self.path.display()))?;

        validation::validate(&config)
            .with_context(|| format!("Invalid configuration in {}", self.path.display()))?;

        Ok(Some(config))
    }

    fn save(&self, config: &PatternConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, ini::encode(config))
            .with_context(|| format!("Failed to write config file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Saved pattern file");
        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryConfigStore {
    pub stored: std::cell::RefCell<Option<PatternConfig>>,
    pub saves: std::cell::Cell<usize>,
}

#[cfg(test)]
impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Option<PatternConfig>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, config: &PatternConfig) -> Result<()> {
        *self.stored.borrow_mut() = Some(config.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Union `new_values` with the stored patterns and persist the result.
///
/// The store is rewritten on every call, even when nothing was added.
pub fn merge_and_save(
    store: &dyn ConfigStore,
    new_values: &PatternConfig,
) -> Result<PatternConfig> {
    validation::validate(new_values).context("Invalid pattern on the command line")?;

    if new_values.is_empty() {
        debug!("No patterns supplied on the command line");
    }

    let mut config = store.load()?.unwrap_or_default();
    config.merge(new_values);
    store.save(&config)?;

    Ok(config)
}
