use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// Capability contract over string keys and values. Failures surface as
/// `anyhow::Error`; the manager decides which of them to swallow.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    fn adapter_type(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// Reference adapter: one file per key under an app config directory.
/// A missing directory degrades reads to no value and removals to no-ops;
/// only writes error out.
pub struct FsStorageAdapter {
    root: PathBuf,
}

impl FsStorageAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStorageAdapter { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            || key.starts_with('.')
        {
            bail!("invalid storage key {key:?}");
        }
        Ok(self.root.join(key))
    }

    fn available(&self) -> bool {
        self.root.is_dir()
    }
}

#[async_trait]
impl StorageAdapter for FsStorageAdapter {
    fn adapter_type(&self) -> &'static str {
        "fs"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.available() {
            return Ok(None);
        }
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read key {key:?}")),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)
            .with_context(|| format!("storage directory {:?} unavailable", self.root))?;
        fs::write(&path, value).with_context(|| format!("failed to write key {key:?}"))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if !self.available() {
            return Ok(());
        }
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("failed to remove key {key:?}")),
        }
    }

    async fn clear(&self) -> Result<()> {
        if !self.available() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root).context("failed to list storage directory")? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
