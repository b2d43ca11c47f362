use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::ConfigContentProvider;

/// Durable string storage addressed by key.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

fn validate_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("Storage key must not be empty".to_string());
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(format!("Storage key '{}' contains unsupported characters", key));
    }
    Ok(())
}

/// Stores each key as `<dir>/<key>.yaml`.
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, String> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.yaml", key)))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read {}: {}", path.display(), err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create directory {}: {}", self.dir.display(), e))?;
        std::fs::write(&path, value).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

/// In-process storage. Clones share the same map, so a test can keep a handle
/// and inspect what the code under test wrote.
#[derive(Clone, Default)]
pub struct MemoryKeyValueStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every read and write fails, like a disabled or full store.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("Storage is unavailable".to_string());
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        validate_key(key)?;
        self.check_available()?;
        let values = self
            .values
            .lock()
            .map_err(|e| format!("Storage lock poisoned: {}", e))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        validate_key(key)?;
        self.check_available()?;
        let mut values = self
            .values
            .lock()
            .map_err(|e| format!("Storage lock poisoned: {}", e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Exposes one key of a [`KeyValueStorage`] as a config document.
pub struct StorageKeyContentProvider<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> StorageKeyContentProvider<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }
}

impl<S: KeyValueStorage> ConfigContentProvider for StorageKeyContentProvider<S> {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        self.storage.get(&self.key)
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        self.storage.set(&self.key, content)
    }
}
