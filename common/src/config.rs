use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Source of the raw text behind a single configuration document.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.file_path.display(), e)
        })
    }
}

/// Loads, validates, caches and stores one serializable document.
///
/// A missing document yields `TConfig::default()` without touching the cache,
/// so a later write still goes through validation first.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config.validate().map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        limit: u32,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.limit > 10 {
                return Err("limit must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for InMemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_xo_pro_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, Sample, _> =
            ConfigManager::new(InMemoryProvider::default(), YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_set_then_get_uses_stored_value() {
        let manager = ConfigManager::new(InMemoryProvider::default(), YamlConfigSerializer::new());
        let sample = Sample { name: "board".to_string(), limit: 3 };

        manager.set_config(&sample).unwrap();

        assert_eq!(manager.get_config().unwrap(), sample);
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let provider = InMemoryProvider::default();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let sample = Sample { name: "too big".to_string(), limit: 11 };

        assert!(manager.set_config(&sample).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());
    }

    #[test]
    fn test_invalid_stored_content_is_an_error() {
        let provider = InMemoryProvider::default();
        provider.set_config_content("name: x\nlimit: 50\n").unwrap();
        let manager: ConfigManager<_, Sample, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let result = manager.get_config();

        assert!(result.unwrap_err().contains("validation"));
    }

    #[test]
    fn test_garbage_content_is_an_error() {
        let provider = InMemoryProvider::default();
        provider.set_config_content("{ this is: [not yaml").unwrap();
        let manager: ConfigManager<_, Sample, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let file_path = get_temp_file_path();
        let sample = Sample { name: "file".to_string(), limit: 7 };

        let manager = ConfigManager::from_yaml_file(file_path.clone());
        manager.set_config(&sample).unwrap();

        let reloaded: ConfigManager<_, Sample, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reloaded.get_config().unwrap(), sample);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_file_provider_missing_file_returns_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");

        assert_eq!(provider.get_config_content().unwrap(), None);
    }
}
