use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Where raw config text lives. `Ok(None)` means nothing has been saved yet.
pub trait ConfigSource {
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file {}: {}", self.path.display(), err)),
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.path.display(), e))
    }
}

#[derive(Default)]
pub struct InMemoryConfigSource {
    content: Mutex<Option<String>>,
}

impl InMemoryConfigSource {
    pub fn new(content: Option<String>) -> Self {
        Self { content: Mutex::new(content) }
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        let content = self.content.lock().map_err(|e| format!("Config source poisoned: {}", e))?;
        Ok(content.clone())
    }

    fn write(&self, content: &str) -> Result<(), String> {
        let mut current = self.content.lock().map_err(|e| format!("Config source poisoned: {}", e))?;
        *current = Some(content.to_string());
        Ok(())
    }
}

pub fn to_yaml<T: Serialize>(config: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml<T: DeserializeOwned>(content: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// Loads a YAML config once and caches it. A missing source yields `TConfig::default()`.
pub struct ConfigLoader<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    source: TSource,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigLoader<FileConfigSource, TConfig>
where
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigSource::new(path))
    }
}

impl<TSource, TConfig> ConfigLoader<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().map_err(|e| format!("Config cache poisoned: {}", e))?;
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = from_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        self.source.write(&to_yaml(config)?)?;

        let mut cached = self.cached.lock().map_err(|e| format!("Config cache poisoned: {}", e))?;
        *cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        grid_size: i32,
        label: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { grid_size: 20, label: "default".to_string() }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.grid_size < 10 {
                return Err("Grid size too small".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_source_returns_default() {
        let loader: ConfigLoader<_, SampleConfig> = ConfigLoader::new(InMemoryConfigSource::new(None));
        assert_eq!(loader.load().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let loader: ConfigLoader<_, SampleConfig> =
            ConfigLoader::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(loader.load().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_save_then_load_through_file() {
        let path = get_temp_file_path();
        let config = SampleConfig { grid_size: 30, label: "custom".to_string() };

        let loader: ConfigLoader<_, SampleConfig> = ConfigLoader::from_yaml_file(path.clone());
        loader.save(&config).unwrap();

        let fresh: ConfigLoader<_, SampleConfig> = ConfigLoader::from_yaml_file(path.clone());
        assert_eq!(fresh.load().unwrap(), config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let source = InMemoryConfigSource::new(Some("grid_size: 3\nlabel: tiny\n".to_string()));
        let loader: ConfigLoader<_, SampleConfig> = ConfigLoader::new(source);
        let err = loader.load().unwrap_err();
        assert!(err.contains("Config validation error"));
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let loader: ConfigLoader<_, SampleConfig> = ConfigLoader::new(InMemoryConfigSource::default());
        let invalid = SampleConfig { grid_size: 1, label: "x".to_string() };
        assert!(loader.save(&invalid).is_err());
    }

    #[test]
    fn test_malformed_yaml_reports_error() {
        let source = InMemoryConfigSource::new(Some("grid_size: [".to_string()));
        let loader: ConfigLoader<_, SampleConfig> = ConfigLoader::new(source);
        assert!(loader.load().unwrap_err().contains("Failed to deserialize"));
    }
}
