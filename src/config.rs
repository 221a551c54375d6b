use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "daily-words.toml";

// Config file layout
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub input_file: PathBuf,
    pub aggregate_file: PathBuf,
    pub index_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            input_file: PathBuf::from("willaddednewwords.txt"),
            aggregate_file: PathBuf::from("words.json"),
            index_file: PathBuf::from("words_index.json"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let config_content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file {}: {}", path.display(), e))?;
        Self::parse(&config_content)
            .map_err(|e| anyhow::anyhow!("invalid config file {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Falls back to defaults when the file does not exist; a file that exists
    /// but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.data_dir = dir.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.paths.data_dir
    }

    // Relative paths are resolved against data_dir
    pub fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.paths.data_dir.join(file)
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.paths.input_file)
    }

    pub fn aggregate_path(&self) -> PathBuf {
        self.resolve(&self.paths.aggregate_file)
    }

    pub fn index_path(&self) -> PathBuf {
        self.resolve(&self.paths.index_file)
    }
}
