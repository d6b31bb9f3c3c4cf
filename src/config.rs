use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    #[serde(default = "default_max_diff_chars")]
    pub max_diff_chars: usize,

    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_diff_chars: default_max_diff_chars(),
            api_key: None,
            base_url: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Try .diffcritic.yml in the current directory first
        let config_path = PathBuf::from(".diffcritic.yml");
        if config_path.exists() {
            return Self::from_file(&config_path);
        }

        let alt_config_path = PathBuf::from(".diffcritic.yaml");
        if alt_config_path.exists() {
            return Self::from_file(&alt_config_path);
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".diffcritic.yml");
            if home_config.exists() {
                return Self::from_file(&home_config);
            }
        }

        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Credentials and endpoint overrides come from the environment so CI
    /// jobs never have to write them to disk.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("BASE_URL") {
            self.base_url = Some(url);
        }
    }

    pub fn merge_with_cli(
        &mut self,
        cli_model: Option<String>,
        cli_temperature: Option<f32>,
        cli_max_tokens: Option<usize>,
    ) {
        if let Some(model) = cli_model {
            self.model = model;
        }
        if let Some(temperature) = cli_temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = cli_max_tokens {
            self.max_tokens = max_tokens;
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> usize {
    1000
}

fn default_max_diff_chars() -> usize {
    50_000
}
