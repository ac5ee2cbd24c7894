use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Category stamped on records when --category is not given.
    pub default_category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                default_category: "personal".to_string(),
            },
            display: DisplayConfig {
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the config file, creating it with defaults on first run.
    pub fn load_or_create() -> Result<Self> {
        let path = get_config_path()?;
        if !path.exists() {
            Self::create_default(&path)?;
        }
        Self::load(&path)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "projgen", "projgen")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_round_trips() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");

        Config::create_default(&path)?;
        let config = Config::load(&path)?;

        assert_eq!(config.generator.default_category, "personal");
        assert!(config.display.pretty_json);
        Ok(())
    }
}
