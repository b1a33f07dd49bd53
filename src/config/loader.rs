use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use directories::UserDirs;
use tracing::info;

use super::Config;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let vector_dir = home.join(".vector");

        if !vector_dir.exists() {
            fs::create_dir_all(&vector_dir).context("Failed to create .vector directory")?;
        }

        Self::load_or_init_at(&vector_dir.join("config.toml"))
    }

    /// Load `config_path`, writing a default file there first if none exists.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            info!(path = %config_path.display(), "config.created");
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
