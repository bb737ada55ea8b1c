use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration for git-release.
///
/// Every field has a default, so the tool works without a config file in
/// repositories that follow the standard layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branch that major and minor releases are cut from
    #[serde(default = "default_trunk")]
    pub trunk: String,

    /// Remote that release branches and pull requests go to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Path to the versions file, relative to the repository root
    #[serde(default = "default_versions_file")]
    pub versions_file: String,
}

fn default_trunk() -> String {
    "master".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_versions_file() -> String {
    "cmake/autogenerated_versions.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trunk: default_trunk(),
            remote: default_remote(),
            versions_file: default_versions_file(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
