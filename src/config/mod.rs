use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Colour overrides; any unset or unparsable entry keeps the built-in colour
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub highlight: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

/// Load the config from `explicit`, or from the first standard location.
///
/// A missing file is not an error; an unreadable or invalid one is logged and
/// replaced by defaults.
pub fn load(explicit: Option<&Path>) -> Config {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            if explicit.is_some() || err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %err, "config not readable, using defaults");
            }
            return Config::default();
        }
    };
    parse(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "invalid config, using defaults");
        Config::default()
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TABTOP_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("tabtop").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("tabtop").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "tabtop", "tabtop")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
