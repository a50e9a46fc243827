use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error loading config.toml. A missing file is not an error (the app
/// runs on defaults), but an unreadable or malformed file is surfaced at
/// startup instead of being silently ignored.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the config file lives: `$ZIKR_CONFIG` if set, otherwise
/// `<platform config dir>/zikr/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("ZIKR_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("zikr").join("config.toml"))
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };
    toml::from_str(&text).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config.swipe_distance, Config::default().swipe_distance);
    }

    #[test]
    fn file_overrides_are_applied() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "sound = false\nswipe_distance = 20\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.sound);
        assert_eq!(config.swipe_distance, 20);
        assert!(config.flash);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "swipe_distance = \"not a number\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
