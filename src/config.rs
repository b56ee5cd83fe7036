use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::exclusion::FilterMode;

pub const DEFAULT_CONFIG_FILE: &str = "recenter.toml";

/// Run options read from `recenter.toml` in the working directory. Every
/// field has a default, and a missing file means "all defaults"; only a file
/// that exists but fails to parse is an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Center against the work area (taskbar excluded) instead of the full
    /// monitor rectangle.
    pub use_work_area: bool,
    pub mode: FilterMode,
    pub exclude_file: PathBuf,
    /// When set, log output appends to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_work_area: true,
            mode: FilterMode::Blacklist,
            exclude_file: PathBuf::from("exclude.txt"),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        toml::from_str(&text).map_err(|err| Error::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.use_work_area);
        assert_eq!(config.mode, FilterMode::Blacklist);
        assert_eq!(config.exclude_file, PathBuf::from("exclude.txt"));
        assert!(config.log_file.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("recenter.toml")).unwrap();
        assert!(config.use_work_area);
        assert_eq!(config.mode, FilterMode::Blacklist);
    }

    #[test]
    fn parses_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
use_work_area = false
mode = "whitelist"
exclude_file = "allow.txt"
log_file = "recenter.log"
log_level = "debug"
"#
        )
        .unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(!config.use_work_area);
        assert_eq!(config.mode, FilterMode::Whitelist);
        assert_eq!(config.exclude_file, PathBuf::from("allow.txt"));
        assert_eq!(config.log_file, Some(PathBuf::from("recenter.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "use_work_area = false\n").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(!config.use_work_area);
        assert_eq!(config.mode, FilterMode::Blacklist);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "mode = \"greylist\"\n").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
