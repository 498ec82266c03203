use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    /// Write `punch` / `punch_rejected` rows to the internal log table.
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,
}

fn default_audit_log() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            audit_log: default_audit_log(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tasclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tasclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tasclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tasclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Resolve a `--db` value: absolute paths are kept, relative ones are
    /// taken from the config dir.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            audit_log: default_audit_log(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let mut path = env::temp_dir();
        path.push("tasclock_missing_config.conf");
        fs::remove_file(&path).ok();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.audit_log);
    }

    #[test]
    fn audit_log_defaults_when_absent_from_file() {
        let mut path = env::temp_dir();
        path.push("tasclock_partial_config.conf");
        fs::write(&path, "database: /tmp/some.sqlite\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/some.sqlite");
        assert!(cfg.audit_log);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn relative_db_path_resolves_under_config_dir() {
        assert_eq!(
            Config::resolve_db_path("work.sqlite"),
            Config::config_dir().join("work.sqlite")
        );

        let abs = env::temp_dir().join("tasclock_abs.sqlite");
        let abs_str = abs.to_string_lossy().to_string();
        assert_eq!(Config::resolve_db_path(&abs_str), abs);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut path = env::temp_dir();
        path.push("tasclock_bad_config.conf");
        fs::write(&path, "database: [unterminated\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AppError::Yaml(_))));

        fs::remove_file(&path).ok();
    }
}
