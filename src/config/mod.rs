use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_recent_staff_file")]
    pub recent_staff_file: String,
    /// Look-back window of the frequent visitors list.
    #[serde(default = "default_frequent_days")]
    pub frequent_days: u32,
    #[serde(default = "default_frequent_min_visits")]
    pub frequent_min_visits: usize,
    /// Refresh period of `current --watch`.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_recent_staff_file() -> String {
    Config::recent_staff_path().to_string_lossy().to_string()
}
fn default_frequent_days() -> u32 {
    30
}
fn default_frequent_min_visits() -> usize {
    3
}
fn default_refresh_interval_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            recent_staff_file: default_recent_staff_file(),
            frequent_days: default_frequent_days(),
            frequent_min_visits: default_frequent_min_visits(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("zenden")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".zenden")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("zenden.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("zenden.sqlite")
    }

    /// Return the full path of the recent staff names file
    pub fn recent_staff_path() -> PathBuf {
        Self::config_dir().join("recent_staff.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// `custom_db` may be absolute or relative to the config directory.
    /// In test mode the config file is not written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
