use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Per-shift schedule window, both times in 24-hour `HH:MM`.
/// `entry` is the cut-off for an on-time check-in, `tolerance` the last
/// minute still accepted without being marked late.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub entry: String,
    pub tolerance: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub data_dir: String,
    #[serde(default = "default_morning")]
    pub morning: ShiftSchedule,
    #[serde(default = "default_afternoon")]
    pub afternoon: ShiftSchedule,
    #[serde(default)]
    pub cycle_order: Vec<String>,
}

fn default_morning() -> ShiftSchedule {
    ShiftSchedule {
        entry: "08:00".to_string(),
        tolerance: "08:15".to_string(),
    }
}

fn default_afternoon() -> ShiftSchedule {
    ShiftSchedule {
        entry: "14:00".to_string(),
        tolerance: "14:15".to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            morning: default_morning(),
            afternoon: default_afternoon(),
            cycle_order: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the roster SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from the given path (or the default location),
    /// falling back to defaults when no file exists yet.
    pub fn load(custom_path: Option<&str>) -> AppResult<Self> {
        let path = match custom_path {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Persist the configuration to the given path (or the default location).
    pub fn save(&self, custom_path: Option<&str>) -> AppResult<()> {
        let path = match custom_path {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration, data directory and roster database paths.
    ///
    /// An existing config file at `config_path` is honored rather than
    /// overwritten, so a prepared configuration survives re-init.
    pub fn init_all(custom_db: Option<String>, config_path: Option<&str>) -> AppResult<Config> {
        let path = match config_path {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        };

        // A custom config location roots every default path next to it;
        // the standard location uses the platform config directory.
        let base_dir = match config_path {
            Some(_) => path.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| PathBuf::from(".")),
            None => Self::config_dir(),
        };
        fs::create_dir_all(&base_dir)?;

        let mut config = if path.exists() {
            Self::load(config_path)?
        } else {
            Config {
                database: base_dir.join("rattendance.sqlite").to_string_lossy().to_string(),
                data_dir: base_dir.to_string_lossy().to_string(),
                ..Default::default()
            }
        };

        // DB name: user provided or configured/default
        if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            };
            config.database = db_path.to_string_lossy().to_string();
        }

        config.save(config_path)?;
        fs::create_dir_all(config.ledgers_dir())?;

        Ok(config)
    }

    /// Schedule window for a shift. Total over the typed shift enum; the
    /// hard-coded defaults above apply when nothing was persisted.
    pub fn schedule_for(&self, shift: Shift) -> &ShiftSchedule {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Afternoon => &self.afternoon,
        }
    }

    pub fn schedule_for_mut(&mut self, shift: Shift) -> &mut ShiftSchedule {
        match shift {
            Shift::Morning => &mut self.morning,
            Shift::Afternoon => &mut self.afternoon,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_dir)
    }

    /// Directory holding the per-day ledger documents.
    pub fn ledgers_dir(&self) -> PathBuf {
        self.data_dir().join("ledgers")
    }
}
