use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// Language used for month names and weekday labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_event_type")]
    pub default_event_type: String,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_highlight_today")]
    pub highlight_today: bool,
}

fn default_event_type() -> String {
    "Visita Técnica".to_string()
}
fn default_cell_width() -> usize {
    16
}
fn default_highlight_today() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            locale: Locale::default(),
            week_start: WeekStart::default(),
            default_event_type: default_event_type(),
            cell_width: default_cell_width(),
            highlight_today: default_highlight_today(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcalendar")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcalendar")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalendar.conf")
    }

    /// Directory holding the JSON stores when nothing else is configured
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Resolve a configured data directory: `~` is expanded and relative
    /// paths are taken from the config directory.
    pub fn resolve_data_dir(raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Data directory the stores live in
    pub fn data_path(&self) -> PathBuf {
        Self::resolve_data_dir(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if cfg.cell_width < 6 {
            return Err(AppError::Config(format!(
                "cell_width must be at least 6 (found {})",
                cfg.cell_width
            )));
        }

        Ok(cfg)
    }

    /// Initialize the config file and the data directory.
    ///
    /// `custom_dir` overrides the data directory written into the config;
    /// in test mode the config file is left untouched.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_dir {
            Some(d) => Self::resolve_data_dir(&d),
            None => Self::default_data_dir(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
