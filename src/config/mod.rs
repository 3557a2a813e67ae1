use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration. The duty/strike policy values live here —
/// they are operational knobs, not contractual constants.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Minimum net duty minutes for a session to count as duty-eligible.
    #[serde(default = "default_duty_min_minutes")]
    pub duty_min_minutes: i64,
    /// Active strikes at or above this count trigger a suspension.
    #[serde(default = "default_strike_threshold")]
    pub strike_threshold: i64,
    /// Length of a suspension window, in days.
    #[serde(default = "default_suspension_days")]
    pub suspension_days: i64,
    /// Break time above this many minutes earns an excessive-break strike.
    #[serde(default = "default_max_break_minutes")]
    pub max_break_minutes: i64,
    /// Minutes past the hour boundary during which a check-in still
    /// counts for the previous hour.
    #[serde(default = "default_checkin_grace_minutes")]
    pub checkin_grace_minutes: i64,
    /// Sessions shorter than this escape the insufficient-hours strike
    /// (0 = always evaluate).
    #[serde(default)]
    pub short_session_grace_minutes: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_duty_min_minutes() -> i64 {
    120
}
fn default_strike_threshold() -> i64 {
    5
}
fn default_suspension_days() -> i64 {
    7
}
fn default_max_break_minutes() -> i64 {
    45
}
fn default_checkin_grace_minutes() -> i64 {
    15
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            duty_min_minutes: default_duty_min_minutes(),
            strike_threshold: default_strike_threshold(),
            suspension_days: default_suspension_days(),
            max_break_minutes: default_max_break_minutes(),
            checkin_grace_minutes: default_checkin_grace_minutes(),
            short_session_grace_minutes: 0,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clubduty")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".clubduty")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clubduty.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clubduty.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// List config fields missing from the on-disk file (serde would fill
    /// them with defaults on load; `config --check` reports them).
    pub fn missing_fields() -> Vec<&'static str> {
        let path = Self::config_file();
        let Ok(content) = fs::read_to_string(&path) else {
            return Vec::new();
        };

        let mut missing = Vec::new();
        for field in [
            "database",
            "duty_min_minutes",
            "strike_threshold",
            "suspension_days",
            "max_break_minutes",
            "checkin_grace_minutes",
            "short_session_grace_minutes",
            "separator_char",
        ] {
            if !content.contains(field) {
                missing.push(field);
            }
        }
        missing
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
