use crate::errors::{AppError, AppResult};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Fixed civil timezone as a UTC offset, e.g. "+09:00".
    /// Read once at startup; all stored timestamps are naive local
    /// times in this zone and are never mixed with other zones.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "+09:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".studylog")
        } else {
            PathBuf::from(".studylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studylog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studylog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse the configured timezone into a fixed offset.
    /// Accepted form: "+HH:MM" or "-HH:MM".
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.timezone)
            .ok_or_else(|| AppError::Config(format!("invalid timezone '{}'", self.timezone)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
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
            timezone: default_timezone(),
        };

        // Write config file (skipped in test mode so tests never touch
        // the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
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

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };
    let (hh, mm) = rest.split_once(':')?;
    let hours: i32 = hh.parse().ok()?;
    let minutes: i32 = mm.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_offset() {
        let off = parse_offset("+09:00").unwrap();
        assert_eq!(off.local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn parses_negative_offset() {
        let off = parse_offset("-05:30").unwrap();
        assert_eq!(off.local_minus_utc(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn rejects_garbage_offset() {
        assert!(parse_offset("KST").is_none());
        assert!(parse_offset("+25:00").is_none());
    }
}
