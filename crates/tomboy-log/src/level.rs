//! Severity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Log severity, ordered from most verbose to most severe
///
/// A message passes the logger's threshold when `level >= threshold`.
///
/// Serialized as the upper-case name; deserialized through `FromStr`, so
/// config files may use any case (`info`, `Info`, `INFO`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// Every level, most verbose first
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Display name used in console and file lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            _ => Level::Fatal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_names() {
        let names: Vec<_> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(" WARN ".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(ConfigError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_level_default_is_debug() {
        assert_eq!(Level::default(), Level::Debug);
    }

    #[test]
    fn test_level_deserialize_any_case() {
        let levels: Vec<Level> = serde_yaml::from_str("[info, Warn, ERROR, fatal, warning]").unwrap();
        assert_eq!(
            levels,
            vec![Level::Info, Level::Warn, Level::Error, Level::Fatal, Level::Warn]
        );
        assert!(serde_yaml::from_str::<Level>("loud").is_err());
        assert_eq!(serde_yaml::to_string(&Level::Info).unwrap().trim(), "INFO");
    }

    #[test]
    fn test_level_u8_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level.as_u8()), level);
        }
    }
}
