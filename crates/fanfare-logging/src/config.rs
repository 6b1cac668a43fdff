//! Logging presets and output settings

use std::path::PathBuf;

/// Where log output goes and how verbose it is
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `fanfare_core=debug`
    pub default_level: String,
    pub console: ConsoleConfig,
    /// JSONL file output, off unless set
    pub file: Option<FileConfig>,
    pub jsonl: JsonlConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
            jsonl: JsonlConfig::default(),
        }
    }
}

impl LogConfig {
    /// Unattended screens: plain console plus JSONL files rotated daily in `directory`.
    pub fn kiosk(directory: impl Into<PathBuf>) -> Self {
        Self {
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: false,
            },
            file: Some(FileConfig {
                directory: directory.into(),
                rotation: RotationStrategy::Daily,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Raises the level to debug, which shows confetti edges and refused media commands.
    pub fn verbose(self) -> Self {
        Self {
            default_level: "debug".to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Human-readable lines; JSONL otherwise
    pub pretty: bool,
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: true,
            ansi: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileConfig {
    pub directory: PathBuf,
    /// File name prefix; `Never` rotation writes `<prefix>.log`
    pub prefix: String,
    pub rotation: RotationStrategy,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "fanfare".to_string(),
            rotation: RotationStrategy::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    Daily,
    Hourly,
    /// One file per run, truncated at startup
    #[default]
    Never,
}

/// Shape of JSONL records, on the console and in files
#[derive(Debug, Clone)]
pub struct JsonlConfig {
    /// Put event fields at the top level instead of under `fields`
    pub flatten_events: bool,
    pub include_spans: bool,
    /// Source file and line
    pub include_location: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
            include_location: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pretty_console_only() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.console.enabled && config.console.pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn verbose_only_raises_the_level() {
        let config = LogConfig::default().verbose();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty && config.console.ansi);
        assert!(config.file.is_none());
    }

    #[test]
    fn verbose_kiosk_keeps_its_files() {
        let config = LogConfig::kiosk("/var/log/fanfare").verbose();
        assert_eq!(config.default_level, "debug");
        assert_eq!(config.file.map(|f| f.rotation), Some(RotationStrategy::Daily));
        assert!(!config.console.ansi);
    }

    #[test]
    fn kiosk_rotates_daily_into_the_given_directory() {
        let config = LogConfig::kiosk("/var/log/fanfare");
        let file = config.file.expect("kiosk writes files");
        assert_eq!(file.directory, PathBuf::from("/var/log/fanfare"));
        assert_eq!(file.prefix, "fanfare");
        assert_eq!(file.rotation, RotationStrategy::Daily);
        assert!(!config.console.ansi);
    }
}
