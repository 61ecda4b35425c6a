use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::types::{DisplayConfig, MAX_OPACITY, MIN_OPACITY, clamp_opacity};

/// Top-level configuration.
///
/// Loaded from `~/.config/window-opacity/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial state of the form controls.
    pub defaults: FormDefaults,
    /// Logging settings.
    pub log: LogConfig,
}

/// Values the opacity slider and checkboxes start with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// Opacity in percent (10–100). Any integer is accepted and clamped.
    #[serde(deserialize_with = "clamped_opacity")]
    pub opacity: u8,
    pub click_through: bool,
    pub always_on_top: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            opacity: MAX_OPACITY,
            click_through: false,
            always_on_top: false,
        }
    }
}

fn clamped_opacity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(i64::from(MIN_OPACITY), i64::from(MAX_OPACITY)) as u8)
}

impl FormDefaults {
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig::new(self.opacity, self.click_through, self.always_on_top)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Also write a daily rolling log file under `<config dir>/logs/`.
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: false,
        }
    }
}

impl Config {
    /// Clamps values to the ranges the controller accepts.
    pub fn validate(&mut self) {
        self.defaults.opacity = clamp_opacity(self.defaults.opacity);
    }
}

/// Returns the config directory: `~/.config/window-opacity/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("window-opacity"))
}

/// Returns the config file path: `~/.config/window-opacity/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to read and parse a config file.
pub fn try_load_from(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file yields defaults silently. A file that exists but can't be
/// read or parsed prints a warning and yields defaults. Logging is not up
/// yet at this point, so the warning goes to stderr.
pub fn load(path: Option<&Path>) -> Config {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match try_load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e:#}");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.defaults.opacity, 100);
        assert!(!config.defaults.click_through);
        assert!(!config.defaults.always_on_top);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.file);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[defaults]\nopacity = 60\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.defaults.opacity, 60);
        assert!(!config.defaults.click_through);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn validate_clamps_opacity() {
        // Arrange
        let mut config = Config {
            defaults: FormDefaults {
                opacity: 3,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.defaults.opacity, 10);
    }

    #[test]
    fn opacity_beyond_u8_is_clamped_without_dropping_other_sections() {
        // Arrange
        let mut high = tempfile::NamedTempFile::new().unwrap();
        writeln!(high, "[defaults]\nopacity = 300\n[log]\nlevel = \"debug\"").unwrap();
        let low_toml = "[defaults]\nopacity = -5\nclick_through = true\n";

        // Act
        let high_config = try_load_from(high.path()).unwrap();
        let low_config: Config = toml::from_str(low_toml).unwrap();

        // Assert
        assert_eq!(high_config.defaults.opacity, 100);
        assert_eq!(high_config.log.level, "debug");
        assert_eq!(low_config.defaults.opacity, 10);
        assert!(low_config.defaults.click_through);
    }

    #[test]
    fn form_defaults_build_display_config() {
        // Arrange
        let defaults = FormDefaults {
            opacity: 40,
            click_through: true,
            always_on_top: true,
        };

        // Act
        let config = defaults.display_config();

        // Assert
        assert_eq!(config, DisplayConfig::new(40, true, true));
    }

    #[test]
    fn loads_and_validates_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nopacity = 150\nalways_on_top = true\n[log]\nlevel = \"debug\"").unwrap();

        // Act
        let config = load(Some(file.path()));

        // Assert
        assert_eq!(config.defaults.opacity, 100);
        assert!(config.defaults.always_on_top);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults\nopacity = ").unwrap();

        // Act
        let strict = try_load_from(file.path());
        let lenient = load(Some(file.path()));

        // Assert
        assert!(strict.is_err());
        assert_eq!(lenient.defaults.opacity, 100);
    }

    #[test]
    fn missing_file_yields_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        // Act
        let config = load(Some(&path));

        // Assert
        assert_eq!(config.defaults.opacity, 100);
    }
}
