use crate::*;

use log::LevelFilter;
use serde::Deserialize;

use std::fmt::{Display, Formatter};

/// The settings of the *wrapper*: which elements of the host page it should use, how much it
/// should log, and how the desktop window should look.
///
/// Every field has a default value (see the `Default` implementation), and the host page can
/// override any of them by passing a JSON object to `start_with_config`. Unknown fields are
/// rejected so that typos don't go unnoticed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// The id of the canvas element to draw on
    pub canvas_id: String,
    pub button_ids: ButtonIds,
    /// One of "off", "error", "warn", "info", "debug" and "trace"
    pub log_level: String,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
}

/// The ids of the elements of the 4 `ColorButton`s
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonIds {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub reset: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glCanvas".to_string(),
            button_ids: ButtonIds::default(),
            log_level: "info".to_string(),
            window_title: "Color rect".to_string(),
            window_width: 800,
            window_height: 600,
        }
    }
}

impl Default for ButtonIds {
    fn default() -> Self {
        Self {
            red: ColorButton::Red.get_default_element_id().to_string(),
            green: ColorButton::Green.get_default_element_id().to_string(),
            blue: ColorButton::Blue.get_default_element_id().to_string(),
            reset: ColorButton::Reset.get_default_element_id().to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a `PageConfig` from the given JSON object. Fields that are missing from the JSON
    /// get their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json).map_err(ConfigError::Json)?;
        config.get_log_level()?;
        Ok(config)
    }

    /// Gets the id of the element that acts as the given *button*
    pub fn get_button_id(&self, button: ColorButton) -> &str {
        match button {
            ColorButton::Red => &self.button_ids.red,
            ColorButton::Green => &self.button_ids.green,
            ColorButton::Blue => &self.button_ids.blue,
            ColorButton::Reset => &self.button_ids.reset,
        }
    }

    pub fn get_log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

/// The reasons why `PageConfig::from_json` can fail
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    UnknownLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(error) => write!(formatter, "Malformed page config: {}", error),
            ConfigError::UnknownLogLevel(level) => write!(
                formatter, "Unknown log level '{}'", level
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(error) => Some(error),
            ConfigError::UnknownLogLevel(_) => None,
        }
    }
}
