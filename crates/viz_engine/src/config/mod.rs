//! Configuration system
//!
//! File-backed configuration with TOML and RON support. The format is chosen
//! from the file extension so hosts can keep whichever they already use.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window settings for the hosting render surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Title bar text
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Bundle Viewer".to_string(),
            width: 1200,
            height: 900,
        }
    }
}

/// Fixed color and opacity parameters for the widget set
///
/// These are construction-time parameters, not a theming system; widgets
/// keep whatever colors they were built with for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetPalette {
    /// Panel background color (RGB, each channel in 0-1)
    pub panel_color: [f32; 3],
    /// Panel background opacity
    pub panel_opacity: f32,
    /// Slider track and ring color
    pub slider_color: [f32; 3],
    /// Slider handle color
    pub handle_color: [f32; 3],
    /// Label and text box color
    pub text_color: [f32; 3],
}

impl Default for WidgetPalette {
    fn default() -> Self {
        Self {
            panel_color: [0.1, 0.1, 0.1],
            panel_opacity: 0.7,
            slider_color: [1.0, 0.0, 0.0],
            handle_color: [1.0, 1.0, 1.0],
            text_color: [1.0, 1.0, 1.0],
        }
    }
}

/// Top-level configuration consumed by viewer applications
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window parameters
    pub window: WindowSettings,
    /// Scene background color (RGB, each channel in 0-1)
    pub background: [f32; 3],
    /// Directory searched for icon files
    pub icon_dir: String,
    /// Widget colors and opacities
    pub palette: WidgetPalette,
}

impl Config for UiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = UiConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: UiConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.window.width, config.window.width);
        assert_eq!(back.palette.panel_color, config.palette.panel_color);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = UiConfig {
            background: [0.2, 0.2, 0.25],
            ..UiConfig::default()
        };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let back: UiConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.background, config.background);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = UiConfig::load_from_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
