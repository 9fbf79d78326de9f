#![forbid(unsafe_code)]

//! App configuration.
//!
//! The host page hands over CSS selectors for the canvas and the five
//! controls, plus the render options. Options arrive either as a plain
//! [`AppConfig`] from Rust callers or as a JSON object from the page
//! via [`AppConfig::from_json`]; every field has a default matching the
//! reference page, so `{}` is a valid configuration.

use crate::error::AppError;
use serde::Deserialize;

/// Selectors and render options for [`crate::mount`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    /// Selector of the `<canvas>` the grid is drawn on.
    pub canvas: String,
    /// Selector of the play/pause toggle button.
    pub play_pause: String,
    /// Selector of the reseed button.
    pub reset: String,
    /// Selector of the clear-all-cells button.
    pub kill: String,
    /// Selector of the steps-per-frame range input.
    pub rate: String,
    /// Selector of the FPS readout element.
    pub fps: String,
    /// Cell edge length in pixels, at least 1.
    pub cell_size: u32,
    pub grid_color: String,
    pub alive_color: String,
    pub dead_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: "#game-of-life-canvas".to_string(),
            play_pause: "#play-pause".to_string(),
            reset: "#reset".to_string(),
            kill: "#kill".to_string(),
            rate: "#rate".to_string(),
            fps: "#fps".to_string(),
            cell_size: 10,
            grid_color: "#CCCCCC".to_string(),
            alive_color: "#000000".to_string(),
            dead_color: "#FFFFFF".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a host-supplied JSON options object.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cell_size == 0 {
            return Err(AppError::InvalidConfig(
                "cellSize must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_the_default_config() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.canvas, "#game-of-life-canvas");
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let config =
            AppConfig::from_json(r##"{"cellSize": 6, "aliveColor": "#FF0000"}"##).unwrap();
        assert_eq!(config.cell_size, 6);
        assert_eq!(config.alive_color, "#FF0000");
        assert_eq!(config.dead_color, "#FFFFFF");
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let err = AppConfig::from_json(r#"{"cellSize": 0}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = AppConfig::from_json(r#"{"cellsize": 4}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_an_invalid_config() {
        let err = AppConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
