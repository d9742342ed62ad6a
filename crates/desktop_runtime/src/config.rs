//! Tunable desktop constants.
//!
//! Every pixel and timing constant used by the gesture, grid and window logic lives on
//! [`DesktopConfig`]. The entry layer embeds a JSON document and parses it with
//! [`DesktopConfig::from_json`]; any field left out of the document keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Size;

#[derive(Debug, Error)]
/// Errors raised while loading a [`DesktopConfig`].
pub enum ConfigError {
    /// The config document is not valid JSON or has a mistyped field.
    #[error("invalid desktop config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Origin and cell size of the desktop icon grid, in container pixels.
pub struct IconGridConfig {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Default for IconGridConfig {
    fn default() -> Self {
        Self {
            x: 20,
            y: 20,
            w: 90,
            h: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Desktop-wide configuration shared by the reducer and the host.
pub struct DesktopConfig {
    /// DOM id of the element that contains the desktop icons.
    pub container_id: String,
    /// Pointer travel (Euclidean, px) before a press becomes a drag.
    pub drag_threshold_px: i32,
    /// Window in which a second click on the same icon opens it.
    pub double_click_ms: u32,
    /// Duration of the eased move to a snapped grid cell.
    pub snap_transition_ms: u32,
    pub icon_grid: IconGridConfig,
    pub icon_size: Size,
    /// Fallback minimum size for windows that do not declare one.
    pub min_window_size: Size,
    /// First value of the z-order counter; the first focus yields `z_index_base + 1`.
    pub z_index_base: u32,
    /// Taskbar height assumed until the host measures the real element.
    pub taskbar_height_px: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            container_id: "main-desktop".to_string(),
            drag_threshold_px: 5,
            double_click_ms: 300,
            snap_transition_ms: 100,
            icon_grid: IconGridConfig::default(),
            icon_size: Size { w: 70, h: 80 },
            min_window_size: Size { w: 150, h: 150 },
            z_index_base: 10,
            taskbar_height_px: 30,
        }
    }
}

impl DesktopConfig {
    /// Parses a (possibly partial) JSON config document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let config = DesktopConfig::from_json(r#"{ "container_id": "desktop" }"#)
            .expect("parse partial config");

        assert_eq!(config.container_id, "desktop");
        assert_eq!(config.drag_threshold_px, 5);
        assert_eq!(config.icon_grid, IconGridConfig::default());
        assert_eq!(config.min_window_size, Size { w: 150, h: 150 });
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let config = DesktopConfig::from_json("{}").expect("parse empty config");
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = DesktopConfig::from_json(r#"{ "double_click_ms": "fast" }"#)
            .expect_err("string is not a duration");
        assert!(err.to_string().starts_with("invalid desktop config"));
    }
}
