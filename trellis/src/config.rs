//! Configuration for scrolling, scrollbars and lists.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```json
//! { "scrollbar": { "thickness_px": 14 }, "list": { "scroll_to_end": true } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scroll input conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels per wheel line.
    pub line_height_px: i32,
    /// How far outside the thumb (as a track fraction) a press still grabs it.
    pub grab_tolerance: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            line_height_px: 40,
            grab_tolerance: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Cross-axis thickness of a scrollbar; also the space it takes from the
    /// list viewport when visible.
    pub thickness_px: i32,
    /// Smallest thumb length along the track.
    pub min_thumb_px: i32,
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            thickness_px: 10,
            min_thumb_px: 16,
            track_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            thumb_color: Color::rgba(0.0, 0.0, 0.0, 0.4),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Follow the end of the list while the view is at the end.
    pub scroll_to_end: bool,
    /// Offer items the full cross extent as their minimum.
    pub stretch_items: bool,
    /// Let items overflow the cross axis and scroll it with a second bar.
    pub minor_scroll: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub scroll: ScrollConfig,
    pub scrollbar: ScrollbarConfig,
    pub list: ListConfig,
}

impl TrellisConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
