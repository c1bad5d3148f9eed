//! Serializable surface description

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};
use crate::format::PixelFormat;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Everything needed to allocate an owned surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub format: PixelFormat,
}

impl SurfaceConfig {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CanvasError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CanvasError::Config(e.to_string()))
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| CanvasError::Config(e.to_string()))
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| CanvasError::Config(e.to_string()))?;
        Self::from_json(&json)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, PixelFormat::Argb32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use test_log::test;

    #[test]
    fn parses_lowercase_format_names() {
        let cfg = SurfaceConfig::from_json(r#"{"width": 32, "height": 16, "format": "rgb24"}"#)
            .unwrap();
        assert_eq!(cfg, SurfaceConfig::new(32, 16, PixelFormat::Rgb24));
    }

    #[test]
    fn format_defaults_to_argb32() {
        let cfg = SurfaceConfig::from_json(r#"{"width": 2, "height": 2}"#).unwrap();
        assert_eq!(cfg.format, PixelFormat::Argb32);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = SurfaceConfig::from_json(r#"{"width": 2, "height": 2, "format": "yuv"}"#)
            .unwrap_err();
        assert!(matches!(err, CanvasError::Config(_)));
    }

    #[test]
    fn json_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("softcanvas-cfg-{}.json", std::process::id()));
        let cfg = SurfaceConfig::new(12, 7, PixelFormat::Rgb24);
        cfg.save(&path).unwrap();
        let loaded = SurfaceConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn builds_surface() {
        let s = Surface::from_config(&SurfaceConfig::new(5, 4, PixelFormat::Rgb24)).unwrap();
        assert_eq!((s.width(), s.height(), s.format()), (5, 4, PixelFormat::Rgb24));
        assert!(s.pixels().iter().all(|&w| w == 0));

        let d = SurfaceConfig::default();
        assert_eq!((d.width, d.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = SurfaceConfig::load("/nonexistent/softcanvas/surface.json").unwrap_err();
        assert!(matches!(err, CanvasError::Config(_)));
    }
}
