//! Render configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, GridResult};
use crate::glyph::GlyphMetrics;
use crate::grid::{DEFAULT_CELL_PADDING, GridMapper};
use crate::layout::ResolverConfig;
use crate::quantity::QuantityConfig;

fn default_slot_pitch() -> f64 {
    60.0
}

fn default_grid_padding() -> f64 {
    DEFAULT_CELL_PADDING
}

/// Everything that tunes how a number is laid out on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub metrics: GlyphMetrics,
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Distance between consecutive seed slots above the anchor.
    #[serde(default = "default_slot_pitch")]
    pub slot_pitch: f64,
    #[serde(default)]
    pub quantity: QuantityConfig,
    /// Gutter for grids built from this config.
    #[serde(default = "default_grid_padding")]
    pub grid_padding: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            metrics: GlyphMetrics::default(),
            resolver: ResolverConfig::default(),
            slot_pitch: default_slot_pitch(),
            quantity: QuantityConfig::default(),
            grid_padding: default_grid_padding(),
        }
    }
}

impl RenderConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Reject distances that would break the layout guarantees.
    pub fn validate(&self, path: &Path) -> ConfigResult<()> {
        let distances = [
            ("resolver.min_spacing", self.resolver.min_spacing),
            ("resolver.clearance_buffer", self.resolver.clearance_buffer),
            ("slot_pitch", self.slot_pitch),
            ("grid_padding", self.grid_padding),
            ("quantity.icon_gap_x", self.quantity.icon_gap_x),
            ("quantity.icon_gap_y", self.quantity.icon_gap_y),
            ("quantity.group_gap_x", self.quantity.group_gap_x),
            ("quantity.group_gap_y", self.quantity.group_gap_y),
            ("quantity.width_fraction", self.quantity.width_fraction),
        ];
        match distances
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            Some((field, value)) => Err(ConfigError::Invalid {
                path: path.display().to_string(),
                field: field.to_string(),
                message: format!("must be finite and non-negative, got {value}"),
            }),
            None => Ok(()),
        }
    }

    /// Save to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// A grid mapper using this config's padding.
    pub fn grid(&self, rows: usize, cols: usize, width: f64, height: f64) -> GridResult<GridMapper> {
        GridMapper::new(rows, cols, width, height, self.grid_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Arrangement;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: RenderConfig = toml::from_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.slot_pitch, 60.0);
        assert_eq!(config.resolver.max_iterations, 20);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: RenderConfig = toml::from_str(
            r#"
            slot_pitch = 80.0

            [resolver]
            min_spacing = 30.0

            [quantity]
            arrangement = "vertical"
            "#,
        )
        .unwrap();
        assert_eq!(config.slot_pitch, 80.0);
        assert_eq!(config.resolver.min_spacing, 30.0);
        assert_eq!(config.resolver.max_iterations, 20);
        assert_eq!(config.quantity.arrangement, Arrangement::Vertical);
        assert_eq!(config.quantity.group_gap_x, 24.0);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = RenderConfig::load(Path::new("/nonexistent/polynumeral.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(RenderConfig::default().validate(Path::new("render.toml")).is_ok());
    }

    #[test]
    fn negative_clearance_buffer_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "[resolver]\nclearance_buffer = -10.0\n").unwrap();

        let err = RenderConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "resolver.clearance_buffer"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn nan_and_negative_quantity_values_are_rejected() {
        let path = Path::new("render.toml");
        let mut config = RenderConfig::default();
        config.quantity.width_fraction = f64::NAN;
        assert!(matches!(config.validate(path), Err(ConfigError::Invalid { .. })));

        let mut config = RenderConfig::default();
        config.quantity.group_gap_y = -1.0;
        assert!(matches!(config.validate(path), Err(ConfigError::Invalid { .. })));

        let mut config = RenderConfig::default();
        config.resolver.min_spacing = -50.0;
        assert!(matches!(config.validate(path), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn grid_uses_configured_padding() {
        let config = RenderConfig {
            grid_padding: 0.0,
            ..Default::default()
        };
        let g = config.grid(2, 2, 200.0, 100.0).unwrap();
        assert_eq!(g.padding(), 0.0);
        assert_eq!(g.cell_size().width, 100.0);
    }
}
