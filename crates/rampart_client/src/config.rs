//! # Client Configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration:
//!
//! ```toml
//! projectile_ms = 300
//! melee_ms = 200
//! grid_square_size = 60.0
//! board_width = 600.0
//! outbound_capacity = 256
//!
//! [effects]
//! projectile_radius = 5.0
//! melee_max_radius = 20.0
//!
//! [panel]
//! x = 10.0
//! y = 10.0
//! ```

use std::path::Path;

use rampart_shared::{
    BOARD_WIDTH, GRID_SQUARE_SIZE, MELEE_DURATION_MS, PROJECTILE_DURATION_MS, UNIT_INSET,
};
use rampart_ui::{EffectStyle, Millis, Rect};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Lifetime of a projectile effect.
    pub projectile_ms: Millis,
    /// Lifetime of a melee impact effect.
    pub melee_ms: Millis,
    /// Side of one board square, in board units.
    pub grid_square_size: f32,
    /// Width of the clickable own board; clicks further right are ignored.
    pub board_width: f32,
    /// Effect sizes and trail opacity.
    pub effects: EffectStyle,
    /// Where the inspection panel is drawn.
    pub panel: PanelConfig,
    /// Messages the outbound queue holds before sends fail.
    pub outbound_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            projectile_ms: PROJECTILE_DURATION_MS,
            melee_ms: MELEE_DURATION_MS,
            grid_square_size: GRID_SQUARE_SIZE,
            board_width: BOARD_WIDTH,
            effects: EffectStyle::default(),
            panel: PanelConfig::default(),
            outbound_capacity: 256,
        }
    }
}

impl ClientConfig {
    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read and
    /// [`ClientError::Config`] if it does not parse or validate.
    pub fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] on syntax errors, unknown value types,
    /// or values that fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> ClientResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] naming the first offending field.
    pub fn validate(&self) -> ClientResult<()> {
        if self.grid_square_size.is_nan() || self.grid_square_size <= UNIT_INSET {
            return Err(ClientError::Config(format!(
                "grid_square_size must exceed {UNIT_INSET}, got {}",
                self.grid_square_size
            )));
        }
        if self.outbound_capacity == 0 {
            return Err(ClientError::Config("outbound_capacity must be at least 1".to_string()));
        }
        if !is_positive(self.board_width) {
            return Err(ClientError::Config(format!(
                "board_width must be positive, got {}",
                self.board_width
            )));
        }
        if !is_positive(self.panel.width) || !is_positive(self.panel.height) {
            return Err(ClientError::Config("panel must have a positive size".to_string()));
        }
        Ok(())
    }

    /// Side of a unit's click target.
    #[must_use]
    pub fn hitbox_size(&self) -> f32 {
        self.grid_square_size - UNIT_INSET
    }
}

/// Finite and above zero. NaN fails.
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Panel placement in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl PanelConfig {
    /// Panel rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: 10.0,
            width: 280.0,
            height: 240.0,
        }
    }
}
