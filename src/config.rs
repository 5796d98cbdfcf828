use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, ScatterError};

/// Size categories for circular items.
///
/// Diameters follow the reference layout: large items carry an icon, label and
/// description, medium ones an icon and label, small ones just an icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Diameter in canvas units for this class.
    pub fn diameter(&self) -> f32 {
        match self {
            SizeClass::Large => 150.0,
            SizeClass::Medium => 90.0,
            SizeClass::Small => 50.0,
        }
    }
}

impl FromStr for SizeClass {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "large" => Ok(Self::Large),
            "m" | "medium" => Ok(Self::Medium),
            "s" | "small" => Ok(Self::Small),
            _ => Err(()),
        }
    }
}

impl<P> crate::model::Item<P> {
    /// Item sized by category.
    pub fn with_class(payload: P, class: SizeClass) -> Self {
        Self::new(payload, class.diameter())
    }
}

/// Canvas bounds and retry budget for one scatter run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterConfig {
    /// Canvas width in canvas units.
    pub canvas_width: f32,
    /// Canvas height in canvas units.
    pub canvas_height: f32,
    /// Random trial positions attempted per item before it is skipped.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            canvas_width: 360.0,
            canvas_height: 400.0,
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    100
}

impl ScatterConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - Canvas dimensions are zero, negative, or non-finite
    /// - The attempt budget is zero
    pub fn validate(&self) -> Result<()> {
        if !self.canvas_width.is_finite() || !self.canvas_height.is_finite() {
            return Err(ScatterError::InvalidInput(format!(
                "canvas dimensions must be finite, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ScatterError::InvalidInput(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.max_attempts == 0 {
            return Err(ScatterError::InvalidInput(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `ScatterConfig`.
    pub fn builder() -> ScatterConfigBuilder {
        ScatterConfigBuilder::new()
    }
}

/// Builder for `ScatterConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct ScatterConfigBuilder {
    cfg: ScatterConfig,
}

impl ScatterConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: ScatterConfig::default(),
        }
    }
    pub fn with_canvas(mut self, w: f32, h: f32) -> Self {
        self.cfg.canvas_width = w;
        self.cfg.canvas_height = h;
        self
    }
    pub fn max_attempts(mut self, v: u32) -> Self {
        self.cfg.max_attempts = v;
        self
    }
    pub fn build(self) -> ScatterConfig {
        self.cfg
    }
}
