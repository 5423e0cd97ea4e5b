//! Colors and marker styling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(0, 0, 128)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Hex notation, e.g. `#000080`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Marker styling shared by every marker of a render pass.
///
/// Only the fill color varies per station; see [`MarkerAppearance::with_fill`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerAppearance {
    /// Circle radius in pixels
    pub radius: f64,

    /// Outline color (any CSS color)
    pub stroke_color: String,

    /// Outline width in pixels
    pub stroke_weight: f64,

    /// Outline opacity
    pub opacity: f64,

    /// Fill opacity
    pub fill_opacity: f64,
}

impl Default for MarkerAppearance {
    fn default() -> Self {
        Self {
            radius: 12.0,
            stroke_color: "#000".to_string(),
            stroke_weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.7,
        }
    }
}

impl MarkerAppearance {
    pub fn with_fill(&self, fill_color: Color) -> MarkerStyle {
        MarkerStyle {
            radius: self.radius,
            fill_color,
            stroke_color: self.stroke_color.clone(),
            stroke_weight: self.stroke_weight,
            opacity: self.opacity,
            fill_opacity: self.fill_opacity,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.radius > 0.0) {
            return Err(format!("marker radius must be > 0, got {}", self.radius));
        }
        if self.stroke_weight < 0.0 {
            return Err(format!(
                "marker stroke_weight must be >= 0, got {}",
                self.stroke_weight
            ));
        }
        for (name, value) in [("opacity", self.opacity), ("fill_opacity", self.fill_opacity)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("marker {} must be within [0, 1], got {}", name, value));
            }
        }
        Ok(())
    }
}

/// Full style of one circle marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}
