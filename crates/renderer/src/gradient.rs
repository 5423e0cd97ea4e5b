//! Gradient color mapping for station markers.
//!
//! Values are normalized against the min/max of the current result set and
//! mapped through a fixed five-stop "jet" ramp:
//!
//! | position | color           |
//! |----------|-----------------|
//! | 0.00     | navy  `#000080` |
//! | 0.25     | blue  `#0000ff` |
//! | 0.50     | cyan  `#00ffff` |
//! | 0.75     | yellow `#ffff00`|
//! | 1.00     | red   `#ff0000` |

use station_common::{Color, StationMapError, StationMapResult};
use tracing::debug;

/// A control point of the gradient, at a normalized position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(position: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            color: Color::new(r, g, b),
        }
    }
}

/// Stops of the default ramp, low to high.
pub const JET_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.00, 0, 0, 128),
    ColorStop::new(0.25, 0, 0, 255),
    ColorStop::new(0.50, 0, 255, 255),
    ColorStop::new(0.75, 255, 255, 0),
    ColorStop::new(1.00, 255, 0, 0),
];

/// Color used when every value in the result set is the same.
pub const DEGENERATE_COLOR: Color = Color::new(127, 127, 127);

/// Check that stops are strictly ascending and span exactly `[0, 1]`.
pub fn validate_stops(stops: &[ColorStop]) -> StationMapResult<()> {
    if stops.len() < 2 {
        return Err(StationMapError::InvalidColorStops(
            "gradient must have at least 2 color stops".to_string(),
        ));
    }

    if let Some(first) = stops.first() {
        if first.position != 0.0 {
            return Err(StationMapError::InvalidColorStops(format!(
                "first stop must be at 0.0, got {}",
                first.position
            )));
        }
    }
    if let Some(last) = stops.last() {
        if last.position != 1.0 {
            return Err(StationMapError::InvalidColorStops(format!(
                "last stop must be at 1.0, got {}",
                last.position
            )));
        }
    }

    for pair in stops.windows(2) {
        if !(pair[1].position > pair[0].position) {
            return Err(StationMapError::InvalidColorStops(format!(
                "stop positions must be strictly ascending ({} then {})",
                pair[0].position, pair[1].position
            )));
        }
    }

    Ok(())
}

/// Piecewise-linear color scale over a validated set of stops.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Build a scale from custom stops, rejecting malformed tables.
    pub fn new(stops: Vec<ColorStop>) -> StationMapResult<Self> {
        validate_stops(&stops)?;
        debug!(stops = stops.len(), "Color scale validated");
        Ok(Self { stops })
    }

    /// The default jet ramp.
    pub fn jet() -> StationMapResult<Self> {
        Self::new(JET_STOPS.to_vec())
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Map `value` to a color relative to `[min_val, max_val]`.
    ///
    /// Values outside the range are pinned to the end colors. A zero-width
    /// range yields [`DEGENERATE_COLOR`]. Never fails for any input.
    pub fn color_for(&self, value: f64, min_val: f64, max_val: f64) -> Color {
        if min_val == max_val {
            return DEGENERATE_COLOR;
        }

        let t = ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0);
        interpolate_stops(&self.stops, t)
    }
}

/// Interpolate a normalized `t` across `stops`.
///
/// Falls back to the last stop's color when no segment brackets `t`
/// (only possible for NaN).
fn interpolate_stops(stops: &[ColorStop], t: f64) -> Color {
    for pair in stops.windows(2) {
        let (low, high) = (&pair[0], &pair[1]);
        if t >= low.position && t <= high.position {
            let ratio = (t - low.position) / (high.position - low.position);
            return interpolate_color(low.color, high.color, ratio);
        }
    }

    stops
        .last()
        .map(|stop| stop.color)
        .unwrap_or(DEGENERATE_COLOR)
}

/// Linear color interpolation, rounding each channel to the nearest integer.
pub fn interpolate_color(color1: Color, color2: Color, ratio: f64) -> Color {
    let channel = |c1: u8, c2: u8| -> u8 {
        (c1 as f64 + ratio * (c2 as f64 - c1 as f64))
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Color::new(
        channel(color1.r, color2.r),
        channel(color1.g, color2.g),
        channel(color1.b, color2.b),
    )
}

/// Smallest and largest of `values`, or `None` when there are none.
///
/// Non-finite values are skipped.
pub fn value_domain<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_stops_are_valid() {
        assert!(validate_stops(&JET_STOPS).is_ok());
    }

    #[test]
    fn test_nan_falls_back_to_last_stop() {
        assert_eq!(interpolate_stops(&JET_STOPS, f64::NAN), Color::new(255, 0, 0));
    }

    #[test]
    fn test_interpolate_color_midpoint_rounds() {
        let c = interpolate_color(Color::new(0, 0, 128), Color::new(0, 0, 255), 0.5);
        // 128 + 0.5 * 127 = 191.5
        assert_eq!(c, Color::new(0, 0, 192));
    }

    #[test]
    fn test_value_domain_skips_non_finite() {
        assert_eq!(value_domain([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(value_domain(Vec::<f64>::new()), None);
    }
}
