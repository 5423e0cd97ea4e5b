//! Station records as returned by the station endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One station row from `GET /api/stations`.
///
/// Coordinates are optional: the endpoint may omit them, send `null`, or send
/// something that is not a number. All of those deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station: String,

    #[serde(default)]
    pub line: String,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lng: Option<f64>,

    /// Monthly rent, in units of 10,000 JPY.
    pub price: f64,

    /// Commute time in minutes.
    pub commute_time: f64,
}

impl StationRecord {
    /// Position to draw this station at.
    ///
    /// Returns `None` when either coordinate is absent, zero or non-finite.
    /// Zero is treated as missing: rows that were never geocoded come back as
    /// `0.0` rather than `null`.
    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if is_usable_coordinate(lat) && is_usable_coordinate(lng) => {
                Some(LatLng::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn has_missing_coordinates(&self) -> bool {
        self.position().is_none()
    }
}

fn is_usable_coordinate(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}
