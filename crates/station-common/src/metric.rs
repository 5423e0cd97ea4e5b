//! The scalar field that drives marker color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::station::StationRecord;

/// Which station field colors the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Price,
    CommuteTime,
}

impl Metric {
    /// Read this metric's value from a record.
    pub fn value_of(&self, record: &StationRecord) -> f64 {
        match self {
            Metric::Price => record.price,
            Metric::CommuteTime => record.commute_time,
        }
    }

    /// Wire name, matching the endpoint's field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::CommuteTime => "commute_time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" | "rent" => Ok(Metric::Price),
            "commute_time" | "commute-time" | "time" | "commute" => Ok(Metric::CommuteTime),
            other => Err(format!(
                "unknown metric '{}', expected 'price' or 'commute_time'",
                other
            )),
        }
    }
}
