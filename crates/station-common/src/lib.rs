//! Common types shared across the station map crates.

pub mod error;
pub mod filter;
pub mod metric;
pub mod station;
pub mod style;

pub use error::{StationMapError, StationMapResult};
pub use filter::{FilterBounds, FilterRange};
pub use metric::Metric;
pub use station::{LatLng, StationRecord};
pub use style::{Color, MarkerAppearance, MarkerStyle};
