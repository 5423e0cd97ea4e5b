//! Station map render pipeline.
//!
//! A [`RenderController`] owns the filter state, the set of markers currently
//! on the map, and a data source. Each call to
//! [`RenderController::render_pass`] clears the map, fetches the stations
//! matching the active filters, colors them by the active metric, and puts
//! one circle marker per plottable station back on the map.

pub mod config;
pub mod controller;
pub mod filter_state;
pub mod map_widget;
pub mod marker_set;
pub mod source;

pub use config::{EndpointConfig, MapConfig, ViewerConfig};
pub use controller::{PassOutcome, PassTicket, RenderController};
pub use filter_state::{FilterInputs, FilterState};
pub use map_widget::{
    CircleLayer, InMemoryMap, LayerId, MapView, MapWidget, MarkerFeature, MarkerFeatureCollection,
    TileLayer,
};
pub use marker_set::{MarkerSet, VisualMarker};
pub use source::{parse_station_body, HttpStationSource, StationQuery, StationSource};
