//! Viewer configuration loaded from YAML.
//!
//! Every section is optional; missing fields take the defaults below.
//!
//! ```yaml
//! endpoint:
//!   base_url: http://localhost:5000
//!   request_timeout_secs: 30
//! map:
//!   view:
//!     center: { lat: 35.68, lng: 139.69 }
//!     zoom: 11
//! marker:
//!   radius: 12
//!   fill_opacity: 0.7
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use station_common::{MarkerAppearance, StationMapError, StationMapResult};
use tracing::debug;

use crate::map_widget::{MapView, TileLayer};

/// Root configuration of a station map viewer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub endpoint: EndpointConfig,
    pub map: MapConfig,
    pub marker: MarkerAppearance,
}

/// Where station data comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL; `/api/stations` is appended
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Base map setup applied once before the first render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub view: MapView,
    pub tile_layer: TileLayer,
}

impl ViewerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> StationMapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StationMapError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded viewer config");
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> StationMapResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| StationMapError::Config(e.to_string()))
    }

    pub fn validate(&self) -> StationMapResult<()> {
        if self.endpoint.base_url.trim().is_empty() {
            return Err(StationMapError::Config(
                "endpoint.base_url must not be empty".to_string(),
            ));
        }
        if self.endpoint.request_timeout_secs == 0 {
            return Err(StationMapError::Config(
                "endpoint.request_timeout_secs must be > 0".to_string(),
            ));
        }
        let center = self.map.view.center;
        if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lng) {
            return Err(StationMapError::Config(format!(
                "map.view.center out of range: ({}, {})",
                center.lat, center.lng
            )));
        }
        self.marker.validate().map_err(StationMapError::Config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(ViewerConfig::from_yaml("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
endpoint:
  base_url: http://stations.internal:8080
marker:
  radius: 8
"#;
        let config = ViewerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.endpoint.base_url, "http://stations.internal:8080");
        assert_eq!(config.endpoint.request_timeout_secs, 30);
        assert_eq!(config.marker.radius, 8.0);
        assert_eq!(config.marker.fill_opacity, 0.7);
        assert_eq!(config.map.view.zoom, 11);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ViewerConfig::default();
        config.endpoint.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ViewerConfig::from_yaml("endpoint: [1, 2").unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
