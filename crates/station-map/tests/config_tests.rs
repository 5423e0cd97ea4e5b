//! Tests for loading viewer configuration from disk.

use station_common::LatLng;
use station_map::ViewerConfig;
use test_utils::write_temp_config;

#[test]
fn test_load_full_config_file() {
    let file = write_temp_config(
        r##"
endpoint:
  base_url: http://stations.example.com
  request_timeout_secs: 5
map:
  view:
    center: { lat: 34.70, lng: 135.50 }
    zoom: 12
  tile_layer:
    url_template: https://tiles.example.com/{z}/{x}/{y}.png
    attribution: Example Tiles
marker:
  radius: 6
  stroke_color: "#333"
  stroke_weight: 2
  opacity: 0.9
  fill_opacity: 0.5
"##,
    );

    let config = ViewerConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.endpoint.base_url, "http://stations.example.com");
    assert_eq!(config.endpoint.request_timeout_secs, 5);
    assert_eq!(config.map.view.center, LatLng::new(34.70, 135.50));
    assert_eq!(config.map.view.zoom, 12);
    assert_eq!(config.map.tile_layer.attribution, "Example Tiles");
    assert_eq!(config.marker.radius, 6.0);
    assert_eq!(config.marker.stroke_color, "#333");
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ViewerConfig::from_file("/nonexistent/station-viewer.yaml").unwrap_err();
    assert_eq!(err.kind(), "config");
}

#[test]
fn test_out_of_range_center_fails_validation() {
    let file = write_temp_config("map:\n  view:\n    center: { lat: 135.5, lng: 34.7 }\n    zoom: 11\n");

    let config = ViewerConfig::from_file(file.path()).unwrap();

    assert!(config.validate().is_err());
}
