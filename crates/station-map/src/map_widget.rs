//! Map widget seam and a headless implementation.
//!
//! [`MapWidget`] is the small set of map operations the render pipeline
//! needs. [`InMemoryMap`] implements it without any UI: it keeps the
//! attached layers in memory and can export them as GeoJSON.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use station_common::{LatLng, MarkerStyle};
use tracing::{debug, warn};

/// Initial camera position of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        // Central Tokyo
        Self {
            center: LatLng::new(35.68, 139.69),
            zoom: 11,
        }
    }
}

/// Raster tile source drawn under the markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

/// Operations the render pipeline performs on a map.
pub trait MapWidget {
    /// Opaque handle to a layer added to this map.
    type Handle: Clone + Debug + PartialEq;

    fn set_view(&mut self, view: &MapView);

    fn add_tile_layer(&mut self, layer: &TileLayer);

    /// Attach a circle marker and return its handle.
    fn add_circle_marker(&mut self, position: LatLng, style: &MarkerStyle) -> Self::Handle;

    fn bind_popup(&mut self, marker: &Self::Handle, html: &str);

    /// Detach a layer. Removing an unknown handle is a no-op.
    fn remove_layer(&mut self, marker: &Self::Handle);
}

/// Identifier of a layer in an [`InMemoryMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// A circle marker attached to an [`InMemoryMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct CircleLayer {
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: Option<String>,
}

/// Headless map keeping its layers in memory.
#[derive(Debug, Default)]
pub struct InMemoryMap {
    view: Option<MapView>,
    tile_layers: Vec<TileLayer>,
    markers: BTreeMap<LayerId, CircleLayer>,
    next_id: u64,
    removed: u64,
}

impl InMemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    /// Number of circle markers currently attached.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Total number of markers removed over the map's lifetime.
    pub fn removed_count(&self) -> u64 {
        self.removed
    }

    pub fn is_attached(&self, id: &LayerId) -> bool {
        self.markers.contains_key(id)
    }

    pub fn marker(&self, id: &LayerId) -> Option<&CircleLayer> {
        self.markers.get(id)
    }

    /// Attached markers in insertion order.
    pub fn markers(&self) -> impl Iterator<Item = (&LayerId, &CircleLayer)> {
        self.markers.iter()
    }

    /// Export attached markers as a GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> MarkerFeatureCollection {
        MarkerFeatureCollection {
            type_: "FeatureCollection".to_string(),
            features: self
                .markers
                .iter()
                .map(|(id, layer)| MarkerFeature::from_layer(*id, layer))
                .collect(),
        }
    }
}

/// GeoJSON FeatureCollection of circle markers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerFeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    pub features: Vec<MarkerFeature>,
}

/// One circle marker as a GeoJSON Feature.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub id: u64,

    pub geometry: PointGeometry,

    pub properties: MarkerProperties,
}

impl MarkerFeature {
    fn from_layer(id: LayerId, layer: &CircleLayer) -> Self {
        Self {
            type_: "Feature".to_string(),
            id: id.0,
            geometry: PointGeometry {
                type_: "Point".to_string(),
                coordinates: [layer.position.lng, layer.position.lat],
            },
            properties: MarkerProperties {
                radius: layer.style.radius,
                fill_color: layer.style.fill_color.to_css(),
                color: layer.style.stroke_color.clone(),
                weight: layer.style.stroke_weight,
                opacity: layer.style.opacity,
                fill_opacity: layer.style.fill_opacity,
                popup: layer.popup.clone(),
            },
        }
    }
}

/// GeoJSON Point. Coordinates are `[lng, lat]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub type_: String,

    pub coordinates: [f64; 2],
}

/// Marker style and popup, named like Leaflet path options.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerProperties {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: Option<String>,
}

impl MapWidget for InMemoryMap {
    type Handle = LayerId;

    fn set_view(&mut self, view: &MapView) {
        debug!(lat = view.center.lat, lng = view.center.lng, zoom = view.zoom, "Set map view");
        self.view = Some(view.clone());
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        debug!(url = %layer.url_template, "Added tile layer");
        self.tile_layers.push(layer.clone());
    }

    fn add_circle_marker(&mut self, position: LatLng, style: &MarkerStyle) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.markers.insert(
            id,
            CircleLayer {
                position,
                style: style.clone(),
                popup: None,
            },
        );
        id
    }

    fn bind_popup(&mut self, marker: &LayerId, html: &str) {
        match self.markers.get_mut(marker) {
            Some(layer) => layer.popup = Some(html.to_string()),
            None => warn!(layer = marker.0, "Popup bound to a marker that is not on the map"),
        }
    }

    fn remove_layer(&mut self, marker: &LayerId) {
        if self.markers.remove(marker).is_some() {
            self.removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_common::{Color, MarkerAppearance};

    fn style() -> MarkerStyle {
        MarkerAppearance::default().with_fill(Color::new(0, 0, 128))
    }

    #[test]
    fn test_add_and_remove() {
        let mut map = InMemoryMap::new();
        let a = map.add_circle_marker(LatLng::new(35.6, 139.7), &style());
        let b = map.add_circle_marker(LatLng::new(35.7, 139.8), &style());
        assert_ne!(a, b);
        assert_eq!(map.marker_count(), 2);

        map.remove_layer(&a);
        assert!(!map.is_attached(&a));
        assert!(map.is_attached(&b));
        assert_eq!(map.removed_count(), 1);

        // Second removal is a no-op
        map.remove_layer(&a);
        assert_eq!(map.removed_count(), 1);
    }

    #[test]
    fn test_bind_popup() {
        let mut map = InMemoryMap::new();
        let id = map.add_circle_marker(LatLng::new(35.6, 139.7), &style());
        map.bind_popup(&id, "<b>Shinjuku</b>");
        assert_eq!(map.marker(&id).unwrap().popup.as_deref(), Some("<b>Shinjuku</b>"));
    }

    #[test]
    fn test_geojson_uses_lng_lat_order() {
        let mut map = InMemoryMap::new();
        map.add_circle_marker(LatLng::new(35.6, 139.7), &style());
        let geojson = serde_json::to_value(map.to_geojson()).unwrap();

        assert_eq!(geojson["type"], "FeatureCollection");
        let feature = &geojson["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], 139.7);
        assert_eq!(feature["geometry"]["coordinates"][1], 35.6);
        assert_eq!(feature["properties"]["fillColor"], "rgb(0, 0, 128)");
        assert_eq!(feature["properties"]["fillOpacity"], 0.7);
        assert_eq!(feature["properties"]["radius"], 12.0);
    }

    #[test]
    fn test_default_view_is_tokyo() {
        let view = MapView::default();
        assert_eq!(view.center, LatLng::new(35.68, 139.69));
        assert_eq!(view.zoom, 11);
    }
}
