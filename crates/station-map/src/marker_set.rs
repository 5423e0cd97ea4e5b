//! Tracking of the markers currently drawn on a map.

use station_common::{LatLng, MarkerStyle};
use tracing::debug;

use crate::map_widget::MapWidget;

/// A marker to be drawn: where, how, and what its popup says.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualMarker {
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: String,
}

/// The markers a render pass has put on the map.
///
/// The set owns the map widget, so the only way to attach a marker is
/// through [`MarkerSet::add`], which also tracks it. Tracked handles and
/// attached markers therefore always agree.
#[derive(Debug)]
pub struct MarkerSet<M: MapWidget> {
    map: M,
    tracked: Vec<M::Handle>,
}

impl<M: MapWidget> MarkerSet<M> {
    pub fn new(map: M) -> Self {
        Self {
            map,
            tracked: Vec::new(),
        }
    }

    /// Remove every tracked marker from the map. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.tracked.len();
        for handle in self.tracked.drain(..) {
            self.map.remove_layer(&handle);
        }
        if removed > 0 {
            debug!(removed, "Cleared markers");
        }
        removed
    }

    /// Attach a marker with its popup and start tracking it.
    pub fn add(&mut self, marker: VisualMarker) -> M::Handle {
        let handle = self.map.add_circle_marker(marker.position, &marker.style);
        self.map.bind_popup(&handle, &marker.popup);
        self.tracked.push(handle.clone());
        handle
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn handles(&self) -> &[M::Handle] {
        &self.tracked
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Base layers only; markers must go through [`MarkerSet::add`].
    pub(crate) fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}
