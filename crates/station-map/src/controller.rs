//! Render pass orchestration.
//!
//! A pass is split into three steps so that overlapping passes can be
//! reconciled:
//!
//! 1. [`RenderController::begin_pass`] clears the map and hands out a
//!    [`PassTicket`] stamped with a new generation.
//! 2. [`PassTicket::fetch`] queries the source. This is the only await point.
//! 3. [`RenderController::commit`] draws the result, unless a newer pass was
//!    started in the meantime, in which case the result is dropped.
//!
//! [`RenderController::render_pass`] runs all three back to back.

use std::sync::Arc;

use renderer::gradient::value_domain;
use renderer::{popup_html, ColorScale};
use station_common::{
    FilterBounds, MarkerAppearance, Metric, StationMapError, StationMapResult, StationRecord,
};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{MapConfig, ViewerConfig};
use crate::filter_state::{FilterInputs, FilterState};
use crate::map_widget::MapWidget;
use crate::marker_set::{MarkerSet, VisualMarker};
use crate::source::{StationQuery, StationSource};

/// What a render pass ended with.
#[derive(Debug)]
pub enum PassOutcome {
    /// Markers were drawn. `fetched` counts every returned record, `rendered`
    /// only those with usable coordinates.
    Rendered {
        fetched: usize,
        rendered: usize,
        min: f64,
        max: f64,
    },
    /// The source returned no stations.
    Empty,
    /// Fetching or decoding failed; the map was left empty.
    Failed(StationMapError),
    /// A newer pass started before this one finished; its result was dropped.
    Superseded { generation: u64, latest: u64 },
}

impl PassOutcome {
    pub fn rendered_count(&self) -> usize {
        match self {
            PassOutcome::Rendered { rendered, .. } => *rendered,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PassOutcome::Failed(_))
    }
}

/// A started render pass waiting for its data.
#[derive(Debug, Clone)]
pub struct PassTicket {
    generation: u64,
    metric: Metric,
    query: StationQuery,
}

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn query(&self) -> &StationQuery {
        &self.query
    }

    /// Fetch this pass's stations from `source`.
    pub async fn fetch<S>(&self, source: &S) -> StationMapResult<Vec<StationRecord>>
    where
        S: StationSource + ?Sized,
    {
        source.fetch_stations(&self.query).await
    }
}

/// Owns the filters, the markers on the map, and the station source.
pub struct RenderController<M: MapWidget, S: StationSource> {
    filter: FilterState,
    markers: MarkerSet<M>,
    source: Arc<S>,
    scale: ColorScale,
    appearance: MarkerAppearance,
    map_config: MapConfig,
    generation: u64,
}

impl<M: MapWidget, S: StationSource> RenderController<M, S> {
    /// Create a controller drawing onto `map` with data from `source`.
    ///
    /// Fails if `config` does not validate.
    pub fn new(map: M, source: S, config: &ViewerConfig) -> StationMapResult<Self> {
        config.validate()?;
        Ok(Self {
            filter: FilterState::default(),
            markers: MarkerSet::new(map),
            source: Arc::new(source),
            scale: ColorScale::jet()?,
            appearance: config.marker.clone(),
            map_config: config.map.clone(),
            generation: 0,
        })
    }

    /// Position the map and add the base tile layer.
    pub fn initialize(&mut self) {
        let map = self.markers.map_mut();
        map.set_view(&self.map_config.view);
        map.add_tile_layer(&self.map_config.tile_layer);
        info!(
            lat = self.map_config.view.center.lat,
            lng = self.map_config.view.center.lng,
            zoom = self.map_config.view.zoom,
            "Map initialized"
        );
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn markers(&self) -> &MarkerSet<M> {
        &self.markers
    }

    pub fn map(&self) -> &M {
        self.markers.map()
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    /// Generation of the most recently started pass.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Color by rent and redraw.
    pub async fn show_by_price(&mut self) -> PassOutcome {
        self.filter.set_metric(Metric::Price);
        self.render_pass().await
    }

    /// Color by commute time and redraw.
    pub async fn show_by_commute_time(&mut self) -> PassOutcome {
        self.filter.set_metric(Metric::CommuteTime);
        self.render_pass().await
    }

    /// Take new filter bounds from raw user input and redraw.
    pub async fn apply_filter(&mut self, inputs: &FilterInputs) -> PassOutcome {
        let bounds = inputs.to_bounds();
        debug!(?bounds, "Applying filter");
        self.filter.update(bounds);
        self.render_pass().await
    }

    /// Run one complete pass: clear, fetch, color, draw.
    pub async fn render_pass(&mut self) -> PassOutcome {
        let ticket = self.begin_pass();
        let source = self.source();
        let result = ticket.fetch(source.as_ref()).await;
        self.commit(ticket, result)
    }

    /// Clear the map and start a new pass from the current filters.
    pub fn begin_pass(&mut self) -> PassTicket {
        self.generation += 1;
        self.markers.clear();

        let bounds: FilterBounds = self.filter.current_bounds();
        let ticket = PassTicket {
            generation: self.generation,
            metric: self.filter.metric(),
            query: StationQuery::from(bounds),
        };
        debug!(
            generation = ticket.generation,
            metric = %ticket.metric,
            "Render pass started"
        );
        ticket
    }

    /// Apply the fetch result of `ticket`.
    #[instrument(skip(self, ticket, result), fields(generation = ticket.generation, metric = %ticket.metric))]
    pub fn commit(
        &mut self,
        ticket: PassTicket,
        result: StationMapResult<Vec<StationRecord>>,
    ) -> PassOutcome {
        if ticket.generation != self.generation {
            warn!(latest = self.generation, "Dropping result of superseded render pass");
            return PassOutcome::Superseded {
                generation: ticket.generation,
                latest: self.generation,
            };
        }

        let records = match result {
            Ok(records) => records,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Render pass failed");
                return PassOutcome::Failed(e);
            }
        };

        let Some((min, max)) = value_domain(records.iter().map(|r| ticket.metric.value_of(r)))
        else {
            info!("No stations match the current filters");
            return PassOutcome::Empty;
        };

        let mut rendered = 0;
        for record in &records {
            let Some(position) = record.position() else {
                debug!(station = %record.station, "Skipping station without coordinates");
                continue;
            };

            let value = ticket.metric.value_of(record);
            let color = self.scale.color_for(value, min, max);
            self.markers.add(VisualMarker {
                position,
                style: self.appearance.with_fill(color),
                popup: popup_html(record),
            });
            rendered += 1;
        }

        info!(fetched = records.len(), rendered, min, max, "Render pass complete");
        PassOutcome::Rendered {
            fetched: records.len(),
            rendered,
            min,
            max,
        }
    }
}
