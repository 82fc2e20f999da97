use clustering::{Cluster, partition};
use foundation::GeoPoint;
use reports::{ClusterPoint, ReportBatch};
use tracing::{debug, trace};

use crate::config::MapOptions;
use crate::event_bus::{EventBus, SessionEvent};
use crate::state::{SessionState, VisibilityState};
use crate::surface::MapSurface;

/// Result of one ingest cycle, handed back to the caller (the side panel
/// renders the clusters, the toolbar shows the accident count).
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    /// Proximity clusters in creation order, each sorted by time.
    pub clusters: Vec<Cluster>,
    pub accident_count: usize,
}

/// Drives one map session: owns the session flags, the control event bus,
/// and the rendering surface.
///
/// Single control thread by design. Ingest cycles and toggles run to
/// completion without suspension; callers keep at most one fetch/render
/// cycle in flight.
pub struct MapController<S: MapSurface> {
    surface: S,
    state: SessionState,
    events: EventBus,
    options: MapOptions,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(surface: S, city_name: impl Into<String>) -> Self {
        Self::with_options(surface, city_name, MapOptions::default())
    }

    pub fn with_options(surface: S, city_name: impl Into<String>, options: MapOptions) -> Self {
        Self {
            surface,
            state: SessionState::new(city_name),
            events: EventBus::new(),
            options,
        }
    }

    pub fn active_city(&self) -> &str {
        &self.state.active_city
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Events emitted since the last drain, oldest first.
    pub fn pending_events(&self) -> &[SessionEvent] {
        self.events.events()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    /// Run one full ingest cycle over a report batch.
    ///
    /// In order: previously rendered accident markers are dropped
    /// (unconditionally, even for an empty batch); every accident report
    /// adds a marker and bumps the count; the view fits to the batch city's
    /// bounds if this session has not fit yet *and* the batch city matches
    /// the active city (a mismatched batch neither fits nor consumes the
    /// one-shot); the heat layer point list is replaced wholesale with all
    /// report coordinates, both kinds; finally the reports are partitioned
    /// into proximity clusters in input order.
    pub fn ingest(&mut self, batch: &ReportBatch) -> IngestOutcome {
        self.surface.clear_accident_markers();

        let mut points: Vec<ClusterPoint> = Vec::with_capacity(batch.reports.len());
        let mut heat: Vec<GeoPoint> = Vec::with_capacity(batch.reports.len());
        let mut accident_count = 0usize;

        for report in &batch.reports {
            points.push(ClusterPoint::from(report));
            if report.is_accident() {
                accident_count += 1;
                self.surface.add_accident_marker(report.coords);
            }
            heat.push(report.coords);
        }

        if !self.state.has_fit_bounds && batch.city.name == self.state.active_city {
            self.surface.fit_view_to_bounds(batch.city.bounds);
            self.state.has_fit_bounds = true;
        }

        self.surface.set_heat_layer_points(heat);

        let clusters = partition(&points);
        debug!(
            city = %batch.city.name,
            reports = batch.reports.len(),
            accidents = accident_count,
            clusters = clusters.len(),
            "ingested report batch"
        );

        IngestOutcome {
            clusters,
            accident_count,
        }
    }

    /// Switch the session to another city and re-arm the one-shot fit.
    pub fn set_city(&mut self, name: impl Into<String>) {
        self.state.active_city = name.into();
        self.state.has_fit_bounds = false;
        debug!(city = %self.state.active_city, "switched city");
    }

    /// Show or hide the heat layer.
    ///
    /// `Some(v)` sets the layer to `v`; `None` flips whatever the surface
    /// currently renders. The stored flag is read back from the surface
    /// afterwards, so it cannot drift from the actual rendering state. A
    /// `ControlsChanged` event fires on every call, no-ops included.
    pub fn toggle_heat_map(&mut self, visible: Option<bool>) {
        let show = visible.unwrap_or_else(|| !self.surface.is_heat_layer_visible());
        if show {
            self.surface.show_heat_layer();
        } else {
            self.surface.hide_heat_layer();
        }
        self.state.visibility.show_heat_map = self.surface.is_heat_layer_visible();
        self.emit_controls_changed();
    }

    /// Attach or detach the accident-marker layer as a whole.
    ///
    /// Same contract as [`MapController::toggle_heat_map`]; markers inside
    /// the layer are untouched.
    pub fn toggle_accidents_layer(&mut self, visible: Option<bool>) {
        let show = visible.unwrap_or_else(|| !self.surface.is_accident_layer_attached());
        if show {
            self.surface.attach_accident_layer();
        } else {
            self.surface.detach_accident_layer();
        }
        self.state.visibility.show_accidents = self.surface.is_accident_layer_attached();
        self.emit_controls_changed();
    }

    pub fn visibility(&self) -> VisibilityState {
        self.state.visibility
    }

    /// Bulk-apply both visibility flags; each toggle follows its own
    /// contract and emits its own event.
    pub fn set_visibility(&mut self, state: VisibilityState) {
        self.toggle_heat_map(Some(state.show_heat_map));
        self.toggle_accidents_layer(Some(state.show_accidents));
    }

    /// Place the hover-highlight marker on a report's position.
    pub fn highlight_report(&mut self, at: GeoPoint) {
        self.surface.set_highlight_marker(at);
    }

    /// Remove all highlight markers.
    pub fn clear_highlight(&mut self) {
        self.surface.clear_highlight_markers();
    }

    fn emit_controls_changed(&mut self) {
        let visibility = self.state.visibility;
        trace!(
            show_accidents = visibility.show_accidents,
            show_heat_map = visibility.show_heat_map,
            "controls changed"
        );
        self.events.emit(SessionEvent::ControlsChanged(visibility));
    }
}
