use foundation::{GeoBounds, GeoPoint};

/// Rendering side of the map, as seen by the session controller.
///
/// Implementations wrap whatever actually draws (a tile/overlay widget, a
/// canvas, a test double). The controller only ever issues these calls; it
/// never reaches into rendering internals.
///
/// Layer semantics:
/// - Accident markers are individual pins; `clear_accident_markers` drops
///   them all, attach/detach moves the whole layer on or off the map
///   without touching its contents.
/// - The heat layer keeps one wholesale point list; `set_heat_layer_points`
///   replaces it, show/hide controls only whether it is drawn.
/// - Highlight markers are plain pins driven by side-panel hover.
pub trait MapSurface {
    fn clear_accident_markers(&mut self);
    fn add_accident_marker(&mut self, at: GeoPoint);

    fn set_heat_layer_points(&mut self, points: Vec<GeoPoint>);
    fn is_heat_layer_visible(&self) -> bool;
    fn show_heat_layer(&mut self);
    fn hide_heat_layer(&mut self);

    fn is_accident_layer_attached(&self) -> bool;
    fn attach_accident_layer(&mut self);
    fn detach_accident_layer(&mut self);

    fn fit_view_to_bounds(&mut self, bounds: GeoBounds);

    fn set_highlight_marker(&mut self, at: GeoPoint);
    fn clear_highlight_markers(&mut self);
}
