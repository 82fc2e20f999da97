/// Which overlay layers the user currently wants on screen.
///
/// Mutated only through the controller's toggle operations; both layers
/// start shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VisibilityState {
    pub show_accidents: bool,
    pub show_heat_map: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            show_accidents: true,
            show_heat_map: true,
        }
    }
}

/// Mutable flags for one map session.
///
/// One instance per session, owned by the controller. `has_fit_bounds`
/// gates the initial fit-to-city-bounds action: it transitions false→true
/// at most once per active city and is re-armed by every city switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_city: String,
    pub has_fit_bounds: bool,
    pub visibility: VisibilityState,
}

impl SessionState {
    pub fn new(active_city: impl Into<String>) -> Self {
        Self {
            active_city: active_city.into(),
            has_fit_bounds: false,
            visibility: VisibilityState::default(),
        }
    }
}
