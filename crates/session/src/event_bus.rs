use crate::state::VisibilityState;

/// Notifications the session pushes out to UI consumers.
///
/// Kept as a typed enum rather than emitter inheritance or registered
/// callbacks; consumers drain the bus whenever it suits their render loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Layer visibility changed (or was explicitly re-asserted). Fired on
    /// every toggle call, including no-ops.
    ControlsChanged(VisibilityState),
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<SessionEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
