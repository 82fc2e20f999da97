pub mod config;
pub mod controller;
pub mod event_bus;
pub mod state;
pub mod surface;

pub use config::*;
pub use controller::*;
pub use event_bus::*;
pub use state::*;
pub use surface::*;
