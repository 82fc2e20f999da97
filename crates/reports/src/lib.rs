pub mod model;
pub mod wire;

pub use model::*;
pub use wire::*;
