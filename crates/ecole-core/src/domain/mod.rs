//! Domain layer: entities persisted by the DAOs.

pub mod entities;

pub use entities::*;
