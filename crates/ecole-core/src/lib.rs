//! # Ecole Core
//!
//! Core types, traits, and error definitions for the Ecole data-access layer.
//! This crate provides the entities (persons, teachers, courses), their typed
//! identifiers, and the [`Dao`] contract implemented by every access object.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
