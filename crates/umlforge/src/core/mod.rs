//! Core model and shared rules
//!
//! The design-model value types, their creation defaults and edit
//! operations, and the two pieces of shared rendering policy every
//! generator relies on: identifier sanitization and per-target type mapping.

mod error;
pub mod factory;
pub mod logging;
mod model;
pub mod sanitize;
mod store;
pub mod typemap;

pub use error::*;
pub use model::*;
pub use store::*;
