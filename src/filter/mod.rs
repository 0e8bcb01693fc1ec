//! Filtering module.
//!
//! Contains the per-dimension filter selection, route-derived scope, and the
//! predicate builder that combines them.

mod predicate;
mod scope;
mod selection;

pub use predicate::{Constraint, Predicate};
pub use scope::{RouteScope, BADMINTON_TOKEN};
pub use selection::{FilterSelection, FilterValue};
