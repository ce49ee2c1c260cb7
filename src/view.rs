//! Derived view of the catalog: search, field filter, sort, group and
//! aggregate statistics.
//!
//! Everything here is a pure function of the tracks and the current
//! `ViewControls`; the app recomputes it on every change.

mod controls;
mod pipeline;
mod stats;

pub use controls::*;
pub use pipeline::*;
pub use stats::CatalogStats;

#[cfg(test)]
mod tests;
