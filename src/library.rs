//! Track model and the in-memory catalog.
//!
//! The catalog starts from a fixed sample set and only changes through
//! `add` and `remove`; nothing is written to disk.

mod catalog;
mod model;
mod seed;

pub use catalog::Catalog;
pub use model::*;
pub use seed::seed_tracks;
