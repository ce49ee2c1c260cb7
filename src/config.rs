//! Settings: schema types plus the loader that merges the optional
//! `config.toml` with `SONGBOOK__*` environment overrides.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
