//! Identities and the persisted session.
//!
//! There is no real authentication: logging in picks one of two fixed
//! identities and stores an unsigned token so it survives a restart.

mod identity;
mod session;
mod storage;
mod token;

pub use identity::*;
pub use session::{SESSION_KEY, Session};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use token::{decode as decode_token, encode as encode_token};
