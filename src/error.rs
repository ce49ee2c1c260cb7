//! Error types shared by the session and storage layers.
//!
//! Most of these never reach the user: the session manager logs them and
//! treats the session as absent.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the storage file failed.
    #[error("storage I/O error at {path}: {source}")]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file exists but is not a table of string values.
    #[error("storage file {path} is malformed: {source}")]
    StorageFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The storage table could not be serialized back to disk.
    #[error("failed to serialize storage: {0}")]
    StorageSerialize(#[from] toml::ser::Error),

    /// The token is not valid base64.
    #[error("session token is not base64: {0}")]
    TokenEncoding(#[from] base64::DecodeError),

    /// The decoded token is not a JSON claim.
    #[error("session token is not a valid claim: {0}")]
    TokenClaim(#[from] serde_json::Error),

    /// The claim names an identity that does not exist.
    #[error("unknown identity id: {0}")]
    UnknownIdentity(String),
}
