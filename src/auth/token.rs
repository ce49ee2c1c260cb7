//! Unsigned identity claims.
//!
//! A token is base64 of a compact JSON claim. Nothing is signed: any claim
//! that names a known identity id decodes successfully, so the token only
//! saves the user from picking an identity again after a restart.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::identity::{Identity, Role, find_by_id};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Claim {
    user_id: String,
    username: String,
    role: Role,
}

/// Encode `identity` as a session token.
pub fn encode(identity: &Identity) -> Result<String> {
    let claim = Claim {
        user_id: identity.id.to_string(),
        username: identity.username.to_string(),
        role: identity.role,
    };
    let json = serde_json::to_vec(&claim)?;
    Ok(general_purpose::STANDARD.encode(json))
}

/// Decode a token back into the identity its `userId` names.
///
/// The username and role inside the claim are ignored; the identity always
/// comes from the fixed store.
pub fn decode(token: &str) -> Result<&'static Identity> {
    let bytes = general_purpose::STANDARD.decode(token.trim())?;
    let claim: ClaimRef = serde_json::from_slice(&bytes)?;
    find_by_id(&claim.user_id).ok_or(Error::UnknownIdentity(claim.user_id))
}

/// Lenient view of a claim used when decoding: only `userId` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRef {
    user_id: String,
}
