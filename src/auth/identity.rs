use serde::{Deserialize, Serialize};

/// What an identity is allowed to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May add and delete tracks.
    Admin,
    /// May only browse.
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: &'static str,
    pub username: &'static str,
    pub role: Role,
}

/// The fixed set of known identities.
pub static IDENTITIES: [Identity; 2] = [
    Identity {
        id: "1",
        username: "admin",
        role: Role::Admin,
    },
    Identity {
        id: "2",
        username: "user",
        role: Role::User,
    },
];

pub fn find_by_username(name: &str) -> Option<&'static Identity> {
    IDENTITIES.iter().find(|i| i.username == name)
}

pub fn find_by_id(id: &str) -> Option<&'static Identity> {
    IDENTITIES.iter().find(|i| i.id == id)
}
