use tracing::{debug, info, warn};

use super::identity::{Identity, find_by_username};
use super::storage::Storage;
use super::token;

/// Storage key holding the session token.
pub const SESSION_KEY: &str = "musicLibraryJWT";

/// Tracks the active identity and mirrors it into a storage slot.
///
/// None of the operations report failures to the caller. Unknown usernames,
/// bad tokens and storage errors are logged and otherwise leave the user
/// logged out.
pub struct Session {
    storage: Box<dyn Storage>,
    current: Option<&'static Identity>,
}

impl Session {
    /// A logged-out session over `storage`. Call `restore` to pick up a
    /// previously stored token.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&'static Identity> {
        self.current
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Load the stored token, if any, and activate the identity it names.
    pub fn restore(&mut self) -> Option<&'static Identity> {
        let stored = match self.storage.get(SESSION_KEY) {
            Ok(v) => v,
            Err(e) => {
                warn!("could not read session storage: {e}");
                None
            }
        };

        self.current = stored.and_then(|t| match token::decode(&t) {
            Ok(identity) => {
                info!(username = identity.username, "session restored");
                Some(identity)
            }
            Err(e) => {
                warn!("ignoring stored session token: {e}");
                None
            }
        });
        self.current
    }

    /// Activate the identity called `username` and persist its token.
    ///
    /// Unknown usernames leave the session unchanged.
    pub fn login(&mut self, username: &str) -> Option<&'static Identity> {
        let Some(identity) = find_by_username(username) else {
            debug!(username, "login ignored: unknown username");
            return None;
        };

        match token::encode(identity) {
            Ok(t) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &t) {
                    warn!("could not persist session token: {e}");
                }
            }
            Err(e) => warn!("could not encode session token: {e}"),
        }

        info!(username, role = identity.role.as_str(), "logged in");
        self.current = Some(identity);
        self.current
    }

    /// Forget the active identity and clear the stored token.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!("could not clear session storage: {e}");
        }
        if let Some(identity) = self.current.take() {
            info!(username = identity.username, "logged out");
        }
    }

    /// Whether the active identity may add and delete tracks.
    pub fn can_edit(&self) -> bool {
        self.current.is_some_and(|i| i.role.can_edit())
    }
}
