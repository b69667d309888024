//! Session store
//!
//! Single source of truth for "is the user authenticated", durable across
//! process restarts. The persisted form is two independent string entries
//! under fixed keys; the in-memory form is an all-or-nothing credentials
//! pair, so a half-authenticated state is unrepresentable.
//!
//! Every authentication transition in the application funnels through
//! [`SessionStore::set_session`]: sign-in and sign-up success install the
//! pair, while explicit logout and 401-triggered de-authentication both
//! clear it.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::KvStore;
use tokio::sync::watch;

/// Fixed key of the persisted session token entry
pub const TOKEN_KEY: &str = "userToken";

/// Fixed key of the persisted user id entry
pub const USER_ID_KEY: &str = "userId";

/// An authenticated credentials pair
///
/// Token and user id are set and cleared together; the store never holds
/// one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token for authenticated API calls
    pub token: String,
    /// Id of the authenticated user
    pub user_id: String,
}

/// A point-in-time view of the session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Whether bootstrap has completed
    pub bootstrapped: bool,
    /// Current credentials, if authenticated
    pub credentials: Option<Credentials>,
}

impl SessionSnapshot {
    /// Check if the snapshot represents an authenticated session
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Durable session store with a single writer
///
/// # Example
///
/// ```rust
/// use app_state::SessionStore;
/// use storage::KvStore;
///
/// let store = SessionStore::new(KvStore::in_memory().unwrap());
///
/// let restored = store.bootstrap();
/// assert!(restored.is_none());
///
/// store.set_session(Some("abc"), Some("1"));
/// assert!(store.snapshot().is_authenticated());
/// ```
#[derive(Clone)]
pub struct SessionStore {
    kv: KvStore,
    state: Arc<RwLock<SessionSnapshot>>,
    tx: Arc<watch::Sender<SessionSnapshot>>,
}

impl SessionStore {
    /// Create a new session store over the given key-value backend
    ///
    /// The store starts un-bootstrapped; no screen group may be mounted
    /// until [`bootstrap`](Self::bootstrap) has run.
    pub fn new(kv: KvStore) -> Self {
        let initial = SessionSnapshot::default();
        let (tx, _rx) = watch::channel(initial.clone());

        Self {
            kv,
            state: Arc::new(RwLock::new(initial)),
            tx: Arc::new(tx),
        }
    }

    /// Restore the persisted session at process start
    ///
    /// Reads the token and user id entries independently (each absent by
    /// default) and installs the in-memory state. Returns the restored
    /// credentials, if any. No network call is made; the token is trusted
    /// until an authenticated request rejects it.
    ///
    /// A lone orphaned entry (token without id, or vice versa) counts as
    /// unauthenticated and is cleaned up.
    ///
    /// Read failures are logged and treated as an absent entry so a
    /// corrupt store can never wedge the gating logic.
    pub fn bootstrap(&self) -> Option<Credentials> {
        let token = self.read_entry(TOKEN_KEY);
        let user_id = self.read_entry(USER_ID_KEY);

        let credentials = match (token, user_id) {
            (Some(token), Some(user_id)) => Some(Credentials { token, user_id }),
            (None, None) => None,
            _ => {
                tracing::warn!("orphaned session entry found, clearing");
                self.remove_entries();
                None
            }
        };

        let snapshot = SessionSnapshot {
            bootstrapped: true,
            credentials: credentials.clone(),
        };
        self.install(snapshot);

        credentials
    }

    /// Set or clear the session
    ///
    /// All-or-nothing contract: if both arguments are non-empty, both
    /// entries are persisted and the in-memory state becomes
    /// authenticated with those values. If either argument is absent or
    /// empty, both persisted entries are deleted and the in-memory state
    /// becomes unauthenticated. Partial input deliberately means "clear
    /// everything", not an error.
    ///
    /// Persistence failures are logged but never block the in-memory
    /// update: a failed clear must still de-authenticate the UI rather
    /// than leave it showing authenticated screens with a dead token.
    pub fn set_session(&self, token: Option<&str>, user_id: Option<&str>) {
        let token = token.filter(|t| !t.is_empty());
        let user_id = user_id.filter(|u| !u.is_empty());

        let credentials = match (token, user_id) {
            (Some(token), Some(user_id)) => {
                self.write_entry(TOKEN_KEY, token);
                self.write_entry(USER_ID_KEY, user_id);
                tracing::info!(user_id, "session installed");
                Some(Credentials {
                    token: token.to_string(),
                    user_id: user_id.to_string(),
                })
            }
            _ => {
                self.remove_entries();
                tracing::info!("session cleared");
                None
            }
        };

        let snapshot = SessionSnapshot { bootstrapped: true, credentials };
        self.install(snapshot);
    }

    /// Clear the session
    ///
    /// Explicit logout and 401-triggered de-authentication both call
    /// this, guaranteeing the all-or-nothing invariant on either path.
    pub fn clear(&self) {
        self.set_session(None, None);
    }

    /// Get the current session snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    /// Get the current credentials, if authenticated
    pub fn credentials(&self) -> Option<Credentials> {
        self.state.read().credentials.clone()
    }

    /// Check if the store currently holds a session
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Subscribe to session changes
    ///
    /// The receiver observes every snapshot the single writer installs,
    /// letting the navigation layer react to transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    fn install(&self, snapshot: SessionSnapshot) {
        *self.state.write() = snapshot.clone();
        // send_replace stores the value even with no receivers, so a
        // late subscriber still observes the latest snapshot.
        self.tx.send_replace(snapshot);
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        match self.kv.get::<String>(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read session entry");
                None
            }
        }
    }

    fn write_entry(&self, key: &str, value: &str) {
        if let Err(e) = self.kv.set(key, &value.to_string()) {
            tracing::warn!(key, error = %e, "failed to persist session entry");
        }
    }

    fn remove_entries(&self) {
        for key in [TOKEN_KEY, USER_ID_KEY] {
            if let Err(e) = self.kv.remove(key) {
                tracing::warn!(key, error = %e, "failed to delete session entry");
            }
        }
    }
}
