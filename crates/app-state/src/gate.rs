//! Navigation gate
//!
//! Deterministic mapping from session state to the mounted screen group.
//! The gate is a pure function of the session snapshot and owns no state
//! of its own; it cycles between the unauthenticated and authenticated
//! phases for the lifetime of the process, with no terminal phase.

use serde::{Deserialize, Serialize};

use crate::session::SessionSnapshot;

/// Which screen group the application mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePhase {
    /// Bootstrap has not completed; render nothing but a placeholder
    Bootstrapping,
    /// No session: only the sign-in and sign-up screens exist
    Unauthenticated,
    /// Active session: the tabbed main screens exist
    Authenticated,
}

impl GatePhase {
    /// Derive the phase from a session snapshot
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        if !snapshot.bootstrapped {
            GatePhase::Bootstrapping
        } else if snapshot.is_authenticated() {
            GatePhase::Authenticated
        } else {
            GatePhase::Unauthenticated
        }
    }

    /// Check if the authenticated screen group is mounted
    pub fn is_authenticated(&self) -> bool {
        matches!(self, GatePhase::Authenticated)
    }

    /// Check if either screen group may be mounted yet
    pub fn is_ready(&self) -> bool {
        !matches!(self, GatePhase::Bootstrapping)
    }
}
