use std::fmt;

use crate::domain::value_objects::{Protocol, StreamTarget};

/// The single authoritative session state the caller renders.
///
/// Created `Offline`; an active variant is entered only after the player
/// launch succeeded, and left only through an explicit stop. The player's
/// own exit is not observed, so an active state can outlive the process.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Offline,
    Streaming {
        protocol: Protocol,
        target: StreamTarget,
    },
    ConnectedClient {
        target: StreamTarget,
    },
}

impl SessionState {
    pub fn is_offline(&self) -> bool {
        matches!(self, SessionState::Offline)
    }

    pub fn is_active(&self) -> bool {
        !self.is_offline()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Offline => f.write_str("OFFLINE"),
            SessionState::Streaming { protocol, target } => {
                write!(f, "STREAMING ({protocol} @ {target})")
            }
            SessionState::ConnectedClient { target } => {
                write!(f, "CLIENT CONNECTED ({target})")
            }
        }
    }
}
