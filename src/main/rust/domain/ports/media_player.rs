use async_trait::async_trait;

use crate::domain::errors::{LaunchError, TerminateError};
use crate::domain::value_objects::PlayerCommand;

/// Port for supervising the external player process.
///
/// At most one handle is tracked at a time; the session service serializes
/// calls so a second launch can never race a first.
#[async_trait]
pub trait MediaPlayer: Send + Sync {
    /// Spawn the player with the given argument vector and register the
    /// child as the sole tracked handle.
    async fn launch(&mut self, command: &PlayerCommand) -> Result<(), LaunchError>;

    /// Terminate the running player. The tracked handle is cleared whether
    /// or not the underlying kill succeeded.
    async fn terminate_all(&mut self) -> Result<(), TerminateError>;

    /// Whether a handle is currently tracked. This reflects what was
    /// launched, not process liveness; a player closed by hand still
    /// reports true until the next stop.
    fn is_running(&self) -> bool;
}
