use crate::domain::errors::TerminateError;

/// Port for the stop strategy applied to the launched player.
///
/// Two interchangeable strategies exist: name-based (kills every instance
/// of the player on the host) and handle-based (kills only the tracked
/// PID). Swapping one for the other changes externally observable behavior,
/// so the choice is wired explicitly.
pub trait ProcessTerminator: Send + Sync {
    /// `process_name` is the player executable's file name; `pid` is the
    /// tracked child's id when the OS reported one.
    fn terminate(&self, process_name: &str, pid: Option<u32>) -> Result<(), TerminateError>;
}
