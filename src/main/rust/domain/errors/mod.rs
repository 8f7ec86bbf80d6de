use std::path::PathBuf;
use thiserror::Error;

/// Failures producing a player command from a session config. All of these
/// are user-recoverable and surface as messages, never as a crash.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no source file selected")]
    MissingSource,

    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    #[error("no target address provided")]
    MissingTarget,

    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Failures spawning the external player.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("player executable not found: {0}")]
    ExecutableNotFound(PathBuf),

    #[error("failed to spawn player: {0}")]
    SpawnFailed(#[from] std::io::Error),
}

/// Failures terminating the external player. Logged and ignored by the
/// session service; stop always lands back in `Offline`.
#[derive(Debug, Error)]
pub enum TerminateError {
    #[error("failed to terminate player process: {0}")]
    KillFailed(String),
}

/// Failures of the session state machine as a whole.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a session is already active; stop it before starting another")]
    AlreadyActive,

    #[error("config role does not match the requested operation")]
    RoleMismatch,

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}
