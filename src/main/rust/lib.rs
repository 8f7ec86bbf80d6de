pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenience
pub use application::services::SessionService;
pub use config::{Command, Config};
pub use domain::entities::{SessionState, StreamSession};
pub use domain::errors::{BuildError, LaunchError, SessionError, TerminateError};
pub use domain::ports::{CommandBuilder, MediaPlayer, ProcessTerminator};
pub use domain::value_objects::{
    has_media_extension, PlayerCommand, Protocol, Role, SessionConfig, StreamTarget,
    MEDIA_EXTENSIONS, RTP_MULTICAST_ADDRESS,
};
pub use infrastructure::net::local_address;
pub use infrastructure::settings::{default_player_path, PlayerSettings, SettingsError};
pub use infrastructure::vlc::{HandleTerminator, NameTerminator, VlcCommandBuilder, VlcSupervisor};
