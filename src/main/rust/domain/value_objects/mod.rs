mod player_command;
mod protocol;
mod role;
mod session_config;
mod stream_target;

pub use player_command::PlayerCommand;
pub use protocol::Protocol;
pub use role::Role;
pub use session_config::{
    has_media_extension, SessionConfig, MEDIA_EXTENSIONS, RTP_MULTICAST_ADDRESS,
};
pub use stream_target::StreamTarget;
