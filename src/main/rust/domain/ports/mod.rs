mod command_builder;
mod media_player;
mod process_terminator;

pub use command_builder::CommandBuilder;
pub use media_player::MediaPlayer;
pub use process_terminator::ProcessTerminator;
