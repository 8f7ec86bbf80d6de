mod command_builder;
mod supervisor;
mod terminator;

pub use command_builder::VlcCommandBuilder;
pub use supervisor::VlcSupervisor;
pub use terminator::{HandleTerminator, NameTerminator};
