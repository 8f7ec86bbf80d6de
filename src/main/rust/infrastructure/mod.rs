pub mod net;
pub mod settings;
pub mod vlc;
