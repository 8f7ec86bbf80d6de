mod player_settings;

pub use player_settings::{default_player_path, PlayerSettings, SettingsError};
