use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the pre-installed VLC binary lives when nothing is configured.
pub fn default_player_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Program Files\VideoLAN\VLC\vlc.exe")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/VLC.app/Contents/MacOS/VLC")
    } else {
        PathBuf::from("/usr/bin/vlc")
    }
}

/// The single persisted configuration value: the player executable path.
///
/// Loading is lenient. A missing or unreadable file yields defaults, since
/// a wrong path only matters at launch time and surfaces there as a typed
/// error rather than a crash here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerSettings {
    pub player_path: Option<PathBuf>,
}

impl PlayerSettings {
    pub fn load() -> Self {
        match Self::settings_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    pub fn store(&self) -> Result<(), SettingsError> {
        self.store_to(&Self::settings_file()?)
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring unreadable settings file: {e}");
                Self::default()
            }
        }
    }

    pub fn store_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The configured player path, or the documented OS default.
    pub fn resolve_player_path(&self) -> PathBuf {
        self.player_path.clone().unwrap_or_else(default_player_path)
    }

    fn settings_file() -> Result<PathBuf, SettingsError> {
        let dirs = ProjectDirs::from("", "", "stream-hub").ok_or(SettingsError::NoConfigDir)?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }
}
