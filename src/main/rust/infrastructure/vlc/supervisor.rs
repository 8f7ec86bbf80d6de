use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::{Child, Command};

use super::NameTerminator;
use crate::domain::errors::{LaunchError, TerminateError};
use crate::domain::ports::{MediaPlayer, ProcessTerminator};
use crate::domain::value_objects::PlayerCommand;

/// Supervises the external VLC process: spawns it from an argument vector
/// and owns the single live handle.
pub struct VlcSupervisor {
    terminator: Box<dyn ProcessTerminator>,
    child: Option<Child>,
    process_name: Option<String>,
}

impl VlcSupervisor {
    pub fn new(terminator: Box<dyn ProcessTerminator>) -> Self {
        Self {
            terminator,
            child: None,
            process_name: None,
        }
    }

    /// Default stop behavior: kill every player instance by name.
    pub fn with_name_termination() -> Self {
        Self::new(Box::new(NameTerminator))
    }
}

#[async_trait]
impl MediaPlayer for VlcSupervisor {
    async fn launch(&mut self, command: &PlayerCommand) -> Result<(), LaunchError> {
        let executable = command.executable();
        if !executable.is_file() {
            return Err(LaunchError::ExecutableNotFound(executable.clone()));
        }

        let child = Command::new(executable)
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::info!(
            pid = ?child.id(),
            executable = %executable.display(),
            "Player launched"
        );

        self.process_name = executable
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.child = Some(child);
        Ok(())
    }

    async fn terminate_all(&mut self) -> Result<(), TerminateError> {
        // Clear the handle first; stop must never leave stale state behind,
        // even when the kill itself fails.
        let child = self.child.take();
        let process_name = self.process_name.take();

        let Some(child) = child else {
            return Ok(());
        };

        let name = process_name.unwrap_or_else(|| "vlc".to_string());
        self.terminator.terminate(&name, child.id())
    }

    fn is_running(&self) -> bool {
        self.child.is_some()
    }
}
