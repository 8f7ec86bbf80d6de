use std::path::PathBuf;

use super::StreamTarget;

/// A fully-formed player invocation: executable plus argument vector.
///
/// Arguments are kept as a vector and handed to the process spawner as-is.
/// They are never joined into a shell string, so paths and addresses
/// containing spaces or quotes cannot smuggle extra arguments in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCommand {
    executable: PathBuf,
    args: Vec<String>,
    target: StreamTarget,
}

impl PlayerCommand {
    pub fn new(executable: PathBuf, args: Vec<String>, target: StreamTarget) -> Self {
        Self {
            executable,
            args,
            target,
        }
    }

    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The address:port shown to the user for this invocation.
    pub fn target(&self) -> &StreamTarget {
        &self.target
    }
}
