use std::path::PathBuf;

use crate::domain::errors::BuildError;
use crate::domain::ports::CommandBuilder;
use crate::domain::value_objects::{
    PlayerCommand, Protocol, Role, SessionConfig, StreamTarget, RTP_MULTICAST_ADDRESS,
};

/// Maps a session config to a VLC argument vector.
///
/// Server commands publish through a duplicate sout chain that also renders
/// locally; client commands are a bare stream URL. The builder checks the
/// source path on the filesystem but never the network.
pub struct VlcCommandBuilder {
    executable: PathBuf,
}

impl VlcCommandBuilder {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    fn build_server(&self, config: &SessionConfig, port: u16) -> Result<PlayerCommand, BuildError> {
        let source = config.source_path().ok_or(BuildError::MissingSource)?;
        if !source.exists() {
            return Err(BuildError::SourceNotFound(source.clone()));
        }
        // Absolute, OS-normalized path; a file that vanished since the
        // exists() check surfaces the same way as one that never existed.
        let source = source
            .canonicalize()
            .map_err(|_| BuildError::SourceNotFound(source.clone()))?;

        let local_ip = config.local_ip();
        let (sout, target) = match config.protocol() {
            Protocol::Http => (
                format!(
                    "#transcode{{scodec=none}}:duplicate{{dst=http{{mux=mkv,dst=:{port}/}},dst=display}}"
                ),
                StreamTarget::new(local_ip.to_string(), port),
            ),
            Protocol::Udp => (
                format!("#duplicate{{dst=udp{{mux=ts,dst={local_ip}:{port}}},dst=display}}"),
                StreamTarget::new(local_ip.to_string(), port),
            ),
            Protocol::Rtp => (
                format!(
                    "#duplicate{{dst=rtp{{mux=ts,dst={RTP_MULTICAST_ADDRESS}:{port}}},dst=display}}"
                ),
                StreamTarget::new(RTP_MULTICAST_ADDRESS, port),
            ),
        };

        let args = vec![
            source.display().to_string(),
            format!("--sout={sout}"),
            // Only the explicit sink list is honored, and the chain stays
            // up after the file ends.
            "--no-sout-all".to_string(),
            "--sout-keep".to_string(),
        ];

        Ok(PlayerCommand::new(self.executable.clone(), args, target))
    }

    fn build_client(&self, config: &SessionConfig, port: u16) -> Result<PlayerCommand, BuildError> {
        let address = config
            .target_address()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(BuildError::MissingTarget)?;

        let url = match config.protocol() {
            Protocol::Http => format!("http://{address}:{port}/"),
            Protocol::Udp => format!("udp://@{address}:{port}"),
            Protocol::Rtp => format!("rtp://@{address}:{port}"),
        };

        Ok(PlayerCommand::new(
            self.executable.clone(),
            vec![url],
            StreamTarget::new(address, port),
        ))
    }
}

impl CommandBuilder for VlcCommandBuilder {
    fn build(&self, config: &SessionConfig) -> Result<PlayerCommand, BuildError> {
        let port = config.parse_port()?;
        match config.role() {
            Role::Server => self.build_server(config, port),
            Role::Client => self.build_client(config, port),
        }
    }
}
