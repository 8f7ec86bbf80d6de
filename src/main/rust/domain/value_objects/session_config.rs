use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use super::{Protocol, Role};
use crate::domain::errors::BuildError;

/// Multicast group every RTP participant joins, regardless of any
/// configured target address.
pub const RTP_MULTICAST_ADDRESS: &str = "239.0.0.1";

/// Container extensions offered by a file picker. Advisory only; the
/// builder's existence check is authoritative.
pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "mp3", "wav"];

/// Returns true when the path carries one of the common media container
/// extensions.
pub fn has_media_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            MEDIA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Everything one start attempt needs. Constructed fresh per attempt and
/// never mutated afterwards; the port is kept as the raw user text so that
/// parse failures surface through the builder as `BuildError::InvalidPort`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    role: Role,
    protocol: Protocol,
    port: String,
    source_path: Option<PathBuf>,
    target_address: Option<String>,
    local_ip: IpAddr,
}

impl SessionConfig {
    pub fn server(protocol: Protocol, port: impl Into<String>, source_path: PathBuf) -> Self {
        Self {
            role: Role::Server,
            protocol,
            port: port.into(),
            source_path: Some(source_path),
            target_address: None,
            local_ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }

    pub fn client(
        protocol: Protocol,
        port: impl Into<String>,
        target_address: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Client,
            protocol,
            port: port.into(),
            source_path: None,
            target_address: Some(target_address.into()),
            local_ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }

    pub fn with_local_ip(mut self, local_ip: IpAddr) -> Self {
        self.local_ip = local_ip;
        self
    }

    /// Drops the source so a server config can model "nothing selected yet".
    pub fn without_source(mut self) -> Self {
        self.source_path = None;
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn port_text(&self) -> &str {
        &self.port
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    pub fn target_address(&self) -> Option<&str> {
        self.target_address.as_deref()
    }

    pub fn local_ip(&self) -> IpAddr {
        self.local_ip
    }

    /// Parses the raw port text into a usable port number. Zero is rejected
    /// along with anything that is not an integer in range.
    pub fn parse_port(&self) -> Result<u16, BuildError> {
        let text = self.port.trim();
        match text.parse::<u16>() {
            Ok(0) | Err(_) => Err(BuildError::InvalidPort(self.port.clone())),
            Ok(port) => Ok(port),
        }
    }
}
