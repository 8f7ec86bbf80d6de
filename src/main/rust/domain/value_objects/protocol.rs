use std::fmt;
use std::str::FromStr;

use crate::domain::errors::BuildError;

/// Transport the external player publishes or subscribes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Udp,
    Rtp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Udp => "UDP",
            Protocol::Rtp => "RTP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "udp" => Ok(Protocol::Udp),
            "rtp" => Ok(Protocol::Rtp),
            other => Err(BuildError::UnsupportedProtocol(other.to_string())),
        }
    }
}
