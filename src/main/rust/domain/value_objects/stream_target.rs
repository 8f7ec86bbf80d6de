use std::fmt;

/// The address:port a stream is published at, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamTarget {
    address: String,
    port: u16,
}

impl StreamTarget {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
