use std::time::Instant;
use uuid::Uuid;

use crate::domain::value_objects::{Protocol, Role, StreamTarget};

/// One launched stream or playback, tracked for logging and uptime.
#[derive(Debug, Clone)]
pub struct StreamSession {
    id: String,
    role: Role,
    protocol: Protocol,
    target: StreamTarget,
    started_at: Instant,
}

impl StreamSession {
    pub fn new(role: Role, protocol: Protocol, target: StreamTarget) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            protocol,
            target,
            started_at: Instant::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn target(&self) -> &StreamTarget {
        &self.target
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}
