use crate::domain::errors::BuildError;
use crate::domain::value_objects::{PlayerCommand, SessionConfig};

/// Port for turning a session config into a concrete player invocation.
///
/// Implementations must be pure apart from filesystem existence checks on
/// the source path; in particular they never touch the network, so a client
/// command can be built for a stream that does not exist.
pub trait CommandBuilder: Send + Sync {
    fn build(&self, config: &SessionConfig) -> Result<PlayerCommand, BuildError>;
}
