mod session_state;
mod stream_session;

pub use session_state::SessionState;
pub use stream_session::StreamSession;
