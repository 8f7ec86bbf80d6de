use tokio::sync::Mutex;

use crate::domain::entities::{SessionState, StreamSession};
use crate::domain::errors::SessionError;
use crate::domain::ports::{CommandBuilder, MediaPlayer};
use crate::domain::value_objects::{Role, SessionConfig};

struct Inner {
    player: Box<dyn MediaPlayer>,
    state: SessionState,
    session: Option<StreamSession>,
}

/// Application service orchestrating stream sessions.
///
/// All state observation and mutation happens under one mutex, so two
/// concurrent starts can never both see `Offline` and leak an untracked
/// player process.
pub struct SessionService {
    builder: Box<dyn CommandBuilder>,
    inner: Mutex<Inner>,
}

impl SessionService {
    pub fn new(builder: Box<dyn CommandBuilder>, player: Box<dyn MediaPlayer>) -> Self {
        Self {
            builder,
            inner: Mutex::new(Inner {
                player,
                state: SessionState::Offline,
                session: None,
            }),
        }
    }

    /// Start publishing the configured source file (use case).
    pub async fn start_server(&self, config: SessionConfig) -> Result<SessionState, SessionError> {
        self.start(Role::Server, config).await
    }

    /// Start playing a remote stream (use case).
    pub async fn start_client(&self, config: SessionConfig) -> Result<SessionState, SessionError> {
        self.start(Role::Client, config).await
    }

    async fn start(&self, role: Role, config: SessionConfig) -> Result<SessionState, SessionError> {
        if config.role() != role {
            return Err(SessionError::RoleMismatch);
        }

        let mut inner = self.inner.lock().await;

        if inner.state.is_active() {
            return Err(SessionError::AlreadyActive);
        }

        // Build before launch; any failure here leaves state untouched.
        let command = self.builder.build(&config)?;
        inner.player.launch(&command).await?;

        let session = StreamSession::new(role, config.protocol(), command.target().clone());
        let state = match role {
            Role::Server => SessionState::Streaming {
                protocol: config.protocol(),
                target: command.target().clone(),
            },
            Role::Client => SessionState::ConnectedClient {
                target: command.target().clone(),
            },
        };

        tracing::info!(
            session_id = %session.id(),
            role = %role,
            protocol = %config.protocol(),
            target = %command.target(),
            "Session started"
        );

        inner.state = state.clone();
        inner.session = Some(session);

        Ok(state)
    }

    /// Stop the active session, if any. Termination is best-effort: a kill
    /// failure is logged and the state still returns to `Offline`, so the
    /// caller can always reset its affordances.
    pub async fn stop(&self) -> SessionState {
        let mut inner = self.inner.lock().await;

        if inner.state.is_offline() {
            return SessionState::Offline;
        }

        if let Some(session) = inner.session.take() {
            tracing::info!(
                session_id = %session.id(),
                uptime_secs = session.uptime().as_secs(),
                "Stopping session"
            );
        }

        if let Err(e) = inner.player.terminate_all().await {
            tracing::warn!("Player termination failed: {e}");
        }

        inner.state = SessionState::Offline;
        SessionState::Offline
    }

    pub async fn state(&self) -> SessionState {
        let inner = self.inner.lock().await;
        inner.state.clone()
    }

    pub async fn current_session(&self) -> Option<StreamSession> {
        let inner = self.inner.lock().await;
        inner.session.clone()
    }

    pub async fn is_active(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.state.is_active()
    }
}
