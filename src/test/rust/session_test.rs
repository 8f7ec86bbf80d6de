use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use stream_hub::{
    LaunchError, MediaPlayer, PlayerCommand, Protocol, SessionConfig, SessionError,
    SessionService, SessionState, StreamTarget, TerminateError, VlcCommandBuilder,
};

#[derive(Default)]
struct PlayerLog {
    launched: Vec<PlayerCommand>,
    terminations: usize,
}

/// Stand-in for the VLC supervisor that records every launch and can be
/// told to fail either operation.
struct MockPlayer {
    log: Arc<Mutex<PlayerLog>>,
    fail_launch: bool,
    fail_terminate: bool,
    running: bool,
}

impl MockPlayer {
    fn new(log: Arc<Mutex<PlayerLog>>) -> Self {
        Self {
            log,
            fail_launch: false,
            fail_terminate: false,
            running: false,
        }
    }

    fn failing_launch(log: Arc<Mutex<PlayerLog>>) -> Self {
        Self {
            fail_launch: true,
            ..Self::new(log)
        }
    }

    fn failing_terminate(log: Arc<Mutex<PlayerLog>>) -> Self {
        Self {
            fail_terminate: true,
            ..Self::new(log)
        }
    }
}

#[async_trait]
impl MediaPlayer for MockPlayer {
    async fn launch(&mut self, command: &PlayerCommand) -> Result<(), LaunchError> {
        if self.fail_launch {
            return Err(LaunchError::ExecutableNotFound(PathBuf::from(
                "/nonexistent/vlc",
            )));
        }
        self.log.lock().unwrap().launched.push(command.clone());
        self.running = true;
        Ok(())
    }

    async fn terminate_all(&mut self) -> Result<(), TerminateError> {
        self.running = false;
        self.log.lock().unwrap().terminations += 1;
        if self.fail_terminate {
            return Err(TerminateError::KillFailed("injected".to_string()));
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

fn service_with(player: MockPlayer) -> SessionService {
    let builder = Box::new(VlcCommandBuilder::new(PathBuf::from("/usr/bin/vlc")));
    SessionService::new(builder, Box::new(player))
}

fn existing_source() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "payload").unwrap();
    file
}

fn local_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50))
}

#[tokio::test]
async fn test_server_start_transitions_to_streaming() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));
    let source = existing_source();

    let config = SessionConfig::server(Protocol::Udp, "9000", source.path().to_path_buf())
        .with_local_ip(local_ip());
    let state = service.start_server(config).await.unwrap();

    assert_eq!(
        state,
        SessionState::Streaming {
            protocol: Protocol::Udp,
            target: StreamTarget::new("192.168.1.50", 9000),
        }
    );
    assert_eq!(service.state().await, state);

    let log = log.lock().unwrap();
    assert_eq!(log.launched.len(), 1);
    assert!(log.launched[0]
        .args()
        .iter()
        .any(|arg| arg.contains("dst=192.168.1.50:9000")));
}

#[tokio::test]
async fn test_client_start_transitions_to_connected() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));

    let config = SessionConfig::client(Protocol::Rtp, "5000", "239.255.1.1");
    let state = service.start_client(config).await.unwrap();

    assert_eq!(
        state,
        SessionState::ConnectedClient {
            target: StreamTarget::new("239.255.1.1", 5000),
        }
    );
    assert_eq!(
        log.lock().unwrap().launched[0].args(),
        ["rtp://@239.255.1.1:5000"]
    );
}

#[tokio::test]
async fn test_second_start_does_not_launch_twice() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));
    let source = existing_source();

    let config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf());
    service.start_server(config.clone()).await.unwrap();

    let second = service.start_server(config).await;
    assert!(matches!(second, Err(SessionError::AlreadyActive)));
    assert_eq!(log.lock().unwrap().launched.len(), 1);
}

#[tokio::test]
async fn test_role_switch_requires_stop() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));
    let source = existing_source();

    let server_config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf());
    service.start_server(server_config).await.unwrap();

    // No direct Streaming -> ConnectedClient transition.
    let client_config = SessionConfig::client(Protocol::Http, "8000", "192.168.1.10");
    let result = service.start_client(client_config.clone()).await;
    assert!(matches!(result, Err(SessionError::AlreadyActive)));

    service.stop().await;
    assert!(service.start_client(client_config).await.is_ok());
}

#[tokio::test]
async fn test_build_failure_leaves_state_offline() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));
    let source = existing_source();

    // Missing source: build must fail without ever launching.
    let config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf())
        .without_source();
    let result = service.start_server(config).await;

    assert!(matches!(
        result,
        Err(SessionError::Build(stream_hub::BuildError::MissingSource))
    ));
    assert_eq!(service.state().await, SessionState::Offline);
    assert!(log.lock().unwrap().launched.is_empty());
}

#[tokio::test]
async fn test_launch_failure_leaves_state_offline() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::failing_launch(log.clone()));
    let source = existing_source();

    let config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf());
    let result = service.start_server(config).await;

    assert!(matches!(result, Err(SessionError::Launch(_))));
    assert_eq!(service.state().await, SessionState::Offline);
}

#[tokio::test]
async fn test_wrong_role_config_is_rejected() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));

    let client_config = SessionConfig::client(Protocol::Http, "8000", "192.168.1.10");
    let result = service.start_server(client_config).await;

    assert!(matches!(result, Err(SessionError::RoleMismatch)));
    assert!(log.lock().unwrap().launched.is_empty());
}

#[tokio::test]
async fn test_stop_from_offline_is_noop() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log.clone()));

    let state = service.stop().await;
    assert_eq!(state, SessionState::Offline);
    assert_eq!(log.lock().unwrap().terminations, 0);
}

#[tokio::test]
async fn test_stop_resets_state_even_when_terminate_fails() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::failing_terminate(log.clone()));
    let source = existing_source();

    let config = SessionConfig::server(Protocol::Udp, "9000", source.path().to_path_buf());
    service.start_server(config).await.unwrap();

    let state = service.stop().await;
    assert_eq!(state, SessionState::Offline);
    assert_eq!(service.state().await, SessionState::Offline);
    assert_eq!(log.lock().unwrap().terminations, 1);
}

#[tokio::test]
async fn test_session_is_tracked_while_active() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = service_with(MockPlayer::new(log));
    let source = existing_source();

    assert!(service.current_session().await.is_none());

    let config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf())
        .with_local_ip(local_ip());
    service.start_server(config).await.unwrap();

    let session = service.current_session().await.unwrap();
    assert_eq!(session.target().to_string(), "192.168.1.50:8000");

    service.stop().await;
    assert!(service.current_session().await.is_none());
}

#[tokio::test]
async fn test_concurrent_starts_launch_exactly_once() {
    let log = Arc::new(Mutex::new(PlayerLog::default()));
    let service = Arc::new(service_with(MockPlayer::new(log.clone())));
    let source = existing_source();

    let config = SessionConfig::server(Protocol::Http, "8000", source.path().to_path_buf());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let config = config.clone();
        handles.push(tokio::spawn(
            async move { service.start_server(config).await },
        ));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(log.lock().unwrap().launched.len(), 1);
}
