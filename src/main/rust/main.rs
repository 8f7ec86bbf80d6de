use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use stream_hub::{
    has_media_extension, local_address, Command, Config, HandleTerminator, PlayerSettings,
    Protocol, Role, SessionConfig, SessionService, VlcCommandBuilder, VlcSupervisor,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if config.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    info!("Starting stream-hub v{}", env!("CARGO_PKG_VERSION"));

    let player_path = resolve_player_path(&config);

    match config.command {
        Command::SetPlayer { path } => {
            let mut settings = PlayerSettings::load();
            settings.player_path = Some(path.clone());
            settings.store()?;
            info!("Player path saved: {}", path.display());
            Ok(())
        }

        Command::Serve {
            input,
            protocol,
            port,
            kill_by_handle,
        } => {
            let protocol: Protocol = protocol.parse()?;
            if !has_media_extension(&input) {
                // Advisory only; the builder's existence check decides.
                warn!(
                    "{} does not look like a media container file",
                    input.display()
                );
            }

            let local_ip = local_address();
            info!("Local address: {local_ip}");

            let session_config =
                SessionConfig::server(protocol, port, input).with_local_ip(local_ip);
            run_session(player_path, session_config, kill_by_handle).await
        }

        Command::Play {
            server,
            protocol,
            port,
            kill_by_handle,
        } => {
            let protocol: Protocol = protocol.parse()?;
            let session_config = SessionConfig::client(protocol, port, server);
            run_session(player_path, session_config, kill_by_handle).await
        }
    }
}

fn resolve_player_path(config: &Config) -> PathBuf {
    match &config.player_path {
        Some(path) => path.clone(),
        None => PlayerSettings::load().resolve_player_path(),
    }
}

async fn run_session(
    player_path: PathBuf,
    session_config: SessionConfig,
    kill_by_handle: bool,
) -> Result<()> {
    let builder = Box::new(VlcCommandBuilder::new(player_path));
    let player = if kill_by_handle {
        Box::new(VlcSupervisor::new(Box::new(HandleTerminator)))
    } else {
        Box::new(VlcSupervisor::with_name_termination())
    };
    let service = SessionService::new(builder, player);

    let role = session_config.role();
    let state = match role {
        Role::Server => service.start_server(session_config).await?,
        Role::Client => service.start_client(session_config).await?,
    };

    info!("-------------------------------------------------------");
    info!("   {state}");
    info!("   Press Ctrl+C to stop");
    info!("-------------------------------------------------------");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received (Ctrl+C)");

    // Stop unconditionally on the way out so the player never outlives us
    // untracked.
    service.stop().await;
    info!("Session stopped");
    Ok(())
}
