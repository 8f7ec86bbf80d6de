use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stream-hub",
    version = "0.1.0",
    about = "Stream a local media file over the LAN through an external VLC player"
)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the VLC executable (overrides the persisted setting)
    #[arg(long, env = "PLAYER_PATH", global = true)]
    pub player_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Publish a local media file as a network stream
    Serve {
        /// Path to the source media file
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Transport protocol: http, udp or rtp
        #[arg(long, default_value = "http")]
        protocol: String,

        /// Port to publish on
        #[arg(long, default_value = "8000")]
        port: String,

        /// Stop with the PID-scoped terminator instead of killing every
        /// player instance by name
        #[arg(long)]
        kill_by_handle: bool,
    },

    /// Connect to a remote stream and play it
    Play {
        /// Address of the remote server (or the multicast group for RTP)
        #[arg(long)]
        server: String,

        /// Transport protocol: http, udp or rtp
        #[arg(long, default_value = "http")]
        protocol: String,

        /// Port the server publishes on
        #[arg(long, default_value = "8000")]
        port: String,

        /// Stop with the PID-scoped terminator instead of killing every
        /// player instance by name
        #[arg(long)]
        kill_by_handle: bool,
    },

    /// Persist the player executable path for future runs
    SetPlayer {
        /// Path to the VLC executable
        path: PathBuf,
    },
}
