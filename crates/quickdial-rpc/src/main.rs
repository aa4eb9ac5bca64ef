//! Quickdial RPC Server - JSON-RPC backend for the presentation shell.
//!
//! This binary provides a JSON-RPC 2.0 server that wraps the
//! quickdial-shortcuts library for communication with the presentation
//! shell. It is also the process shortcut activations re-invoke: a launch
//! carrying `--shortcut-id` either becomes the primary instance or forwards
//! its signal to one that is already running.

mod forward;
mod handler;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use quickdial_shortcuts::config::{NetworkConfig, ShortcutConfig};
use quickdial_shortcuts::{
    instance, platform, DesktopShortcutService, LaunchSignal, QuickdialApi, ShortcutService,
};
use server::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "quickdial-rpc")]
#[command(about = "JSON-RPC server for Quickdial")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = NetworkConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Instance-record directory (defaults to the per-user config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Root for shortcut surfaces; when set, entries are written under
    /// `<data-root>/applications` and `<data-root>/Desktop` instead of the
    /// real user directories
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Shortcut identifier this process was activated with
    #[arg(long)]
    shortcut_id: Option<String>,

    /// Additional launch extras as key=value pairs
    #[arg(long = "extra", value_name = "KEY=VALUE")]
    extras: Vec<String>,
}

impl Args {
    /// Assemble the inbound launch signal from the command line.
    fn launch_signal(&self) -> Option<LaunchSignal> {
        if self.shortcut_id.is_none() && self.extras.is_empty() {
            return None;
        }

        let mut signal = LaunchSignal::from_pairs(self.extras.iter());
        if let Some(ref id) = self.shortcut_id {
            signal = signal.with_extra(ShortcutConfig::SHORTCUT_ID_KEY, id);
        }
        Some(signal)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Quickdial RPC Server");

    let signal = args.launch_signal();

    // Resolve the instance-record directory
    let config_dir = match args.config_dir {
        Some(ref dir) => dir.clone(),
        None => platform::app_config_dir()?,
    };

    // A live primary gets the launch signal instead of a second server
    if let Some(primary) = instance::find_live(&config_dir) {
        info!(
            "Primary instance running (pid {}, port {}), forwarding launch signal",
            primary.pid, primary.port
        );
        match forward::deliver_to_primary(&primary, signal.as_ref()).await {
            Ok(routed) => {
                info!("Launch signal delivered (routed: {:?})", routed);
                return Ok(());
            }
            Err(e) => {
                warn!("Forwarding failed ({}), taking over as primary", e);
                instance::clear_record(&config_dir);
            }
        }
    }

    // Build the shortcut service for this host
    let exec = std::env::current_exe().context("resolve current executable")?;
    let service: Arc<dyn ShortcutService> = match args.data_root {
        Some(ref root) => Arc::new(DesktopShortcutService::with_dirs(
            root.join("applications"),
            Some(root.join("Desktop")),
            &exec,
        )),
        None => DesktopShortcutService::detect(exec),
    };

    let api = QuickdialApi::with_service(service);

    // Route the signal this process was activated with
    api.handle_launch(signal.as_ref());

    let icon_theme_dir = args
        .data_root
        .as_ref()
        .map(|root| root.join("icons/hicolor/scalable/apps"));

    let state = Arc::new(AppState {
        api,
        icon_theme_dir,
        shutdown: Notify::new(),
    });

    // Start the server
    let addr = server::start_server(state.clone(), &args.host, args.port).await?;

    // Record this process as the primary instance
    let record = instance::InstanceRecord::for_current_process(&args.host, addr.port());
    if let Err(e) = instance::write_record(&config_dir, &record) {
        warn!("Could not write instance record: {}", e);
    }

    // Print port for the shell to read (intentional stdout for IPC)
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    // Wait for a shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, exiting");
        }
        _ = state.shutdown.notified() => {
            info!("Shutdown requested over RPC, exiting");
        }
    }

    instance::clear_record(&config_dir);

    Ok(())
}
