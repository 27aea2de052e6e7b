// PortalNav - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Session store selection and shell state construction
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use portalnav::app;

pub use portalnav::core;
pub use portalnav::platform;
pub use portalnav::ui;
pub use portalnav::util;

use app::session::{FileSessionStore, MemorySessionStore, SessionStore};
use app::state::SessionInputs;
use clap::Parser;
use std::path::PathBuf;

/// PortalNav - navigation shell for the object-storage admin console.
///
/// Shows the side menu filtered by the session's allowed pages, the logs
/// page, and handles logout against the console backend.
#[derive(Parser, Debug)]
#[command(name = "PortalNav", version, about)]
struct Cli {
    /// Console backend base URL (overrides [server] base_url).
    #[arg(short = 's', long = "server")]
    server: Option<String>,

    /// Allowed page route; repeat for several (replaces [session] pages).
    #[arg(short = 'p', long = "page")]
    pages: Vec<String>,

    /// Enabled feature name; repeat for several (replaces [session] features).
    #[arg(short = 'F', long = "feature")]
    features: Vec<String>,

    /// Run in operator mode.
    #[arg(long = "operator")]
    operator: bool,

    /// Alternative directory containing config.toml.
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Keep the session in memory only (nothing written to disk).
    #[arg(long = "ephemeral")]
    ephemeral: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level and file apply from the first event.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PortalNav starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // CLI overrides config.
    let inputs = SessionInputs {
        pages: if cli.pages.is_empty() {
            config.pages.clone()
        } else {
            cli.pages.clone()
        },
        features: if cli.features.is_empty() {
            config.features.clone()
        } else {
            Some(cli.features.clone())
        },
        operator_mode: cli.operator || config.operator_mode,
        distributed_setup: config.distributed_setup,
    };
    let server_url = cli
        .server
        .clone()
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|| config.server_url.clone());

    let session: Box<dyn SessionStore> = if cli.ephemeral {
        Box::new(MemorySessionStore::new())
    } else {
        let path = app::session::session_path(&platform_paths.data_dir);
        Box::new(FileSessionStore::open(path))
    };

    let mut state = app::state::AppState::new(inputs, session, server_url, cli.debug);
    state.warnings.extend(config_warnings);

    tracing::info!(server = %state.server_url, "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let (dark_mode, font_size) = (config.dark_mode, config.font_size);
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::PortalNavApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PortalNav GUI: {e}");
        std::process::exit(1);
    }
}
