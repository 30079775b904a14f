//! Entry point for the TrueLogiX landing page.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use truelogix_core::{SessionStore, CLIENT_NAVIGATION_KEY};
use truelogix_logging::{
    FileConfig, LandingSubscriberBuilder, LogConfig, RotationStrategy, VisitorContextGuard,
};

use truelogix_landing::components::App;
use truelogix_landing::session::{session_store, set_initial_path};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "truelogix-landing")]
#[command(about = "TrueLogiX marketing landing page")]
struct Args {
    /// Path the visitor lands on, as a hard load
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Arrive as if through an in-app link (the intro is skipped)
    #[arg(long)]
    client_navigating: bool,

    /// Write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Read logging configuration from a JSON file
    #[arg(long)]
    log_config: Option<PathBuf>,

    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pretty: bool,

    /// Development logging: debug level with pretty console output
    #[arg(long, conflicts_with = "log_config")]
    dev: bool,
}

fn log_config(args: &Args) -> LogConfig {
    let mut config = match &args.log_config {
        Some(path) => LogConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring log config {}: {}", path.display(), e);
            LogConfig::default()
        }),
        None if args.dev => LogConfig::development(),
        None => LogConfig::default(),
    };

    if args.pretty {
        config.console.pretty = true;
        config.console.ansi = true;
    }

    if let Some(dir) = &args.log_dir {
        config.file = Some(FileConfig {
            directory: dir.clone(),
            prefix: "landing".to_string(),
            rotation: RotationStrategy::Daily,
        });
    }

    config
}

fn main() {
    let args = Args::parse();

    let _log_guard = LandingSubscriberBuilder::new()
        .with_config(log_config(&args))
        .init();

    let _visitor = VisitorContextGuard::new(args.path.clone());
    let _span = VisitorContextGuard::span().entered();

    if args.client_navigating {
        session_store().set(CLIENT_NAVIGATION_KEY, "true");
    }
    set_initial_path(args.path.clone());

    tracing::info!(path = %args.path, client_navigating = args.client_navigating, "Starting TrueLogiX landing page");

    // Read optional window size from env
    let win_w = std::env::var("TRUELOGIX_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("TRUELOGIX_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let size = match (win_w, win_h) {
        (Some(w), Some(h)) => LogicalSize::new(w, h),
        _ => LogicalSize::new(1280.0, 860.0),
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("TrueLogiX")
                        .with_inner_size(size),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Space+Grotesk:wght@500;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}
