#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use paktech_core::{ContactTransport, SiteConfig};

/// Configuration and contact transport, set once from the command line
pub struct SiteRuntime {
    pub config: SiteConfig,
    pub transport: Arc<dyn ContactTransport>,
}

static RUNTIME: OnceLock<SiteRuntime> = OnceLock::new();

/// Get the runtime assembled in `main`.
pub fn get_runtime() -> Option<&'static SiteRuntime> {
    RUNTIME.get()
}

/// PakTechnology - agency website
#[derive(Parser, Debug)]
#[command(name = "paktech-site")]
#[command(about = "PakTechnology agency website")]
struct Args {
    /// TOML config file ([site] and [contact] sections)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Contact form endpoint; submissions are simulated when absent
    #[arg(long)]
    contact_endpoint: Option<String>,

    /// Start-up locale (en, ur)
    #[arg(short, long)]
    locale: Option<String>,

    /// Delay of the simulated contact submission in milliseconds
    #[arg(long)]
    simulated_delay_ms: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Debug logging for the site crates
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> anyhow::Result<SiteConfig> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    // Command line wins over the file
    if let Some(endpoint) = &args.contact_endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(locale) = &args.locale {
        config = config.with_locale(locale)?;
    }
    if let Some(delay) = args.simulated_delay_ms {
        config = config.with_simulated_delay_ms(delay);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    paktech_core::logging::init(args.verbose);

    let config = build_config(&args)?;
    let transport = paktech_core::contact::build_transport(&config.contact)?;

    tracing::info!(
        "Starting '{}' (locale {}, contact via {})",
        config.site.title,
        config.site.locale,
        transport.describe()
    );

    let title = config.site.title.clone();
    let _ = RUNTIME.set(SiteRuntime { config, transport });

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
