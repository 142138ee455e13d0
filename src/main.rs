//! # wsurls Main Entry Point
//!
//! Loads a profile's server list, applies the requested edits through the
//! headless list view and prints the resulting list as JSON.

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use wsurls::cmd_args::CommandLineArgs;
use wsurls::config;
use wsurls::{IniSettingsStore, SettingsController};

fn init_tracing_subscriber() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(format!(
            "{}_LOG_LEVEL",
            env!("CARGO_PKG_NAME").to_uppercase()
        ))
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

fn main() -> Result<()> {
    init_tracing_subscriber();

    let args = CommandLineArgs::parse();
    let settings_path = args
        .settings_path()
        .map(str::to_string)
        .unwrap_or_else(config::get_settings_path);

    tracing::debug!(
        "Loading profile '{}' from '{}'",
        args.profile(),
        settings_path
    );
    let settings = IniSettingsStore::new(settings_path).load_or_default(args.profile())?;

    let controller = SettingsController::new(args.capacity());
    controller.load(&settings)?;

    for edit in args.edits() {
        controller.edit_row(edit.position, &edit.url)?;
    }
    for url in args.additions() {
        controller.add_url(url)?;
    }
    for &position in args.removals() {
        controller.delete_row(position)?;
    }

    println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    Ok(())
}
