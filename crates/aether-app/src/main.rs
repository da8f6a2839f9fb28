mod app_state;
mod cli;
mod crash_report;
mod join;

use aether_common::{AetherError, ConfigError};
use aether_config::AetherConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = crash_report::write_crash_report(info);

        eprintln!("\n--- Aether crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` wins, then `RUST_LOG`, then the config's level.
fn env_filter(cli_level: Option<&str>, config: Option<&AetherConfig>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = config
            .map(|c| c.logging.level.directive())
            .unwrap_or("aether=info");
        EnvFilter::new(directive)
    })
}

fn run_window(config: AetherConfig) -> Result<(), AetherError> {
    let event_loop = EventLoop::new().map_err(|e| AetherError::Other(e.to_string()))?;
    let mut app = app_state::AetherApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| AetherError::Other(format!("event loop error: {e}")))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter;
    // failures are reported once the subscriber exists.
    let loaded: Result<AetherConfig, ConfigError> = aether_config::load_config(args.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), loaded.as_ref().ok()))
        .init();

    tracing::info!("Aether v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        AetherConfig::default()
    });
    tracing::info!(
        "Config loaded (stars: {}, delivery: {:?})",
        config.stars.count,
        config.waitlist.delivery
    );

    if args.dump_config {
        println!("{}", aether_config::config_to_json(&config));
        return;
    }

    let result = match args.command {
        Some(cli::Command::Join(ref join_args)) => join::run(&config, join_args),
        None => run_window(config),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_overrides_config() {
        let config = AetherConfig::default();
        let filter = env_filter(Some("aether=trace"), Some(&config));
        assert!(filter.to_string().contains("aether=trace"));
    }
}
