use anyhow::{Context, Result};
use clap::Parser;
use screenhop::app::App;
use screenhop::cli::Cli;
use screenhop::config::Config;
use screenhop::styles::{init_theme, ThemeType};
use screenhop::tui::Tui;
use screenhop::utils::{get_config_path, get_log_dir};
use tracing::{info, warn};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "screenhop.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let mut config = Config::load_or_create(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    if let Some(start) = cli.start {
        config.start_route = start;
    }
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme_type = if no_color {
        ThemeType::NoColor
    } else {
        config.theme.parse().unwrap_or_default()
    };
    init_theme(theme_type);

    for (key, err) in config.keymap.invalid_overrides() {
        warn!("Ignoring keymap override '{}': {}", key, err);
    }

    info!(
        "Starting at {} with {:?} theme and {} keymap",
        config.start_route,
        theme_type,
        config.keymap.preset.name()
    );

    let app = App::new(config, config_path)?;
    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);

    drop(tui);
    drop(guard);

    result.map(|_| ())
}
