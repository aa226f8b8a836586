//! Weather screen binary
//!
//! ```sh
//! OPENWEATHER_API_KEY=... weather-screen
//! weather-screen --units imperial --log-file /tmp/weather.log --log-level debug
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_api::{ApiConfig, OpenWeatherClient, UnitSystem, API_KEY_ENV, DEFAULT_BASE_URL};
use weather_screen::state::default_location;
use weather_screen::{AppState, Runtime, Screen};

/// Current weather and daily forecast with location search
#[derive(Parser, Debug)]
#[command(name = "weather-screen")]
#[command(about = "Terminal weather screen backed by OpenWeather")]
struct Args {
    /// OpenWeather API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, default_value = "")]
    api_key: String,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Unit system to start with (metric or imperial)
    #[arg(long, short, default_value = "metric")]
    units: UnitSystem,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "weather_screen=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let Some(path) = args.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)?;

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = ApiConfig::new(args.api_key.as_str()).with_base_url(args.base_url.as_str());
    info!(?config, units = %args.units, "Starting weather screen");
    let client = OpenWeatherClient::new(config);

    let mut screen = Screen::new(AppState::new(default_location(), args.units), client);
    screen.mount();
    let mut runtime = Runtime::new(screen);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.run(&mut terminal).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Weather screen closed");
    result
}
