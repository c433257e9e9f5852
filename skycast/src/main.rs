//! SkyCast - terminal weather dashboard
//!
//! ```sh
//! # Start on the current location (falls back to Washington, DC without --home-*)
//! OPENWEATHER_API_KEY=... skycast --home-lat 48.85 --home-lon 2.35
//!
//! # Open a specific place, Portuguese labels, logs to a file
//! skycast --route '#/weather?lat=-23.55&lon=-46.63' --locale pt-br --log-file skycast.log
//! ```

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use skycast_core::config::DEFAULT_BASE_URL;
use skycast_core::{Gateway, GatewayConfig, Locale, Locator};
use tracing::info;
use tui_dispatch::{EffectRuntime, EffectStoreWithMiddleware};

use skycast::action::Action;
use skycast::app::{EffectHandler, SkycastUi};
use skycast::logging::{self, ActionTrace};
use skycast::reducer::reducer;
use skycast::state::{AppState, LOADING_ANIM_TICK_MS};

/// Current conditions, air quality and a five-day forecast in the terminal
#[derive(Parser, Debug)]
#[command(name = "skycast", version)]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Initial navigation, e.g. '#/weather?lat=51.5&lon=-0.12'
    #[arg(long, default_value = "")]
    route: String,

    /// Latitude used as "current location"
    #[arg(long, requires = "home_lon", allow_negative_numbers = true)]
    home_lat: Option<f64>,

    /// Longitude used as "current location"
    #[arg(long, requires = "home_lat", allow_negative_numbers = true)]
    home_lon: Option<f64>,

    /// Label language: en or pt-br
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Per-request timeout
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Write logs here (RUST_LOG filters, default skycast=info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = GatewayConfig::new(args.api_key)
        .with_base_url(args.base_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let gateway = Gateway::new(config).context("cannot build HTTP client")?;
    let locator = Locator::from_parts(args.home_lat, args.home_lon);
    info!(locale = %args.locale, ?locator, "starting");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let handler = EffectHandler::new(gateway, locator, args.locale);
    let result = run_app(&mut terminal, handler, args.locale, args.route).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("terminal error")
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    handler: EffectHandler<Gateway>,
    locale: Locale,
    route: String,
) -> io::Result<()> {
    let store = EffectStoreWithMiddleware::new(AppState::new(locale), reducer, ActionTrace);
    let mut runtime = EffectRuntime::from_store(store);

    // Spinner animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    runtime.enqueue(Action::RouteLoad(route));

    let ui = RefCell::new(SkycastUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state, _render_ctx| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handler.handle(effect, ctx),
        )
        .await
}
