use std::{
    fs::OpenOptions,
    io,
    net::SocketAddr,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use bike_dashboard::{
    AppState, DEFAULT_FIRST_YEAR, Dataset, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for the bike rental dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The directory containing the hourly and daily rental CSV files.
    #[arg(long)]
    data_dir: PathBuf,

    /// The name of the hourly rentals CSV file in `data_dir`.
    #[arg(long, default_value = "hour.csv")]
    hourly_file: String,

    /// The name of the daily rentals CSV file in `data_dir`.
    #[arg(long, default_value = "day.csv")]
    daily_file: String,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The calendar year of the first year in the dataset.
    #[arg(long, default_value_t = DEFAULT_FIRST_YEAR)]
    first_year: u16,

    /// The directory to serve static files such as ECharts and CSS from.
    #[arg(long, default_value = "static/")]
    static_dir: PathBuf,

    /// File path to write the debug log to.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!(
            "Could not open the log file {}: {error}",
            args.log_path.display()
        );
        return ExitCode::FAILURE;
    }

    let hourly_path = args.data_dir.join(&args.hourly_file);
    let daily_path = args.data_dir.join(&args.daily_file);
    let dataset = match Dataset::load(&hourly_path, &daily_path) {
        Ok(dataset) => dataset,
        Err(error) => {
            tracing::error!("Could not load the rental dataset: {error}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(dataset, args.first_year, args.static_dir);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &Path) -> io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged by the handlers, so 5xx responses are not logged again here.
        .on_failure(());

    router.layer(tracing_layer)
}
