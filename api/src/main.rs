use api::{app, state::AppState};
use std::net::SocketAddr;
use tracing_appender::rolling;
use util::config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let app_state = AppState::from_config();
    let settings = app_state.settings();
    tracing::info!(
        env = %config::env(),
        grading_delay_ms = settings.grading_delay.as_millis() as u64,
        grading_timeout_ms = settings.grading_timeout.as_millis() as u64,
        toast_ttl_ms = config::toast_ttl_ms(),
        "Configuration loaded"
    );

    let app = app(app_state);

    let listener = tokio::net::TcpListener::bind((config::host(), config::port())).await?;
    let addr = listener.local_addr()?;

    println!("Starting {} on http://{}", config::project_name(), addr);
    tracing::info!(%addr, "Listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
    })
    .await
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
