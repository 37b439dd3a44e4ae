use anyhow::Context;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use todo_rest::{SharedData, app_env, app_router, logging, persistence};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = logging::init_env_filter();
    let otel_exporters = match (
        env::var(app_env::OTEL_SPAN_EXPORT_URL),
        env::var(app_env::OTEL_METRIC_EXPORT_URL),
    ) {
        (Ok(span_url), Ok(metric_url)) => Some(logging::init_exporters(&span_url, &metric_url)),
        _ => None,
    };
    logging::setup_logging_and_tracing(env_filter, otel_exporters);

    let shared_data = Arc::new(SharedData {
        todos: persistence::TodoStore::new(),
    });
    let router = logging::attach_tracing_http(app_router(shared_data));

    let port: u16 = match env::var(app_env::SERVER_PORT) {
        Ok(raw_port) => raw_port
            .parse()
            .with_context(|| format!("{} is not a valid port number", app_env::SERVER_PORT))?,
        Err(_) => 8080,
    };
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .context("binding the server port")?;

    info!("Starting server on port {port}.");
    axum::serve(listener, router)
        .await
        .context("running the HTTP server")?;

    Ok(())
}
