use tidy_core::TidyConfig;
use tidy_server::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tidy_server=info".parse()?),
        )
        .init();

    let config = TidyConfig::default();
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = tidy_server::app_with_state(AppState::with_config(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
