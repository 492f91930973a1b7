//! GrowthWave edge gateway binary

use growthwave_gateway::{routes::create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("growthwave_gateway=info,tower_http=info")
            }),
        )
        .init();

    let config = Config::from_env();
    let bind_address = config.bind_address.clone();
    let site_root = config.site_root.clone();

    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(
        address = %bind_address,
        site_root = %site_root.display(),
        "Gateway listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
