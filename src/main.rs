use anyhow::Result;
use recruiter_review::{start_web_server, EnvironmentConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("recruiter_review=info,rocket::server=off")),
        )
        .init();

    let port = std::env::var("ROCKET_PORT")
        .map_err(|_| anyhow::anyhow!("ROCKET_PORT environment variable not set"))?
        .parse::<u16>()
        .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;

    let config = EnvironmentConfig::load()?;

    info!("Starting Recruiter Review web API");
    info!("Review API: {}", config.review_api_url);
    info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config, port).await
}
