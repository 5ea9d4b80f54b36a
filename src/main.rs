use skyglance::{AppConfig, VERSION, telemetry, web};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.logging)?;

    info!(
        version = VERSION,
        address = %config.bind_address(),
        static_dir = %config.server.static_dir.display(),
        weather_api = %config.weather.base_url,
        timeout_seconds = config.weather.timeout_seconds,
        "Skyglance starting"
    );

    web::run(config).await
}
