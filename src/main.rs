use anyhow::Result;
use forecast_vibe::{AppState, NationalWeatherService, ServiceConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    telemetry::init_logging(&config.logging)?;

    tracing::info!(
        "forecast-vibe {} using {}",
        forecast_vibe::VERSION,
        config.weather.base_url
    );

    let service = NationalWeatherService::new(&config.weather)?;
    web::run(&config, AppState::new(service)).await
}
