pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, RateProvider};
use crate::providers::ExchangeRateApiSource;

/// Loads configuration, wires the provider stack and runs one conversion.
pub async fn run_convert(
    amount: f64,
    from: &str,
    to: &str,
    config_path: Option<&str>,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = ExchangeRateApiSource::new(
        &config.service.base_url,
        Duration::from_secs(config.service.timeout_secs),
    )?;
    let cache = store::open_default(&config);
    let provider = RateProvider::new(Arc::new(source), cache, config.provider_settings());

    let request = ConversionRequest {
        base: from.to_uppercase(),
        target: to.to_uppercase(),
        amount,
    };

    cli::convert::run(&provider, &request).await
}

/// Creates the default configuration file.
pub fn run_setup() -> Result<()> {
    cli::setup::setup()
}
