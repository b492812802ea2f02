use anyhow::Result;
use tracing::info;

use super::ui;
use crate::core::convert::convert;
use crate::core::{ConversionRequest, RateProvider};

/// Runs one conversion end to end and prints the result line.
pub async fn run(provider: &RateProvider, request: &ConversionRequest) -> Result<()> {
    info!(
        "Converting {} {} to {}",
        request.amount, request.base, request.target
    );

    let spinner = ui::new_spinner(&format!("Fetching rates for {}...", request.base));
    let result = provider.get_rates(&request.base).await;
    spinner.finish_and_clear();

    let snapshot = result?;
    let converted = convert(&snapshot, &request.target, request.amount)?;

    println!("{}", format_result_line(request, converted));
    Ok(())
}

/// One line: `<amount> <source> to <target>: <converted>`, two decimals.
fn format_result_line(request: &ConversionRequest, converted: f64) -> String {
    format!(
        "{} {} to {}: {}",
        request.amount,
        request.base,
        request.target,
        ui::style_value(&format!("{converted:.2}"))
    )
}
