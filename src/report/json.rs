use serde::Serialize;

use crate::error::Result;
use crate::history::WeightHistory;
use crate::pipeline::StageForecast;

#[derive(Debug, Serialize)]
struct ForecastReport<'a> {
    tool: &'static str,
    version: &'static str,
    stages: &'a [StageForecast],
}

pub fn render_forecasts(forecasts: &[StageForecast]) -> Result<String> {
    to_json(&ForecastReport {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        stages: forecasts,
    })
}

pub fn render_history(history: &WeightHistory) -> Result<String> {
    to_json(history)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
