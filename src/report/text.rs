use std::fmt::Write;

use crate::history::WeightHistory;
use crate::pipeline::StageForecast;
use crate::report::{attribute_columns, format_2};

pub fn render_forecast(forecast: &StageForecast) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", forecast.stage);
    let width = forecast
        .ranking
        .iter()
        .map(|r| r.athlete.len())
        .max()
        .unwrap_or(0);
    for (i, r) in forecast.ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<width$}  {:>6}",
            i + 1,
            r.athlete,
            format_2(r.score),
        );
    }
    let confidence = forecast
        .confidence
        .map(|c| format_2(c.rounded()))
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(out, "  confidence: {confidence}");
    out
}

pub fn render_forecasts(forecasts: &[StageForecast]) -> String {
    let mut out = String::new();
    for (i, f) in forecasts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_forecast(f));
    }
    out
}

pub fn render_history(history: &WeightHistory) -> String {
    if history.is_empty() {
        return "no recorded weights\n".to_string();
    }
    let columns = attribute_columns(history.values());
    let width = history.keys().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:<width$}", "stage");
    for c in &columns {
        let _ = write!(out, "  {:>11}", c.name());
    }
    out.push('\n');
    for (stage, weights) in history {
        let _ = write!(out, "{:<width$}", stage);
        for c in &columns {
            let cell = weights.get(*c).map(format_2).unwrap_or_else(|| "-".to_string());
            let _ = write!(out, "  {:>11}", cell);
        }
        out.push('\n');
    }
    out
}
