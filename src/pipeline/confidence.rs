use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::model::round2;

/// Dispersion-based confidence: `1 - stddev / mean`. Not a probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidence {
    pub value: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl Confidence {
    /// Display value, two decimals.
    pub fn rounded(&self) -> f64 {
        round2(self.value)
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1). A single value, or a run of equal
/// values, has exactly zero spread.
pub fn sample_stddev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    if values.iter().all(|v| *v == values[0]) {
        return Some(0.0);
    }
    let ss = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

pub fn confidence(scores: &[f64]) -> Result<Confidence> {
    let mean = mean(scores).ok_or(Error::DivisionByZero("confidence of an empty score set"))?;
    if mean == 0.0 {
        return Err(Error::DivisionByZero("confidence with zero mean score"));
    }
    let stddev = sample_stddev(scores).unwrap_or(0.0);
    Ok(Confidence {
        value: 1.0 - stddev / mean,
        mean,
        stddev,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/confidence.rs"]
mod tests;
