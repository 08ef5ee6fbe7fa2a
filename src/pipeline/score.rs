use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Athlete, AttributeTable, StageProfile, WeightVector};
use crate::pipeline::confidence::{Confidence, confidence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub athlete: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageForecast {
    pub stage: String,
    pub ranking: Vec<RankedScore>,
    /// `None` when the scores have no usable mean.
    pub confidence: Option<Confidence>,
}

impl StageForecast {
    pub fn leader(&self) -> Option<&RankedScore> {
        self.ranking.first()
    }
}

/// Weighted sum of an athlete's ratings.
///
/// Penalty attributes contribute `-rating * |weight|`; an athlete without a
/// penalty rating simply carries no penalty. A missing skill rating is a
/// `SchemaMismatch`.
pub fn score(athlete: &Athlete, weights: &WeightVector) -> Result<f64> {
    let mut total = 0.0;
    for (attribute, weight) in weights.iter() {
        match athlete.rating(attribute) {
            Some(rating) if attribute.is_penalty() => total -= rating * weight.abs(),
            Some(rating) => total += rating * weight,
            None if attribute.is_penalty() => {}
            None => {
                return Err(Error::SchemaMismatch {
                    athlete: athlete.name.clone(),
                    attribute,
                });
            }
        }
    }
    Ok(total)
}

/// Scores every athlete, best first. Ties keep roster order.
pub fn rank_scores(table: &AttributeTable, weights: &WeightVector) -> Result<Vec<RankedScore>> {
    let mut ranking = table
        .athletes()
        .iter()
        .map(|athlete| {
            Ok(RankedScore {
                athlete: athlete.name.clone(),
                score: score(athlete, weights)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(ranking)
}

pub fn forecast_stage(table: &AttributeTable, profile: &StageProfile) -> Result<StageForecast> {
    table.check_weights(&profile.weights)?;
    let ranking = rank_scores(table, &profile.weights)?;
    let scores = ranking.iter().map(|r| r.score).collect::<Vec<_>>();
    let confidence = match confidence(&scores) {
        Ok(c) => Some(c),
        Err(err @ Error::DivisionByZero(_)) => {
            crate::warn!(stage = %profile.id, "{err}; ranking without confidence");
            None
        }
        Err(err) => return Err(err),
    };
    Ok(StageForecast {
        stage: profile.id.clone(),
        ranking,
        confidence,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
