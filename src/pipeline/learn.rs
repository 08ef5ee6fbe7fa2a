use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{Attribute, AttributeTable, RankObservation, WeightVector, round2};

/// Derives stage weights from observed finishing ranks.
///
/// Each ranked athlete credits every skill attribute with its share of the
/// athlete's total skill rating, scaled by `1 / rank`. The accumulated credit
/// is normalized to sum to 1 and rounded to two decimals. Penalty attributes
/// never appear in the result.
pub fn learn_weights(table: &AttributeTable, observation: &RankObservation) -> Result<WeightVector> {
    let ranked = observation
        .valid()
        .filter_map(|(name, rank)| table.get(name).map(|athlete| (athlete, rank)))
        .collect::<Vec<_>>();
    if ranked.is_empty() {
        return Err(Error::EmptyObservation);
    }

    let mut credit: BTreeMap<Attribute, f64> =
        table.schema().iter().map(|&a| (a, 0.0)).collect();

    for (athlete, rank) in ranked {
        let total = athlete.skill_ratings().map(|(_, v)| v).sum::<f64>();
        if total <= 0.0 {
            crate::warn!(athlete = %athlete.name, "skipping athlete with no positive skill ratings");
            continue;
        }
        let inv_rank = 1.0 / f64::from(rank);
        for (attribute, value) in athlete.skill_ratings() {
            *credit.entry(attribute).or_insert(0.0) += value / total * inv_rank;
        }
    }

    let sum = credit.values().sum::<f64>();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(Error::DegenerateWeights { sum });
    }

    Ok(WeightVector::from_map(
        credit
            .into_iter()
            .map(|(a, c)| (a, round2(c / sum)))
            .collect(),
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/learn.rs"]
mod tests;
