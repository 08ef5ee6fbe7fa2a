use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Attribute;

/// Attribute weights for one stage. Treated as a value: derived vectors are
/// built fresh, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(BTreeMap<Attribute, f64>);

impl WeightVector {
    pub fn new(weights: &[(Attribute, f64)]) -> Self {
        Self(weights.iter().copied().collect())
    }

    pub fn from_map(weights: BTreeMap<Attribute, f64>) -> Self {
        Self(weights)
    }

    pub fn get(&self, attribute: Attribute) -> Option<f64> {
        self.0.get(&attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.0.iter().map(|(a, w)| (*a, *w))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the non-penalty weights.
    pub fn skill_sum(&self) -> f64 {
        self.iter()
            .filter(|(a, _)| !a.is_penalty())
            .map(|(_, w)| w)
            .sum()
    }

    pub fn penalties(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.iter().filter(|(a, _)| a.is_penalty())
    }

    /// Copy of `self` with `attribute` set to `weight`.
    pub fn with(&self, attribute: Attribute, weight: f64) -> Self {
        let mut map = self.0.clone();
        map.insert(attribute, weight);
        Self(map)
    }

    /// Copy of `self` carrying over the penalty weights of `prior`.
    pub fn with_penalties_from(&self, prior: &WeightVector) -> Self {
        let mut map = self.0.clone();
        map.extend(prior.penalties());
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageProfile {
    pub id: String,
    pub weights: WeightVector,
}

impl StageProfile {
    pub fn new(id: impl Into<String>, weights: WeightVector) -> Self {
        Self {
            id: id.into(),
            weights,
        }
    }
}

const INJURY_WEIGHT: f64 = -0.2;

/// Hand-tuned profiles used until results have been recorded for a stage.
pub fn builtin_profiles() -> Vec<StageProfile> {
    use Attribute::*;

    let defs: [(&str, [f64; 4]); 6] = [
        ("Stage 4 - Flat Sprint", [0.6, 0.1, 0.0, 0.3]),
        ("Stage 5 - Hilly", [0.2, 0.5, 0.1, 0.2]),
        ("Stage 6 - Medium Mountain", [0.1, 0.3, 0.4, 0.2]),
        ("Stage 7 - Long Hilly", [0.15, 0.55, 0.1, 0.2]),
        ("Stage 8 - High Mountain", [0.0, 0.1, 0.65, 0.25]),
        ("Stage 9 - High Mountain (Joux Plane)", [0.0, 0.05, 0.7, 0.25]),
    ];

    defs.iter()
        .map(|(id, [sprint, hilly, mountain, form])| {
            StageProfile::new(
                *id,
                WeightVector::new(&[
                    (Sprint, *sprint),
                    (Hilly, *hilly),
                    (Mountain, *mountain),
                    (CurrentForm, *form),
                    (Injury, INJURY_WEIGHT),
                ]),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
