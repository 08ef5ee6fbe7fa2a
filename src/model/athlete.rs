use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{Attribute, WeightVector};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Athlete {
    pub name: String,
    pub ratings: BTreeMap<Attribute, f64>,
}

impl Athlete {
    pub fn new(name: impl Into<String>, ratings: &[(Attribute, f64)]) -> Self {
        Self {
            name: name.into(),
            ratings: ratings.iter().copied().collect(),
        }
    }

    pub fn rating(&self, attribute: Attribute) -> Option<f64> {
        self.ratings.get(&attribute).copied()
    }

    /// Non-penalty ratings in attribute order.
    pub fn skill_ratings(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.ratings
            .iter()
            .filter(|(a, _)| !a.is_penalty())
            .map(|(a, v)| (*a, *v))
    }

    fn skill_schema(&self) -> BTreeSet<Attribute> {
        self.skill_ratings().map(|(a, _)| a).collect()
    }
}

/// Athletes sharing one non-penalty attribute schema, in roster order.
/// Penalty ratings are optional per athlete.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    athletes: Vec<Athlete>,
    schema: BTreeSet<Attribute>,
}

impl AttributeTable {
    pub fn new(athletes: Vec<Athlete>) -> Result<Self> {
        let schema = athletes
            .first()
            .map(Athlete::skill_schema)
            .unwrap_or_default();

        let mut seen = BTreeSet::new();
        for athlete in &athletes {
            if !seen.insert(athlete.name.as_str()) {
                return Err(Error::DuplicateAthlete(athlete.name.clone()));
            }
            for (&attribute, &value) in &athlete.ratings {
                if !value.is_finite() {
                    return Err(Error::InvalidRating {
                        athlete: athlete.name.clone(),
                        attribute,
                        value,
                    });
                }
            }
            let own = athlete.skill_schema();
            if let Some(&attribute) = schema.difference(&own).next() {
                return Err(Error::SchemaMismatch {
                    athlete: athlete.name.clone(),
                    attribute,
                });
            }
            // An extra attribute means the first row is the one missing it.
            if let Some(&attribute) = own.difference(&schema).next() {
                return Err(Error::SchemaMismatch {
                    athlete: athletes[0].name.clone(),
                    attribute,
                });
            }
        }

        Ok(Self { athletes, schema })
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn get(&self, name: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.name == name)
    }

    pub fn schema(&self) -> &BTreeSet<Attribute> {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }

    /// Fails early when a weight vector names a skill attribute the table
    /// does not carry.
    pub fn check_weights(&self, weights: &WeightVector) -> Result<()> {
        let Some(first) = self.athletes.first() else {
            return Ok(());
        };
        for (attribute, _) in weights.iter() {
            if !attribute.is_penalty() && !self.schema.contains(&attribute) {
                return Err(Error::SchemaMismatch {
                    athlete: first.name.clone(),
                    attribute,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/athlete.rs"]
mod tests;
