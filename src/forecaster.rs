use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::history::{WeightHistory, WeightHistoryStore};
use crate::model::{AttributeTable, RankObservation, StageProfile, WeightVector};
use crate::model::weights::builtin_profiles;
use crate::pipeline::{StageForecast, forecast_stage, learn_weights};

/// Scores stages against a roster and folds recorded results back into the
/// stage weights through the history store.
#[derive(Debug)]
pub struct Forecaster<'a> {
    table: AttributeTable,
    profiles: BTreeMap<String, WeightVector>,
    store: &'a WeightHistoryStore,
}

impl<'a> Forecaster<'a> {
    /// Built-in profiles overlaid with whatever the store holds.
    pub fn open(table: AttributeTable, store: &'a WeightHistoryStore) -> Result<Self> {
        let defaults = builtin_profiles()
            .into_iter()
            .map(|p| (p.id, p.weights))
            .collect();
        Self::with_profiles(table, defaults, store)
    }

    pub fn with_profiles(
        table: AttributeTable,
        mut profiles: BTreeMap<String, WeightVector>,
        store: &'a WeightHistoryStore,
    ) -> Result<Self> {
        let history = store.load();
        let overlaid = history.len();
        profiles.extend(history);
        for weights in profiles.values() {
            table.check_weights(weights)?;
        }
        crate::info!(
            stages = profiles.len(),
            from_history = overlaid,
            athletes = table.len(),
            "forecaster ready"
        );
        Ok(Self {
            table,
            profiles,
            store,
        })
    }

    pub fn table(&self) -> &AttributeTable {
        &self.table
    }

    pub fn stages(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profile(&self, stage: &str) -> Result<StageProfile> {
        self.profiles
            .get(stage)
            .map(|w| StageProfile::new(stage, w.clone()))
            .ok_or_else(|| Error::UnknownStage(stage.to_string()))
    }

    pub fn forecast(&self, stage: &str) -> Result<StageForecast> {
        forecast_stage(&self.table, &self.profile(stage)?)
    }

    pub fn forecast_all(&self) -> Result<Vec<StageForecast>> {
        self.profiles
            .iter()
            .map(|(id, w)| forecast_stage(&self.table, &StageProfile::new(id.as_str(), w.clone())))
            .collect()
    }

    /// Learns new weights for `stage`, persists them, then adopts them.
    /// On any error both the store and this forecaster are left unchanged.
    pub fn record_results(
        &mut self,
        stage: &str,
        observation: &RankObservation,
    ) -> Result<WeightVector> {
        let learned = learn_weights(&self.table, observation)?;
        let learned = match self.profiles.get(stage) {
            Some(prior) => learned.with_penalties_from(prior),
            None => learned,
        };
        self.store.update(stage, &learned)?;
        self.profiles.insert(stage.to_string(), learned.clone());
        crate::info!(stage, weights = ?learned, "stage weights updated");
        Ok(learned)
    }

    /// Current persisted history, re-read from the store.
    pub fn history(&self) -> WeightHistory {
        self.store.load()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/forecaster.rs"]
mod tests;
