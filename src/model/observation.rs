use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Finishing ranks for one stage, keyed by athlete name. Partial and
/// unvalidated: ranks below 1 and unknown names are dropped when learning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankObservation(BTreeMap<String, i64>);

impl RankObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, athlete: impl Into<String>, rank: i64) {
        self.0.insert(athlete.into(), rank);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.0.iter().map(|(n, r)| (n.as_str(), *r))
    }

    /// Entries with a rank of at least 1.
    pub fn valid(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.iter()
            .filter_map(|(n, r)| u32::try_from(r).ok().filter(|&r| r >= 1).map(|r| (n, r)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for RankObservation {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, r)| (n.into(), r)).collect())
    }
}
