//! Per-label patient counts for camp summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitd_core::models::record::PatientRecord;

use crate::Scheme;
use crate::rules::RiskLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskTally {
    pub counts: BTreeMap<RiskLevel, u32>,
    /// Patients with no usable classification.
    pub unscored: u32,
}

impl RiskTally {
    /// An empty tally listing every label of `scheme` with a zero count.
    pub fn for_scheme(scheme: &dyn Scheme) -> Self {
        Self {
            counts: scheme.levels().into_iter().map(|level| (level, 0)).collect(),
            unscored: 0,
        }
    }

    pub fn record(&mut self, level: Option<RiskLevel>) {
        match level {
            Some(level) => *self.counts.entry(level).or_insert(0) += 1,
            None => self.unscored += 1,
        }
    }

    pub fn count(&self, level: RiskLevel) -> u32 {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum::<u32>() + self.unscored
    }
}

pub fn tally<I>(scheme: &dyn Scheme, levels: I) -> RiskTally
where
    I: IntoIterator<Item = Option<RiskLevel>>,
{
    let mut tally = RiskTally::for_scheme(scheme);
    for level in levels {
        tally.record(level);
    }
    tally
}

/// Count stored rows by their `risk_level` text.
pub fn tally_records(scheme: &dyn Scheme, records: &[PatientRecord]) -> RiskTally {
    tally(
        scheme,
        records.iter().map(|record| {
            record
                .risk_level
                .as_deref()
                .and_then(|level| level.parse().ok())
        }),
    )
}
