//! Content-keyed cache for built chart series.
//!
//! Recomputation is keyed on a fingerprint of the response content rather
//! than on reference identity of whatever the fetch layer hands back, so
//! "rebuild only when the data changed" is an explicit, testable contract.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use api::{FetchState, StatsResponse};

use crate::profiling::series::{self, Series, StatsError};

/// Content hash of a stats response: timestamps, axis names, and value bit
/// patterns all participate, so any observable change produces a new key.
pub fn fingerprint(stats: &StatsResponse) -> u64 {
    let mut hasher = DefaultHasher::new();
    stats.timestamps.hash(&mut hasher);
    for axis in &stats.data {
        axis.axis.hash(&mut hasher);
        for value in &axis.values {
            value.map(f64::to_bits).hash(&mut hasher);
        }
    }
    hasher.finish()
}

#[derive(Debug, Default)]
pub struct SeriesCache {
    key: Option<u64>,
    series: Vec<Series>,
    rebuilds: u64,
}

impl SeriesCache {
    /// Series for the current fetch state, rebuilding only when the resolved
    /// content's fingerprint differs from the cached one. Non-resolved states
    /// yield an empty slice and leave the cache untouched.
    pub fn series_for_state(
        &mut self,
        state: &FetchState<StatsResponse>,
    ) -> Result<&[Series], StatsError> {
        let Some(stats) = state.resolved() else {
            return Ok(&[]);
        };

        let key = fingerprint(stats);
        if self.key != Some(key) {
            self.series = series::build_series(stats)?;
            self.key = Some(key);
            self.rebuilds += 1;
        }

        Ok(&self.series)
    }

    /// Number of rebuilds performed so far. Exists so the recomputation
    /// trigger can be asserted on directly.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AxisSeries;

    fn stats(count_values: Vec<Option<f64>>) -> StatsResponse {
        StatsResponse {
            timestamps: (0..count_values.len() as i64).collect(),
            data: vec![AxisSeries {
                axis: "count".into(),
                values: count_values,
            }],
        }
    }

    #[test]
    fn equal_content_does_not_rebuild() {
        let mut cache = SeriesCache::default();
        let first = stats(vec![Some(1.0), Some(2.0)]);
        // Distinct allocation, identical content.
        let second = first.clone();

        cache
            .series_for_state(&FetchState::Resolved(first))
            .unwrap();
        cache
            .series_for_state(&FetchState::Resolved(second))
            .unwrap();

        assert_eq!(cache.rebuild_count(), 1);
    }

    #[test]
    fn changed_content_rebuilds() {
        let mut cache = SeriesCache::default();
        cache
            .series_for_state(&FetchState::Resolved(stats(vec![Some(1.0)])))
            .unwrap();
        cache
            .series_for_state(&FetchState::Resolved(stats(vec![Some(2.0)])))
            .unwrap();

        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn null_and_zero_fingerprint_differently() {
        assert_ne!(
            fingerprint(&stats(vec![None])),
            fingerprint(&stats(vec![Some(0.0)]))
        );
    }

    #[test]
    fn non_resolved_states_yield_empty_and_keep_the_cache() {
        let mut cache = SeriesCache::default();
        let data = stats(vec![Some(1.0)]);

        let built = cache
            .series_for_state(&FetchState::Resolved(data.clone()))
            .unwrap()
            .len();
        assert_eq!(built, 1);

        assert!(cache
            .series_for_state(&FetchState::Unresolved)
            .unwrap()
            .is_empty());
        assert!(cache
            .series_for_state(&FetchState::Errored("offline".into()))
            .unwrap()
            .is_empty());

        // Re-resolving the same content still hits the cache.
        cache
            .series_for_state(&FetchState::Resolved(data))
            .unwrap();
        assert_eq!(cache.rebuild_count(), 1);
    }
}
