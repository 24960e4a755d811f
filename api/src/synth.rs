//! Deterministic stand-in stats source.
//!
//! Until a real aggregation backend is wired up, the server function answers
//! with synthesized hourly buckets so the dashboard is fully exercisable.
//! Output is a pure function of (query, selection, end timestamp): the same
//! request replays to the same response, which keeps client-side caching
//! honest and the endpoint testable.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::stats::{AxisSeries, Selection, StatsResponse};

const BUCKET_SECS: i64 = 3600;

/// Fraction of buckets that report no data at all.
const EMPTY_BUCKET_RATE: f64 = 0.06;

/// Generate a bucketed stats response for the window ending at `end_secs`
/// (Unix seconds). The window is aligned down to the bucket boundary.
pub fn generate(query: &str, selection: &Selection, end_secs: i64) -> StatsResponse {
    let buckets = selection.period_hours.max(1) as i64;
    let end = end_secs - end_secs.rem_euclid(BUCKET_SECS);
    let start = end - buckets * BUCKET_SECS;

    let timestamps: Vec<i64> = (0..buckets).map(|i| start + i * BUCKET_SECS).collect();

    let mut rng = StdRng::seed_from_u64(seed_for(query, selection));

    // Per-window baselines so different queries land on visibly different
    // charts while buckets within one window stay coherent.
    let count_base = rng.gen_range(20.0_f64..120.0);
    let p75_base_ns = rng.gen_range(20.0_f64..90.0) * 1e6;
    let p99_spread = rng.gen_range(2.5_f64..4.0);

    let mut counts = Vec::with_capacity(timestamps.len());
    let mut p75s = Vec::with_capacity(timestamps.len());
    let mut p99s = Vec::with_capacity(timestamps.len());

    for i in 0..timestamps.len() {
        if rng.gen_bool(EMPTY_BUCKET_RATE) {
            counts.push(None);
            p75s.push(None);
            p99s.push(None);
            continue;
        }

        // Gentle diurnal swing plus per-bucket jitter.
        let phase = (i as f64 / 24.0) * std::f64::consts::TAU;
        let swing = 1.0 + 0.35 * phase.sin();
        let jitter = rng.gen_range(0.85_f64..1.15);

        let count = (count_base * swing * jitter).round().max(0.0);
        let p75 = p75_base_ns * swing * rng.gen_range(0.9_f64..1.1);

        counts.push(Some(count));
        p75s.push(Some(p75));
        p99s.push(Some(p75 * p99_spread * rng.gen_range(0.95_f64..1.05)));
    }

    StatsResponse {
        timestamps,
        data: vec![
            AxisSeries {
                axis: "count".into(),
                values: counts,
            },
            AxisSeries {
                axis: "p75".into(),
                values: p75s,
            },
            AxisSeries {
                axis: "p99".into(),
                values: p99s,
            },
        ],
    }
}

fn seed_for(query: &str, selection: &Selection) -> u64 {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    selection.period_hours.hash(&mut hasher);
    selection.environment.hash(&mut hasher);
    hasher.finish()
}
