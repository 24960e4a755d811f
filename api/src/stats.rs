//! Wire model for pre-aggregated profiling stats.

use serde::{Deserialize, Serialize};

/// One bucketed stats response: a shared timestamp spine plus one value
/// sequence per aggregate axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Bucket starts, Unix seconds, ascending.
    pub timestamps: Vec<i64>,
    pub data: Vec<AxisSeries>,
}

/// A single named axis ("count", "p75", "p99", ...). Buckets with no data
/// carry `None`; consumers decide how to render the gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSeries {
    pub axis: String,
    pub values: Vec<Option<f64>>,
}

/// Page-filter context forwarded with every stats request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Width of the requested window, in hours. One bucket per hour.
    pub period_hours: u32,
    pub environment: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            period_hours: 72,
            environment: None,
        }
    }
}

impl Selection {
    pub fn with_period(period_hours: u32) -> Self {
        Self {
            period_hours,
            ..Self::default()
        }
    }
}
