//! Shaping of resolved stats responses into chart-ready series.

use api::{FetchState, StatsResponse};
use dioxus::logger::tracing::debug;
use serde::Serialize;

use crate::profiling::aggregate::{Aggregate, Unit};

/// Build order doubles as render priority: the renderer draws series in
/// sequence, so p99 must come before p75 or the larger p99 area would be
/// painted over by p75.
pub const SERIES_ORDER: [Aggregate; 3] = [Aggregate::Count, Aggregate::P99, Aggregate::P75];

/// One chart-ready series bound to a grid/axis pair. Field names serialize to
/// the renderer's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_name: String,
    pub x_axis_index: u8,
    pub y_axis_index: u8,
    pub data: Vec<SeriesPoint>,
    #[serde(skip)]
    pub aggregate: Aggregate,
}

/// A single point: millisecond timestamp plus display-unit value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("invalid stats response: axis `{axis}` has {values} values for {timestamps} timestamps")]
    LengthMismatch {
        axis: String,
        values: usize,
        timestamps: usize,
    },
}

/// Shape a resolved stats response into ordered chart series.
///
/// Axes outside [`SERIES_ORDER`] are dropped up front. For every kept axis
/// the value sequence must line up one-to-one with the timestamp spine; a
/// mismatch aborts the whole transform rather than rendering corrupted data.
/// Null values mean "no data in this bucket" and are charted as zero.
pub fn build_series(stats: &StatsResponse) -> Result<Vec<Series>, StatsError> {
    let mut all: Vec<(usize, Series)> = Vec::new();

    for raw in &stats.data {
        let aggregate = Aggregate::parse(&raw.axis);
        let (Some(order), Some(label)) = (chart_priority(aggregate), aggregate.label()) else {
            debug!(axis = %raw.axis, "dropping stats axis outside the chart allow-list");
            continue;
        };

        if raw.values.len() != stats.timestamps.len() {
            return Err(StatsError::LengthMismatch {
                axis: raw.axis.clone(),
                values: raw.values.len(),
                timestamps: stats.timestamps.len(),
            });
        }

        let data: Vec<SeriesPoint> = stats
            .timestamps
            .iter()
            .zip(&raw.values)
            .map(|(ts, value)| {
                let filled = value.unwrap_or(0.0);
                SeriesPoint {
                    // Response timestamps are seconds; the renderer wants ms.
                    name: (*ts as f64) * 1e3,
                    value: match aggregate.unit() {
                        Unit::Integer => filled,
                        // Percentiles arrive in nanoseconds.
                        Unit::Duration => filled / 1e6,
                    },
                }
            })
            .collect();

        // Counts live on the left grid, everything else on the right.
        let axis_index = match aggregate.unit() {
            Unit::Integer => 0,
            Unit::Duration => 1,
        };

        all.push((
            order,
            Series {
                series_name: label.to_string(),
                x_axis_index: axis_index,
                y_axis_index: axis_index,
                data,
                aggregate,
            },
        ));
    }

    all.sort_by_key(|(order, _)| *order);
    Ok(all.into_iter().map(|(_, series)| series).collect())
}

/// Series for whatever the fetch has produced so far: an unresolved or
/// errored fetch charts as no data, never as a failure.
pub fn series_for_state(state: &FetchState<StatsResponse>) -> Result<Vec<Series>, StatsError> {
    match state.resolved() {
        Some(stats) => build_series(stats),
        None => Ok(Vec::new()),
    }
}

fn chart_priority(aggregate: Aggregate) -> Option<usize> {
    SERIES_ORDER.iter().position(|known| *known == aggregate)
}
