//! Shared API crate for Traceboard. Wire types and server functions live here
//! so every frontend target talks to the same stats contract.

pub mod fetch;
pub mod stats;
pub mod synth;

pub use fetch::FetchState;
pub use stats::{AxisSeries, Selection, StatsResponse};

use dioxus::prelude::*;

/// Fetch pre-aggregated profiling stats for the given search query and
/// page-filter selection.
///
/// Timestamps in the response are Unix seconds; percentile values are
/// nanoseconds. Shaping those into chart units is the caller's concern.
#[server]
pub async fn profile_stats(
    query: String,
    selection: Selection,
) -> Result<StatsResponse, ServerFnError> {
    let end = time::OffsetDateTime::now_utc().unix_timestamp();
    Ok(synth::generate(&query, &selection, end))
}
