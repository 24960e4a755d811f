//! Remote-data hook for profiling stats.

use api::{FetchState, Selection, StatsResponse};
use dioxus::prelude::*;

/// Fetch profiling stats for the given query/selection and surface the fetch
/// lifecycle as a [`FetchState`]. Re-fetches whenever either input signal
/// changes; consumers only ever see the tagged state, never the transport.
pub fn use_profile_stats(
    query: ReadOnlySignal<String>,
    selection: ReadOnlySignal<Selection>,
) -> Memo<FetchState<StatsResponse>> {
    let stats = use_resource(move || async move { api::profile_stats(query(), selection()).await });

    use_memo(move || match &*stats.read_unchecked() {
        None => FetchState::Unresolved,
        Some(Ok(response)) => FetchState::Resolved(response.clone()),
        Some(Err(err)) => FetchState::Errored(err.to_string()),
    })
}
