//! The dual-grid profiling chart: counts on the left, percentiles on the
//! right, one linked crosshair across both.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use api::Selection;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::profiling::cache::SeriesCache;
use crate::profiling::highlights::ProfileHighlights;
use crate::profiling::hooks::use_profile_stats;
use crate::profiling::option::profile_chart_payload;

#[component]
pub fn ProfileCharts(
    query: ReadOnlySignal<String>,
    selection: ReadOnlySignal<Selection>,
) -> Element {
    let stats = use_profile_stats(query, selection);

    // Outlives individual renders; rebuilds are keyed on response content,
    // not on the identity of the value the hook hands back.
    let cache = use_hook(|| Rc::new(RefCell::new(SeriesCache::default())));

    let state = stats();
    let built = cache
        .borrow_mut()
        .series_for_state(&state)
        .map(<[_]>::to_vec);

    // An invalid response aborts the chart for this data set; the shell and
    // an inline note render instead of corrupted data.
    let (series, note) = match built {
        Ok(series) => (series, state.error().map(str::to_string)),
        Err(err) => {
            warn!(%err, "discarding stats response");
            (Vec::new(), Some(err.to_string()))
        }
    };

    let payload_json = match profile_chart_payload(series).to_json() {
        Ok(json) => json,
        Err(err) => {
            warn!(%err, "chart payload encoding failed");
            String::new()
        }
    };

    let note_el = note.map(|message| {
        rsx! {
            p { class: "chart-card__error", "{message}" }
        }
    });

    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__titles",
                h2 { class: "chart-card__title", "Profiles by Count" }
                h2 { class: "chart-card__title", "Profiles by Percentiles" }
            }
            {note_el}
            AreaChart { payload: payload_json, height: 300 }
        }
        ProfileHighlights { stats: state }
    }
}

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

/// Rendering delegate. Owns a target node and forwards the payload JSON to
/// the external chart renderer through the JS bridge; everything past the
/// bridge call is a black box.
#[component]
pub fn AreaChart(payload: ReadOnlySignal<String>, height: u32) -> Element {
    let chart_id = use_hook(|| {
        format!(
            "traceboard-chart-{}",
            NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    let target = chart_id.clone();
    use_effect(move || {
        let json = payload();
        if json.is_empty() {
            return;
        }
        let _ = document::eval(&format!(
            "window.traceboardChart && window.traceboardChart('{target}', {json});"
        ));
    });

    rsx! {
        div {
            id: "{chart_id}",
            class: "chart-card__canvas",
            style: "height: {height}px;",
        }
    }
}
