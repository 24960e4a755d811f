//! Headline cards summarizing the same stats the chart draws.

use api::{FetchState, StatsResponse};
use dioxus::prelude::*;

use crate::core::format;
use crate::profiling::aggregate::Aggregate;

#[component]
pub fn ProfileHighlights(stats: FetchState<StatsResponse>) -> Element {
    let resolved = stats.resolved();

    let total = resolved.map(total_profiles).unwrap_or(f64::NAN);
    let latest_p75 = resolved
        .and_then(|s| latest_value(s, Aggregate::P75))
        .map(ns_to_ms)
        .unwrap_or(f64::NAN);
    let latest_p99 = resolved
        .and_then(|s| latest_value(s, Aggregate::P99))
        .map(ns_to_ms)
        .unwrap_or(f64::NAN);

    let meta = match &stats {
        FetchState::Unresolved => "Loading stats…",
        FetchState::Errored(_) => "Stats unavailable",
        FetchState::Resolved(_) => "Over the selected window",
    };

    rsx! {
        section { class: "chart-card chart-highlights",
            div { class: "chart-card__header",
                h2 { "Highlights" }
                span { class: "chart-card__meta", "{meta}" }
            }

            div { class: "chart-highlights__grid",
                div { class: "chart-highlight",
                    span { class: "chart-highlight__label", "Total profiles" }
                    strong { class: "chart-highlight__value", "{format::format_integer(total)}" }
                }
                div { class: "chart-highlight",
                    span { class: "chart-highlight__label", "Latest p75" }
                    strong { class: "chart-highlight__value", "{format::format_duration(latest_p75)}" }
                }
                div { class: "chart-highlight",
                    span { class: "chart-highlight__label", "Latest p99" }
                    strong { class: "chart-highlight__value", "{format::format_duration(latest_p99)}" }
                }
            }
        }
    }
}

fn ns_to_ms(ns: f64) -> f64 {
    ns / 1e6
}

fn total_profiles(stats: &StatsResponse) -> f64 {
    stats
        .data
        .iter()
        .find(|axis| Aggregate::parse(&axis.axis) == Aggregate::Count)
        .map(|axis| axis.values.iter().flatten().sum::<f64>())
        .unwrap_or(f64::NAN)
}

/// Most recent non-null bucket for the given aggregate.
fn latest_value(stats: &StatsResponse, aggregate: Aggregate) -> Option<f64> {
    stats
        .data
        .iter()
        .find(|axis| Aggregate::parse(&axis.axis) == aggregate)
        .and_then(|axis| axis.values.iter().rev().flatten().next())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AxisSeries;

    fn stats() -> StatsResponse {
        StatsResponse {
            timestamps: vec![1, 2, 3],
            data: vec![
                AxisSeries {
                    axis: "count".into(),
                    values: vec![Some(10.0), None, Some(5.0)],
                },
                AxisSeries {
                    axis: "p75".into(),
                    values: vec![Some(1_000_000.0), Some(2_000_000.0), None],
                },
            ],
        }
    }

    #[test]
    fn totals_skip_null_buckets() {
        assert_eq!(total_profiles(&stats()), 15.0);
    }

    #[test]
    fn latest_value_skips_trailing_nulls() {
        assert_eq!(latest_value(&stats(), Aggregate::P75), Some(2_000_000.0));
        assert_eq!(latest_value(&stats(), Aggregate::Count), Some(5.0));
        assert_eq!(latest_value(&stats(), Aggregate::P99), None);
    }
}
