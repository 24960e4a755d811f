use api::Selection;
use dioxus::prelude::*;

use crate::profiling::ProfileCharts;

const PERIOD_CHOICES: [(u32, &str); 4] = [
    (24, "Last 24 hours"),
    (72, "Last 3 days"),
    (168, "Last 7 days"),
    (336, "Last 14 days"),
];

#[component]
pub fn Profiling() -> Element {
    let mut query = use_signal(String::new);
    let mut period_hours = use_signal(|| Selection::default().period_hours);
    let selection = use_memo(move || Selection::with_period(period_hours()));

    rsx! {
        section { class: "page page-profiling",
            h1 { "Profiling" }
            p { "Profile volume and latency percentiles for the selected window." }

            div { class: "page-profiling__filters",
                input {
                    class: "page-profiling__query",
                    r#type: "search",
                    placeholder: "Filter profiles, e.g. transaction:checkout",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    class: "page-profiling__period",
                    value: "{period_hours}",
                    onchange: move |evt| {
                        if let Ok(hours) = evt.value().parse::<u32>() {
                            period_hours.set(hours);
                        }
                    },
                    for (hours, label) in PERIOD_CHOICES {
                        option { value: "{hours}", selected: hours == period_hours(), "{label}" }
                    }
                }
            }

            ProfileCharts { query: query(), selection: selection() }
        }
    }
}
