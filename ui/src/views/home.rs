use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Traceboard" }
            p { "A small dashboard over pre-aggregated profiling stats." }

            ul { class: "page-home__features",
                li { "Profile counts and latency percentiles, side by side" }
                li { "One crosshair linked across both grids" }
                li { "Filter by query and time window" }
            }
            p { class: "page-home__cta", "Head to the profiling page to explore your data." }
        }
    }
}
