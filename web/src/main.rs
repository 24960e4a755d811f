use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{Home, Profiling};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/profiling")]
    Profiling {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CHARTS_JS: Asset = asset!("/assets/charts.js");

// The chart renderer itself is an external black box; only the bridge script
// in assets/charts.js talks to it.
const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: ECHARTS_CDN }
        document::Script { src: CHARTS_JS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Home {}, "Home" }
            Link { class: "navbar__link", to: Route::Profiling {}, "Profiling" }
        }
        Outlet::<Route> {}
    }
}
