use dioxus::prelude::*;

/// Minimal shell navbar. Platform crates supply their own router links as
/// children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "navbar",
            span { class: "navbar__brand", "Traceboard" }
            nav { class: "navbar__links", {children} }
        }
    }
}
