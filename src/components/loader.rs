use dioxus::prelude::*;

/// Pulse placeholder shown until the orders arrive.
#[allow(non_snake_case)]
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status", aria_label: "loading",
            div { class: "loader-bar wide" }
            div { class: "loader-bar" }
            div { class: "loader-bar narrow" }
        }
    }
}
