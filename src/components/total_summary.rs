use dioxus::prelude::*;

use crate::dashboard::summary::{summary_region, SummaryRegion};
use crate::dashboard::ViewState;

#[allow(non_snake_case)]
#[component]
pub fn TotalSummary(state: Signal<ViewState>) -> Element {
    let region = summary_region(&state.read());
    let Some(text) = region.text() else {
        return rsx! { Fragment {} };
    };
    let class = if region == SummaryRegion::NoData { "summary no-data" } else { "summary" };
    rsx! {
        div { class: "{class}",
            h2 { "Total: {text}" }
        }
    }
}
