use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::get_orders;
use crate::components::{Loader, OrdersChart, OrdersTable, TotalSummary};
use crate::dashboard::ViewState;
use crate::MAIN_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let mut state = use_signal(ViewState::default);

    // The single fetch: runs once on mount, never re-triggered. On failure the
    // page stays in Loading; the error only goes to the log.
    use_future(move || async move {
        match get_orders().await {
            Ok(resp) => {
                state.write().resolve(resp);
            }
            Err(e) => error!("[orders] fetch failed, staying in loading state: {e}"),
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Orders" }
        div { class: "wrapper",
            h1 { class: "main_header", "Orders" }
            if state.read().is_loading() {
                Loader {}
            }
            OrdersChart { state }
            TotalSummary { state }
            OrdersTable { state }
        }
    }
}
