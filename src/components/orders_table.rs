use dioxus::prelude::*;

use crate::dashboard::table::{table_region, TableRegion, HEADERS, NO_DATA};
use crate::dashboard::ViewState;

#[allow(non_snake_case)]
#[component]
pub fn OrdersTable(state: Signal<ViewState>) -> Element {
    match table_region(&state.read()) {
        TableRegion::Hidden => rsx! { Fragment {} },
        TableRegion::NoData => rsx! { p { class: "no-data", "{NO_DATA}" } },
        TableRegion::Rows(rows) => rsx! {
            table { class: "table",
                thead {
                    tr {
                        for h in HEADERS {
                            th { "{h}" }
                        }
                    }
                }
                tbody {
                    {
                        rows.into_iter().enumerate().map(|(i, row)| rsx! {
                            tr { key: "{i}",
                                for cell in row {
                                    td { "{cell}" }
                                }
                            }
                        })
                    }
                }
            }
        },
    }
}
