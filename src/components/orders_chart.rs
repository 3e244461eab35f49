use dioxus::prelude::*;

use crate::dashboard::chart::{chart_region, ChartRegion, LINE_COLOR, NO_CHART_DATA};
use crate::dashboard::ViewState;

#[allow(non_snake_case)]
#[component]
pub fn OrdersChart(state: Signal<ViewState>) -> Element {
    // Hovered order index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let chart = match chart_region(&state.read()) {
        ChartRegion::Hidden => return rsx! { Fragment {} },
        ChartRegion::NoData => return rsx! { p { class: "no-data", "{NO_CHART_DATA}" } },
        ChartRegion::Chart(chart) => chart,
    };
    let plot = chart.plot;
    let hovered_i = *hovered.read();
    let tooltip = hovered_i.and_then(|i| chart.tooltip(i));
    // no active dot for a record without a plotted value
    let active_dot = hovered_i.and_then(|i| chart.points.get(i)).is_some_and(|p| p.y.is_some());

    rsx! {
        div { class: "chart",
            svg { class: "chart-svg", view_box: "{chart.view_box()}", width: "100%",
                // Horizontal grid with value labels
                {
                    chart.ticks.iter().enumerate().map(|(i, t)| rsx! {
                        g { key: "tick-{i}",
                            line { x1: "{plot.left}", y1: "{t.y}", x2: "{plot.right}", y2: "{t.y}", stroke: "black", stroke_width: "1" }
                            text { x: "{plot.left - 8.0}", y: "{t.y + 4.0}", text_anchor: "end", class: "axis-label", "{t.label}" }
                        }
                    })
                }
                // Categorical x labels, thinned when bands are narrow
                {
                    chart.points.iter().enumerate().filter(|(_, p)| p.show_label).map(|(i, p)| rsx! {
                        text { key: "x-{i}", x: "{p.x}", y: "{plot.bottom + 16.0}", text_anchor: "middle", class: "axis-label", "{p.label}" }
                    })
                }
                path { d: "{chart.path}", fill: "none", stroke: LINE_COLOR, stroke_width: "2" }
                {
                    chart.points.iter().enumerate().filter_map(|(i, p)| {
                        let y = p.y?;
                        Some(rsx! {
                            circle { key: "dot-{i}", cx: "{p.x}", cy: "{y}", r: "3", fill: "#fff", stroke: LINE_COLOR, stroke_width: "1" }
                        })
                    })
                }
                // Invisible hover bands on top
                {
                    chart.points.iter().enumerate().map(|(i, p)| {
                        let x = p.x - chart.band / 2.0;
                        rsx! { rect {
                            key: "hit-{i}", x: "{x}", y: "{plot.top}", width: "{chart.band}", height: "{plot.height()}", fill: "transparent",
                            onmouseenter: move |_| *hovered.write() = Some(i),
                            onmouseleave: move |_| *hovered.write() = None,
                            ontouchstart: move |_| *hovered.write() = Some(i),
                            ontouchend: move |_| *hovered.write() = None,
                        }}
                    })
                }
                {
                    match tooltip {
                        Some(tip) => rsx! { g { key: "tooltip", pointer_events: "none",
                            if active_dot { circle { cx: "{tip.anchor_x}", cy: "{tip.anchor_y}", r: "5", fill: LINE_COLOR, stroke: "#fff", stroke_width: "2" } }
                            rect { x: "{tip.x}", y: "{tip.y}", width: "{tip.width}", height: "{tip.height}", rx: "8", fill: "#f5f5f5", stroke: "silver", stroke_width: "1" }
                            text { x: "{tip.x + 10.0}", y: "{tip.y + 18.0}", class: "tooltip-label", fill: "gray", "{tip.title}" }
                            text { x: "{tip.x + 10.0}", y: "{tip.y + 34.0}", class: "tooltip-item", fill: "gray", "{tip.value}" }
                        }},
                        None => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}
