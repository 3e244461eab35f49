//! Line chart projection: turns the populated view state into SVG geometry.
//!
//! The x axis is categorical, one band per order keyed by `delivery_time`, so
//! spacing is uniform whatever the labels say. The y axis is fixed to
//! `[0, ceiling]`.

use super::aggregate::parse_amount;
use super::view_state::{Dashboard, ViewState};
use crate::utils::format::format_tick;

pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = WIDTH / 3.0;

// Outer margins, then room for the axis labels.
const MARGIN_TOP: f32 = 15.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 5.0;
const Y_AXIS_W: f32 = 40.0;
const X_AXIS_H: f32 = 20.0;

const TICK_COUNT: usize = 5;
// approx char width of an 11px axis label, and the gap kept between labels
const LABEL_CHAR_W: f32 = 6.5;
const LABEL_GAP: f32 = 8.0;

pub const LINE_COLOR: &str = "#1a8ef3";
pub const NO_CHART_DATA: &str = "Данных для графика нет.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub dollars: String,
    /// Band centre.
    pub x: f32,
    /// `None` when `dollars` is not a number; the line breaks there.
    pub y: Option<f32>,
    /// Whether the x label is drawn; dense charts keep every k-th one.
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub label: String,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub plot: PlotArea,
    pub band: f32,
    pub ceiling: f64,
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<Tick>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartRegion {
    /// Still loading; the loader covers this area.
    Hidden,
    NoData,
    Chart(LineChart),
}

pub fn chart_region(state: &ViewState) -> ChartRegion {
    match state {
        ViewState::Loading => ChartRegion::Hidden,
        ViewState::Empty => ChartRegion::NoData,
        ViewState::Populated(d) => ChartRegion::Chart(LineChart::new(d)),
    }
}

impl LineChart {
    pub fn new(dashboard: &Dashboard) -> Self {
        let plot = PlotArea {
            left: MARGIN_LEFT + Y_AXIS_W,
            top: MARGIN_TOP,
            right: WIDTH - MARGIN_RIGHT,
            bottom: HEIGHT - MARGIN_BOTTOM - X_AXIS_H,
        };
        let ceiling = dashboard.ceiling;
        let band = plot.width() / dashboard.orders.len().max(1) as f32;
        let label_step = label_step(
            dashboard.orders.iter().map(|o| o.delivery_time.chars().count()),
            band,
        );

        let points: Vec<ChartPoint> = dashboard
            .orders
            .iter()
            .enumerate()
            .map(|(i, o)| ChartPoint {
                label: o.delivery_time.clone(),
                dollars: o.dollars.clone(),
                x: plot.left + band * (i as f32 + 0.5),
                y: parse_amount(&o.dollars)
                    .value()
                    .map(|v| scale_y(&plot, ceiling, v)),
                show_label: i % label_step == 0,
            })
            .collect();

        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let value = ceiling * i as f64 / (TICK_COUNT - 1) as f64;
                Tick {
                    label: format_tick(value),
                    y: scale_y(&plot, ceiling, value),
                }
            })
            .collect();

        let path = line_path(&points);

        Self {
            plot,
            band,
            ceiling,
            points,
            ticks,
            path,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", WIDTH, HEIGHT)
    }

    /// Tooltip box for the hovered point, kept inside the plot.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let p = self.points.get(index)?;
        let anchor_y = p.y.unwrap_or(self.plot.bottom);
        let title = p.label.clone();
        let value = format!("dollars : {}", p.dollars);

        let cw = 7.0f32; // approx char width at 12px
        let content_w = (title.chars().count().max(value.chars().count()) as f32) * cw + 20.0;
        let width = content_w.min(self.plot.width());
        let height = 44.0f32;
        let x = (p.x + 10.0).min(self.plot.right - width).max(self.plot.left);
        let y = (anchor_y - 10.0 - height).max(self.plot.top);

        Some(Tooltip {
            x,
            y,
            width,
            height,
            anchor_x: p.x,
            anchor_y,
            title,
            value,
        })
    }
}

/// Smallest k such that every k-th label fits without overlapping.
fn label_step(label_chars: impl Iterator<Item = usize>, band: f32) -> usize {
    let widest = label_chars.max().unwrap_or(0) as f32 * LABEL_CHAR_W + LABEL_GAP;
    if band <= 0.0 {
        return 1;
    }
    ((widest / band).ceil() as usize).max(1)
}

fn scale_y(plot: &PlotArea, ceiling: f64, value: f64) -> f32 {
    if ceiling <= 0.0 {
        return plot.bottom;
    }
    let ratio = (value / ceiling).clamp(0.0, 1.0) as f32;
    plot.bottom - ratio * plot.height()
}

/// SVG path through the valid points, one subpath per run of consecutive
/// valid points.
fn line_path(points: &[ChartPoint]) -> String {
    let mut out = Vec::new();
    let mut run: Vec<(f32, f32)> = Vec::new();
    for p in points {
        match p.y {
            Some(y) => run.push((p.x, y)),
            None => {
                if !run.is_empty() {
                    out.push(monotone_path(&run));
                    run.clear();
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(monotone_path(&run));
    }
    out.join(" ")
}

/// Monotone cubic interpolation in x (Fritsch-Carlson style tangents): the
/// curve never overshoots between two neighbouring points.
pub fn monotone_path(pts: &[(f32, f32)]) -> String {
    let n = pts.len();
    let Some(&(x0, y0)) = pts.first() else {
        return String::new();
    };
    let mut d = format!("M {x0:.2} {y0:.2}");
    if n == 1 {
        return d;
    }
    if n == 2 {
        let (x1, y1) = pts[1];
        d.push_str(&format!(" L {x1:.2} {y1:.2}"));
        return d;
    }

    let mut tangents = vec![0.0f32; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = end_slope(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = end_slope(pts[n - 2], pts[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (xa, ya) = pts[i];
        let (xb, yb) = pts[i + 1];
        let dx = (xb - xa) / 3.0;
        let (c1x, c1y) = (xa + dx, ya + dx * tangents[i]);
        let (c2x, c2y) = (xb - dx, yb - dx * tangents[i + 1]);
        d.push_str(&format!(
            " C {c1x:.2} {c1y:.2} {c2x:.2} {c2y:.2} {xb:.2} {yb:.2}"
        ));
    }
    d
}

fn sign(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn interior_slope(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32)) -> f32 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

fn end_slope(p0: (f32, f32), p1: (f32, f32), t: f32) -> f32 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        t
    } else {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::aggregate::tests::order;
    use crate::shared::types::OrdersResponseDto;

    fn populated(dollars: &[&str]) -> ViewState {
        let mut state = ViewState::default();
        state.resolve(OrdersResponseDto {
            orders: dollars.iter().enumerate().map(|(i, d)| order(i, d)).collect(),
            total_dollars: 0.0,
        });
        state
    }

    fn chart(dollars: &[&str]) -> LineChart {
        match chart_region(&populated(dollars)) {
            ChartRegion::Chart(c) => c,
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn hidden_while_loading() {
        assert_eq!(chart_region(&ViewState::Loading), ChartRegion::Hidden);
    }

    #[test]
    fn no_data_when_empty() {
        assert_eq!(chart_region(&populated(&[])), ChartRegion::NoData);
    }

    #[test]
    fn one_point_per_order_in_sequence() {
        let c = chart(&["10", "25", "5"]);
        assert_eq!(c.points.len(), 3);
        let labels: Vec<&str> = c.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["2022-05-01", "2022-05-02", "2022-05-03"]);
        assert!(c.points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn bands_are_evenly_spaced() {
        let c = chart(&["1", "2", "3", "4"]);
        let gaps: Vec<f32> = c.points.windows(2).map(|w| w[1].x - w[0].x).collect();
        assert!(gaps.iter().all(|g| (g - c.band).abs() < 1e-3));
        assert!((c.points[0].x - (c.plot.left + c.band / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn sparse_charts_label_every_order() {
        let c = chart(&["10", "25", "5"]);
        assert!(c.points.iter().all(|p| p.show_label));
    }

    #[test]
    fn dense_charts_thin_out_labels() {
        let dollars: Vec<String> = (0..200).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = dollars.iter().map(String::as_str).collect();
        let c = chart(&refs);

        assert!(c.points[0].show_label);
        assert!(c.points.iter().any(|p| !p.show_label));
        let shown: Vec<f32> = c.points.iter().filter(|p| p.show_label).map(|p| p.x).collect();
        let label_w = "2022-05-01".len() as f32 * LABEL_CHAR_W + LABEL_GAP;
        assert!(shown.windows(2).all(|w| w[1] - w[0] >= label_w - 1e-3));
        // every point is still plotted
        assert_eq!(c.points.len(), 200);
    }

    #[test]
    fn y_domain_is_zero_to_ceiling() {
        let c = chart(&["10", "25"]);
        assert_eq!(c.ceiling, 25.0);
        assert_eq!(c.points[1].y, Some(c.plot.top));
        let first_tick = c.ticks.first().unwrap();
        let last_tick = c.ticks.last().unwrap();
        assert_eq!(first_tick.label, "0");
        assert_eq!(first_tick.y, c.plot.bottom);
        assert_eq!(last_tick.label, "25");
        assert_eq!(last_tick.y, c.plot.top);
        assert_eq!(c.ticks.len(), TICK_COUNT);
    }

    #[test]
    fn negative_values_sit_on_baseline() {
        let c = chart(&["-5"]);
        assert_eq!(c.ceiling, 0.0);
        assert_eq!(c.points[0].y, Some(c.plot.bottom));
    }

    #[test]
    fn invalid_values_break_the_line() {
        let c = chart(&["1", "2", "abc", "3", "4"]);
        assert_eq!(c.points[2].y, None);
        assert_eq!(c.path.matches('M').count(), 2);
    }

    #[test]
    fn single_point_is_a_bare_move() {
        let c = chart(&["10"]);
        assert!(c.path.starts_with('M'));
        assert!(!c.path.contains('C') && !c.path.contains('L'));
    }

    #[test]
    fn monotone_curve_does_not_overshoot_flat_run() {
        // Flat middle segment: tangents there must be zero, so control points
        // stay on the same y.
        let d = monotone_path(&[(0.0, 10.0), (10.0, 0.0), (20.0, 0.0), (30.0, 10.0)]);
        let second = d.split(" C ").nth(2).unwrap();
        let nums: Vec<f32> = second
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(nums[1], 0.0);
        assert_eq!(nums[3], 0.0);
    }

    #[test]
    fn tooltip_reports_hovered_record() {
        let c = chart(&["10", "25"]);
        let tip = c.tooltip(1).unwrap();
        assert_eq!(tip.title, "2022-05-02");
        assert_eq!(tip.value, "dollars : 25");
        assert!(tip.x >= c.plot.left && tip.x + tip.width <= c.plot.right + 1e-3);
        assert!(tip.y >= c.plot.top);
        assert!(c.tooltip(2).is_none());
    }
}
