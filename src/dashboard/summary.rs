use super::table::NO_DATA;
use super::view_state::ViewState;
use crate::utils::format::format_dollars;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRegion {
    Hidden,
    NoData,
    Total(String),
}

/// Grand total line. The server's figure is shown as-is, never re-summed.
pub fn summary_region(state: &ViewState) -> SummaryRegion {
    match state.dashboard() {
        Some(d) => SummaryRegion::Total(format_dollars(d.total_dollars)),
        None if state.is_loading() => SummaryRegion::Hidden,
        None => SummaryRegion::NoData,
    }
}

impl SummaryRegion {
    pub fn text(&self) -> Option<&str> {
        match self {
            SummaryRegion::Hidden => None,
            SummaryRegion::NoData => Some(NO_DATA),
            SummaryRegion::Total(t) => Some(t),
        }
    }
}
