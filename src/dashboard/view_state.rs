use dioxus::logger::tracing::{info, warn};

use super::aggregate::ceiling;
use crate::shared::types::{OrderDto, OrdersResponseDto};

/// Everything the chart, table and summary need once data has arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub orders: Vec<OrderDto>,
    pub ceiling: f64,
    pub total_dollars: f64,
}

/// Page lifecycle. Starts in `Loading` and leaves it exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Populated(Dashboard),
    Empty,
}

impl ViewState {
    /// Applies the fetch result. Only the first call has an effect; returns
    /// whether the state changed.
    pub fn resolve(&mut self, response: OrdersResponseDto) -> bool {
        if !self.is_loading() {
            warn!("[orders] ignoring response; view already resolved");
            return false;
        }
        let OrdersResponseDto {
            orders,
            total_dollars,
        } = response;

        *self = if orders.is_empty() {
            info!("[orders] empty response");
            ViewState::Empty
        } else {
            let ceiling = ceiling(&orders);
            info!(
                "[orders] loaded {} orders, ceiling {}, total {}",
                orders.len(),
                ceiling,
                total_dollars
            );
            ViewState::Populated(Dashboard {
                orders,
                ceiling,
                total_dollars,
            })
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            ViewState::Populated(d) => Some(d),
            _ => None,
        }
    }
}
