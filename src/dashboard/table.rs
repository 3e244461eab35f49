use super::view_state::ViewState;
use crate::shared::types::OrderDto;

pub const HEADERS: [&str; 5] = [
    "№",
    "заказ №",
    "стоимость,$",
    "срок поставки",
    "стоимость,₽",
];

pub const NO_DATA: &str = "Данных нет.";

pub type Row = [String; 5];

#[derive(Debug, Clone, PartialEq)]
pub enum TableRegion {
    Hidden,
    NoData,
    Rows(Vec<Row>),
}

/// Cells in header order, values exactly as received.
pub fn row(order: &OrderDto) -> Row {
    [
        order.number.to_string(),
        order.order_number.clone(),
        order.dollars.clone(),
        order.delivery_time.clone(),
        order.rubles.clone(),
    ]
}

pub fn table_region(state: &ViewState) -> TableRegion {
    match state {
        ViewState::Loading => TableRegion::Hidden,
        ViewState::Empty => TableRegion::NoData,
        ViewState::Populated(d) => TableRegion::Rows(d.orders.iter().map(row).collect()),
    }
}
