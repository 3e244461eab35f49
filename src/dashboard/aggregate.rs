use crate::shared::types::OrderDto;

/// A monetary cell after the explicit parse step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Valid(f64),
    Invalid,
}

impl Amount {
    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Valid(v) => Some(v),
            Amount::Invalid => None,
        }
    }
}

/// Parses a decimal string. Blank input counts as zero; anything that is not
/// a finite number is `Invalid`.
pub fn parse_amount(raw: &str) -> Amount {
    let s = raw.trim();
    if s.is_empty() {
        return Amount::Valid(0.0);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Amount::Valid(v),
        _ => Amount::Invalid,
    }
}

/// Upper bound of the chart's value axis: the largest `dollars` value, never
/// below zero. Invalid amounts never raise the ceiling.
pub fn ceiling(orders: &[OrderDto]) -> f64 {
    orders
        .iter()
        .filter_map(|o| parse_amount(&o.dollars).value())
        .fold(0.0, |max, v| if v > max { v } else { max })
}
