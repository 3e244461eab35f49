use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Display index of a record. The server may send either an integer or a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{n}"),
            Label::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub number: Label,
    #[serde(deserialize_with = "text_or_number")]
    pub order_number: String,
    #[serde(deserialize_with = "text_or_number")]
    pub dollars: String, // decimal text, e.g. "10.00000"
    pub delivery_time: String, // categorical chart key, never parsed
    #[serde(deserialize_with = "text_or_number")]
    pub rubles: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersResponseDto {
    pub orders: Vec<OrderDto>,
    pub total_dollars: f64,
}

/// Accepts a JSON string or number and keeps it as text, so the table shows
/// exactly what was sent.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_django_payload() {
        let body = r#"{
            "orders": [
                {"id": 7, "number": 1, "order_number": 1249708, "dollars": "675.00000",
                 "delivery_time": "2022-05-24", "rubles": "42768.00000"},
                {"number": "2", "order_number": "1182407", "dollars": 214,
                 "delivery_time": "2022-05-13", "rubles": 13559.04}
            ],
            "total_dollars": 889
        }"#;
        let resp: OrdersResponseDto = serde_json::from_str(body).unwrap();

        assert_eq!(resp.orders.len(), 2);
        assert_eq!(resp.total_dollars, 889.0);

        let first = &resp.orders[0];
        assert_eq!(first.number, Label::Int(1));
        assert_eq!(first.order_number, "1249708");
        assert_eq!(first.dollars, "675.00000");
        assert_eq!(first.delivery_time, "2022-05-24");

        let second = &resp.orders[1];
        assert_eq!(second.number, Label::Text("2".into()));
        assert_eq!(second.dollars, "214");
        assert_eq!(second.rubles, "13559.04");
    }

    #[test]
    fn missing_orders_field_is_an_error() {
        let err = serde_json::from_str::<OrdersResponseDto>(r#"{"total_dollars": 0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn label_displays_as_received() {
        assert_eq!(Label::Int(42).to_string(), "42");
        assert_eq!(Label::Text("A-1".into()).to_string(), "A-1");
    }
}
