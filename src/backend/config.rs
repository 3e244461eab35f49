#![cfg(feature = "server")]
use dioxus::logger::tracing::warn;

pub const DEFAULT_ORDERS_URL: &str = "http://127.0.0.1:8000/api/googlesheets/orders/";

/// Loads `.env` if present. Missing file is fine.
pub fn load_env() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!("[config] failed to read .env: {e}");
        }
    }
}

/// Aggregation endpoint, `ORDERS_API_URL` when set and non-blank.
pub fn resolve_orders_url() -> String {
    orders_url_from(std::env::var("ORDERS_API_URL").ok())
}

fn orders_url_from(var: Option<String>) -> String {
    match var {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_ORDERS_URL.to_string(),
    }
}
