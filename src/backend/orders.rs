#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{error, info, warn};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error as _;

use crate::backend::config::resolve_orders_url;
use crate::shared::types::OrdersResponseDto;

// No request timeout: a hung endpoint keeps the page in its loading state.
static CLIENT: Lazy<Client> = Lazy::new(Client::new);

pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T> {
    info!("[orders] GET {}", url);
    let res = match CLIENT
        .get(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            error!("[orders] request error on GET {}: {}", url, e);
            if e.is_connect() {
                warn!("[orders] hint: connection failed (DNS/route/refused/TLS). Check ORDERS_API_URL and that the aggregation service is up");
            }
            if e.is_builder() {
                warn!("[orders] hint: request build error (invalid URL or headers)");
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                warn!("[orders] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        error!("[orders] request failed: status={} body=\n{}", status, snippet(text.as_bytes()));
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snippet(&bytes)
        )
    })
}

fn snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(300).collect()
}

pub async fn fetch_orders_from(url: &str) -> Result<OrdersResponseDto> {
    let resp: OrdersResponseDto = fetch_json(url).await?;
    info!(
        "[orders] received {} orders, total_dollars={}",
        resp.orders.len(),
        resp.total_dollars
    );
    Ok(resp)
}

pub async fn fetch_orders() -> Result<OrdersResponseDto> {
    fetch_orders_from(&resolve_orders_url()).await
}
