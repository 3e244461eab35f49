use dioxus::prelude::*;

use crate::shared::types::OrdersResponseDto;

/// Message sent to the browser when the fetch fails. Details stay in the server log.
#[cfg(feature = "server")]
const FETCH_FAILED: &str = "orders fetch failed";

/// One-shot read of the orders aggregation endpoint, proxied through the server.
#[server(GetOrders)]
pub async fn get_orders() -> Result<OrdersResponseDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::orders::fetch_orders;

        fetch_orders().await.map_err(|e| public_error(&e))
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("orders are only available from the server"))
    }
}

#[cfg(feature = "server")]
fn public_error(e: &anyhow::Error) -> ServerFnError {
    dioxus::logger::tracing::error!("get_orders: {e:#}");
    ServerFnError::new(FETCH_FAILED)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn browser_error_hides_backend_details() {
        let e = anyhow::anyhow!(
            "decoding JSON from GET http://10.0.0.5:8000/api/googlesheets/orders/ failed\nBody snippet: secret"
        );
        let msg = public_error(&e).to_string();
        assert!(msg.contains(FETCH_FAILED));
        assert!(!msg.contains("10.0.0.5"));
        assert!(!msg.contains("secret"));
    }
}
