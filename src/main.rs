use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod dashboard;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();
        backend::config::load_env();
        dioxus::logger::tracing::info!(
            "[orders] aggregation endpoint: {}",
            backend::config::resolve_orders_url()
        );
    }
    dioxus::launch(app::App);
}
