pub mod loader;
pub mod orders_chart;
pub mod orders_table;
pub mod total_summary;

pub use loader::Loader;
pub use orders_chart::OrdersChart;
pub use orders_table::OrdersTable;
pub use total_summary::TotalSummary;
