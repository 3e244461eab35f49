pub mod aggregate;
pub mod chart;
pub mod summary;
pub mod table;
pub mod view_state;

pub use view_state::ViewState;
