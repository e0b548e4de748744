pub mod display;
pub mod filters;
pub mod search;

pub use display::{format_date, format_time};
pub use filters::{filter_and_sort, price_bounds};
pub use search::search_flights;
