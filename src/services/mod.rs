pub mod classifier;
pub mod export;
pub mod stock;
pub mod stock_view;
pub mod summaries;
