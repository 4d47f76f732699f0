pub mod filter;
pub mod loss;
pub mod status;
pub mod stock_record;
pub mod view;

pub use filter::FilterState;
pub use loss::LossRecord;
pub use status::{ExpiryPolicy, StatusClass, StatusCounts};
pub use stock_record::StockRecord;
pub use view::ViewResult;
