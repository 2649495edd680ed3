//! Application layer: pollers that connect data sources to view state.

pub mod dashboard;
pub mod perpetuals;
pub mod scheduler;
pub mod ticker;

pub use dashboard::{DashboardSink, MarketDataAggregator};
pub use perpetuals::{FuturesBoard, FuturesSink};
pub use scheduler::{ActivityFlag, PollingHandle, TaskScheduler};
pub use ticker::{PriceTicker, TickerSink};
