pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use metrics::{MetricDisplay, MetricSlot, Tone};
pub use repositories::{MarketDataSource, PerpetualSource, PriceIndexSource};
pub use services::{DEPTH_LEVELS, DepthAggregator};
pub use value_objects::*;
