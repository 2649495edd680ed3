//! Browser-facing implementations: HTTP clients, timers, injected resources,
//! canvas rendering, console logging and the simulated perpetuals feed.

pub mod external;
pub mod http;
pub mod rendering;
pub mod scheduler;
pub mod services;
pub mod simulated;

pub use http::{CoinGeckoClient, ExchangeClient};
pub use scheduler::BrowserScheduler;
pub use simulated::SimulatedPerpetualFeed;
