//! Pure domain layer: market-data shapes and transforms, mock auth, team
//! wizard and order form. Nothing here touches the browser.

pub mod auth;
pub mod errors;
pub mod leaderboard;
pub mod logging;
pub mod market_data;
pub mod team;
pub mod trading;
