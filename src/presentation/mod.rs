//! Leptos pages and widgets.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod learn_more;
pub mod order_panel;
pub mod styles;
pub mod team;
