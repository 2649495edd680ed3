use crate::app::Route;
use crate::domain::auth::AuthState;
use leptos::*;
use once_cell::sync::OnceCell;

/// App-wide signals shared by the routing shell and the pages
pub struct Globals {
    pub route: RwSignal<Route>,
    pub auth: RwSignal<AuthState>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        route: create_rw_signal(Route::from_current_location()),
        auth: create_rw_signal(AuthState::default()),
    })
}

crate::global_signals! {
    pub current_route => route: Route,
    pub auth_state => auth: AuthState,
}
