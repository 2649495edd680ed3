use leptos::*;

use crate::domain::logging::LogComponent;
use crate::global_state::{auth_state, current_route};
use crate::log_warn;
use crate::presentation::{
    auth::{SignIn, SignUp},
    dashboard::BtcDashboard,
    home::HomePage,
    learn_more::LearnMore,
    order_panel::OrderPanel,
    styles::APP_CSS,
    team::TeamPage,
};

/// Pages reachable by URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    SignIn,
    SignUp,
    Btc,
    LearnMore,
    OrderPanel,
    Team,
}

impl Route {
    /// Unknown paths fall back to the home page
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            "/btc" => Route::Btc,
            "/learn-more" => Route::LearnMore,
            "/op" => Route::OrderPanel,
            "/team" => Route::Team,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Btc => "/btc",
            Route::LearnMore => "/learn-more",
            Route::OrderPanel => "/op",
            Route::Team => "/team",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Team)
    }

    /// Route actually rendered: guarded pages send anonymous visitors to
    /// sign-in.
    pub fn resolve(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated { Route::SignIn } else { self }
    }

    pub fn from_current_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Self::from_path(&p))
            .unwrap_or_default()
    }
}

/// Push `route` onto the browser history and switch the rendered page
pub fn navigate(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
            log_warn!(LogComponent::Presentation("Router"), "pushState failed: {e:?}");
        }
    }
    current_route().set(route);
}

/// Anchor that navigates in-app instead of reloading the page
#[component]
pub fn Link(route: Route, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=route.path()
            class=class
            on:click=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                navigate(route);
            }
        >
            {children()}
        </a>
    }
}

/// 🦀 Root component: routing shell
#[component]
pub fn App() -> impl IntoView {
    // Back/forward buttons
    let route = current_route();
    if let Some(window) = web_sys::window() {
        gloo::events::EventListener::new(&window, "popstate", move |_| {
            route.set(Route::from_current_location());
        })
        .forget();
    }

    let page = move || {
        let resolved = route.get().resolve(auth_state().with(|a| a.is_authenticated()));
        match resolved {
            Route::Home => view! { <HomePage/> }.into_view(),
            Route::SignIn => view! { <SignIn/> }.into_view(),
            Route::SignUp => view! { <SignUp/> }.into_view(),
            Route::Btc => view! { <BtcDashboard/> }.into_view(),
            Route::LearnMore => view! { <LearnMore/> }.into_view(),
            Route::OrderPanel => view! { <OrderPanel/> }.into_view(),
            Route::Team => view! { <TeamPage/> }.into_view(),
        }
    };

    view! {
        <style>{APP_CSS}</style>
        <div class="learndcx-app">
            <NavBar/>
            {page}
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let auth = auth_state();
    view! {
        <nav class="navbar">
            <Link route=Route::Home class="brand">"LearnDCX"</Link>
            <div class="nav-links">
                <Link route=Route::LearnMore>"Learn"</Link>
                <Link route=Route::Btc>"War Room"</Link>
                <Link route=Route::Team>"Team"</Link>
                {move || match auth.with(|a| a.user().map(|u| u.username.clone())) {
                    Some(username) => view! {
                        <span class="nav-user">{username}</span>
                        <button
                            class="nav-button"
                            on:click=move |_| {
                                auth.update(|a| a.sign_out());
                                navigate(Route::Home);
                            }
                        >
                            "Sign out"
                        </button>
                    }
                    .into_view(),
                    None => view! { <Link route=Route::SignIn class="nav-button">"Sign in"</Link> }.into_view(),
                }}
            </div>
        </nav>
    }
}
