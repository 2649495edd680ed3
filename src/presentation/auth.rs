//! Mock sign-in / sign-up forms.

use leptos::*;
use std::time::Duration;

use crate::app::{Link, Route, navigate};
use crate::domain::auth::AuthState;
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::global_state::auth_state;
use crate::{log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("Auth");

/// Pretend round-trip to an auth backend
const SIMULATED_DELAY: Duration = Duration::from_millis(600);

/// Wait out the fake round-trip, apply `action` to the auth store and go to
/// the team page on success.
fn submit_after_delay(
    pending: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    action: impl FnOnce(&mut AuthState) -> AppResult<String> + 'static,
) {
    pending.set(true);
    error.set(None);
    spawn_local(async move {
        gloo_timers::future::sleep(SIMULATED_DELAY).await;
        let mut outcome = None;
        auth_state().update(|state| outcome = Some(action(state)));
        pending.set(false);
        match outcome {
            Some(Ok(username)) => {
                log_info!(COMPONENT, "signed in as {username}");
                navigate(Route::Team);
            }
            Some(Err(e)) => {
                log_warn!(COMPONENT, "auth rejected: {e}");
                error.set(Some(e.to_string()));
            }
            None => {}
        }
    });
}

#[component]
pub fn SignIn() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        submit_after_delay(pending, error, move |state| {
            state.sign_in(&email, &password).map(|u| u.username.clone())
        });
    };

    view! {
        <section class="page">
            <form class="form card" on:submit=on_submit>
                <h2>"Welcome to LearnDCX"</h2>
                <input
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="primary-button" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p>"No account yet? " <Link route=Route::SignUp>"Sign up"</Link></p>
            </form>
        </section>
    }
}

#[component]
pub fn SignUp() -> impl IntoView {
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (username, email, password) =
            (username.get_untracked(), email.get_untracked(), password.get_untracked());
        submit_after_delay(pending, error, move |state| {
            state.sign_up(&username, &email, &password).map(|u| u.username.clone())
        });
    };

    view! {
        <section class="page">
            <form class="form card" on:submit=on_submit>
                <h2>"Create your account"</h2>
                <input
                    type="text"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Create a password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="primary-button" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p>"Already trading? " <Link route=Route::SignIn>"Sign in"</Link></p>
            </form>
        </section>
    }
}
