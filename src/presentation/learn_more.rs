use leptos::*;

use crate::app::{Link, Route};

const TOPICS: [(&str, &str); 4] = [
    ("Comprehensive Learning", "Access detailed courses on crypto trading, technical analysis, and risk management."),
    ("Team-Based Learning", "Join or create teams to learn and grow together with fellow traders."),
    ("Real-Time Practice", "Practice trading with real market data in a risk-free environment."),
    ("Safe Learning Environment", "Learn and practice trading strategies without risking real money."),
];

#[component]
pub fn LearnMore() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Welcome to " <span class="brand">"LearnDCX"</span></h1>
            <p>
                "Your gateway to mastering cryptocurrency trading through collaborative learning "
                "and hands-on practice."
            </p>
        </section>
        <section class="page">
            <div class="grid-3">
                {TOPICS
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p class="nav-user">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="hero">
            <h2>"Ready to Start?"</h2>
            <div class="hero-actions">
                <Link route=Route::SignUp class="primary-button">"Create Account"</Link>
                <Link route=Route::SignIn class="secondary-button">"Sign In"</Link>
            </div>
        </section>
    }
}
