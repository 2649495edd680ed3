//! Landing page: hero, live price strip, features and leaderboard.

use leptos::*;

use crate::app::{Route, navigate};
use crate::application::ticker::{PriceTicker, TickerSink};
use crate::config::{Endpoints, TickerConfig};
use crate::domain::leaderboard::{LEADERBOARD, rank_accent};
use crate::domain::market_data::metrics::{quote_change_display, quote_price_text};
use crate::domain::market_data::{AssetId, AssetQuote, MetricSlot};
use crate::global_state::auth_state;
use crate::infrastructure::{BrowserScheduler, CoinGeckoClient};

/// Reactive sink for the price ticker
#[derive(Clone, Copy)]
pub struct TickerSignals {
    pub quotes: RwSignal<MetricSlot<Vec<AssetQuote>>>,
}

impl TickerSignals {
    pub fn new() -> Self {
        Self { quotes: create_rw_signal(MetricSlot::Loading) }
    }
}

impl TickerSink for TickerSignals {
    fn set_quotes(&self, slot: MetricSlot<Vec<AssetQuote>>) {
        self.quotes.set(slot);
    }
}

fn asset_title(asset: AssetId) -> String {
    let id = asset.to_string();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => id,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <CryptoPrices/>
        <Features/>
        <Leaderboard/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let start_trading = move |_| {
        let target = if auth_state().with(|a| a.is_authenticated()) { Route::Team } else { Route::SignIn };
        navigate(target);
    };

    view! {
        <section class="hero">
            <h1>"Welcome to " <span class="brand">"LearnDCX"</span></h1>
            <p>
                "Experience the future of cryptocurrency trading education with real-time market data, "
                "team-based learning, and professional-grade trading simulations."
            </p>
            <div class="hero-actions">
                <button class="primary-button" on:click=start_trading>"Start Trading Now →"</button>
                <button class="secondary-button" on:click=move |_| navigate(Route::LearnMore)>"Learn More ›"</button>
            </div>
        </section>
    }
}

/// Price strip; the whole section disappears while the index is failing
#[component]
fn CryptoPrices() -> impl IntoView {
    let config = TickerConfig::default();
    let signals = TickerSignals::new();
    let ticker = PriceTicker::new(CoinGeckoClient::new(&Endpoints::default()), signals, &config);
    let mut handle = ticker.activate(&BrowserScheduler);
    on_cleanup(move || handle.stop());

    let assets = config.assets;
    view! {
        <Show when=move || signals.quotes.with(|q| !q.is_failed())>
            <section class="page">
                <div class="ticker">
                    {assets
                        .iter()
                        .map(|&asset| {
                            let quote = move || {
                                signals.quotes.with(|slot| {
                                    slot.ready().and_then(|quotes| quotes.iter().find(|q| q.asset == asset).cloned())
                                })
                            };
                            view! {
                                <div class="card">
                                    <div class="ticker-symbol">{asset_title(asset)}</div>
                                    {move || match quote() {
                                        Some(q) => {
                                            let change = quote_change_display(&q);
                                            view! {
                                                <div class="ticker-price">{quote_price_text(&q)}</div>
                                                <div class=change.tone.css_class()>{change.text}</div>
                                            }
                                            .into_view()
                                        }
                                        None => view! { <div class="ticker-price">"…"</div> }.into_view(),
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </Show>
    }
}

const FEATURES: [(&str, &str); 4] = [
    (
        "Real-time Market Data",
        "Access professional-grade L1/L2 market data visualization tools to make informed trading decisions.",
    ),
    (
        "Advanced Simulation",
        "Practice with our realistic trading simulator featuring leverage and real market conditions.",
    ),
    (
        "Team Learning",
        "Join or create trading teams to learn, share strategies, and grow together in a collaborative environment.",
    ),
    (
        "Interactive Education",
        "Master futures trading through our comprehensive, interactive learning modules and real-time mentorship.",
    ),
];

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="page">
            <div class="grid-3">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Leaderboard() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Top Trading Teams"</h2>
            <div class="card">
                {LEADERBOARD
                    .iter()
                    .enumerate()
                    .map(|(rank, team)| {
                        view! {
                            <div class="leaderboard-row">
                                <span class=rank_accent(rank)>{format!("🏆 #{}", rank + 1)}</span>
                                <span>{team.name}</span>
                                <span>{format!("{} members", team.members)}</span>
                                <span class="positive">{format!("+{:.1}% ROI", team.roi)}</span>
                                <span>{format!("{} win streak", team.streak)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_titles_are_capitalised() {
        assert_eq!(asset_title(AssetId::Bitcoin), "Bitcoin");
        assert_eq!(asset_title(AssetId::BinanceCoin), "Binancecoin");
    }
}
