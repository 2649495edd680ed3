//! Team wizard and the dashboard shown once a team exists.

use leptos::*;
use strum::IntoEnumIterator;

use crate::app::{Route, navigate};
use crate::application::perpetuals::{FuturesBoard, FuturesSink};
use crate::config::FuturesConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::metrics::{
    funding_rate_display, open_interest_thousands_text, perpetual_change_display, usd_text,
};
use crate::domain::market_data::{MetricSlot, PerpetualQuote, Symbol};
use crate::domain::team::{TeamData, TeamDraft, TeamLogo, WizardStep};
use crate::infrastructure::{BrowserScheduler, SimulatedPerpetualFeed};
use crate::{log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("Team");

const GUIDES: [(&str, &str); 3] = [
    ("Futures Trading Basics", "Learn about leverage, margin, and position sizing in futures trading."),
    ("Risk Management", "Advanced risk management techniques for futures trading."),
    ("Technical Analysis", "Master chart patterns and indicators for futures markets."),
];

const TRADING_SIGNALS: [&str; 4] = [
    "BTC/USDT: Support level at 65,800",
    "ETH/USDT: Breakout confirmed",
    "SOL/USDT: RSI divergence alert",
    "BNB/USDT: Resistance test at 420",
];

/// Reactive sink for the perpetual cards
#[derive(Clone, Copy)]
pub struct FuturesSignals {
    pub perpetuals: RwSignal<MetricSlot<Vec<PerpetualQuote>>>,
}

impl FuturesSignals {
    pub fn new() -> Self {
        Self { perpetuals: create_rw_signal(MetricSlot::Loading) }
    }
}

impl FuturesSink for FuturesSignals {
    fn set_perpetuals(&self, slot: MetricSlot<Vec<PerpetualQuote>>) {
        self.perpetuals.set(slot);
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = create_rw_signal(None::<TeamData>);
    view! {
        <section class="page">
            {move || match team.get() {
                Some(data) => view! { <TeamDashboard team=data/> }.into_view(),
                None => view! { <TeamCreation on_create=move |data| team.set(Some(data))/> }.into_view(),
            }}
        </section>
    }
}

#[component]
fn TeamCreation(#[prop(into)] on_create: Callback<TeamData>) -> impl IntoView {
    let draft = create_rw_signal(TeamDraft::default());
    let error = create_rw_signal(None::<String>);
    // Memos so typing into a field does not rebuild the current step
    let step = create_memo(move |_| draft.with(|d| d.step));
    let member_count = create_memo(move |_| draft.with(|d| d.members().len()));

    let next = move |_| {
        let mut created = None;
        let mut failure = None;
        draft.update(|d| match d.advance(js_sys::Math::random, js_sys::Date::now() as u64) {
            Ok(team) => created = team,
            Err(e) => failure = Some(e.to_string()),
        });
        error.set(failure);
        if let Some(team) = created {
            log_info!(COMPONENT, "team '{}' created with invite code {}", team.name, team.invite_code);
            on_create.call(team);
        }
    };

    let identity = move || {
        view! {
            <input
                type="text"
                placeholder="Enter team name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <div class="logo-picker">
                {TeamLogo::iter()
                    .map(|logo| {
                        view! {
                            <button
                                type="button"
                                class="logo-option"
                                class:selected=move || draft.with(|d| d.logo == logo)
                                on:click=move |_| draft.update(|d| d.logo = logo)
                            >
                                {logo.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let members = move || {
        view! {
            {(0..member_count.get())
                .map(|index| {
                    view! {
                        <input
                            type="email"
                            placeholder="Enter member email"
                            prop:value=move || draft.with(|d| d.members().get(index).cloned().unwrap_or_default())
                            on:input=move |ev| {
                                draft.update(|d| {
                                    if let Err(e) = d.set_member_email(index, event_target_value(&ev)) {
                                        log_warn!(COMPONENT, "{e}");
                                    }
                                })
                            }
                        />
                    }
                })
                .collect_view()}
            <Show when=move || draft.with(|d| d.can_add_member())>
                <button
                    type="button"
                    class="secondary-button"
                    on:click=move |_| {
                        draft.update(|d| {
                            if let Err(e) = d.add_member() {
                                log_warn!(COMPONENT, "{e}");
                            }
                        })
                    }
                >
                    "+ Add Member"
                </button>
            </Show>
        }
    };

    let invite = move || {
        view! {
            <div class="invite-code">
                {move || draft.with(|d| d.invite_code().map(|c| c.to_string()).unwrap_or_default())}
            </div>
            <p class="nav-user">"Share this code with your teammates so they can join."</p>
        }
    };

    view! {
        <div class="card form">
            <h2>"Create Your Team"</h2>
            <p class="nav-user">{move || format!("Step {} of 3", step.get().number())}</p>
            <div class="wizard-steps">
                {[WizardStep::Identity, WizardStep::Members, WizardStep::Invite]
                    .into_iter()
                    .map(|s| {
                        view! { <div class="wizard-step" class:current=move || step.get() == s>{s.number()}</div> }
                    })
                    .collect_view()}
            </div>
            {move || match step.get() {
                WizardStep::Identity => identity().into_view(),
                WizardStep::Members => members().into_view(),
                WizardStep::Invite => invite().into_view(),
            }}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="button" class="primary-button" on:click=next>
                {move || if step.get() == WizardStep::Invite { "Create Team" } else { "Next" }}
            </button>
        </div>
    }
}

#[component]
fn TeamDashboard(team: TeamData) -> impl IntoView {
    let stats = team.stats();
    let show_guide = create_rw_signal(false);
    view! {
        <div class="card">
            <div class="leaderboard-row">
                <div>
                    <h1>
                        <span class=team.logo.accent()>{team.logo.to_string()}</span>
                        " "
                        {team.name.clone()}
                    </h1>
                    <p class="nav-user">{format!("Team Code: {}", team.invite_code)}</p>
                </div>
                <button class="primary-button" on:click=move |_| navigate(Route::Btc)>"Enter War Room"</button>
            </div>
        </div>

        <FuturesDisplay/>

        <div class="grid-3">
            <div class="card">
                <div class="metric-title">"Team Size"</div>
                <div class="ticker-price">{team.total_members()}</div>
            </div>
            {stats.map(|s| {
                view! {
                    <div class="card">
                        <div class="metric-title">"Win Rate"</div>
                        <div class="ticker-price">{format!("{:.1}%", s.win_rate)}</div>
                    </div>
                    <div class="card">
                        <div class="metric-title">"Total Trades"</div>
                        <div class="ticker-price">{s.total_trades}</div>
                    </div>
                }
            })}
        </div>

        <div class="card">
            <h2>"Members"</h2>
            {team
                .members
                .iter()
                .map(|m| view! { <div class="leaderboard-row">{m.email.clone()}</div> })
                .collect_view()}
        </div>

        <div class="grid-3">
            <div class="card" style="grid-column: span 2">
                <div class="leaderboard-row">
                    <h2>"Futures Trading Guide"</h2>
                    <button class="icon-button" on:click=move |_| show_guide.update(|open| *open = !*open)>"?"</button>
                </div>
                <Show when=move || show_guide.get()>
                    {GUIDES
                        .iter()
                        .map(|(title, content)| {
                            view! {
                                <div class="signal-item">
                                    <h3>{*title}</h3>
                                    <p class="nav-user">{*content}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Show>
                <div class="grid-2">
                    <div class="futures-stat">
                        <h3>"Market Analysis"</h3>
                        <div class="panel-row"><span>"Trend Strength"</span><span class="positive">"Strong Bullish"</span></div>
                        <div class="panel-row"><span>"Volatility"</span><span class="accent-yellow">"Moderate"</span></div>
                    </div>
                    <div class="futures-stat">
                        <h3>"Trading Activity"</h3>
                        <div class="panel-row"><span>"Active Positions"</span><span>"12"</span></div>
                        <div class="panel-row"><span>"Avg. Position Size"</span><span>"$2.5K"</span></div>
                    </div>
                </div>
            </div>

            <div class="card">
                <h2>"Trading Signals"</h2>
                {TRADING_SIGNALS.iter().map(|signal| view! { <div class="signal-item">{*signal}</div> }).collect_view()}
            </div>
        </div>
    }
}

/// One card per configured perpetual, refreshed while the dashboard is mounted
#[component]
fn FuturesDisplay() -> impl IntoView {
    let config = FuturesConfig::default();
    let signals = FuturesSignals::new();
    let board = FuturesBoard::new(SimulatedPerpetualFeed, signals, &config);
    let mut handle = board.activate(&BrowserScheduler);
    on_cleanup(move || handle.stop());

    view! {
        <div class="futures-grid">
            {config.symbols.into_iter().map(|base| view! { <PerpetualCard base=base signals=signals/> }).collect_view()}
        </div>
    }
}

#[component]
fn PerpetualCard(base: Symbol, signals: FuturesSignals) -> impl IntoView {
    let title = format!("{base} Perpetual");
    // A symbol missing from a successful batch reads as an error for its card
    let slot = create_memo(move |_| {
        signals.perpetuals.with(|slot| match slot {
            MetricSlot::Loading => MetricSlot::Loading,
            MetricSlot::Ready(quotes) => {
                quotes.iter().find(|q| q.base == base).cloned().map_or(MetricSlot::Failed, MetricSlot::Ready)
            }
            MetricSlot::Failed => MetricSlot::Failed,
        })
    });

    view! {
        <div class="card futures-card">
            <div class="futures-header">
                <div>
                    <h3>{title}</h3>
                    <p class="nav-user">"USDT Margined"</p>
                </div>
                {move || match slot.get() {
                    MetricSlot::Loading => view! { <div class="skeleton" style="width: 64px"></div> }.into_view(),
                    MetricSlot::Ready(quote) => {
                        let change = perpetual_change_display(&quote);
                        view! { <span class=change.tone.css_class()>{change.text}</span> }.into_view()
                    }
                    MetricSlot::Failed => ().into_view(),
                }}
            </div>
            {move || match slot.get() {
                MetricSlot::Loading => view! {
                    <div class="skeleton" style="width: 128px; height: 32px"></div>
                    <div class="skeleton" style="width: 96px"></div>
                }
                .into_view(),
                MetricSlot::Ready(quote) => view! {
                    <div class="ticker-price">{usd_text(quote.price)}</div>
                    <div class="panel-row">
                        <span class="nav-user">"Funding Rate:"</span>
                        <span class="positive">{funding_rate_display(&quote.funding_rate).text}</span>
                    </div>
                    <div class="futures-stats">
                        <div class="futures-stat">
                            <div class="metric-title">"Index Price"</div>
                            <div>{usd_text(quote.index_price)}</div>
                        </div>
                        <div class="futures-stat">
                            <div class="metric-title">"Open Interest"</div>
                            <div>{open_interest_thousands_text(quote.open_interest)}</div>
                        </div>
                    </div>
                }
                .into_view(),
                MetricSlot::Failed => view! { <div class="nav-user">"Error loading data"</div> }.into_view(),
            }}
        </div>
    }
}
