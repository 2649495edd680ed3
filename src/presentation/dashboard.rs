//! BTC "war room": TradingView chart, order-book depth and perpetual metrics.

use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{Route, navigate};
use crate::application::dashboard::{DashboardSink, MarketDataAggregator};
use crate::config::DashboardConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::metrics::{
    MetricDisplay, funding_rate_display, longs_display, open_interest_display, shorts_display,
};
use crate::domain::market_data::{DepthSeries, FundingRate, LongShortRatio, MetricSlot, OpenInterestUsd};
use crate::infrastructure::external::{ScopedExternalResources, mount_trading_view};
use crate::infrastructure::rendering::DepthChartRenderer;
use crate::infrastructure::{BrowserScheduler, ExchangeClient};
use crate::presentation::styles::DASHBOARD_CSS;
use crate::{log_error, log_info};

const COMPONENT: LogComponent = LogComponent::Presentation("BtcDashboard");
const L2_DATA_URL: &str = "https://velo.xyz/futures";

/// View state of the dashboard, one signal per readout
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub depth: RwSignal<MetricSlot<DepthSeries>>,
    pub funding_rate: RwSignal<MetricSlot<FundingRate>>,
    pub long_short: RwSignal<MetricSlot<LongShortRatio>>,
    pub open_interest: RwSignal<MetricSlot<OpenInterestUsd>>,
}

impl DashboardSignals {
    pub fn new() -> Self {
        Self {
            depth: create_rw_signal(MetricSlot::Loading),
            funding_rate: create_rw_signal(MetricSlot::Loading),
            long_short: create_rw_signal(MetricSlot::Loading),
            open_interest: create_rw_signal(MetricSlot::Loading),
        }
    }
}

impl DashboardSink for DashboardSignals {
    fn set_depth(&self, slot: MetricSlot<DepthSeries>) {
        self.depth.set(slot);
    }

    fn set_funding_rate(&self, slot: MetricSlot<FundingRate>) {
        self.funding_rate.set(slot);
    }

    fn set_long_short(&self, slot: MetricSlot<LongShortRatio>) {
        self.long_short.set(slot);
    }

    fn set_open_interest(&self, slot: MetricSlot<OpenInterestUsd>) {
        self.open_interest.set(slot);
    }
}

/// Stylesheet plus the widget script; the widget is constructed once the
/// script reports loaded.
fn inject_resources(config: &DashboardConfig) -> ScopedExternalResources {
    let mut resources = ScopedExternalResources::new();
    if let Err(e) = resources.inject_stylesheet(DASHBOARD_CSS) {
        log_error!(COMPONENT, "stylesheet injection failed: {e}");
    }
    let widget = config.widget.clone();
    let injected = resources.inject_script(&config.widget_script_src, move || {
        if let Err(e) = mount_trading_view(&widget) {
            log_error!(COMPONENT, "TradingView widget failed: {e}");
        }
    });
    if let Err(e) = injected {
        log_error!(COMPONENT, "widget script injection failed: {e}");
    }
    resources
}

#[component]
pub fn BtcDashboard() -> impl IntoView {
    let config = DashboardConfig::default();
    let signals = DashboardSignals::new();
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer = Rc::new(RefCell::new(DepthChartRenderer::new()));

    // Redraw wholesale on every fresh series; a failed refresh keeps the
    // last chart on screen.
    let draw = Rc::clone(&renderer);
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        signals.depth.with(|slot| {
            if let Some(series) = slot.ready() {
                if let Err(e) = draw.borrow_mut().update((*canvas).clone(), series) {
                    log_error!(COMPONENT, "depth chart render failed: {e}");
                }
            }
        });
    });

    let mut resources = inject_resources(&config);
    let aggregator = MarketDataAggregator::new(ExchangeClient::new(&config), signals, &config);
    let mut polling = aggregator.activate(&BrowserScheduler);
    log_info!(COMPONENT, "war room mounted");

    on_cleanup(move || {
        polling.stop();
        resources.release();
        renderer.borrow_mut().clear();
        log_info!(COMPONENT, "war room torn down");
    });

    let container_id = config.widget.container_id.clone();
    view! {
        <div class="container">
            <div class="left">
                <div class="tradingview-widget-container">
                    <div id=container_id></div>
                </div>
            </div>

            <div class="right">
                <h1>"Order Book Depth"</h1>
                <div class="chart-container">
                    <canvas id="orderBookChart" node_ref=canvas_ref></canvas>
                </div>

                <div class="metrics-container">
                    <MetricCard
                        title="Funding Rate"
                        id="fundingRate"
                        value=Signal::derive(move || signals.funding_rate.with(|s| s.display(funding_rate_display)))
                    />
                    <MetricCard
                        title="Longs %"
                        id="longsPercentage"
                        value=Signal::derive(move || signals.long_short.with(|s| s.display(longs_display)))
                    />
                    <MetricCard
                        title="Shorts %"
                        id="shortsPercentage"
                        value=Signal::derive(move || signals.long_short.with(|s| s.display(shorts_display)))
                    />
                    <MetricCard
                        title="Open Interest"
                        id="openInterest"
                        value=Signal::derive(move || signals.open_interest.with(|s| s.display(open_interest_display)))
                    />
                </div>
            </div>

            <div class="buttons-container">
                <button class="enter-position-button" on:click=move |_| navigate(Route::OrderPanel)>
                    "Enter Position"
                </button>
            </div>

            <a class="l2-button" href=L2_DATA_URL>"L2 Data"</a>
        </div>
    }
}

#[component]
fn MetricCard(title: &'static str, id: &'static str, value: Signal<MetricDisplay>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-title">{title}</div>
            <div class=move || value.with(|v| v.tone.css_class()) id=id>
                {move || value.with(|v| v.text.clone())}
            </div>
        </div>
    }
}
