//! Market data aggregator behind the BTC dashboard.
//!
//! Four readouts refresh on two independent cadences: the order book on its
//! own timer, the three perpetual metrics as one parallel batch on another.
//! Every fetch fails in isolation and lands in its own slot.

use super::scheduler::{ActivityFlag, PollingHandle, TaskScheduler, spawn_repeating};
use crate::config::DashboardConfig;
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::services::open_interest_usd;
use crate::domain::market_data::{
    DepthAggregator, DepthSeries, FundingRate, LongShortRatio, MarketDataSource, MetricSlot, OpenInterestUsd,
};
use crate::{log_debug, log_warn};
use futures::FutureExt;
use std::rc::Rc;
use std::time::Duration;

const COMPONENT: LogComponent = LogComponent::Application("MarketDataAggregator");

/// View state written by the aggregator; each method owns a disjoint slot
pub trait DashboardSink {
    fn set_depth(&self, slot: MetricSlot<DepthSeries>);
    fn set_funding_rate(&self, slot: MetricSlot<FundingRate>);
    fn set_long_short(&self, slot: MetricSlot<LongShortRatio>);
    fn set_open_interest(&self, slot: MetricSlot<OpenInterestUsd>);
}

/// Every call to [`MarketDataAggregator::activate`] starts an independent
/// polling session with its own activity flag; stopping one session never
/// silences another.
pub struct MarketDataAggregator<S, K> {
    source: S,
    sink: K,
    depth_levels: usize,
    order_book_period: Duration,
    metrics_period: Duration,
}

impl<S, K> MarketDataAggregator<S, K>
where
    S: MarketDataSource + 'static,
    K: DashboardSink + 'static,
{
    pub fn new(source: S, sink: K, config: &DashboardConfig) -> Rc<Self> {
        Rc::new(Self {
            source,
            sink,
            depth_levels: config.depth_levels,
            order_book_period: config.order_book_period(),
            metrics_period: config.metrics_period(),
        })
    }

    /// Fetch everything once now, then keep both cadences running until the
    /// returned handle is stopped or dropped.
    pub fn activate<T: TaskScheduler>(self: &Rc<Self>, scheduler: &T) -> PollingHandle<T::Timer> {
        let active = ActivityFlag::default();

        let (this, flag) = (Rc::clone(self), active.clone());
        scheduler.spawn(async move { this.refresh_order_book(&flag).await }.boxed_local());
        let (this, flag) = (Rc::clone(self), active.clone());
        scheduler.spawn(async move { this.refresh_metrics(&flag).await }.boxed_local());

        let (book, book_flag) = (Rc::clone(self), active.clone());
        let book_timer = spawn_repeating(scheduler, self.order_book_period, move || {
            let (this, flag) = (Rc::clone(&book), book_flag.clone());
            async move { this.refresh_order_book(&flag).await }
        });
        let (metrics, metrics_flag) = (Rc::clone(self), active.clone());
        let metrics_timer = spawn_repeating(scheduler, self.metrics_period, move || {
            let (this, flag) = (Rc::clone(&metrics), metrics_flag.clone());
            async move { this.refresh_metrics(&flag).await }
        });

        log_debug!(
            COMPONENT,
            "polling started: order book every {:?}, metrics every {:?}",
            self.order_book_period,
            self.metrics_period
        );
        PollingHandle::new(vec![book_timer, metrics_timer], active)
    }

    pub async fn refresh_order_book(&self, active: &ActivityFlag) {
        let result = self
            .source
            .order_book()
            .await
            .map(|snapshot| DepthAggregator::aggregate(&snapshot, self.depth_levels));
        if let Some(slot) = settle("order book", result, active) {
            self.sink.set_depth(slot);
        }
    }

    /// The three metrics in parallel; none waits on another's failure
    pub async fn refresh_metrics(&self, active: &ActivityFlag) {
        futures::join!(
            self.refresh_funding_rate(active),
            self.refresh_long_short(active),
            self.refresh_open_interest(active)
        );
    }

    pub async fn refresh_funding_rate(&self, active: &ActivityFlag) {
        let result = self.source.funding_rate().await;
        if let Some(slot) = settle("funding rate", result, active) {
            self.sink.set_funding_rate(slot);
        }
    }

    pub async fn refresh_long_short(&self, active: &ActivityFlag) {
        let result = self.source.long_short_ratio().await;
        if let Some(slot) = settle("long/short ratio", result, active) {
            self.sink.set_long_short(slot);
        }
    }

    pub async fn refresh_open_interest(&self, active: &ActivityFlag) {
        let result = self.open_interest_usd().await;
        if let Some(slot) = settle("open interest", result, active) {
            self.sink.set_open_interest(slot);
        }
    }

    /// Open interest times spot; both calls go out together and either
    /// failing fails the whole readout.
    pub async fn open_interest_usd(&self) -> FetchResult<OpenInterestUsd> {
        let (open_interest, spot) = futures::try_join!(self.source.open_interest(), self.source.spot_price())?;
        open_interest_usd(open_interest, spot)
    }
}

/// Log failures and turn the result into a slot, or `None` once the session
/// that issued the fetch has been torn down
fn settle<T>(what: &str, result: FetchResult<T>, active: &ActivityFlag) -> Option<MetricSlot<T>> {
    if let Err(e) = &result {
        log_warn!(COMPONENT, "{what} fetch failed: {e}");
    }
    if !active.is_active() {
        log_debug!(COMPONENT, "dropping {what} response that arrived after teardown");
        return None;
    }
    Some(MetricSlot::from_result(result))
}
