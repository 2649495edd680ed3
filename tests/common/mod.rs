//! Simulated-time scheduler and scripted data sources for the poller tests.
#![allow(dead_code)]

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use learndcx_web::application::{DashboardSink, FuturesSink, TaskScheduler, TickerSink};
use learndcx_web::domain::errors::{FetchError, FetchResult};
use learndcx_web::domain::market_data::{
    AssetId, AssetQuote, DepthSeries, FundingRate, LongShortRatio, MarketDataSource, MetricSlot, OpenInterestUsd,
    OrderBookEntry, OrderBookSnapshot, PerpetualQuote, PerpetualSource, PriceIndexSource, Symbol,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

struct TimerEntry {
    period: Duration,
    next_due: Duration,
    tick: Box<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
}

struct Clock {
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    now: Cell<Duration>,
    timers: RefCell<Vec<TimerEntry>>,
    ticks: Cell<usize>,
}

/// Single-threaded executor with a virtual clock. Nothing runs until the
/// test calls [`ManualScheduler::run_until_stalled`] or
/// [`ManualScheduler::advance`].
#[derive(Clone)]
pub struct ManualScheduler(Rc<Clock>);

/// Cancelled on drop, like a browser interval handle
pub struct ManualTimer(Rc<Cell<bool>>);

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self(Rc::new(Clock {
            pool: RefCell::new(pool),
            spawner,
            now: Cell::new(Duration::ZERO),
            timers: RefCell::new(Vec::new()),
            ticks: Cell::new(0),
        }))
    }

    pub fn now(&self) -> Duration {
        self.0.now.get()
    }

    /// Timer callbacks fired so far
    pub fn ticks(&self) -> usize {
        self.0.ticks.get()
    }

    pub fn live_timers(&self) -> usize {
        self.0.timers.borrow().iter().filter(|t| !t.cancelled.get()).count()
    }

    pub fn run_until_stalled(&self) {
        self.0.pool.borrow_mut().run_until_stalled();
    }

    /// Move the clock forward, firing due timers in order and draining the
    /// task queue after each tick.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.run_until_stalled();
        loop {
            let next = {
                let mut timers = self.0.timers.borrow_mut();
                timers.retain(|t| !t.cancelled.get());
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_due <= target)
                    .min_by_key(|(_, t)| t.next_due)
                    .map(|(i, t)| (i, t.next_due))
            };
            let Some((index, due)) = next else { break };
            self.0.now.set(due);

            // Take the callback out so it may spawn without holding the borrow
            let mut tick = {
                let mut timers = self.0.timers.borrow_mut();
                let entry = &mut timers[index];
                entry.next_due += entry.period;
                std::mem::replace(&mut entry.tick, Box::new(|| {}))
            };
            tick();
            self.0.ticks.set(self.0.ticks.get() + 1);
            {
                let mut timers = self.0.timers.borrow_mut();
                if let Some(entry) = timers.get_mut(index) {
                    entry.tick = tick;
                }
            }
            self.run_until_stalled();
        }
        self.0.now.set(target);
    }
}

impl TaskScheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawner.spawn_local(task).expect("executor alive");
    }

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.0.timers.borrow_mut().push(TimerEntry {
            period,
            next_due: self.now() + period,
            tick,
            cancelled: Rc::clone(&cancelled),
        });
        ManualTimer(cancelled)
    }
}

/// Which upstream call a counter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    OrderBook,
    FundingRate,
    LongShort,
    OpenInterest,
    SpotPrice,
    Quotes,
    Perpetuals,
}

#[derive(Default)]
struct Script {
    calls: RefCell<Vec<Call>>,
    failing: RefCell<Vec<Call>>,
    holding: Cell<bool>,
    gates: RefCell<Vec<oneshot::Sender<()>>>,
}

/// Scripted upstream: canned values, per-call failures and an optional gate
/// that parks every response until released.
#[derive(Clone, Default)]
pub struct FakeSource(Rc<Script>);

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, call: Call) {
        self.0.failing.borrow_mut().push(call);
    }

    pub fn recover(&self, call: Call) {
        self.0.failing.borrow_mut().retain(|c| *c != call);
    }

    pub fn count(&self, call: Call) -> usize {
        self.0.calls.borrow().iter().filter(|c| **c == call).count()
    }

    pub fn total_calls(&self) -> usize {
        self.0.calls.borrow().len()
    }

    /// Park responses until [`FakeSource::release`]
    pub fn hold(&self) {
        self.0.holding.set(true);
    }

    pub fn release(&self) {
        self.0.holding.set(false);
        for gate in self.0.gates.borrow_mut().drain(..) {
            let _ = gate.send(());
        }
    }

    async fn respond<T>(&self, call: Call, value: T) -> FetchResult<T> {
        self.0.calls.borrow_mut().push(call);
        if self.0.holding.get() {
            let (tx, rx) = oneshot::channel();
            self.0.gates.borrow_mut().push(tx);
            let _ = rx.await;
        }
        if self.0.failing.borrow().contains(&call) {
            Err(FetchError::Status { status: 503, url: format!("fake://{call:?}") })
        } else {
            Ok(value)
        }
    }
}

pub fn snapshot() -> OrderBookSnapshot {
    OrderBookSnapshot {
        bids: vec![OrderBookEntry::new(100.0, 2.0), OrderBookEntry::new(99.0, 3.0)],
        asks: vec![OrderBookEntry::new(101.0, 1.0), OrderBookEntry::new(102.0, 4.0)],
    }
}

pub const OPEN_INTEREST_BTC: f64 = 2.5;
pub const SPOT_PRICE: f64 = 40_000.1;

impl MarketDataSource for FakeSource {
    async fn order_book(&self) -> FetchResult<OrderBookSnapshot> {
        self.respond(Call::OrderBook, snapshot()).await
    }

    async fn funding_rate(&self) -> FetchResult<FundingRate> {
        self.respond(Call::FundingRate, FundingRate(0.0001)).await
    }

    async fn long_short_ratio(&self) -> FetchResult<LongShortRatio> {
        self.respond(Call::LongShort, LongShortRatio { long_account: 0.6, short_account: 0.4 }).await
    }

    async fn open_interest(&self) -> FetchResult<f64> {
        self.respond(Call::OpenInterest, OPEN_INTEREST_BTC).await
    }

    async fn spot_price(&self) -> FetchResult<f64> {
        self.respond(Call::SpotPrice, SPOT_PRICE).await
    }
}

impl PriceIndexSource for FakeSource {
    async fn quotes(&self, assets: &[AssetId]) -> FetchResult<Vec<AssetQuote>> {
        let quotes = assets
            .iter()
            .enumerate()
            .map(|(i, &asset)| AssetQuote { asset, usd: 100.0 * (i + 1) as f64, usd_24h_change: i as f64 - 1.0 })
            .collect();
        self.respond(Call::Quotes, quotes).await
    }
}

impl PerpetualSource for FakeSource {
    async fn perpetuals(&self, bases: &[Symbol]) -> FetchResult<Vec<PerpetualQuote>> {
        let quotes = bases
            .iter()
            .enumerate()
            .map(|(i, base)| PerpetualQuote {
                base: base.clone(),
                price: 1_000.0 * (i + 1) as f64,
                funding_rate: FundingRate(0.0001),
                index_price: 999.5 * (i + 1) as f64,
                open_interest: 250_000.0,
                change_24h: 1.5 - i as f64,
            })
            .collect();
        self.respond(Call::Perpetuals, quotes).await
    }
}

/// Records every slot written, newest last
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub depth: Rc<RefCell<Vec<MetricSlot<DepthSeries>>>>,
    pub funding_rate: Rc<RefCell<Vec<MetricSlot<FundingRate>>>>,
    pub long_short: Rc<RefCell<Vec<MetricSlot<LongShortRatio>>>>,
    pub open_interest: Rc<RefCell<Vec<MetricSlot<OpenInterestUsd>>>>,
    pub quotes: Rc<RefCell<Vec<MetricSlot<Vec<AssetQuote>>>>>,
    pub perpetuals: Rc<RefCell<Vec<MetricSlot<Vec<PerpetualQuote>>>>>,
}

impl RecordingSink {
    pub fn writes(&self) -> usize {
        self.depth.borrow().len()
            + self.funding_rate.borrow().len()
            + self.long_short.borrow().len()
            + self.open_interest.borrow().len()
            + self.quotes.borrow().len()
            + self.perpetuals.borrow().len()
    }
}

fn last<T: Clone>(cell: &RefCell<Vec<MetricSlot<T>>>) -> MetricSlot<T> {
    cell.borrow().last().cloned().unwrap_or(MetricSlot::Loading)
}

impl RecordingSink {
    pub fn last_depth(&self) -> MetricSlot<DepthSeries> {
        last(&self.depth)
    }

    pub fn last_funding_rate(&self) -> MetricSlot<FundingRate> {
        last(&self.funding_rate)
    }

    pub fn last_long_short(&self) -> MetricSlot<LongShortRatio> {
        last(&self.long_short)
    }

    pub fn last_open_interest(&self) -> MetricSlot<OpenInterestUsd> {
        last(&self.open_interest)
    }

    pub fn last_quotes(&self) -> MetricSlot<Vec<AssetQuote>> {
        last(&self.quotes)
    }

    pub fn last_perpetuals(&self) -> MetricSlot<Vec<PerpetualQuote>> {
        last(&self.perpetuals)
    }
}

impl DashboardSink for RecordingSink {
    fn set_depth(&self, slot: MetricSlot<DepthSeries>) {
        self.depth.borrow_mut().push(slot);
    }

    fn set_funding_rate(&self, slot: MetricSlot<FundingRate>) {
        self.funding_rate.borrow_mut().push(slot);
    }

    fn set_long_short(&self, slot: MetricSlot<LongShortRatio>) {
        self.long_short.borrow_mut().push(slot);
    }

    fn set_open_interest(&self, slot: MetricSlot<OpenInterestUsd>) {
        self.open_interest.borrow_mut().push(slot);
    }
}

impl TickerSink for RecordingSink {
    fn set_quotes(&self, slot: MetricSlot<Vec<AssetQuote>>) {
        self.quotes.borrow_mut().push(slot);
    }
}

impl FuturesSink for RecordingSink {
    fn set_perpetuals(&self, slot: MetricSlot<Vec<PerpetualQuote>>) {
        self.perpetuals.borrow_mut().push(slot);
    }
}
