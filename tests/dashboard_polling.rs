mod common;

use common::{Call, FakeSource, ManualScheduler, OPEN_INTEREST_BTC, RecordingSink, SPOT_PRICE};
use learndcx_web::application::MarketDataAggregator;
use learndcx_web::config::DashboardConfig;
use learndcx_web::domain::market_data::metrics::funding_rate_display;
use learndcx_web::domain::market_data::{ChartDataPoint, MetricSlot, OpenInterestUsd, Tone};
use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

fn setup() -> (ManualScheduler, FakeSource, RecordingSink) {
    (ManualScheduler::new(), FakeSource::new(), RecordingSink::default())
}

#[test]
fn activation_fetches_everything_once() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let handle = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();

    for call in [Call::OrderBook, Call::FundingRate, Call::LongShort, Call::OpenInterest, Call::SpotPrice] {
        assert_eq!(source.count(call), 1, "{call:?}");
    }
    assert_eq!(handle.timer_count(), 2);
    assert!(handle.is_active());

    let depth = sink.last_depth();
    let series = depth.ready().expect("depth ready");
    assert_eq!(series.bids, vec![ChartDataPoint { x: 100.0, y: 2.0 }, ChartDataPoint { x: 99.0, y: 5.0 }]);
    assert_eq!(series.asks, vec![ChartDataPoint { x: 101.0, y: 1.0 }, ChartDataPoint { x: 102.0, y: 5.0 }]);

    let funding = sink.last_funding_rate().display(funding_rate_display);
    assert_eq!(funding.text, "0.0100%");
    assert_eq!(funding.tone, Tone::Positive);
}

#[test]
fn order_book_and_metrics_keep_their_own_cadence() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink, &DashboardConfig::default());
    let _handle = aggregator.activate(&scheduler);

    scheduler.advance(4 * SECOND);
    assert_eq!(source.count(Call::OrderBook), 1);

    scheduler.advance(SECOND);
    assert_eq!(source.count(Call::OrderBook), 2);
    assert_eq!(source.count(Call::FundingRate), 1);

    scheduler.advance(25 * SECOND);
    // 30 s in: book at 0,5,..,30, metrics at 0,15,30
    assert_eq!(source.count(Call::OrderBook), 7);
    assert_eq!(source.count(Call::FundingRate), 3);
    assert_eq!(source.count(Call::LongShort), 3);
    assert_eq!(source.count(Call::OpenInterest), 3);
    assert_eq!(source.count(Call::SpotPrice), 3);
}

#[test]
fn funding_failure_leaves_siblings_alone() {
    let (scheduler, source, sink) = setup();
    source.fail(Call::FundingRate);
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let _handle = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();

    assert!(sink.last_funding_rate().is_failed());
    assert!(sink.last_long_short().ready().is_some());
    assert_eq!(sink.last_open_interest(), MetricSlot::Ready(OpenInterestUsd(100_000.25)));
    assert!(sink.last_depth().ready().is_some());
}

#[test]
fn order_book_failure_leaves_metrics_alone() {
    let (scheduler, source, sink) = setup();
    source.fail(Call::OrderBook);
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let _handle = aggregator.activate(&scheduler);
    scheduler.advance(5 * SECOND);

    assert_eq!(sink.depth.borrow().len(), 2);
    assert!(sink.last_depth().is_failed());
    assert!(sink.last_funding_rate().ready().is_some());
    assert!(sink.last_long_short().ready().is_some());
    assert!(sink.last_open_interest().ready().is_some());
}

#[test]
fn open_interest_needs_both_calls() {
    for failing in [Call::OpenInterest, Call::SpotPrice] {
        let (scheduler, source, sink) = setup();
        source.fail(failing);
        let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
        let _handle = aggregator.activate(&scheduler);
        scheduler.run_until_stalled();

        assert!(sink.last_open_interest().is_failed(), "{failing:?}");
        assert!(sink.last_funding_rate().ready().is_some());
    }
}

#[test]
fn open_interest_is_rounded_notional() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source, sink.clone(), &DashboardConfig::default());
    let _handle = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();

    let value = sink.last_open_interest().ready().copied().expect("ready");
    assert!((value.0 - (OPEN_INTEREST_BTC * SPOT_PRICE * 100.0).round() / 100.0).abs() < 1e-9);
}

#[test]
fn failed_refresh_replaces_stale_value_and_recovers() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let _handle = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();
    assert!(sink.last_long_short().ready().is_some());

    source.fail(Call::LongShort);
    scheduler.advance(15 * SECOND);
    assert!(sink.last_long_short().is_failed());

    source.recover(Call::LongShort);
    scheduler.advance(15 * SECOND);
    assert!(sink.last_long_short().ready().is_some());
    // never back to Loading
    assert!(sink.long_short.borrow().iter().all(|s| !matches!(s, MetricSlot::Loading)));
}

#[test]
fn stop_cancels_both_timers() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let mut handle = aggregator.activate(&scheduler);
    scheduler.advance(5 * SECOND);
    let calls = source.total_calls();
    let ticks = scheduler.ticks();

    handle.stop();
    assert!(!handle.is_active());
    scheduler.advance(60 * SECOND);

    assert_eq!(scheduler.live_timers(), 0);
    assert_eq!(scheduler.ticks(), ticks);
    assert_eq!(source.total_calls(), calls);
}

#[test]
fn dropping_the_handle_stops_polling() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink, &DashboardConfig::default());
    drop(aggregator.activate(&scheduler));
    scheduler.advance(30 * SECOND);

    // the immediate fetches still went out; nothing was scheduled after
    assert_eq!(source.count(Call::OrderBook), 1);
    assert_eq!(scheduler.live_timers(), 0);
}

#[test]
fn each_activation_owns_its_lifetime() {
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let first = aggregator.activate(&scheduler);
    let second = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();
    assert_eq!(scheduler.live_timers(), 4);

    drop(first);
    assert!(second.is_active());
    assert_eq!(scheduler.live_timers(), 2);

    let books = source.count(Call::OrderBook);
    let writes = sink.writes();
    scheduler.advance(30 * SECOND);

    // book at 5..=30 and metrics at 15 and 30, all written through
    assert_eq!(source.count(Call::OrderBook), books + 6);
    assert_eq!(sink.writes(), writes + 6 + 2 * 3);
}

#[test]
fn stopping_one_session_keeps_late_responses_of_the_other() {
    let (scheduler, source, sink) = setup();
    source.hold();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let mut stale = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();
    stale.stop();

    let _live = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();
    source.release();
    scheduler.run_until_stalled();

    // only the live session's depth, funding, long/short and open interest land
    assert_eq!(sink.writes(), 4);
}

#[test]
fn late_responses_after_teardown_are_dropped() {
    let (scheduler, source, sink) = setup();
    source.hold();
    let aggregator = MarketDataAggregator::new(source.clone(), sink.clone(), &DashboardConfig::default());
    let mut handle = aggregator.activate(&scheduler);
    scheduler.run_until_stalled();
    assert_eq!(source.count(Call::OrderBook), 1);
    assert_eq!(sink.writes(), 0);

    handle.stop();
    source.release();
    scheduler.run_until_stalled();

    assert_eq!(sink.writes(), 0);
}

#[test]
fn custom_periods_from_config() {
    let config = DashboardConfig::from_json(r#"{"order_book_refresh_ms": 1000, "metrics_refresh_ms": 2000}"#)
        .expect("valid config");
    let (scheduler, source, sink) = setup();
    let aggregator = MarketDataAggregator::new(source.clone(), sink, &config);
    let _handle = aggregator.activate(&scheduler);
    scheduler.advance(4 * SECOND);

    assert_eq!(source.count(Call::OrderBook), 5);
    assert_eq!(source.count(Call::FundingRate), 3);
}
