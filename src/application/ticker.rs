use super::scheduler::{ActivityFlag, PollingHandle, TaskScheduler, spawn_repeating};
use crate::config::TickerConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{AssetId, AssetQuote, MetricSlot, PriceIndexSource};
use crate::{log_debug, log_warn};
use futures::FutureExt;
use std::rc::Rc;
use std::time::Duration;

const COMPONENT: LogComponent = LogComponent::Application("PriceTicker");

pub trait TickerSink {
    fn set_quotes(&self, slot: MetricSlot<Vec<AssetQuote>>);
}

/// Home-page price strip, refreshed on a fixed period
pub struct PriceTicker<S, K> {
    source: S,
    sink: K,
    assets: Vec<AssetId>,
    period: Duration,
}

impl<S, K> PriceTicker<S, K>
where
    S: PriceIndexSource + 'static,
    K: TickerSink + 'static,
{
    pub fn new(source: S, sink: K, config: &TickerConfig) -> Rc<Self> {
        Rc::new(Self { source, sink, assets: config.assets.clone(), period: config.period() })
    }

    pub fn activate<T: TaskScheduler>(self: &Rc<Self>, scheduler: &T) -> PollingHandle<T::Timer> {
        let active = ActivityFlag::default();
        let (this, flag) = (Rc::clone(self), active.clone());
        scheduler.spawn(async move { this.refresh(&flag).await }.boxed_local());

        let (ticker, ticker_flag) = (Rc::clone(self), active.clone());
        let timer = spawn_repeating(scheduler, self.period, move || {
            let (this, flag) = (Rc::clone(&ticker), ticker_flag.clone());
            async move { this.refresh(&flag).await }
        });
        PollingHandle::new(vec![timer], active)
    }

    pub async fn refresh(&self, active: &ActivityFlag) {
        let result = self.source.quotes(&self.assets).await;
        if let Err(e) = &result {
            log_warn!(COMPONENT, "price index fetch failed: {e}");
        }
        if !active.is_active() {
            log_debug!(COMPONENT, "dropping price index response that arrived after teardown");
            return;
        }
        self.sink.set_quotes(MetricSlot::from_result(result));
    }
}
