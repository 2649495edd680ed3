//! Perpetual futures cards on the team dashboard.

use super::scheduler::{ActivityFlag, PollingHandle, TaskScheduler, spawn_repeating};
use crate::config::FuturesConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{MetricSlot, PerpetualQuote, PerpetualSource, Symbol};
use crate::{log_debug, log_warn};
use futures::FutureExt;
use std::rc::Rc;
use std::time::Duration;

const COMPONENT: LogComponent = LogComponent::Application("FuturesBoard");

pub trait FuturesSink {
    fn set_perpetuals(&self, slot: MetricSlot<Vec<PerpetualQuote>>);
}

/// Polls every configured perpetual as one batch
pub struct FuturesBoard<S, K> {
    source: S,
    sink: K,
    symbols: Vec<Symbol>,
    period: Duration,
}

impl<S, K> FuturesBoard<S, K>
where
    S: PerpetualSource + 'static,
    K: FuturesSink + 'static,
{
    pub fn new(source: S, sink: K, config: &FuturesConfig) -> Rc<Self> {
        Rc::new(Self { source, sink, symbols: config.symbols.clone(), period: config.period() })
    }

    pub fn activate<T: TaskScheduler>(self: &Rc<Self>, scheduler: &T) -> PollingHandle<T::Timer> {
        let active = ActivityFlag::default();
        let (this, flag) = (Rc::clone(self), active.clone());
        scheduler.spawn(async move { this.refresh(&flag).await }.boxed_local());

        let (board, board_flag) = (Rc::clone(self), active.clone());
        let timer = spawn_repeating(scheduler, self.period, move || {
            let (this, flag) = (Rc::clone(&board), board_flag.clone());
            async move { this.refresh(&flag).await }
        });
        log_debug!(COMPONENT, "polling {} perpetuals every {:?}", self.symbols.len(), self.period);
        PollingHandle::new(vec![timer], active)
    }

    pub async fn refresh(&self, active: &ActivityFlag) {
        let result = self.source.perpetuals(&self.symbols).await;
        if let Err(e) = &result {
            log_warn!(COMPONENT, "perpetuals fetch failed: {e}");
        }
        if !active.is_active() {
            log_debug!(COMPONENT, "dropping perpetuals response that arrived after teardown");
            return;
        }
        self.sink.set_perpetuals(MetricSlot::from_result(result));
    }
}
