use crate::application::scheduler::TaskScheduler;
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;
use std::time::Duration;

/// Event-loop scheduler: `spawn_local` tasks and `setInterval` timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl TaskScheduler for BrowserScheduler {
    /// `clearInterval` runs when the handle is dropped
    type Timer = Interval;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || tick())
    }
}
