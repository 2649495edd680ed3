//! Timer and task seam between the pollers and the event loop.

use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Spawns local tasks and repeating timers.
///
/// Dropping a `Timer` cancels it; no tick fires afterwards.
pub trait TaskScheduler: Clone + 'static {
    type Timer: 'static;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Timer;
}

/// Shared on/off switch checked before every state write
#[derive(Debug, Clone)]
pub struct ActivityFlag(Rc<Cell<bool>>);

impl Default for ActivityFlag {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl ActivityFlag {
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, active: bool) {
        self.0.set(active);
    }
}

/// Schedule `make_task` to be spawned on every tick of `period`
pub fn spawn_repeating<T, F, Fut>(scheduler: &T, period: Duration, make_task: F) -> T::Timer
where
    T: TaskScheduler,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let spawner = scheduler.clone();
    scheduler.every(period, Box::new(move || spawner.spawn(make_task().boxed_local())))
}

/// Owns the timers of one activated poller. Stopping (or dropping) cancels
/// every timer and flips the activity flag so in-flight responses are
/// discarded when they land.
pub struct PollingHandle<H> {
    timers: Vec<H>,
    active: ActivityFlag,
}

impl<H> PollingHandle<H> {
    pub fn new(timers: Vec<H>, active: ActivityFlag) -> Self {
        Self { timers, active }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_active() && !self.timers.is_empty()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn stop(&mut self) {
        self.active.set(false);
        self.timers.clear();
    }
}

impl<H> Drop for PollingHandle<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
