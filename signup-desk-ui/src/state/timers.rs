//! Browser Timers
//!
//! [`Scheduler`] backed by `setTimeout`. Each live timer owns its gloo
//! `Timeout`; cancelling drops it, which clears the browser timer.

use gloo_timers::callback::Timeout;
use signup_desk::{Deferred, Scheduler, TimerId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Delivers deferred tasks through `dispatch` when their timeout fires
pub struct GlooScheduler {
    next_id: Cell<u64>,
    timers: RefCell<HashMap<TimerId, Timeout>>,
    /// Ids whose callbacks already ran; their handles are dropped lazily
    /// because a timeout must not be dropped from inside its own callback
    fired: Rc<RefCell<Vec<TimerId>>>,
    dispatch: Rc<dyn Fn(Deferred)>,
}

impl GlooScheduler {
    pub fn new(dispatch: impl Fn(Deferred) + 'static) -> Self {
        Self {
            next_id: Cell::new(0),
            timers: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
            dispatch: Rc::new(dispatch),
        }
    }

    fn prune_fired(&self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        let mut timers = self.timers.borrow_mut();
        for id in fired {
            timers.remove(&id);
        }
    }

    /// Number of timers that have neither fired nor been cancelled
    #[cfg(test)]
    fn live_timers(&self) -> usize {
        self.prune_fired();
        self.timers.borrow().len()
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Deferred) -> TimerId {
        self.prune_fired();

        let id = TimerId(self.next_id.get() + 1);
        self.next_id.set(id.0);

        let fired = Rc::clone(&self.fired);
        let dispatch = Rc::clone(&self.dispatch);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        let timeout = Timeout::new(millis, move || {
            fired.borrow_mut().push(id);
            dispatch(task);
        });

        self.timers.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.prune_fired();
        // Dropping the handle clears the browser timer
        drop(self.timers.borrow_mut().remove(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_fires_after_delay() {
        let delivered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&delivered);
        let scheduler = GlooScheduler::new(move |task| sink.borrow_mut().push(task));

        scheduler.schedule(Duration::from_millis(10), Deferred::HideBanner);
        TimeoutFuture::new(50).await;

        assert_eq!(*delivered.borrow(), vec![Deferred::HideBanner]);
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_never_fires() {
        let delivered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&delivered);
        let scheduler = GlooScheduler::new(move |task| sink.borrow_mut().push(task));

        let id = scheduler.schedule(Duration::from_millis(10), Deferred::CompleteLogin);
        scheduler.cancel(id);
        TimeoutFuture::new(50).await;

        assert!(delivered.borrow().is_empty());
    }
}
