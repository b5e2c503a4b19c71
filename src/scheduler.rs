//! Timed Dismissal Scheduler
//!
//! Delayed UI effects (hiding a banner, finishing a login) are requested
//! through [`Scheduler`] instead of raw timers. The host fires them back
//! into the controller with `ViewController::on_deferred`.
//!
//! [`ManualScheduler`] is a virtual clock: nothing fires until the caller
//! advances it, so flows with multi-second delays run instantly.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// A delayed UI effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Hide the transient banner
    HideBanner,
    /// Close the login dialog and reload activities after a successful login
    CompleteLogin,
}

/// Source of cancellable delayed tasks
pub trait Scheduler {
    /// Arrange for `task` to be delivered after `delay`
    fn schedule(&self, delay: Duration, task: Deferred) -> TimerId;

    /// Drop a pending task; unknown or already-fired ids are ignored
    fn cancel(&self, id: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<T> {
    fn schedule(&self, delay: Duration, task: Deferred) -> TimerId {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id)
    }
}

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

#[derive(Debug, Clone, Copy)]
struct PendingTask {
    id: TimerId,
    due: Duration,
    task: Deferred,
}

/// Virtual-time scheduler; clones share one clock
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Move the clock forward and return the tasks that came due,
    /// earliest first (ties in scheduling order)
    pub fn advance(&self, by: Duration) -> Vec<Deferred> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let (mut due, rest): (Vec<PendingTask>, Vec<PendingTask>) =
            clock.pending.drain(..).partition(|p| p.due <= now);
        clock.pending = rest;

        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.task).collect()
    }

    /// Pending tasks with their remaining delay
    pub fn pending(&self) -> Vec<(Deferred, Duration)> {
        let clock = self.clock.borrow();
        let mut pending: Vec<PendingTask> = clock.pending.clone();
        pending.sort_by_key(|p| (p.due, p.id));
        pending
            .into_iter()
            .map(|p| (p.task, p.due.saturating_sub(clock.now)))
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        self.clock.borrow().pending.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Deferred) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = TimerId(clock.next_id);
        let due = clock.now + delay;
        clock.pending.push(PendingTask { id, due, task });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.clock.borrow_mut().pending.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_fires_before_due() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(5), Deferred::HideBanner);

        assert!(scheduler.advance(Duration::from_millis(4999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![Deferred::HideBanner]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_due_order() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(5), Deferred::HideBanner);
        scheduler.schedule(Duration::from_millis(1500), Deferred::CompleteLogin);

        assert_eq!(
            scheduler.advance(Duration::from_secs(10)),
            vec![Deferred::CompleteLogin, Deferred::HideBanner]
        );
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let scheduler = ManualScheduler::new();
        let id = scheduler.schedule(Duration::from_secs(1), Deferred::HideBanner);
        scheduler.cancel(id);
        scheduler.cancel(TimerId(999));

        assert!(scheduler.advance(Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn test_pending_reports_remaining() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(5), Deferred::HideBanner);
        scheduler.advance(Duration::from_secs(2));

        assert_eq!(
            scheduler.pending(),
            vec![(Deferred::HideBanner, Duration::from_secs(3))]
        );
        assert_eq!(scheduler.now(), Duration::from_secs(2));
    }
}
