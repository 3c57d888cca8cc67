use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Timer capability handed to the page controller.
///
/// Cancelling a handle that already fired or was never issued is a no-op.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerHandle;
    fn cancel(&self, handle: TimerHandle);
}

#[cfg(test)]
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

enum BrowserTimer {
    Once(Timeout),
    Repeating(Interval),
}

/// Real browser timers. Dropping a `Timeout`/`Interval` clears it on the JS
/// side, so cancelling is just removing it from the map.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<HashMap<TimerHandle, BrowserTimer>>>,
    next_id: Rc<Cell<u64>>,
}

impl BrowserScheduler {
    fn issue(&self) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TimerHandle(id)
    }

    fn clamp(duration: Duration) -> u32 {
        u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let handle = self.issue();
        // Spent timeouts stay in the map until cancelled; removing one from
        // inside its own callback would free the closure while it runs.
        let timeout = Timeout::new(Self::clamp(delay), callback);
        self.timers
            .borrow_mut()
            .insert(handle, BrowserTimer::Once(timeout));
        handle
    }

    fn schedule_repeating(&self, period: Duration, mut callback: Box<dyn FnMut()>) -> TimerHandle {
        let handle = self.issue();
        let interval = Interval::new(Self::clamp(period), move || callback());
        self.timers
            .borrow_mut()
            .insert(handle, BrowserTimer::Repeating(interval));
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let removed = self.timers.borrow_mut().remove(&handle);
        match removed {
            Some(BrowserTimer::Once(timeout)) => drop(timeout),
            Some(BrowserTimer::Repeating(interval)) => drop(interval),
            None => log::trace!("cancel on unknown timer {:?}", handle),
        }
    }
}

#[cfg(test)]
enum Task {
    Once(Box<dyn FnOnce()>),
    Repeating { period: u64, callback: Box<dyn FnMut()> },
}

#[cfg(test)]
struct Entry {
    due: u64,
    task: Task,
}

#[cfg(test)]
#[derive(Default)]
struct ClockInner {
    now: u64,
    next_id: u64,
    timers: BTreeMap<u64, Entry>,
    firing: Option<u64>,
    cancelled_while_firing: bool,
}

/// Deterministic clock counting whole milliseconds. Nothing fires until the
/// owner calls [`VirtualClock::advance`] or [`VirtualClock::advance_to`].
///
/// Clones share the same timeline, so a test can keep one handle while the
/// controller owns another.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[cfg(test)]
impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(millis(by));
        self.advance_to(target);
    }

    /// Fires every timer due at or before `target`, ordered by due time and
    /// then by registration order.
    pub fn advance_to(&self, target: u64) {
        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .timers
                    .iter()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(id, entry)| (entry.due, **id))
                    .map(|(id, _)| *id)
            };
            let Some(id) = next else { break };

            let entry = {
                let mut inner = self.inner.borrow_mut();
                let Some(entry) = inner.timers.remove(&id) else { continue };
                inner.now = entry.due;
                inner.firing = Some(id);
                inner.cancelled_while_firing = false;
                entry
            };

            match entry.task {
                Task::Once(callback) => {
                    callback();
                    self.inner.borrow_mut().firing = None;
                }
                Task::Repeating { period, mut callback } => {
                    callback();
                    let mut inner = self.inner.borrow_mut();
                    inner.firing = None;
                    if !inner.cancelled_while_firing {
                        inner.timers.insert(
                            id,
                            Entry {
                                due: entry.due + period,
                                task: Task::Repeating { period, callback },
                            },
                        );
                    }
                }
            }
        }

        let mut inner = self.inner.borrow_mut();
        if inner.now < target {
            inner.now = target;
        }
    }

    fn register(&self, delay: u64, task: Task) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now.saturating_add(delay);
        inner.timers.insert(id, Entry { due, task });
        TimerHandle(id)
    }
}

#[cfg(test)]
impl Scheduler for VirtualClock {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.register(millis(delay), Task::Once(callback))
    }

    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerHandle {
        // a zero period would never let the clock move forward
        let period = millis(period).max(1);
        self.register(period, Task::Repeating { period, callback })
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut inner = self.inner.borrow_mut();
        if inner.timers.remove(&handle.0).is_none() && inner.firing == Some(handle.0) {
            inner.cancelled_while_firing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<(u64, &'static str)>>>, VirtualClock) {
        (Rc::new(RefCell::new(Vec::new())), VirtualClock::new())
    }

    #[test]
    fn once_fires_exactly_once_at_its_due_time() {
        let (log, clock) = recorder();
        let (sink, time) = (log.clone(), clock.clone());
        clock.schedule_once(
            Duration::from_millis(2000),
            Box::new(move || sink.borrow_mut().push((time.now(), "once"))),
        );

        clock.advance(Duration::from_millis(1999));
        assert!(log.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        clock.advance(Duration::from_secs(60));
        assert_eq!(*log.borrow(), vec![(2000, "once")]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn repeating_rearms_and_orders_by_due_time() {
        let (log, clock) = recorder();
        let (fast, fast_time) = (log.clone(), clock.clone());
        let (slow, slow_time) = (log.clone(), clock.clone());
        clock.schedule_repeating(
            Duration::from_millis(300),
            Box::new(move || slow.borrow_mut().push((slow_time.now(), "slow"))),
        );
        clock.schedule_repeating(
            Duration::from_millis(200),
            Box::new(move || fast.borrow_mut().push((fast_time.now(), "fast"))),
        );

        clock.advance_to(600);
        assert_eq!(
            *log.borrow(),
            vec![
                (200, "fast"),
                (300, "slow"),
                (400, "fast"),
                (600, "slow"),
                (600, "fast"),
            ]
        );
    }

    #[test]
    fn cancel_stops_future_firings() {
        let (log, clock) = recorder();
        let sink = log.clone();
        let handle = clock.schedule_repeating(
            Duration::from_millis(100),
            Box::new(move || sink.borrow_mut().push((0, "tick"))),
        );

        clock.advance_to(250);
        clock.cancel(handle);
        clock.advance_to(10_000);

        assert_eq!(log.borrow().len(), 2);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), 10_000);
    }

    #[test]
    fn repeating_timer_can_cancel_itself() {
        let (log, clock) = recorder();
        let slot: Rc<Cell<Option<TimerHandle>>> = Rc::new(Cell::new(None));
        let (sink, own, timeline) = (log.clone(), slot.clone(), clock.clone());
        let handle = clock.schedule_repeating(
            Duration::from_millis(10),
            Box::new(move || {
                sink.borrow_mut().push((timeline.now(), "tick"));
                if let Some(handle) = own.get() {
                    timeline.cancel(handle);
                }
            }),
        );
        slot.set(Some(handle));

        clock.advance_to(100);
        assert_eq!(*log.borrow(), vec![(10, "tick")]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancelling_unknown_handle_is_a_no_op() {
        let clock = VirtualClock::new();
        clock.cancel(TimerHandle(42));
        assert_eq!(clock.pending(), 0);
    }
}
