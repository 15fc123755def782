//! Debounced task scheduling with an injectable clock.
//!
//! The component never sleeps or spawns timers itself. It asks a
//! [`Scheduler`] to fire a [`TaskKey`] after a delay, and the host calls
//! [`Scheduler::take_due`] (through [`LogoComponent::poll`]) from its event
//! loop. Scheduling a key that is already pending replaces its deadline, so a
//! burst of requests collapses into one.
//!
//! [`LogoComponent::poll`]: crate::LogoComponent::poll

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant, TryFromFloatSecsError};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves the clock to `to`. Time never goes backwards.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }

    /// Moves the clock to a host timestamp in milliseconds, such as the one
    /// `requestAnimationFrame` passes. Negative timestamps count as zero.
    pub fn set_millis(&self, ms: f64) -> Result<(), TryFromFloatSecsError> {
        let ms = if ms < 0.0 { 0.0 } else { ms };
        self.set(Duration::try_from_secs_f64(ms / 1000.0)?);
        Ok(())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Work the component can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Resize the canvas to the last observed host size and redraw.
    Resize,
}

pub trait Scheduler {
    /// Fires `key` once `delay` has passed, replacing any pending deadline
    /// for the same key.
    fn schedule_debounced(&mut self, key: TaskKey, delay: Duration);

    /// Drops a pending `key`. Returns whether one was pending.
    fn cancel(&mut self, key: TaskKey) -> bool;

    fn is_pending(&self, key: TaskKey) -> bool;

    /// Removes and returns every key whose deadline has passed, earliest
    /// first.
    fn take_due(&mut self) -> Vec<TaskKey>;
}

/// A [`Scheduler`] that keeps one deadline per key.
#[derive(Debug, Clone, Default)]
pub struct TimerScheduler<C = SystemClock> {
    clock: C,
    deadlines: HashMap<TaskKey, Duration>,
}

impl<C: Clock> TimerScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            deadlines: HashMap::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time until the next deadline, if any task is pending.
    pub fn next_due_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.deadlines
            .values()
            .min()
            .map(|deadline| deadline.saturating_sub(now))
    }
}

impl<C: Clock> Scheduler for TimerScheduler<C> {
    fn schedule_debounced(&mut self, key: TaskKey, delay: Duration) {
        let deadline = self.clock.now() + delay;
        self.deadlines.insert(key, deadline);
    }

    fn cancel(&mut self, key: TaskKey) -> bool {
        self.deadlines.remove(&key).is_some()
    }

    fn is_pending(&self, key: TaskKey) -> bool {
        self.deadlines.contains_key(&key)
    }

    fn take_due(&mut self) -> Vec<TaskKey> {
        let now = self.clock.now();
        let mut due: Vec<(Duration, TaskKey)> = self
            .deadlines
            .iter()
            .filter(|&(_, deadline)| *deadline <= now)
            .map(|(&key, &deadline)| (deadline, key))
            .collect();
        due.sort_by_key(|&(deadline, _)| deadline);
        for (_, key) in &due {
            self.deadlines.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn scheduler() -> (ManualClock, TimerScheduler<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), TimerScheduler::new(clock))
    }

    #[test]
    fn fires_after_delay() {
        let (clock, mut timers) = scheduler();
        timers.schedule_debounced(TaskKey::Resize, 200 * MS);

        clock.advance(199 * MS);
        assert!(timers.take_due().is_empty());
        assert_eq!(timers.next_due_in(), Some(MS));

        clock.advance(MS);
        assert_eq!(timers.take_due(), vec![TaskKey::Resize]);
        assert!(timers.take_due().is_empty());
        assert!(!timers.is_pending(TaskKey::Resize));
    }

    #[test]
    fn rescheduling_resets_deadline() {
        let (clock, mut timers) = scheduler();
        for _ in 0..10 {
            timers.schedule_debounced(TaskKey::Resize, 200 * MS);
            clock.advance(50 * MS);
            assert!(timers.take_due().is_empty());
        }
        clock.advance(150 * MS);
        assert_eq!(timers.take_due(), vec![TaskKey::Resize]);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let (clock, mut timers) = scheduler();
        timers.schedule_debounced(TaskKey::Resize, 10 * MS);
        assert!(timers.cancel(TaskKey::Resize));
        assert!(!timers.cancel(TaskKey::Resize));
        clock.advance(20 * MS);
        assert!(timers.take_due().is_empty());
        assert_eq!(timers.next_due_in(), None);
    }

    #[test]
    fn manual_clock_is_monotonic() {
        let clock = ManualClock::new();
        clock.set(100 * MS);
        clock.set(50 * MS);
        assert_eq!(clock.now(), 100 * MS);
    }

    #[test]
    fn manual_clock_takes_host_milliseconds() {
        let clock = ManualClock::new();
        clock.set_millis(1500.0).unwrap();
        assert_eq!(clock.now(), 1500 * MS);

        clock.set_millis(-20.0).unwrap();
        assert_eq!(clock.now(), 1500 * MS);

        assert!(clock.set_millis(f64::NAN).is_err());
        assert!(clock.set_millis(f64::INFINITY).is_err());
        assert!(clock.set_millis(1e30).is_err());
        assert_eq!(clock.now(), 1500 * MS);
    }
}
