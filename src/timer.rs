//! Simulated millisecond clock with repeating and one-shot timers.
//!
//! Time only moves when the owner advances the clock. Timers are plain
//! values: cancelling one is dropping it. Each timer remembers the order in
//! which it was armed so that timers falling due at the same instant fire in
//! the order they were scheduled, like callbacks on a browser event loop.

#[derive(Debug, Default, Clone)]
pub struct Clock {
    now_ms: u64,
    armed: u64,
}

/// Repeating timer firing every `period_ms`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Interval {
    period_ms: u64,
    due_ms: u64,
    order: u64,
}

/// One-shot timer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Timeout {
    due_ms: u64,
    order: u64,
}

/// Sort key of a pending timer: due time, then arming order.
pub type Deadline = (u64, u64);

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arms a repeating timer whose first firing is one period from now.
    pub fn interval(&mut self, period_ms: u64) -> Interval {
        debug_assert!(period_ms > 0, "interval period must be positive");
        self.armed += 1;
        Interval {
            period_ms,
            due_ms: self.now_ms + period_ms,
            order: self.armed,
        }
    }

    pub fn timeout(&mut self, delay_ms: u64) -> Timeout {
        self.armed += 1;
        Timeout {
            due_ms: self.now_ms + delay_ms,
            order: self.armed,
        }
    }

    /// Moves the clock forward. Never moves backwards.
    pub fn advance_to(&mut self, t_ms: u64) {
        self.now_ms = self.now_ms.max(t_ms);
    }
}

impl Interval {
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn deadline(&self) -> Deadline {
        (self.due_ms, self.order)
    }

    /// Schedules the next firing one period after the current one.
    pub fn rearm(&mut self) {
        self.due_ms += self.period_ms;
    }
}

impl Timeout {
    pub fn deadline(&self) -> Deadline {
        (self.due_ms, self.order)
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }
}

/// Earliest of the given deadlines that falls at or before `limit_ms`.
pub fn earliest_due<I>(deadlines: I, limit_ms: u64) -> Option<Deadline>
where
    I: IntoIterator<Item = Option<Deadline>>,
{
    deadlines
        .into_iter()
        .flatten()
        .filter(|(due, _)| *due <= limit_ms)
        .min()
}
