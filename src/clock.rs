use std::{thread::sleep, time::{Duration, Instant}};

pub trait Clock {
    /// Blocks until the next tick is due.
    fn wait_tick(&mut self);
}

/// Paces the loop at a fixed number of ticks per second. A tick that ran
/// long is not made up for; the next one just starts right away.
pub struct FixedClock {
    period: Duration,
    last_tick: Instant,
}

impl FixedClock {
    pub fn new(ticks_per_second: u32) -> Self {
        FixedClock {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: Instant::now(),
        }
    }
}

impl Clock for FixedClock {
    fn wait_tick(&mut self) {
        let due = self.last_tick + self.period;
        let now = Instant::now();

        if due > now {
            sleep(due - now);
        }

        self.last_tick = Instant::now();
    }
}
