use std::time::{Duration, Instant};

/// Paces ticks to the refresh rate and owns the decision to keep going.
///
/// Once cancelled, no further tick is ever handed out, so a loop driven by
/// [`FrameScheduler::poll`] cannot run a frame after teardown.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    started: Instant,
    next_tick: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(fps: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / fps.max(1);
        log::debug!("scheduler started at {fps} fps");
        Self {
            interval,
            started: now,
            next_tick: Some(now),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Stop before the next tick is requested.
    pub fn cancel(&mut self) {
        if self.next_tick.take().is_some() {
            log::debug!("scheduler cancelled");
        }
    }

    /// How long the host may block waiting for input before the next tick.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_tick.map(|at| at.saturating_duration_since(now))
    }

    /// Returns the elapsed show time when a tick is due, and books the next.
    ///
    /// Ticks that were missed are dropped rather than replayed, so a stall
    /// never causes a burst of catch-up frames.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let due = self.next_tick?;
        if now < due {
            return None;
        }
        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_tick = Some(next);
        Some(now.duration_since(self.started))
    }
}
