use crate::color::random_hue;
use crate::constants::*;
use crate::entities::Rocket;

#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: Vec<(f32, f32)>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f32, y: f32) {
        self.pending.push((x, y));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand over every queued request in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, (f32, f32)> {
        self.pending.drain(..)
    }
}

/// A rocket rising from the bottom edge below `x` toward altitude `y`.
pub fn launch_rocket(x: f32, y: f32, surface_height: f32) -> Rocket {
    let speed = ROCKET_SPEED_MIN + fastrand::f32() * (ROCKET_SPEED_MAX - ROCKET_SPEED_MIN);
    Rocket {
        x,
        y: surface_height,
        vx: (fastrand::f32() * 2.0 - 1.0) * ROCKET_JITTER,
        vy: -speed,
        target_y: y,
        hue: random_hue(),
    }
}

/// Picks unattended launch points on a randomized timer.
#[derive(Debug)]
pub struct AutoLauncher {
    next_launch: f32,
}

impl Default for AutoLauncher {
    fn default() -> Self {
        Self { next_launch: 0.5 }
    }
}

impl AutoLauncher {
    /// Returns a launch point once the timer at `elapsed` seconds has expired.
    pub fn poll(&mut self, elapsed: f32, width: f32, height: f32) -> Option<(f32, f32)> {
        if elapsed < self.next_launch {
            return None;
        }
        self.next_launch =
            elapsed + AUTO_LAUNCH_INTERVAL_MIN + fastrand::f32() * AUTO_LAUNCH_INTERVAL_SPREAD;

        let x = width / 4.0 + fastrand::f32() * width / 2.0;
        let y = height / 6.0 + fastrand::f32() * (height * 2.0 / 5.0 - height / 6.0);
        Some((x, y))
    }
}
