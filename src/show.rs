use crate::background::{generate_constellations, generate_stars};
use crate::compositor::{Compositor, Scene};
use crate::config::Settings;
use crate::entities::{Constellation, Particle, Rocket, Star};
use crate::physics;
use crate::spawn::{AutoLauncher, SpawnQueue, launch_rocket};
use crate::surface::Surface;
use std::time::Duration;

pub struct Show {
    scale: f32,
    surface: Option<Surface>,
    stars: Vec<Star>,
    constellations: Vec<Constellation>,
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    queue: SpawnQueue,
    launcher: AutoLauncher,
    compositor: Compositor,
}

impl Show {
    /// An unmounted show; ticks do nothing until [`Show::resize`] is called.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            surface: None,
            stars: Vec::new(),
            constellations: Vec::new(),
            rockets: Vec::new(),
            particles: Vec::new(),
            queue: SpawnQueue::new(),
            launcher: AutoLauncher::default(),
            compositor: Compositor::new(),
        }
    }

    /// Mount or resize onto a `cols` x `rows` pixel raster and rebuild the
    /// background for the new logical size. Rockets and particles carry over.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        match &mut self.surface {
            Some(surface) => surface.resize(cols, rows),
            None => self.surface = Some(Surface::new(cols, rows, self.scale)),
        }
        let (width, height) = (cols as f32 * self.scale, rows as f32 * self.scale);
        self.stars = generate_stars(width, height);
        self.constellations = generate_constellations(width, height);
        log::debug!(
            "surface {cols}x{rows} px ({width}x{height} logical): {} stars, {} constellations",
            self.stars.len(),
            self.constellations.len()
        );
    }

    /// Queue an ignition at logical `(x, y)`; it takes effect next tick.
    pub fn request_spawn(&mut self, x: f32, y: f32) {
        self.queue.push(x, y);
    }

    /// Advance every pool one step and draw the frame.
    ///
    /// Returns `false` without doing anything if no surface is mounted yet.
    pub fn frame(&mut self, settings: &Settings, elapsed: Duration) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let (width, height) = (surface.width(), surface.height());
        let elapsed = elapsed.as_secs_f32();

        if settings.auto_launch {
            if let Some((x, y)) = self.launcher.poll(elapsed, width, height) {
                self.queue.push(x, y);
            }
        }
        for (x, y) in self.queue.drain() {
            if settings.launch_rockets {
                self.rockets.push(launch_rocket(x, y, height));
            } else {
                physics::create_burst(&mut self.particles, x, y, settings, None);
            }
        }

        physics::update_stars(&mut self.stars, width, height);
        physics::update_constellations(&mut self.constellations, width);
        physics::integrate_particles(&mut self.particles, settings);
        physics::advance_rockets(&mut self.rockets, &mut self.particles, settings);

        let scene = Scene {
            stars: &self.stars,
            constellations: &self.constellations,
            rockets: &self.rockets,
            particles: &self.particles,
            elapsed,
        };
        self.compositor.compose(&scene, settings, surface);
        true
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pending_spawns(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_frame_is_a_no_op() {
        let mut show = Show::new(8.0);
        show.request_spawn(10.0, 10.0);
        assert!(!show.frame(&Settings::default(), Duration::ZERO));
        assert!(show.rockets().is_empty());
        assert_eq!(show.pending_spawns(), 1);
    }

    #[test]
    fn spawn_becomes_a_rocket_not_a_burst() {
        let mut show = Show::new(8.0);
        show.resize(100, 75);
        show.request_spawn(400.0, 200.0);
        assert!(show.frame(&Settings::default(), Duration::ZERO));
        assert_eq!(show.rockets().len(), 1);
        assert_eq!(show.pending_spawns(), 0);
        assert!(show.particles().len() <= 1, "only a trail spark may exist");
        assert_eq!(show.rockets()[0].target_y, 200.0);
    }

    #[test]
    fn direct_bursts_when_rockets_are_off() {
        let settings = Settings {
            launch_rockets: false,
            particle_count: 30,
            ..Settings::default()
        };
        let mut show = Show::new(8.0);
        show.resize(100, 75);
        show.request_spawn(400.0, 200.0);
        show.frame(&settings, Duration::ZERO);
        assert!(show.rockets().is_empty());
        assert_eq!(show.particles().len(), 30);
    }

    #[test]
    fn settings_change_keeps_pools() {
        let mut show = Show::new(8.0);
        show.resize(100, 75);
        show.request_spawn(400.0, 100.0);
        show.frame(&Settings::default(), Duration::ZERO);
        let plain = Settings {
            trail_effect: false,
            starfield: false,
            ..Settings::default()
        };
        show.frame(&plain, Duration::from_millis(16));
        assert_eq!(show.rockets().len(), 1);
    }

    #[test]
    fn resize_replaces_background_but_not_fireworks() {
        let mut show = Show::new(1.0);
        show.resize(800, 600);
        show.request_spawn(400.0, 10.0);
        show.frame(&Settings::default(), Duration::ZERO);
        show.resize(1600, 1200);
        assert_eq!(show.stars().len(), 640);
        assert_eq!(show.rockets().len(), 1);
        let surface = show.surface().unwrap();
        assert_eq!((surface.cols(), surface.rows()), (1600, 1200));
    }
}
