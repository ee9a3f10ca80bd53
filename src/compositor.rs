// Alpha-blended layers always come before the additive ones.

use crate::color::Rgb;
use crate::config::Settings;
use crate::constants::*;
use crate::entities::{Constellation, Particle, Rocket, Star};
use crate::physics::star_opacity;
use crate::surface::{BlendMode, Surface};

/// Read-only view of the pools handed to every layer.
pub struct Scene<'a> {
    pub stars: &'a [Star],
    pub constellations: &'a [Constellation],
    pub rockets: &'a [Rocket],
    pub particles: &'a [Particle],
    /// Seconds since the show started, for twinkling.
    pub elapsed: f32,
}

pub trait Layer {
    fn name(&self) -> &'static str;
    fn blend(&self) -> BlendMode;
    fn enabled(&self, settings: &Settings) -> bool;
    fn draw(&self, scene: &Scene<'_>, settings: &Settings, surface: &mut Surface);
}

/// Fades or clears whatever the previous frame left behind.
pub struct Backdrop;

impl Layer for Backdrop {
    fn name(&self) -> &'static str {
        "backdrop"
    }

    fn blend(&self) -> BlendMode {
        BlendMode::SourceOver
    }

    fn enabled(&self, _settings: &Settings) -> bool {
        true
    }

    fn draw(&self, _scene: &Scene<'_>, settings: &Settings, surface: &mut Surface) {
        if settings.trail_effect {
            surface.fade(TRAIL_FADE_ALPHA);
        } else {
            surface.clear();
        }
    }
}

pub struct Starfield;

impl Layer for Starfield {
    fn name(&self) -> &'static str {
        "starfield"
    }

    fn blend(&self) -> BlendMode {
        BlendMode::SourceOver
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.starfield
    }

    fn draw(&self, scene: &Scene<'_>, _settings: &Settings, surface: &mut Surface) {
        let white = Rgb::new(1.0, 1.0, 1.0);
        for star in scene.stars {
            let opacity = star_opacity(star, scene.elapsed);
            surface.fill_circle(star.x, star.y, star.size / 2.0, white, opacity, self.blend());
        }
    }
}

pub struct Constellations;

impl Layer for Constellations {
    fn name(&self) -> &'static str {
        "constellations"
    }

    fn blend(&self) -> BlendMode {
        BlendMode::SourceOver
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.starfield && settings.show_constellations
    }

    fn draw(&self, scene: &Scene<'_>, _settings: &Settings, surface: &mut Surface) {
        let color = Rgb::from_u8(CONSTELLATION_COLOR);
        for constellation in scene.constellations {
            let line_alpha = constellation.alpha * CONSTELLATION_LINE_ALPHA;
            for pair in constellation.points.windows(2) {
                surface.dashed_line(pair[0], pair[1], CONSTELLATION_DASH, color, line_alpha, self.blend());
            }
            for &(x, y) in &constellation.points {
                surface.fill_circle(x, y, CONSTELLATION_DOT_RADIUS, color, constellation.alpha, self.blend());
            }
        }
    }
}

pub struct Rockets;

impl Layer for Rockets {
    fn name(&self) -> &'static str {
        "rockets"
    }

    fn blend(&self) -> BlendMode {
        BlendMode::Lighter
    }

    fn enabled(&self, _settings: &Settings) -> bool {
        true
    }

    fn draw(&self, scene: &Scene<'_>, _settings: &Settings, surface: &mut Surface) {
        for rocket in scene.rockets {
            let color = Rgb::from_hsl(rocket.hue, 1.0, 0.75);
            surface.fill_ellipse(
                rocket.x,
                rocket.y,
                ROCKET_RADIUS_X,
                ROCKET_RADIUS_Y,
                color,
                1.0,
                self.blend(),
            );
        }
    }
}

pub struct Particles;

impl Layer for Particles {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn blend(&self) -> BlendMode {
        BlendMode::Lighter
    }

    fn enabled(&self, _settings: &Settings) -> bool {
        true
    }

    fn draw(&self, scene: &Scene<'_>, _settings: &Settings, surface: &mut Surface) {
        for particle in scene.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.size,
                particle.color,
                particle.alpha,
                self.blend(),
            );
        }
    }
}

pub struct Compositor {
    layers: Vec<Box<dyn Layer>>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self {
            layers: vec![
                Box::new(Backdrop),
                Box::new(Starfield),
                Box::new(Constellations),
                Box::new(Rockets),
                Box::new(Particles),
            ],
        }
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> impl Iterator<Item = &dyn Layer> {
        self.layers.iter().map(|layer| layer.as_ref())
    }

    pub fn enabled_layers<'s>(&'s self, settings: &'s Settings) -> impl Iterator<Item = &'s dyn Layer> {
        self.layers().filter(move |layer| layer.enabled(settings))
    }

    /// Draw every enabled layer in order.
    pub fn compose(&self, scene: &Scene<'_>, settings: &Settings, surface: &mut Surface) {
        for layer in self.enabled_layers(settings) {
            layer.draw(scene, settings, surface);
        }
    }
}
