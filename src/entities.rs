use crate::color::Rgb;
use crate::constants::DEAD_ALPHA;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining opacity; the particle dies once this reaches zero.
    pub alpha: f32,
    pub color: Rgb,
    pub size: f32,
    /// Alpha lost per frame.
    pub decay: f32,
}

impl Particle {
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= DEAD_ALPHA
    }
}

#[derive(Debug, Clone)]
pub struct Rocket {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Altitude at which the rocket bursts.
    pub target_y: f32,
    pub hue: f32,
}

impl Rocket {
    pub fn has_arrived(&self) -> bool {
        self.y <= self.target_y
    }
}

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub max_opacity: f32,
    pub twinkle_phase: f32,
    /// Radians per second.
    pub twinkle_speed: f32,
}

#[derive(Debug, Clone)]
pub struct Constellation {
    pub name: &'static str,
    /// Star points in drawing order; lines join consecutive points.
    pub points: Vec<(f32, f32)>,
    pub vx: f32,
    pub vy: f32,
    pub alpha: f32,
    /// Horizontal extent of the shape, used to wrap it off-screen.
    pub pattern_width: f32,
}
