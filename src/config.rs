//! User-tunable settings, optionally loaded from a TOML file.
//!
//! A [`Settings`] value is the snapshot the simulation reads every tick. The
//! core never writes to it; the binary owns it and flips fields in response
//! to key presses. Missing keys in a file fall back to [`Settings::default`],
//! so a config can override just the values you care about:
//!
//! ```toml
//! particle_count = 200
//! trail_effect = false
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Particles created per burst.
    pub particle_count: usize,
    /// Downward acceleration added to particles each frame.
    pub gravity: f32,
    /// Velocity multiplier applied to particles each frame; expected in (0, 1].
    pub friction: f32,
    /// Maximum launch speed of a burst particle.
    pub spread: f32,
    /// Base alpha lost per frame; each particle draws its own from 0.5x..1.5x.
    pub decay_rate: f32,
    /// Kept for compatibility with older config files; nothing reads it.
    pub hue_variance: f32,
    /// Largest particle radius.
    pub base_size: f32,
    pub trail_effect: bool,
    pub starfield: bool,
    pub show_constellations: bool,
    /// Spawn requests launch a rocket when set, otherwise they burst in place.
    pub launch_rockets: bool,
    /// Fire rockets on a timer without any input.
    pub auto_launch: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: 120,
            gravity: 0.06,
            friction: 0.97,
            spread: 8.0,
            decay_rate: 0.012,
            hue_variance: 30.0,
            base_size: 2.5,
            trail_effect: true,
            starfield: true,
            show_constellations: true,
            launch_rockets: true,
            auto_launch: false,
        }
    }
}

impl Settings {
    /// Read settings from a TOML file. Unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Particle count nudged by `delta`, saturating at zero.
    pub fn adjust_particle_count(&mut self, delta: isize) {
        self.particle_count = self.particle_count.saturating_add_signed(delta);
    }
}
