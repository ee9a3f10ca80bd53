// Depth drives parallax: nearer stars are larger, brighter and faster.

use crate::constants::*;
use crate::entities::{Constellation, Star};
use std::f32::consts::TAU;

/// Named shapes in normalized 0..1 coordinates, in stroke order.
pub const PATTERNS: [(&str, &[(f32, f32)]); 6] = [
    (
        "Big Dipper",
        &[
            (0.00, 0.30),
            (0.18, 0.22),
            (0.33, 0.28),
            (0.48, 0.38),
            (0.55, 0.62),
            (0.85, 0.70),
            (1.00, 0.42),
            (0.48, 0.38),
        ],
    ),
    (
        "Cassiopeia",
        &[(0.00, 0.20), (0.25, 0.75), (0.50, 0.35), (0.75, 0.80), (1.00, 0.25)],
    ),
    ("Orion's Belt", &[(0.00, 0.60), (0.50, 0.45), (1.00, 0.30)]),
    (
        "Cygnus",
        &[
            (0.50, 0.00),
            (0.50, 0.40),
            (0.50, 1.00),
            (0.50, 0.40),
            (0.00, 0.30),
            (0.50, 0.40),
            (1.00, 0.50),
        ],
    ),
    (
        "Lyra",
        &[(0.40, 0.00), (0.55, 0.30), (0.30, 0.60), (0.70, 1.00), (0.95, 0.65), (0.55, 0.30)],
    ),
    ("Crux", &[(0.50, 0.00), (0.50, 1.00), (0.50, 0.55), (0.00, 0.45), (1.00, 0.50)]),
];

fn range(min: f32, max: f32) -> f32 {
    min + fastrand::f32() * (max - min)
}

/// One star per [`STAR_AREA_PER_STAR`] square units of surface.
pub fn star_count(width: f32, height: f32) -> usize {
    (width.max(0.0) * height.max(0.0) / STAR_AREA_PER_STAR) as usize
}

pub fn generate_stars(width: f32, height: f32) -> Vec<Star> {
    (0..star_count(width, height))
        .map(|_| {
            let depth = range(STAR_DEPTH_MIN, STAR_DEPTH_MAX);
            Star {
                x: fastrand::f32() * width,
                y: fastrand::f32() * height,
                vx: -STAR_DRIFT_SPEED * depth,
                vy: STAR_FALL_SPEED * depth,
                size: STAR_SIZE_MIN + depth * STAR_SIZE_PER_DEPTH,
                max_opacity: (0.3 + depth * 0.7).min(1.0),
                twinkle_phase: fastrand::f32() * TAU,
                twinkle_speed: range(0.5, 2.5),
            }
        })
        .collect()
}

pub fn generate_constellations(width: f32, height: f32) -> Vec<Constellation> {
    (0..CONSTELLATION_COUNT)
        .map(|_| {
            let (name, pattern) = PATTERNS[fastrand::usize(..PATTERNS.len())];
            let scale = range(CONSTELLATION_SCALE_MIN, CONSTELLATION_SCALE_MAX);
            let origin_x = fastrand::f32() * width;
            let origin_y = fastrand::f32() * (height - scale).max(0.0);
            let depth = range(CONSTELLATION_DEPTH_MIN, CONSTELLATION_DEPTH_MAX);

            let (min_x, max_x) = pattern
                .iter()
                .fold((f32::MAX, f32::MIN), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));

            Constellation {
                name,
                points: pattern
                    .iter()
                    .map(|&(x, y)| (origin_x + x * scale, origin_y + y * scale))
                    .collect(),
                vx: -STAR_DRIFT_SPEED * depth,
                vy: 0.0,
                alpha: range(CONSTELLATION_ALPHA_MIN, CONSTELLATION_ALPHA_MAX),
                pattern_width: (max_x - min_x) * scale,
            }
        })
        .collect()
}
