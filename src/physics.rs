use crate::color::{Rgb, random_hue, wrap_hue};
use crate::config::Settings;
use crate::constants::*;
use crate::entities::{Constellation, Particle, Rocket, Star};
use std::f32::consts::TAU;

/// Apply friction, gravity and decay to every particle and drop the dead ones.
pub fn integrate_particles(particles: &mut Vec<Particle>, settings: &Settings) {
    particles.retain_mut(|particle| {
        particle.vx *= settings.friction;
        particle.vy *= settings.friction;
        particle.vy += settings.gravity;
        particle.x += particle.vx;
        particle.y += particle.vy;
        particle.alpha -= particle.decay;

        !particle.is_dead()
    });
}

/// Move rockets, shed trail sparks and detonate any that reached their
/// altitude. Particles pushed here are first integrated on the next frame.
///
/// Returns the number of rockets that burst.
pub fn advance_rockets(
    rockets: &mut Vec<Rocket>,
    particles: &mut Vec<Particle>,
    settings: &Settings,
) -> usize {
    let mut arrived = Vec::new();

    rockets.retain_mut(|rocket| {
        rocket.x += rocket.vx;
        rocket.y += rocket.vy;

        if fastrand::f32() < TRAIL_EMIT_CHANCE {
            particles.push(trail_particle(rocket));
        }

        if rocket.has_arrived() {
            arrived.push((rocket.x, rocket.y, rocket.hue));
            false
        } else {
            true
        }
    });

    for &(x, y, hue) in &arrived {
        log::trace!("rocket burst at ({x:.0}, {y:.0}) hue {hue:.0}");
        create_burst(particles, x, y, settings, Some(hue));
    }
    arrived.len()
}

fn trail_particle(rocket: &Rocket) -> Particle {
    Particle {
        x: rocket.x,
        y: rocket.y,
        vx: (fastrand::f32() - 0.5) * 0.6,
        vy: 0.2 + fastrand::f32() * 0.8,
        alpha: 1.0,
        color: Rgb::from_hsl(rocket.hue, 0.6, 0.82),
        size: 0.8 + fastrand::f32() * 0.7,
        decay: TRAIL_DECAY_MIN + fastrand::f32() * (TRAIL_DECAY_MAX - TRAIL_DECAY_MIN),
    }
}

/// Explode `settings.particle_count` particles out of `(x, y)`.
///
/// With no `hue` a fresh random one is picked for the whole burst.
pub fn create_burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    settings: &Settings,
    hue: Option<f32>,
) {
    let base_hue = hue.unwrap_or_else(random_hue);
    particles.reserve(settings.particle_count);

    for _ in 0..settings.particle_count {
        let angle = fastrand::f32() * TAU;
        let speed = fastrand::f32() * settings.spread;
        let particle_hue = wrap_hue(base_hue + (fastrand::f32() * 2.0 - 1.0) * BURST_HUE_JITTER);

        particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            alpha: 1.0,
            color: Rgb::from_hsl(particle_hue, BURST_SATURATION, BURST_LIGHTNESS),
            size: 1.0 + fastrand::f32() * (settings.base_size - 1.0),
            decay: settings.decay_rate * (0.5 + fastrand::f32()),
        });
    }
}

/// Drift stars and wrap them around each edge independently.
pub fn update_stars(stars: &mut [Star], width: f32, height: f32) {
    for star in stars {
        star.x += star.vx;
        star.y += star.vy;

        if star.x < 0.0 {
            star.x = width;
        } else if star.x > width {
            star.x = 0.0;
        }
        if star.y < 0.0 {
            star.y = height;
        } else if star.y > height {
            star.y = 0.0;
        }
    }
}

/// Twinkling opacity of a star at `elapsed` seconds.
pub fn star_opacity(star: &Star, elapsed: f32) -> f32 {
    let wave = (elapsed * star.twinkle_speed + star.twinkle_phase).sin();
    (star.max_opacity * 0.7 + wave * star.max_opacity * 0.3).max(0.0)
}

/// Translate each constellation rigidly; once one has fully left on the
/// left it re-enters from beyond the right edge.
pub fn update_constellations(constellations: &mut [Constellation], width: f32) {
    for constellation in constellations {
        let (vx, vy) = (constellation.vx, constellation.vy);
        for point in &mut constellation.points {
            point.0 += vx;
            point.1 += vy;
        }

        let leading_x = constellation.points.first().map_or(0.0, |p| p.0);
        if leading_x < -constellation.pattern_width {
            let shift = width + 2.0 * constellation.pattern_width;
            for point in &mut constellation.points {
                point.0 += shift;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(vx: f32, vy: f32, decay: f32) -> Particle {
        Particle {
            x: 0.0,
            y: 0.0,
            vx,
            vy,
            alpha: 1.0,
            color: Rgb::BLACK,
            size: 1.0,
            decay,
        }
    }

    fn star(x: f32, y: f32, vx: f32, vy: f32) -> Star {
        Star {
            x,
            y,
            vx,
            vy,
            size: 1.0,
            max_opacity: 1.0,
            twinkle_phase: 0.0,
            twinkle_speed: 1.0,
        }
    }

    #[test]
    fn particles_die_within_reciprocal_of_decay() {
        let settings = Settings::default();
        for decay in [0.01_f32, 0.03, 0.07, 0.13, 0.2, 0.25, 0.3, 0.45, 0.5] {
            let mut particles = vec![particle(1.0, -1.0, decay)];
            let steps = (1.0 / decay).ceil() as usize;
            for step in 0..steps {
                assert_eq!(particles.len(), 1, "decay {decay} died early at step {step}");
                integrate_particles(&mut particles, &settings);
            }
            assert!(particles.is_empty(), "decay {decay} survived {steps} steps");
        }
    }

    #[test]
    fn removal_keeps_every_live_particle() {
        let settings = Settings { gravity: 0.0, ..Settings::default() };
        // alternate instantly-dead and long-lived particles so adjacent removals occur
        let mut particles: Vec<Particle> = (0..10)
            .map(|i| {
                let mut p = particle(0.0, 0.0, if i % 2 == 0 { 2.0 } else { 0.01 });
                p.x = i as f32;
                p
            })
            .collect();
        integrate_particles(&mut particles, &settings);
        let xs: Vec<f32> = particles.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        assert!(particles.iter().all(|p| (p.alpha - 0.99).abs() < 1e-6));
    }

    #[test]
    fn alpha_never_increases() {
        let settings = Settings::default();
        let mut particles = vec![particle(3.0, 0.0, 0.02)];
        let mut last = 1.0;
        while !particles.is_empty() {
            integrate_particles(&mut particles, &settings);
            if let Some(p) = particles.first() {
                assert!(p.alpha <= last);
                last = p.alpha;
            }
        }
    }

    #[test]
    fn friction_damps_speed_monotonically() {
        let settings = Settings {
            friction: 0.9,
            gravity: 0.0,
            ..Settings::default()
        };
        let mut particles = vec![particle(6.0, -3.0, 0.001)];
        let mut last = particles[0].speed();
        for _ in 0..200 {
            integrate_particles(&mut particles, &settings);
            let speed = particles[0].speed();
            assert!(speed <= last);
            last = speed;
        }
        assert!(last < 1e-6);
    }

    #[test]
    fn burst_adds_exactly_particle_count() {
        let settings = Settings {
            particle_count: 37,
            ..Settings::default()
        };
        let mut particles = vec![particle(0.0, 0.0, 0.1)];
        create_burst(&mut particles, 10.0, 20.0, &settings, None);
        assert_eq!(particles.len(), 38);
        for p in &particles[1..] {
            assert_eq!(p.alpha, 1.0);
            assert_eq!((p.x, p.y), (10.0, 20.0));
            assert!(p.speed() <= settings.spread + 1e-4);
            assert!(p.size >= 1.0 && p.size <= settings.base_size);
            assert!(p.decay >= 0.5 * settings.decay_rate && p.decay <= 1.5 * settings.decay_rate);
        }
    }

    #[test]
    fn degenerate_bursts_are_harmless() {
        let mut particles = Vec::new();
        let none = Settings {
            particle_count: 0,
            ..Settings::default()
        };
        create_burst(&mut particles, 0.0, 0.0, &none, None);
        assert!(particles.is_empty());

        let still = Settings {
            spread: 0.0,
            particle_count: 5,
            ..Settings::default()
        };
        create_burst(&mut particles, 0.0, 0.0, &still, Some(10.0));
        assert!(particles.iter().all(|p| p.speed() == 0.0));
    }

    #[test]
    fn rocket_emits_trail_without_integrating_it() {
        let settings = Settings::default();
        let mut rockets = vec![Rocket {
            x: 50.0,
            y: 500.0,
            vx: 0.0,
            vy: -10.0,
            target_y: 0.0,
            hue: 90.0,
        }];
        let mut particles = Vec::new();
        for _ in 0..40 {
            advance_rockets(&mut rockets, &mut particles, &settings);
        }
        // with p = 0.5 over 40 frames, zero emissions is vanishingly unlikely
        assert!(!particles.is_empty());
        assert!(particles.iter().all(|p| p.alpha == 1.0 && p.x == 50.0));
        assert!(
            particles
                .iter()
                .all(|p| p.decay >= TRAIL_DECAY_MIN && p.decay <= TRAIL_DECAY_MAX)
        );
    }

    #[test]
    fn arrived_rocket_bursts_once() {
        let settings = Settings {
            particle_count: 25,
            ..Settings::default()
        };
        let mut rockets = vec![Rocket {
            x: 0.0,
            y: 100.0,
            vx: 0.0,
            vy: -20.0,
            target_y: 90.0,
            hue: 180.0,
        }];
        let mut particles = Vec::new();
        assert_eq!(advance_rockets(&mut rockets, &mut particles, &settings), 1);
        assert!(rockets.is_empty());
        let burst = particles.iter().filter(|p| p.decay < TRAIL_DECAY_MIN).count();
        assert_eq!(burst, 25);
        assert_eq!(advance_rockets(&mut rockets, &mut particles, &settings), 0);
    }

    #[test]
    fn stars_wrap_on_every_edge() {
        let (w, h) = (800.0, 600.0);
        let mut stars = vec![
            star(-1.0, 100.0, -0.1, 0.0),
            star(w + 1.0, 100.0, 0.1, 0.0),
            star(100.0, -1.0, 0.0, -0.1),
            star(100.0, h + 1.0, 0.0, 0.1),
        ];
        update_stars(&mut stars, w, h);
        assert_eq!(stars[0].x, w);
        assert_eq!(stars[1].x, 0.0);
        assert_eq!(stars[2].y, h);
        assert_eq!(stars[3].y, 0.0);
        // untouched axis is left alone
        assert_eq!(stars[0].y, 100.0);
    }

    #[test]
    fn star_opacity_stays_in_band() {
        let s = Star {
            max_opacity: 0.8,
            twinkle_speed: 2.0,
            twinkle_phase: 1.0,
            ..star(0.0, 0.0, -0.1, 0.0)
        };
        for i in 0..100 {
            let o = star_opacity(&s, i as f32 * 0.1);
            assert!(o >= 0.8 * 0.4 - 1e-5 && o <= 0.8 + 1e-5);
        }
    }

    #[test]
    fn constellation_wraps_as_a_unit() {
        let mut group = vec![Constellation {
            name: "test",
            points: vec![(-49.0, 10.0), (-10.0, 30.0), (1.0, 5.0)],
            vx: -2.0,
            vy: 0.0,
            alpha: 0.3,
            pattern_width: 50.0,
        }];
        update_constellations(&mut group, 800.0);
        let xs: Vec<f32> = group[0].points.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![-51.0 + 900.0, -12.0 + 900.0, -1.0 + 900.0]);
    }
}
