//! Celebratory fireworks
//!
//! A rocket rises from the bottom of the screen to a random altitude, then
//! bursts into particles that fall and shrink away. Each firework carries
//! its own seeded RNG so `update` needs no arguments.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use crate::color::Color;
use crate::consts::FIREWORK_ROCKET_RADIUS;
use crate::render::Surface;
use crate::tuning::FireworkTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firework {
    /// Rocket position, then burst origin
    pub pos: Vec2,
    /// Vertical rocket speed per tick (negative = upward)
    pub vy: f32,
    /// Rocket color while ascending
    pub color: Color,
    pub exploded: bool,
    /// Altitude (screen y) at which the rocket bursts
    pub explosion_y: f32,
    /// Burst particles; empty until `exploded`
    pub particles: Vec<Particle>,
    pub tuning: FireworkTuning,
    #[serde(skip, default = "unseeded")]
    rng: Pcg32,
}

fn unseeded() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl Firework {
    pub fn new(screen: Vec2, rng: &mut impl Rng) -> Self {
        Self::with_tuning(screen, FireworkTuning::default(), rng)
    }

    pub fn with_tuning(screen: Vec2, tuning: FireworkTuning, rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0..=screen.x as u32) as f32;
        let vy = -rng.random_range(tuning.min_ascent_speed..=tuning.max_ascent_speed);
        let explosion_y =
            rng.random_range(screen.y * tuning.min_altitude..=screen.y * tuning.max_altitude);
        Self {
            pos: Vec2::new(x, screen.y),
            vy,
            color: Color::WHITE,
            exploded: false,
            explosion_y,
            particles: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(rng.random()),
        }
    }

    /// Ascend, burst on reaching the explosion altitude, then age particles
    pub fn update(&mut self) {
        if !self.exploded {
            self.pos.y += self.vy;
            if self.pos.y <= self.explosion_y {
                self.explode();
            }
        } else {
            self.particles.retain_mut(|particle| {
                particle.update();
                particle.is_alive()
            });
        }
    }

    fn explode(&mut self) {
        self.exploded = true;
        let low = self.tuning.min_channel;
        let color = Color::rgb(
            self.rng.random_range(low..=255),
            self.rng.random_range(low..=255),
            self.rng.random_range(low..=255),
        );
        let spread = &self.tuning.particles;
        self.particles = (0..self.tuning.particle_count)
            .map(|_| Particle::new(self.pos, color, spread, &mut self.rng))
            .collect();
        log::debug!(
            "Firework burst at ({:.0}, {:.0}) with {} particles",
            self.pos.x,
            self.pos.y,
            self.particles.len()
        );
    }

    /// Burst and fully faded; safe to drop
    pub fn is_dead(&self) -> bool {
        self.exploded && self.particles.is_empty()
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        if !self.exploded {
            surface.fill_circle(self.pos, FIREWORK_ROCKET_RADIUS, self.color);
        } else {
            for particle in &self.particles {
                particle.draw(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShapeBatch;
    use proptest::prelude::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    fn firework(seed: u64) -> Firework {
        let mut rng = Pcg32::seed_from_u64(seed);
        Firework::new(SCREEN, &mut rng)
    }

    #[test]
    fn test_launch_parameters() {
        for seed in 0..50 {
            let fw = firework(seed);
            assert_eq!(fw.pos.y, 600.0);
            assert!(fw.pos.x >= 0.0 && fw.pos.x <= 800.0);
            assert!(fw.vy <= -8.0 && fw.vy >= -12.0);
            assert!(fw.explosion_y >= 120.0 && fw.explosion_y <= 300.0);
            assert!(!fw.exploded);
            assert!(fw.particles.is_empty());
        }
    }

    #[test]
    fn test_explodes_on_first_tick_at_altitude() {
        let mut fw = firework(3);
        fw.vy = -10.0;
        fw.explosion_y = 300.0;

        // 600 -> 310 in 29 ticks, still ascending
        for _ in 0..29 {
            fw.update();
            assert!(!fw.exploded);
            assert!(fw.particles.is_empty());
        }
        assert_eq!(fw.pos.y, 310.0);

        fw.update();
        assert!(fw.exploded);
        assert_eq!(fw.pos.y, 300.0);
        assert_eq!(fw.particles.len(), 50);
    }

    #[test]
    fn test_burst_shares_one_color() {
        let mut fw = firework(11);
        while !fw.exploded {
            fw.update();
        }
        let color = fw.particles[0].color;
        assert!(fw.particles.iter().all(|p| p.color == color));
        assert!(color.r >= 50 && color.g >= 50 && color.b >= 50);
        assert!(fw.particles.iter().all(|p| p.pos == fw.pos));
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = firework(99);
        let mut b = firework(99);
        for _ in 0..60 {
            a.update();
            b.update();
        }
        assert_eq!(a.particles.len(), b.particles.len());
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
        }
    }

    #[test]
    fn test_draw_rocket_then_particles() {
        let mut fw = firework(5);
        let mut batch = ShapeBatch::new();
        fw.draw(&mut batch);
        let rocket_triangles = batch.triangle_count();
        assert!(rocket_triangles > 0);

        while !fw.exploded {
            fw.update();
        }
        batch.clear();
        fw.draw(&mut batch);
        assert_eq!(batch.triangle_count(), rocket_triangles * 50);
    }

    proptest! {
        #[test]
        fn prop_particles_only_decrease_and_firework_dies(seed in any::<u64>()) {
            let mut fw = firework(seed);
            let mut last = 0usize;
            let mut ticks = 0u32;
            while !fw.is_dead() {
                fw.update();
                ticks += 1;
                if fw.exploded {
                    prop_assert!(last == 0 || fw.particles.len() <= last);
                    last = fw.particles.len();
                }
                prop_assert!(ticks < 1000);
            }
            prop_assert!(fw.exploded);
        }
    }
}
