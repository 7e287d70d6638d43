//! A single shrinking particle with gravity

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::render::Surface;
use crate::tuning::ParticleSpread;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Radius in pixels; the particle is dead at 0
    pub size: f32,
    /// Added to vertical velocity each tick
    pub gravity: f32,
    /// Subtracted from size each tick
    pub shrink: f32,
}

impl Particle {
    /// Spawn at `pos` heading in a random direction
    pub fn new(pos: Vec2, color: Color, spread: &ParticleSpread, rng: &mut impl Rng) -> Self {
        let size = rng.random_range(spread.min_size..=spread.max_size) as f32;
        let angle = rng.random_range(0.0..360.0f32).to_radians();
        let speed = rng.random_range(spread.min_speed..=spread.max_speed);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            size,
            gravity: spread.gravity,
            shrink: spread.shrink,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.size -= self.shrink;
    }

    pub fn is_alive(&self) -> bool {
        self.size > 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        if self.is_alive() {
            surface.fill_circle(self.pos, self.size.trunc(), self.color);
        }
    }
}
