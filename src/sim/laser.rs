//! Laser projectiles fired by the paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::color::Color;
use crate::render::Surface;
use crate::tuning::LaserTuning;

/// An upward-moving projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub rect: Rect,
    pub color: Color,
    /// Vertical speed per tick (negative = upward)
    pub speed_y: f32,
}

impl Laser {
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_color(x, y, Color::RED)
    }

    pub fn with_color(x: f32, y: f32, color: Color) -> Self {
        Self::with_tuning(x, y, color, &LaserTuning::default())
    }

    pub fn with_tuning(x: f32, y: f32, color: Color, tuning: &LaserTuning) -> Self {
        Self {
            rect: Rect::new(x, y, tuning.width, tuning.height),
            color,
            speed_y: tuning.speed,
        }
    }

    pub fn update(&mut self) {
        self.rect.translate(Vec2::new(0.0, self.speed_y));
    }

    /// True once the laser has left the top of the screen
    pub fn is_offscreen(&self) -> bool {
        self.rect.bottom() < 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(&self.rect, self.color, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_up() {
        let mut laser = Laser::new(50.0, 100.0);
        assert_eq!(laser.color, Color::RED);
        assert_eq!(laser.rect.size, Vec2::new(4.0, 15.0));
        laser.update();
        assert_eq!(laser.rect.top(), 92.0);
        assert_eq!(laser.rect.left(), 50.0);
    }

    #[test]
    fn test_offscreen() {
        let mut laser = Laser::with_color(0.0, 10.0, Color::CYAN);
        assert!(!laser.is_offscreen());
        for _ in 0..4 {
            laser.update();
        }
        // top = -22, bottom = -7
        assert!(laser.is_offscreen());
    }
}
