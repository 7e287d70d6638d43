//! Static bricks. Removal is the caller's job.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::color::Color;
use crate::consts::BRICK_CORNER_RADIUS;
use crate::render::Surface;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(&self.rect, self.color, BRICK_CORNER_RADIUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShapeBatch;

    #[test]
    fn test_geometry() {
        let brick = Brick::new(10.0, 20.0, 60.0, 20.0, Color::rgb(200, 50, 50));
        assert_eq!(brick.rect.right(), 70.0);
        assert_eq!(brick.rect.bottom(), 40.0);

        let mut batch = ShapeBatch::new();
        brick.draw(&mut batch);
        assert!(batch.triangle_count() > 2);
        assert!(batch.glyphs.is_empty());
    }
}
