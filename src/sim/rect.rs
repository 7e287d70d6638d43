//! Axis-aligned rectangle geometry
//!
//! Every entity is a `Rect` plus behavior. Screen coordinates: +x right,
//! +y down, origin at the top-left corner of the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (never negative)
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn centerx(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_centerx(&mut self, centerx: f32) {
        self.pos.x = centerx - self.size.x / 2.0;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Change width keeping the horizontal center fixed
    pub fn resize_width_centered(&mut self, width: f32) {
        let centerx = self.centerx();
        self.size.x = width;
        self.set_centerx(centerx);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.pos += offset;
    }

    /// Strict overlap test. Shared edges do not count and empty rectangles
    /// never collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 12.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 32.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 26.0));
    }

    #[test]
    fn test_setters_keep_size() {
        let mut rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        rect.set_right(100.0);
        rect.set_bottom(50.0);
        assert_eq!(rect.left(), 80.0);
        assert_eq!(rect.top(), 30.0);
        assert_eq!(rect.size, Vec2::new(20.0, 20.0));

        rect.set_center(Vec2::new(400.0, 300.0));
        assert_eq!(rect.pos, Vec2::new(390.0, 290.0));
    }

    #[test]
    fn test_resize_width_centered() {
        let mut rect = Rect::new(350.0, 560.0, 100.0, 12.0);
        rect.resize_width_centered(150.0);
        assert_eq!(rect.centerx(), 400.0);
        assert_eq!(rect.width(), 150.0);
        assert_eq!(rect.left(), 325.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Empty rect
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 10.0)));
        assert!(!Rect::new(5.0, 5.0, 10.0, 0.0).intersects(&a));
    }
}
