//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::Surface;
use super::vertex::Vertex;
use crate::color::Color;
use crate::sim::Rect;

/// Triangles per full circle or ellipse
const CIRCLE_SEGMENTS: u32 = 24;
/// Triangles per rounded corner
const CORNER_SEGMENTS: u32 = 4;

/// Generate vertices for an axis-aligned quad (two triangles)
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if max.x <= min.x || max.y <= min.y {
        return Vec::new();
    }
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    arc_fan(center, radii, 0.0, 2.0 * PI, color, segments)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Triangle fan from `center` sweeping `span` radians starting at `start`
fn arc_fan(
    center: Vec2,
    radii: Vec2,
    start: f32,
    span: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a rectangle with rounded corners
pub fn rounded_rect(rect: &Rect, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let min = rect.pos;
    let max = rect.pos + rect.size;
    if radius <= 0.0 {
        return quad(min, max, color);
    }

    // Center column plus left and right strips between the corners
    let mut vertices = quad(
        Vec2::new(min.x + radius, min.y),
        Vec2::new(max.x - radius, max.y),
        color,
    );
    vertices.extend(quad(
        Vec2::new(min.x, min.y + radius),
        Vec2::new(min.x + radius, max.y - radius),
        color,
    ));
    vertices.extend(quad(
        Vec2::new(max.x - radius, min.y + radius),
        Vec2::new(max.x, max.y - radius),
        color,
    ));

    // Corner fans: (center, start angle) with +y pointing down
    let corners = [
        (Vec2::new(max.x - radius, max.y - radius), 0.0),
        (Vec2::new(min.x + radius, max.y - radius), FRAC_PI_2),
        (Vec2::new(min.x + radius, min.y + radius), PI),
        (Vec2::new(max.x - radius, min.y + radius), PI + FRAC_PI_2),
    ];
    for (center, start) in corners {
        vertices.extend(arc_fan(
            center,
            Vec2::splat(radius),
            start,
            FRAC_PI_2,
            color,
            CORNER_SEGMENTS,
        ));
    }

    vertices
}

/// A glyph queued for the text renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub glyph: char,
    pub center: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// A `Surface` that accumulates triangles and glyphs for one frame
#[derive(Debug, Default)]
pub struct ShapeBatch {
    pub vertices: Vec<Vertex>,
    pub glyphs: Vec<GlyphQuad>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything queued for the previous frame
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.glyphs.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.glyphs.is_empty()
    }

    /// Vertex data ready for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        super::vertex::as_bytes(&self.vertices)
    }
}

impl Surface for ShapeBatch {
    fn fill_rect(&mut self, rect: &Rect, color: Color, corner_radius: f32) {
        self.vertices
            .extend(rounded_rect(rect, corner_radius, color.to_rgba()));
    }

    fn fill_ellipse(&mut self, rect: &Rect, color: Color) {
        self.vertices.extend(ellipse(
            rect.center(),
            rect.size / 2.0,
            color.to_rgba(),
            CIRCLE_SEGMENTS,
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.vertices
            .extend(circle(center, radius, color.to_rgba(), CIRCLE_SEGMENTS));
    }

    fn draw_glyph(&mut self, glyph: char, center: Vec2, size: f32, color: Color) {
        self.glyphs.push(GlyphQuad {
            glyph,
            center,
            size,
            color: color.to_rgba(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 5.0, [1.0; 4], 12);
        assert_eq!(vertices.len(), 36);
        for v in &vertices {
            let p = Vec2::from(v.position);
            assert!(p.length() <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_square_rect_is_two_triangles() {
        let vertices = rounded_rect(&Rect::new(0.0, 0.0, 10.0, 4.0), 0.0, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let rect = Rect::new(10.0, 20.0, 100.0, 20.0);
        let vertices = rounded_rect(&rect, 6.0, [1.0; 4]);
        // Three strips plus four corner fans
        assert_eq!(vertices.len(), 3 * 6 + 4 * (CORNER_SEGMENTS as usize) * 3);
        for v in &vertices {
            assert!(v.position[0] >= rect.left() - 1e-4 && v.position[0] <= rect.right() + 1e-4);
            assert!(v.position[1] >= rect.top() - 1e-4 && v.position[1] <= rect.bottom() + 1e-4);
        }
    }

    #[test]
    fn test_batch_collects_glyphs_and_clears() {
        let mut batch = ShapeBatch::new();
        batch.fill_circle(Vec2::new(5.0, 5.0), 3.0, Color::WHITE);
        batch.fill_circle(Vec2::new(5.0, 5.0), 0.0, Color::WHITE);
        batch.draw_glyph('G', Vec2::new(5.0, 5.0), 24.0, Color::BLACK);
        assert_eq!(batch.triangle_count(), CIRCLE_SEGMENTS as usize);
        assert_eq!(batch.glyphs.len(), 1);
        assert_eq!(batch.vertex_bytes().len(), batch.vertices.len() * Vertex::STRIDE);

        batch.clear();
        assert!(batch.is_empty());
    }
}
