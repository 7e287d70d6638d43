//! Rendering hook
//!
//! Entities draw themselves onto any `Surface`; they never own fonts,
//! windows or GPU state. `ShapeBatch` is a `Surface` that tessellates
//! everything into triangles for a backend to upload.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::color::Color;
use crate::sim::Rect;

pub use shapes::{GlyphQuad, ShapeBatch};
pub use vertex::Vertex;

/// A drawing target supplied by the rendering collaborator
pub trait Surface {
    /// Filled rectangle; `corner_radius` 0 means square corners
    fn fill_rect(&mut self, rect: &Rect, color: Color, corner_radius: f32);

    /// Filled ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: &Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// A single character centered on `center`. Font handling belongs to
    /// the surface.
    fn draw_glyph(&mut self, glyph: char, center: Vec2, size: f32, color: Color);
}
