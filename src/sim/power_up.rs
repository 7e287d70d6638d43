//! Falling power-up pickups
//!
//! Dropped by destroyed bricks; caught by the paddle. The kind identifiers
//! are shared with the spawning logic, so `as_str` ids must stay stable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::color::Color;
use crate::consts::{POWER_UP_CORNER_RADIUS, POWER_UP_GLYPH_SIZE};
use crate::render::Surface;
use crate::tuning::PowerUpTuning;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    Grow,
    Laser,
    Glue,
    Slow,
    Shrink,
    Fast,
    ExtraLife,
}

/// Visual and display profile of a power-up kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpProfile {
    pub color: Color,
    pub glyph: char,
    pub message: &'static str,
}

/// Indexed by `PowerUpKind as usize`
static PROFILES: [PowerUpProfile; 7] = [
    PowerUpProfile {
        color: Color::rgb(0, 191, 255),
        glyph: 'G',
        message: "PADDLE GROW",
    },
    PowerUpProfile {
        color: Color::rgb(255, 69, 0),
        glyph: 'L',
        message: "LASER CANNONS",
    },
    PowerUpProfile {
        color: Color::rgb(34, 139, 34),
        glyph: 'C',
        message: "CATCH PADDLE",
    },
    PowerUpProfile {
        color: Color::rgb(255, 215, 0),
        glyph: 'S',
        message: "SLOW BALL",
    },
    PowerUpProfile {
        color: Color::rgb(148, 0, 211),
        glyph: 'H',
        message: "PADDLE SHRINK",
    },
    PowerUpProfile {
        color: Color::rgb(255, 140, 0),
        glyph: 'F',
        message: "SPEED UP",
    },
    PowerUpProfile {
        color: Color::rgb(255, 255, 255),
        glyph: '+',
        message: "EXTRA LIFE!",
    },
];

impl PowerUpKind {
    /// Every kind, in profile-table order
    pub const ALL: [PowerUpKind; 7] = [
        PowerUpKind::Grow,
        PowerUpKind::Laser,
        PowerUpKind::Glue,
        PowerUpKind::Slow,
        PowerUpKind::Shrink,
        PowerUpKind::Fast,
        PowerUpKind::ExtraLife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Grow => "grow",
            PowerUpKind::Laser => "laser",
            PowerUpKind::Glue => "glue",
            PowerUpKind::Slow => "slow",
            PowerUpKind::Shrink => "shrink",
            PowerUpKind::Fast => "fast",
            PowerUpKind::ExtraLife => "extra_life",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    pub fn profile(&self) -> &'static PowerUpProfile {
        &PROFILES[*self as usize]
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    /// Pixels fallen per tick
    pub speed_y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self::with_tuning(x, y, kind, &PowerUpTuning::default())
    }

    pub fn with_tuning(x: f32, y: f32, kind: PowerUpKind, tuning: &PowerUpTuning) -> Self {
        Self {
            rect: Rect::new(x, y, tuning.width, tuning.height),
            speed_y: tuning.fall_speed,
            kind,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.profile().color
    }

    pub fn glyph(&self) -> char {
        self.kind.profile().glyph
    }

    pub fn message(&self) -> &'static str {
        self.kind.profile().message
    }

    pub fn update(&mut self) {
        self.rect.translate(Vec2::new(0.0, self.speed_y));
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(&self.rect, self.color(), POWER_UP_CORNER_RADIUS);
        surface.draw_glyph(
            self.glyph(),
            self.rect.center(),
            POWER_UP_GLYPH_SIZE,
            Color::BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShapeBatch;

    #[test]
    fn test_profile_table() {
        let expected = [
            (PowerUpKind::Grow, Color::rgb(0, 191, 255), 'G', "PADDLE GROW"),
            (PowerUpKind::Laser, Color::rgb(255, 69, 0), 'L', "LASER CANNONS"),
            (PowerUpKind::Glue, Color::rgb(34, 139, 34), 'C', "CATCH PADDLE"),
            (PowerUpKind::Slow, Color::rgb(255, 215, 0), 'S', "SLOW BALL"),
            (PowerUpKind::Shrink, Color::rgb(148, 0, 211), 'H', "PADDLE SHRINK"),
            (PowerUpKind::Fast, Color::rgb(255, 140, 0), 'F', "SPEED UP"),
            (PowerUpKind::ExtraLife, Color::rgb(255, 255, 255), '+', "EXTRA LIFE!"),
        ];
        assert_eq!(expected.len(), PowerUpKind::ALL.len());
        for (kind, row) in PowerUpKind::ALL.into_iter().zip(expected) {
            let (expected_kind, color, glyph, message) = row;
            assert_eq!(kind, expected_kind);
            let profile = kind.profile();
            assert_eq!(profile.color, color, "{:?} color", kind);
            assert_eq!(profile.glyph, glyph, "{:?} glyph", kind);
            assert_eq!(profile.message, message, "{:?} message", kind);
        }
    }

    #[test]
    fn test_ids_parse_back() {
        for kind in PowerUpKind::ALL {
            assert_eq!(PowerUpKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PowerUpKind::parse("extra_life"), Some(PowerUpKind::ExtraLife));
        assert_eq!(PowerUpKind::parse("multiball"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&PowerUpKind::ExtraLife).unwrap();
        assert_eq!(json, "\"extra_life\"");
        let kind: PowerUpKind = serde_json::from_str("\"slow\"").unwrap();
        assert_eq!(kind, PowerUpKind::Slow);
    }

    #[test]
    fn test_falls_each_tick() {
        let mut power_up = PowerUp::new(100.0, 50.0, PowerUpKind::Laser);
        assert_eq!(power_up.rect.size, Vec2::new(30.0, 15.0));
        power_up.update();
        power_up.update();
        assert_eq!(power_up.rect.pos, Vec2::new(100.0, 56.0));
        assert_eq!(power_up.color(), Color::rgb(255, 69, 0));
    }

    #[test]
    fn test_draw_queues_centered_glyph() {
        let power_up = PowerUp::new(0.0, 0.0, PowerUpKind::Fast);
        let mut batch = ShapeBatch::new();
        power_up.draw(&mut batch);
        assert!(batch.triangle_count() > 0);
        assert_eq!(batch.glyphs.len(), 1);
        assert_eq!(batch.glyphs[0].glyph, 'F');
        assert_eq!(batch.glyphs[0].center, Vec2::new(15.0, 7.5));
        assert_eq!(batch.glyphs[0].color, Color::BLACK.to_rgba());
    }
}
