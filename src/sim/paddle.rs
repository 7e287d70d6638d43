//! The player's paddle and its timed power-ups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::power_up::PowerUpKind;
use super::rect::Rect;
use crate::color::Color;
use crate::consts::PADDLE_CORNER_RADIUS;
use crate::render::Surface;
use crate::tuning::PaddleTuning;

/// Directional input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
}

/// Remaining ticks of each paddle power-up (0 = inactive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTimers {
    pub grow: u32,
    pub laser: u32,
    pub glue: u32,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Screen width and height
    pub screen: Vec2,
    pub rect: Rect,
    /// Pixels moved per tick
    pub speed: f32,
    pub color: Color,
    pub original_width: f32,
    pub width: f32,
    pub grown_width: f32,
    /// Duration given to each power-up on activation
    pub effect_ticks: u32,
    pub has_laser: bool,
    pub has_glue: bool,
    pub timers: EffectTimers,
}

impl Paddle {
    pub fn new(screen: Vec2, color: Color) -> Self {
        Self::with_tuning(screen, color, &PaddleTuning::default())
    }

    pub fn with_tuning(screen: Vec2, color: Color, tuning: &PaddleTuning) -> Self {
        Self {
            screen,
            rect: Rect::new(
                screen.x / 2.0 - tuning.width / 2.0,
                screen.y - tuning.bottom_margin,
                tuning.width,
                tuning.height,
            ),
            speed: tuning.speed,
            color,
            original_width: tuning.width,
            width: tuning.width,
            grown_width: tuning.grown_width,
            effect_ticks: tuning.effect_ticks,
            has_laser: false,
            has_glue: false,
            timers: EffectTimers::default(),
        }
    }

    /// Restore geometry and drop every power-up (new life or level)
    pub fn reset(&mut self) {
        self.rect.set_left(self.screen.x / 2.0 - self.original_width / 2.0);
        self.set_width(self.original_width);
        self.has_laser = false;
        self.has_glue = false;
        self.timers = EffectTimers::default();
    }

    /// Move, clamp to the screen, then advance power-up timers
    pub fn update(&mut self, input: PaddleInput) {
        if input.left {
            self.rect.pos.x -= self.speed;
        }
        if input.right {
            self.rect.pos.x += self.speed;
        }

        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > self.screen.x {
            self.rect.set_right(self.screen.x);
        }

        self.tick_power_ups();
    }

    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Grow => {
                // Only resize on the inactive -> active edge; a repeat pickup
                // just refreshes the duration.
                if self.timers.grow == 0 {
                    let grown = self.grown_width;
                    self.resize_centered(grown);
                }
                self.timers.grow = self.effect_ticks;
            }
            PowerUpKind::Laser => {
                self.has_laser = true;
                self.timers.laser = self.effect_ticks;
            }
            PowerUpKind::Glue => {
                self.has_glue = true;
                self.timers.glue = self.effect_ticks;
            }
            PowerUpKind::Slow
            | PowerUpKind::Shrink
            | PowerUpKind::Fast
            | PowerUpKind::ExtraLife => return,
        }
        log::debug!(
            "Paddle power-up {} active for {} ticks",
            kind.as_str(),
            self.effect_ticks
        );
    }

    /// Spawn points for a pair of lasers (left and right edges of the top),
    /// or None without the laser power-up
    pub fn laser_muzzles(&self) -> Option<[Vec2; 2]> {
        if !self.has_laser {
            return None;
        }
        Some([
            Vec2::new(self.rect.left(), self.rect.top()),
            Vec2::new(self.rect.right(), self.rect.top()),
        ])
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(&self.rect, self.color, PADDLE_CORNER_RADIUS);
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
        self.rect.size.x = width;
    }

    fn resize_centered(&mut self, width: f32) {
        self.width = width;
        self.rect.resize_width_centered(width);
    }

    fn tick_power_ups(&mut self) {
        if self.timers.grow > 0 {
            self.timers.grow -= 1;
            if self.timers.grow == 0 {
                let original = self.original_width;
                self.resize_centered(original);
                log::debug!("Paddle grow expired");
            }
        }
        if self.timers.laser > 0 {
            self.timers.laser -= 1;
            if self.timers.laser == 0 {
                self.has_laser = false;
                log::debug!("Paddle laser expired");
            }
        }
        if self.timers.glue > 0 {
            self.timers.glue -= 1;
            if self.timers.glue == 0 {
                self.has_glue = false;
                log::debug!("Paddle glue expired");
            }
        }
    }
}
