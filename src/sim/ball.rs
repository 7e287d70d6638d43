//! Ball physics
//!
//! The ball bounces off the top and side walls and the paddle. Bricks are
//! resolved by the caller, which can use `reflect_x`/`reflect_y`.
//!
//! Collision checks run in a fixed order each tick: top wall, side walls,
//! paddle, then the bottom edge. A later check overwrites the collision
//! reported by an earlier one, and losing the ball overrides everything.
//! Positions are never corrected after a bounce.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use super::power_up::PowerUpKind;
use super::rect::Rect;
use crate::color::Color;
use crate::render::Surface;
use crate::tuning::BallTuning;

/// Ball state - glued to the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    #[default]
    Free,
    /// Caught by a glue paddle; velocity is suspended until launch
    Glued,
}

/// Outcome of a ball tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallStatus {
    Playing,
    /// Ball fell past the bottom of the screen
    Lost,
}

/// What the ball bounced off during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Paddle,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Screen width and height
    pub screen: Vec2,
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
    /// Pixels per tick
    pub vel: Vec2,
    pub base_speed: f32,
    pub state: BallState,
    /// Remaining ticks of the slow effect; `Some` while slowed
    pub slow_timer: Option<u32>,
    /// Duration armed by the slow power-up
    pub slow_ticks: u32,
}

impl Ball {
    pub fn new(screen: Vec2, color: Color, rng: &mut impl Rng) -> Self {
        Self::with_tuning(screen, color, &BallTuning::default(), rng)
    }

    pub fn with_tuning(
        screen: Vec2,
        color: Color,
        tuning: &BallTuning,
        rng: &mut impl Rng,
    ) -> Self {
        let diameter = tuning.radius * 2.0;
        let mut ball = Self {
            screen,
            rect: Rect::new(0.0, 0.0, diameter, diameter),
            radius: tuning.radius,
            color,
            vel: Vec2::ZERO,
            base_speed: tuning.base_speed,
            state: BallState::Free,
            slow_timer: None,
            slow_ticks: tuning.slow_ticks,
        };
        ball.reset(rng);
        ball
    }

    pub fn is_glued(&self) -> bool {
        self.state == BallState::Glued
    }

    pub fn is_slowed(&self) -> bool {
        self.slow_timer.is_some()
    }

    /// Center on screen, serve upward in a random horizontal direction
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.rect.set_center(self.screen / 2.0);
        self.vel = self.serve_velocity(rng);
        self.state = BallState::Free;
        self.slow_timer = None;
    }

    /// Release a glued ball
    pub fn launch(&mut self, rng: &mut impl Rng) {
        self.state = BallState::Free;
        self.vel = self.serve_velocity(rng);
    }

    fn serve_velocity(&self, rng: &mut impl Rng) -> Vec2 {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Vec2::new(self.base_speed * sign, -self.base_speed)
    }

    /// Advance the ball by one tick
    pub fn update(
        &mut self,
        paddle: &Paddle,
        launch: bool,
        rng: &mut impl Rng,
    ) -> (BallStatus, Option<Collision>) {
        if self.is_glued() {
            self.pin_to(paddle);
            if launch {
                self.launch(rng);
            }
            return (BallStatus::Playing, None);
        }

        if let Some(remaining) = self.slow_timer {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.vel *= 2.0;
                self.slow_timer = None;
                log::debug!("Ball slow expired");
            } else {
                self.slow_timer = Some(remaining);
            }
        }

        self.rect.translate(self.vel);

        let mut collision = None;

        if self.rect.top() <= 0.0 {
            self.reflect_y();
            collision = Some(Collision::Wall);
        }
        if self.rect.left() <= 0.0 || self.rect.right() >= self.screen.x {
            self.reflect_x();
            collision = Some(Collision::Wall);
        }

        // Descending only, so a ball still inside the paddle after a bounce
        // is not caught twice.
        if self.rect.intersects(&paddle.rect) && self.vel.y > 0.0 {
            if paddle.has_glue {
                self.state = BallState::Glued;
                log::debug!("Ball caught by glue paddle");
            }
            self.reflect_y();
            collision = Some(Collision::Paddle);
        }

        if self.rect.top() > self.screen.y {
            log::debug!("Ball lost at x={}", self.rect.centerx());
            return (BallStatus::Lost, None);
        }

        (BallStatus::Playing, collision)
    }

    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Slow => {
                if self.is_slowed() {
                    return;
                }
                self.vel /= 2.0;
                self.slow_timer = Some(self.slow_ticks);
                log::debug!("Ball slowed for {} ticks", self.slow_ticks);
            }
            PowerUpKind::Grow
            | PowerUpKind::Laser
            | PowerUpKind::Glue
            | PowerUpKind::Shrink
            | PowerUpKind::Fast
            | PowerUpKind::ExtraLife => {}
        }
    }

    /// Bounce off a vertical surface
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Bounce off a horizontal surface
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    fn pin_to(&mut self, paddle: &Paddle) {
        self.rect.set_centerx(paddle.rect.centerx());
        self.rect.set_bottom(paddle.rect.top());
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_ellipse(&self.rect, self.color);
    }
}
