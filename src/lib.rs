//! Brick Breaker - entity and physics core for a Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (paddle, ball, bricks, pickups, lasers, fireworks)
//! - `render`: Drawing hook and a vertex-batching surface
//! - `tuning`: Data-driven game balance
//! - `color`: RGB colors shared by every entity

pub mod color;
pub mod render;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate. One `update` call is one tick.
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Duration of every timed power-up effect (10 seconds at 60 Hz)
    pub const EFFECT_DURATION_TICKS: u32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_GROWN_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the bottom of the screen to the paddle's top edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;
    pub const PADDLE_CORNER_RADIUS: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 6.0;

    /// Falling pickup defaults
    pub const POWER_UP_WIDTH: f32 = 30.0;
    pub const POWER_UP_HEIGHT: f32 = 15.0;
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;
    pub const POWER_UP_CORNER_RADIUS: f32 = 5.0;
    pub const POWER_UP_GLYPH_SIZE: f32 = 24.0;

    /// Laser defaults (negative speed = upward)
    pub const LASER_WIDTH: f32 = 4.0;
    pub const LASER_HEIGHT: f32 = 15.0;
    pub const LASER_SPEED: f32 = -8.0;

    pub const BRICK_CORNER_RADIUS: f32 = 4.0;

    /// Firework defaults
    pub const FIREWORK_PARTICLES: usize = 50;
    pub const FIREWORK_MIN_ASCENT_SPEED: f32 = 8.0;
    pub const FIREWORK_MAX_ASCENT_SPEED: f32 = 12.0;
    /// Explosion altitude range as fractions of screen height
    pub const FIREWORK_MIN_ALTITUDE: f32 = 0.2;
    pub const FIREWORK_MAX_ALTITUDE: f32 = 0.5;
    pub const FIREWORK_ROCKET_RADIUS: f32 = 3.0;
    /// Lowest value of each channel of an explosion color
    pub const FIREWORK_MIN_CHANNEL: u8 = 50;

    /// Particle defaults
    pub const PARTICLE_MIN_SIZE: u32 = 2;
    pub const PARTICLE_MAX_SIZE: u32 = 4;
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    /// Size lost per tick
    pub const PARTICLE_SHRINK: f32 = 0.1;
}
