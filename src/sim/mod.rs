//! Per-tick simulation entities
//!
//! Every entity advances exactly one fixed tick per `update` call. The
//! caller owns all entities and handles spawning, removal, scoring and
//! ball-vs-brick resolution; this module only moves things and runs timers.

pub mod ball;
pub mod brick;
pub mod firework;
pub mod laser;
pub mod paddle;
pub mod particle;
pub mod power_up;
pub mod rect;

pub use ball::{Ball, BallState, BallStatus, Collision};
pub use brick::Brick;
pub use firework::Firework;
pub use laser::Laser;
pub use paddle::{EffectTimers, Paddle, PaddleInput};
pub use particle::Particle;
pub use power_up::{PowerUp, PowerUpKind, PowerUpProfile};
pub use rect::Rect;
