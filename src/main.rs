//! Brick Breaker headless demo
//!
//! Drives the entity core the way a game loop would: an autopilot moves
//! the paddle, bricks break and drop power-ups, lasers fire, and a cleared
//! wall sets off fireworks. Every frame is drawn into a `ShapeBatch`.
//!
//! Usage: `brick-breaker [tuning.json] [seed]`

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use brick_breaker::render::ShapeBatch;
use brick_breaker::sim::{
    Ball, BallStatus, Brick, Collision, Firework, Laser, Paddle, PaddleInput, PowerUp,
    PowerUpKind,
};
use brick_breaker::{Color, Tuning};

const SCREEN: Vec2 = Vec2::new(800.0, 600.0);
const DEMO_TICKS: u32 = 120 * brick_breaker::consts::TICKS_PER_SECOND;

const BRICK_ROWS: usize = 5;
const BRICK_COLS: usize = 10;
const BRICK_WIDTH: f32 = 75.0;
const BRICK_HEIGHT: f32 = 20.0;
const BRICK_GAP: f32 = 5.0;
const BRICK_TOP: f32 = 60.0;
const ROW_COLORS: [Color; BRICK_ROWS] = [
    Color::rgb(255, 59, 48),
    Color::rgb(255, 149, 0),
    Color::rgb(255, 204, 0),
    Color::rgb(52, 199, 89),
    Color::rgb(0, 122, 255),
];

const POWER_UP_CHANCE: f64 = 0.2;
const BRICK_SCORE: u32 = 10;
const STARTING_LIVES: u32 = 3;
const MAX_LIVES: u32 = 5;
/// Ticks between laser volleys
const LASER_COOLDOWN: u32 = 20;
/// Ticks a glued ball waits before the autopilot launches it
const SERVE_DELAY: u32 = 30;
const FIREWORKS_PER_CLEAR: usize = 5;
/// Width multiplier applied by the shrink pickup
const SHRINK_FACTOR: f32 = 0.75;
/// Speed multiplier applied by the fast pickup
const FAST_FACTOR: f32 = 1.5;

/// Everything a single play session owns
struct Session {
    tuning: Tuning,
    rng: Pcg32,
    paddle: Paddle,
    ball: Ball,
    bricks: Vec<Brick>,
    power_ups: Vec<PowerUp>,
    lasers: Vec<Laser>,
    fireworks: Vec<Firework>,
    batch: ShapeBatch,
    lives: u32,
    score: u32,
    level: u32,
    time_ticks: u32,
    glued_ticks: u32,
    laser_cooldown: u32,
    wall_cleared: bool,
}

impl Session {
    fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::with_tuning(SCREEN, Color::CYAN, &tuning.paddle);
        let ball = Ball::with_tuning(SCREEN, Color::WHITE, &tuning.ball, &mut rng);
        Self {
            tuning,
            rng,
            paddle,
            ball,
            bricks: build_wall(),
            power_ups: Vec::new(),
            lasers: Vec::new(),
            fireworks: Vec::new(),
            batch: ShapeBatch::new(),
            lives: STARTING_LIVES,
            score: 0,
            level: 1,
            time_ticks: 0,
            glued_ticks: 0,
            laser_cooldown: 0,
            wall_cleared: false,
        }
    }

    /// Advance one frame. Returns false once the game is over.
    fn tick(&mut self) -> bool {
        self.time_ticks += 1;

        let input = self.autopilot();
        self.paddle.update(input);

        let launch = self.ball.is_glued() && self.glued_ticks >= SERVE_DELAY;
        self.glued_ticks = if self.ball.is_glued() { self.glued_ticks + 1 } else { 0 };

        let (status, collision) = self.ball.update(&self.paddle, launch, &mut self.rng);
        if collision == Some(Collision::Paddle) && self.ball.is_glued() {
            log::debug!("Ball caught at tick {}", self.time_ticks);
        }
        if status == BallStatus::Lost && !self.lose_life() {
            return false;
        }

        self.resolve_ball_bricks();
        self.fire_lasers();
        self.update_lasers();
        self.update_power_ups();
        self.update_fireworks();
        self.draw();

        true
    }

    /// Track the ball with the paddle center
    fn autopilot(&self) -> PaddleInput {
        let target = self.ball.rect.centerx();
        let center = self.paddle.rect.centerx();
        let dead_zone = self.paddle.speed / 2.0;
        PaddleInput {
            left: target < center - dead_zone,
            right: target > center + dead_zone,
        }
    }

    /// Returns false when no lives remain
    fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Ball lost, {} lives left", self.lives);
        if self.lives == 0 {
            return false;
        }
        self.ball.reset(&mut self.rng);
        self.paddle.reset();
        self.power_ups.clear();
        self.lasers.clear();
        true
    }

    /// First overlapping brick breaks and bounces the ball vertically
    fn resolve_ball_bricks(&mut self) {
        let Some(index) = self
            .bricks
            .iter()
            .position(|brick| brick.rect.intersects(&self.ball.rect))
        else {
            return;
        };
        let brick = self.bricks.remove(index);
        self.ball.reflect_y();
        self.break_brick(&brick);
    }

    fn break_brick(&mut self, brick: &Brick) {
        self.score += BRICK_SCORE;
        if self.rng.random_bool(POWER_UP_CHANCE) {
            let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
            let x = brick.rect.centerx() - self.tuning.power_up.width / 2.0;
            self.power_ups.push(PowerUp::with_tuning(
                x,
                brick.rect.top(),
                kind,
                &self.tuning.power_up,
            ));
        }
    }

    fn fire_lasers(&mut self) {
        self.laser_cooldown = self.laser_cooldown.saturating_sub(1);
        if self.laser_cooldown > 0 {
            return;
        }
        let Some(muzzles) = self.paddle.laser_muzzles() else {
            return;
        };
        let laser = &self.tuning.laser;
        for muzzle in muzzles {
            self.lasers.push(Laser::with_tuning(
                muzzle.x - laser.width / 2.0,
                muzzle.y - laser.height,
                Color::RED,
                laser,
            ));
        }
        self.laser_cooldown = LASER_COOLDOWN;
    }

    fn update_lasers(&mut self) {
        let mut broken = Vec::new();
        let bricks = &mut self.bricks;
        self.lasers.retain_mut(|laser| {
            laser.update();
            if let Some(index) = bricks.iter().position(|b| b.rect.intersects(&laser.rect)) {
                broken.push(bricks.remove(index));
                return false;
            }
            !laser.is_offscreen()
        });
        for brick in broken {
            self.break_brick(&brick);
        }
    }

    fn update_power_ups(&mut self) {
        let mut caught = Vec::new();
        let paddle_rect = self.paddle.rect;
        self.power_ups.retain_mut(|power_up| {
            power_up.update();
            if power_up.rect.intersects(&paddle_rect) {
                caught.push(power_up.kind);
                return false;
            }
            power_up.rect.top() <= SCREEN.y
        });
        for kind in caught {
            self.apply_power_up(kind);
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        log::info!("{}", kind.profile().message);
        match kind {
            PowerUpKind::Grow | PowerUpKind::Laser | PowerUpKind::Glue => {
                self.paddle.activate_power_up(kind);
            }
            PowerUpKind::Slow => self.ball.activate_power_up(kind),
            PowerUpKind::Shrink => {
                let width = self.paddle.width * SHRINK_FACTOR;
                self.paddle.width = width;
                self.paddle.rect.resize_width_centered(width);
            }
            PowerUpKind::Fast => self.ball.vel *= FAST_FACTOR,
            PowerUpKind::ExtraLife => self.lives = (self.lives + 1).min(MAX_LIVES),
        }
    }

    /// Celebrate a cleared wall, then build the next one once the sky is dark
    fn update_fireworks(&mut self) {
        if self.bricks.is_empty() && !self.wall_cleared {
            self.wall_cleared = true;
            log::info!("Level {} cleared at tick {}", self.level, self.time_ticks);
            for _ in 0..FIREWORKS_PER_CLEAR {
                let firework =
                    Firework::with_tuning(SCREEN, self.tuning.firework.clone(), &mut self.rng);
                self.fireworks.push(firework);
            }
        }

        for firework in &mut self.fireworks {
            firework.update();
        }
        self.fireworks.retain(|firework| !firework.is_dead());

        if self.wall_cleared && self.fireworks.is_empty() {
            self.wall_cleared = false;
            self.level += 1;
            self.bricks = build_wall();
            self.power_ups.clear();
            self.lasers.clear();
            self.paddle.reset();
            self.ball.reset(&mut self.rng);
        }
    }

    fn draw(&mut self) {
        self.batch.clear();
        for brick in &self.bricks {
            brick.draw(&mut self.batch);
        }
        for power_up in &self.power_ups {
            power_up.draw(&mut self.batch);
        }
        for laser in &self.lasers {
            laser.draw(&mut self.batch);
        }
        self.paddle.draw(&mut self.batch);
        self.ball.draw(&mut self.batch);
        for firework in &self.fireworks {
            firework.draw(&mut self.batch);
        }

        if self.time_ticks % brick_breaker::consts::TICKS_PER_SECOND == 0 {
            log::debug!(
                "tick {}: {} triangles, {} glyphs, {} bytes",
                self.time_ticks,
                self.batch.triangle_count(),
                self.batch.glyphs.len(),
                self.batch.vertex_bytes().len()
            );
        }
    }
}

fn build_wall() -> Vec<Brick> {
    let wall_width = BRICK_COLS as f32 * (BRICK_WIDTH + BRICK_GAP) - BRICK_GAP;
    let left = (SCREEN.x - wall_width) / 2.0;
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for (row, color) in ROW_COLORS.iter().enumerate() {
        for col in 0..BRICK_COLS {
            bricks.push(Brick::new(
                left + col as f32 * (BRICK_WIDTH + BRICK_GAP),
                BRICK_TOP + row as f32 * (BRICK_HEIGHT + BRICK_GAP),
                BRICK_WIDTH,
                BRICK_HEIGHT,
                *color,
            ));
        }
    }
    bricks
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = args.next().map(Tuning::load).unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    log::info!("Brick Breaker demo starting with seed {}", seed);

    let mut session = Session::new(tuning, seed);
    while session.time_ticks < DEMO_TICKS {
        if !session.tick() {
            log::info!("Game over at tick {}", session.time_ticks);
            break;
        }
    }

    log::info!(
        "Finished: level {}, score {}, lives {}, {} bricks left",
        session.level,
        session.score,
        session.lives,
        session.bricks.len()
    );
}
