use glam::Vec2;
use rand::Rng;

use crate::params::Params;
use crate::resources::GameRng;

/// Ball - the pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2, // pixels per frame
    radius: f32,
    color: String,
    glow: f32, // 0 = none, 1 = full highlight (display only)
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: impl Into<String>) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos,
            vel,
            radius,
            color: color.into(),
            glow: 0.0,
        }
    }

    /// Advance one frame, reflecting off the top and bottom walls.
    ///
    /// Returns true when the ball bounced. The side walls are left to scoring.
    pub fn update(&mut self, _bounds_width: f32, bounds_height: f32) -> bool {
        self.pos += self.vel;

        if self.pos.y + self.radius > bounds_height || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Serve again from `(x, y)`, towards the side that just scored
    pub fn reset(&mut self, x: f32, y: f32, rng: &mut GameRng) {
        self.pos = Vec2::new(x, y);
        self.vel.x = if self.vel.x > 0.0 {
            -Params::BALL_SERVE_SPEED
        } else {
            Params::BALL_SERVE_SPEED
        };
        self.vel.y = rng
            .0
            .gen_range(-Params::BALL_SERVE_SPREAD..Params::BALL_SERVE_SPREAD);
        self.glow = 1.0;
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Speed up both axes, keeping direction
    pub fn increase_speed(&mut self) {
        self.vel.x = faster(self.vel.x);
        self.vel.y = faster(self.vel.y);
    }

    pub fn clear_glow(&mut self) {
        self.glow = 0.0;
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed_x(&self) -> f32 {
        self.vel.x
    }

    pub fn speed_y(&self) -> f32 {
        self.vel.y
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn glow(&self) -> f32 {
        self.glow
    }
}

// Zero counts as negative.
fn faster(v: f32) -> f32 {
    let magnitude = (v.abs() + Params::BALL_SPEED_INCREMENT).min(Params::BALL_SPEED_MAX);
    if v > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Paddle - one per side
#[derive(Debug, Clone)]
pub struct Paddle {
    pos: Vec2,  // top-left corner, x never changes
    size: Vec2, // width, height
    speed: f32,
    color: String,
    moving: bool, // display only
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, color: impl Into<String>) -> Self {
        Self {
            pos,
            size,
            speed,
            color: color.into(),
            moving: false,
        }
    }

    pub fn move_up(&mut self, bounds_height: f32) {
        self.set_y(self.pos.y - self.speed, bounds_height);
    }

    pub fn move_down(&mut self, bounds_height: f32) {
        self.set_y(self.pos.y + self.speed, bounds_height);
    }

    fn set_y(&mut self, y: f32, bounds_height: f32) {
        let max_y = (bounds_height - self.size.y).max(0.0);
        self.pos.y = y.clamp(0.0, max_y);
        self.moving = true;
    }

    /// Scripted opponent: follow the ball outside a deadzone, and skip a
    /// frame now and then so it can be beaten.
    ///
    /// Returns false when this frame was skipped.
    pub fn auto_move(&mut self, ball_y: f32, bounds_height: f32, rng: &mut GameRng) -> bool {
        self.auto_move_with(
            ball_y,
            bounds_height,
            Params::AI_DEADZONE,
            Params::AI_SKIP_CHANCE,
            rng,
        )
    }

    pub fn auto_move_with(
        &mut self,
        ball_y: f32,
        bounds_height: f32,
        deadzone: f32,
        skip_chance: f64,
        rng: &mut GameRng,
    ) -> bool {
        if rng.0.gen_bool(skip_chance) {
            return false;
        }

        let center = self.pos.y + self.size.y / 2.0;
        if center < ball_y - deadzone {
            self.move_down(bounds_height);
        } else if center > ball_y + deadzone {
            self.move_up(bounds_height);
        }
        true
    }

    /// Clear the moving flag at the start of a frame
    pub fn settle(&mut self) {
        self.moving = false;
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 10.0, "#fff")
    }

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(Vec2::new(10.0, y), Vec2::new(12.0, 100.0), 8.0, "#fff")
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = ball_at(100.0, 100.0, 5.0, -3.0);
        let bounced = ball.update(800.0, 500.0);
        assert!(!bounced);
        assert_eq!(ball.pos(), Vec2::new(105.0, 97.0));
        assert_eq!(ball.vel(), Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut ball = ball_at(100.0, 487.0, 5.0, 4.0);
        assert!(ball.update(800.0, 500.0));
        assert_eq!(ball.y(), 491.0);
        assert_eq!(ball.speed_y(), -4.0, "Vertical speed should flip");
        assert_eq!(ball.speed_x(), 5.0, "Horizontal speed unchanged");
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut ball = ball_at(100.0, 12.0, -5.0, -4.0);
        assert!(ball.update(800.0, 500.0));
        assert_eq!(ball.speed_y(), 4.0);
    }

    #[test]
    fn test_ball_ignores_side_walls() {
        let mut ball = ball_at(795.0, 250.0, 5.0, 0.0);
        ball.update(800.0, 500.0);
        assert_eq!(ball.x(), 800.0);
        assert_eq!(ball.speed_x(), 5.0);
    }

    #[test]
    fn test_ball_wall_bounce_always_flips_sign() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let y = rng.0.gen_range(0.0..500.0);
            let vy = rng.0.gen_range(-15.0..15.0);
            let mut ball = ball_at(400.0, y, 5.0, vy);
            let before = ball.speed_y();
            let moved_y = y + vy;
            let crossed = moved_y + 10.0 > 500.0 || moved_y - 10.0 < 0.0;
            ball.update(800.0, 500.0);
            if crossed {
                assert_eq!(ball.speed_y(), -before);
            } else {
                assert_eq!(ball.speed_y(), before);
            }
        }
    }

    #[test]
    fn test_ball_reset_alternates_serve() {
        let mut rng = GameRng::new(1);
        let mut ball = ball_at(810.0, 40.0, 7.5, 3.0);

        ball.reset(400.0, 250.0, &mut rng);
        assert_eq!(ball.pos(), Vec2::new(400.0, 250.0));
        assert_eq!(ball.speed_x(), -5.0);

        ball.reset(400.0, 250.0, &mut rng);
        assert_eq!(ball.speed_x(), 5.0);
    }

    #[test]
    fn test_ball_reset_vertical_speed_in_range() {
        let mut rng = GameRng::new(99);
        let mut ball = ball_at(0.0, 0.0, -5.0, 0.0);
        for _ in 0..200 {
            ball.reset(400.0, 250.0, &mut rng);
            assert!((-5.0..5.0).contains(&ball.speed_y()));
            assert_eq!(ball.speed_x().abs(), 5.0);
        }
    }

    #[test]
    fn test_ball_reset_sets_glow() {
        let mut rng = GameRng::new(3);
        let mut ball = ball_at(0.0, 0.0, 5.0, 0.0);
        assert_eq!(ball.glow(), 0.0);
        ball.reset(400.0, 250.0, &mut rng);
        assert_eq!(ball.glow(), 1.0);
        ball.clear_glow();
        assert_eq!(ball.glow(), 0.0);
    }

    #[test]
    fn test_ball_reverse_x() {
        let mut ball = ball_at(0.0, 0.0, -5.0, 2.0);
        ball.reverse_x();
        assert_eq!(ball.vel(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_increase_speed_keeps_sign() {
        let mut ball = ball_at(0.0, 0.0, 5.0, -2.0);
        ball.increase_speed();
        assert_eq!(ball.vel(), Vec2::new(5.5, -2.5));
    }

    #[test]
    fn test_increase_speed_treats_zero_as_negative() {
        let mut ball = ball_at(0.0, 0.0, 5.0, 0.0);
        ball.increase_speed();
        assert_eq!(ball.speed_y(), -0.5);
    }

    #[test]
    fn test_increase_speed_is_capped() {
        let mut ball = ball_at(0.0, 0.0, 14.8, -14.9);
        for _ in 0..10 {
            ball.increase_speed();
            assert!(ball.speed_x().abs() <= Params::BALL_SPEED_MAX);
            assert!(ball.speed_y().abs() <= Params::BALL_SPEED_MAX);
        }
        assert_eq!(ball.vel(), Vec2::new(15.0, -15.0));
    }

    #[test]
    fn test_paddle_move_down_at_bottom_stays() {
        let mut paddle = paddle_at(400.0);
        paddle.move_down(500.0);
        assert_eq!(paddle.y(), 400.0);
    }

    #[test]
    fn test_paddle_move_up_clamps_at_top() {
        let mut paddle = paddle_at(3.0);
        paddle.move_up(500.0);
        assert_eq!(paddle.y(), 0.0);
    }

    #[test]
    fn test_paddle_moves_by_speed_and_flags_moving() {
        let mut paddle = paddle_at(200.0);
        assert!(!paddle.is_moving());
        paddle.move_down(500.0);
        assert_eq!(paddle.y(), 208.0);
        assert!(paddle.is_moving());
        paddle.settle();
        assert!(!paddle.is_moving());
        paddle.move_up(500.0);
        assert_eq!(paddle.y(), 200.0);
        assert_eq!(paddle.x(), 10.0, "x never changes");
    }

    #[test]
    fn test_paddle_stays_in_bounds() {
        let mut rng = GameRng::new(5);
        let mut paddle = paddle_at(200.0);
        for _ in 0..2000 {
            if rng.0.gen_bool(0.5) {
                paddle.move_up(500.0);
            } else {
                paddle.move_down(500.0);
            }
            assert!(paddle.y() >= 0.0 && paddle.y() <= 400.0);
        }
    }

    #[test]
    fn test_auto_move_holds_inside_deadzone() {
        let mut rng = GameRng::new(11);
        let mut paddle = paddle_at(200.0); // centre 250
        for _ in 0..100 {
            paddle.auto_move(270.0, 500.0, &mut rng);
            assert_eq!(paddle.y(), 200.0);
        }
    }

    #[test]
    fn test_auto_move_follows_ball_up() {
        let mut rng = GameRng::new(42);
        let frames = 1000;
        let mut ups = 0;
        for _ in 0..frames {
            let mut paddle = paddle_at(200.0); // centre 250
            paddle.auto_move(100.0, 500.0, &mut rng);
            assert!(paddle.y() <= 200.0, "Should never move down");
            if paddle.y() < 200.0 {
                ups += 1;
            }
        }
        // Expected ~80%; allow sampling slack.
        assert!(ups > 700 && ups < 900, "moved up on {ups} of {frames} frames");
    }

    #[test]
    fn test_auto_move_follows_ball_down() {
        let mut rng = GameRng::new(8);
        let mut paddle = paddle_at(0.0);
        for _ in 0..100 {
            paddle.auto_move(450.0, 500.0, &mut rng);
        }
        assert!(paddle.y() > 300.0);
    }

    #[test]
    fn test_auto_move_without_skips_always_moves() {
        let mut rng = GameRng::new(8);
        let mut paddle = paddle_at(200.0);
        for i in 1..=5 {
            assert!(paddle.auto_move_with(0.0, 500.0, 35.0, 0.0, &mut rng));
            assert_eq!(paddle.y(), 200.0 - 8.0 * i as f32);
        }
    }
}
