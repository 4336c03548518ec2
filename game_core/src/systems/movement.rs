use crate::{Ball, Config, Events, GameRng, Paddle};

/// Let the AI paddle chase the ball's current height
pub fn move_ai_paddle(paddle: &mut Paddle, ball: &Ball, config: &Config, rng: &mut GameRng) {
    paddle.auto_move_with(
        ball.y(),
        config.arena_height,
        config.ai_deadzone,
        config.ai_skip_chance,
        rng,
    );
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.update(config.arena_width, config.arena_height) {
        events.ball_hit_wall = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_ball_reports_wall_hit() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = Ball::new(Vec2::new(400.0, 5.0), Vec2::new(5.0, -5.0), 10.0, "#fff");

        move_ball(&mut ball, &config, &mut events);

        assert!(events.ball_hit_wall);
        assert_eq!(ball.speed_y(), 5.0);
    }

    #[test]
    fn test_move_ball_in_open_space() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = Ball::new(Vec2::new(400.0, 250.0), Vec2::new(5.0, 5.0), 10.0, "#fff");

        move_ball(&mut ball, &config, &mut events);

        assert!(!events.ball_hit_wall);
        assert_eq!(ball.pos(), Vec2::new(405.0, 255.0));
    }

    #[test]
    fn test_ai_paddle_never_moves_away_from_ball() {
        let config = Config::new();
        let mut rng = GameRng::new(2024);
        let ball = Ball::new(Vec2::new(400.0, 450.0), Vec2::ZERO, 10.0, "#fff");
        let mut paddle = Paddle::new(Vec2::new(778.0, 0.0), Vec2::new(12.0, 100.0), 8.0, "#fff");

        let mut last_y = paddle.y();
        for _ in 0..200 {
            move_ai_paddle(&mut paddle, &ball, &config, &mut rng);
            assert!(paddle.y() >= last_y);
            last_y = paddle.y();
        }
        let center = paddle.y() + paddle.height() / 2.0;
        assert!((center - 450.0).abs() <= config.ai_deadzone + config.paddle_speed);
    }
}
