use crate::{Ball, Config, Events, GameRng, Score, Side};

/// Check if ball left the arena (scoring).
///
/// Returns the side that scored; the ball is served again from the centre.
pub fn check_scoring(
    ball: &mut Ball,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = if ball.x() + ball.radius() > config.arena_width {
        Side::Player
    } else if ball.x() - ball.radius() < 0.0 {
        Side::Ai
    } else {
        return None;
    };

    score.increment(scorer);
    events.scored = Some(scorer);

    let spawn = config.ball_spawn();
    ball.reset(spawn.x, spawn.y, rng);
    Some(scorer)
}
