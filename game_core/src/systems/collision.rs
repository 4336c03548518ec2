use crate::{Ball, Events, Paddle, Side};

/// Check ball against both paddles, using the position after this frame's move.
///
/// There is no swept test: a ball fast enough to step past a paddle in a
/// single frame is not reflected. Returns the paddle that was hit, if any.
pub fn check_collisions(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    events: &mut Events,
) -> Option<Side> {
    let within_span =
        |paddle: &Paddle| ball.y() >= paddle.y() && ball.y() <= paddle.y() + paddle.height();

    let hit = if ball.x() - ball.radius() <= player.x() + player.width()
        && within_span(player)
        && ball.speed_x() < 0.0
    {
        Some(Side::Player)
    } else if ball.x() + ball.radius() >= ai.x() && within_span(ai) && ball.speed_x() > 0.0 {
        Some(Side::Ai)
    } else {
        None
    };

    if let Some(side) = hit {
        ball.reverse_x();
        ball.increase_speed();
        events.paddle_hit = Some((side, ball.pos()));
    }
    hit
}
