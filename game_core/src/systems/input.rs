use crate::{Config, InputState, Paddle};

/// Move the player paddle from held keys.
///
/// Up and down are checked independently; holding both cancels out.
pub fn apply_player_input(paddle: &mut Paddle, input: &InputState, config: &Config) {
    if input.up_held() {
        paddle.move_up(config.arena_height);
    }

    if input.down_held() {
        paddle.move_down(config.arena_height);
    }
}
