//! Keyboard input handling

use game_core::{InputState, DOWN_KEYS, UP_KEYS};
use web_sys::KeyboardEvent;

/// Keys the game reacts to; their browser default (page scroll) is suppressed
pub fn is_paddle_key(key: &str) -> bool {
    UP_KEYS.contains(&key) || DOWN_KEYS.contains(&key)
}

/// Handle key down event
pub fn handle_key_down(input: &mut InputState, key: &str) {
    input.press(key);
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, key: &str) {
    input.release(key);
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
