use macroquad::prelude::*;

/// Escape closes the window
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
