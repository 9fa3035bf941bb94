use macroquad::prelude::*;

use crate::game::{Game, Screen};
use crate::grid::Direction;
use crate::input::{InputEvent, InputQueue};
use crate::variant::Variant;

const TURN_KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::W, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::S, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::A, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::D, Direction::Right),
];

const CONFIRM_KEYS: [KeyCode; 3] = [KeyCode::Enter, KeyCode::KpEnter, KeyCode::Space];

/// Clickable menu entry.
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub event: InputEvent,
    pub color: Color,
}

impl Button {
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Menu buttons laid out for the current window size.
pub fn menu_buttons(game: &Game) -> Vec<Button> {
    let rules = game.rules();
    let scale = (screen_width() / rules.window_width as f32).min(screen_height() / rules.window_height as f32);
    let difficulty = format!("Difficulty: {}", game.difficulty());

    match game.variant() {
        Variant::Classic => Vec::new(),
        Variant::Enhanced => {
            let at = |y: f32| Rect::new(300.0 * scale, y * scale, 200.0 * scale, 50.0 * scale);
            vec![
                Button {
                    rect: at(200.0),
                    label: "Start Game".to_string(),
                    event: InputEvent::Start,
                    color: GREEN,
                },
                Button {
                    rect: at(270.0),
                    label: difficulty,
                    event: InputEvent::CycleDifficulty,
                    color: BLUE,
                },
                Button {
                    rect: at(340.0),
                    label: format!("Theme: {}", game.theme()),
                    event: InputEvent::CycleTheme,
                    color: PURPLE,
                },
            ]
        }
        Variant::Modern => {
            let (width, height, spacing) = (240.0 * scale, 50.0 * scale, 70.0 * scale);
            let x = screen_width() / 2.0 - width / 2.0;
            let top = screen_height() / 2.0 + 30.0 * scale;
            let button = Color::from_rgba(45, 45, 45, 200);
            vec![
                Button {
                    rect: Rect::new(x, top, width, height),
                    label: "Start Game".to_string(),
                    event: InputEvent::Start,
                    color: button,
                },
                Button {
                    rect: Rect::new(x, top + spacing, width, height),
                    label: difficulty,
                    event: InputEvent::CycleDifficulty,
                    color: button,
                },
            ]
        }
    }
}

/// Turns this frame's key presses and clicks into queued events.
pub fn poll(game: &Game, queue: &mut InputQueue) {
    for (key, direction) in TURN_KEYS {
        if is_key_pressed(key) {
            queue.push(InputEvent::Turn(direction));
        }
    }
    if CONFIRM_KEYS.iter().any(|key| is_key_pressed(*key)) {
        queue.push(InputEvent::Confirm);
    }
    if is_key_pressed(KeyCode::P) {
        queue.push(InputEvent::PauseToggle);
    }
    if is_key_pressed(KeyCode::Escape) {
        queue.push(InputEvent::Back);
    }
    if is_key_pressed(KeyCode::Tab) {
        queue.push(InputEvent::CycleDifficulty);
    }
    if is_key_pressed(KeyCode::T) {
        queue.push(InputEvent::CycleTheme);
    }

    if game.screen() == Screen::Menu && is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(button) = menu_buttons(game).into_iter().find(|b| b.contains(vec2(x, y))) {
            queue.push(button.event);
        }
    }
}
