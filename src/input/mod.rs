use macroquad::prelude::*;
use crate::application::Event;
use crate::ui::BoardView;

/// What the frame loop should do with this frame's input
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Game(Event),
    /// Close the round-over dialog; the next round starts right after
    DismissDialog,
}

/// Number keys map to cells in reading order
const CELL_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

const DISMISS_KEYS: [KeyCode; 4] = [KeyCode::Enter, KeyCode::KpEnter, KeyCode::Escape, KeyCode::Space];

/// Poll mouse and keyboard once per frame
pub fn poll(view: &BoardView, mouse_pos: (f32, f32)) -> Option<Action> {
    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some(action) = click_target(view, mouse_pos) {
            return Some(action);
        }
    }

    if view.dialog().is_some() {
        return DISMISS_KEYS
            .iter()
            .any(|&key| is_key_pressed(key))
            .then_some(Action::DismissDialog);
    }

    if is_key_pressed(KeyCode::R) {
        return Some(Action::Game(Event::ResetClicked));
    }
    CELL_KEYS
        .iter()
        .copied()
        .find(|&key| is_key_pressed(key))
        .and_then(key_to_cell)
        .map(|index| Action::Game(Event::CellClicked(index)))
}

/// Resolve a left click. While the dialog is open only its OK button counts.
pub fn click_target(view: &BoardView, mouse_pos: (f32, f32)) -> Option<Action> {
    if let Some(dialog) = view.dialog() {
        return dialog
            .ok_button()
            .is_hovered(mouse_pos)
            .then_some(Action::DismissDialog);
    }

    if view.reset_button().is_hovered(mouse_pos) {
        return Some(Action::Game(Event::ResetClicked));
    }

    // Disabled cells still report the click; the core rejects it
    view.cells()
        .iter()
        .position(|cell| cell.contains(mouse_pos))
        .map(|index| Action::Game(Event::CellClicked(index)))
}

pub fn key_to_cell(key: KeyCode) -> Option<usize> {
    CELL_KEYS.iter().position(|&k| k == key)
}
