use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use sectionflow_core::InputEvent;

use crate::event::AppEvent;
use crate::keymap::{KeyAction, KeyBinding, Keymap};

/// What the presenter should do with a terminal event
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hand a normalized event to the navigator
    Navigate(InputEvent),
    Quit,
    /// Redraw only
    Redraw,
    None,
}

/// Translate a terminal event into a presenter action.
///
/// Mouse drags stand in for touch swipes: button rows are scaled by
/// `row_height_px` so the swipe threshold keeps its pixel meaning.
pub fn translate(event: &AppEvent, keymap: &Keymap, row_height_px: f64) -> Action {
    match event {
        AppEvent::Key(key) => handle_key_event(key, keymap),
        AppEvent::Mouse(mouse) => handle_mouse_event(mouse, row_height_px),
        AppEvent::Resize(_, _) => Action::Redraw,
        AppEvent::Tick => Action::None,
    }
}

fn handle_key_event(key: &KeyEvent, keymap: &Keymap) -> Action {
    match keymap.get(&KeyBinding::new(key.code, key.modifiers)) {
        Some(KeyAction::Navigate(nav_key)) => Action::Navigate(InputEvent::Key(nav_key.clone())),
        Some(KeyAction::Quit) => Action::Quit,
        None => Action::None,
    }
}

fn handle_mouse_event(mouse: &MouseEvent, row_height_px: f64) -> Action {
    let y = mouse.row as f64 * row_height_px;
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Navigate(InputEvent::Wheel { delta_y: 1.0 }),
        MouseEventKind::ScrollUp => Action::Navigate(InputEvent::Wheel { delta_y: -1.0 }),
        MouseEventKind::Down(MouseButton::Left) => Action::Navigate(InputEvent::TouchStart { y }),
        MouseEventKind::Up(MouseButton::Left) => Action::Navigate(InputEvent::TouchEnd { y }),
        _ => Action::None,
    }
}
