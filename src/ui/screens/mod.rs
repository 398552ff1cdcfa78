//! Per-screen key handlers and renderers, grouped by wizard stage.
//!
//! Each handler has the [`KeyHandler`](super::screen::KeyHandler) shape and
//! each renderer the [`Renderer`](super::screen::Renderer) shape; the
//! pairing happens in [`Screen::route`](super::screen::Screen::route).

pub mod browser;
pub mod deep_dive;
pub mod install;
pub mod intro;
pub mod menu;
pub mod wizard;

use crate::catalog::NavStyle;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Up/down movement for a key under the chosen navigation style.
pub(crate) fn vertical_delta(style: NavStyle, key: &KeyEvent) -> Option<isize> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (key.code, style) {
        (KeyCode::Up, _) => Some(-1),
        (KeyCode::Down, _) => Some(1),
        (KeyCode::Char('k'), NavStyle::Vim) if !ctrl => Some(-1),
        (KeyCode::Char('j'), NavStyle::Vim) if !ctrl => Some(1),
        (KeyCode::Char('p'), NavStyle::Emacs) if ctrl => Some(-1),
        (KeyCode::Char('n'), NavStyle::Emacs) if ctrl => Some(1),
        _ => None,
    }
}

/// Left/right movement for a key under the chosen navigation style.
pub(crate) fn horizontal_delta(style: NavStyle, key: &KeyEvent) -> Option<isize> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (key.code, style) {
        (KeyCode::Left, _) => Some(-1),
        (KeyCode::Right, _) => Some(1),
        (KeyCode::Char('h'), NavStyle::Vim) if !ctrl => Some(-1),
        (KeyCode::Char('l'), NavStyle::Vim) if !ctrl => Some(1),
        (KeyCode::Char('b'), NavStyle::Emacs) if ctrl => Some(-1),
        (KeyCode::Char('f'), NavStyle::Emacs) if ctrl => Some(1),
        _ => None,
    }
}

pub(crate) fn is_confirm(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_letters_only_in_vim_style() {
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(vertical_delta(NavStyle::Vim, &j), Some(1));
        assert_eq!(vertical_delta(NavStyle::Arrows, &j), None);
        assert_eq!(vertical_delta(NavStyle::Emacs, &j), None);
    }

    #[test]
    fn test_emacs_chords() {
        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(vertical_delta(NavStyle::Emacs, &ctrl_p), Some(-1));
        assert_eq!(vertical_delta(NavStyle::Vim, &ctrl_p), None);
        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(horizontal_delta(NavStyle::Emacs, &ctrl_f), Some(1));
    }

    #[test]
    fn test_arrows_work_everywhere() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        for style in NavStyle::ALL {
            assert_eq!(vertical_delta(style, &up), Some(-1));
        }
    }
}
