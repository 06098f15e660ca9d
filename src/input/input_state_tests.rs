//! Tests for InputState

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods};

#[test]
fn test_new_input_is_empty() {
    let input = InputState::new();
    assert_eq!(input.value(), "");
}

#[test]
fn test_typing_changes_value() {
    let mut input = InputState::new();

    assert!(input.handle_key(key(KeyCode::Char('a'))));
    assert!(input.handle_key(key(KeyCode::Char('b'))));

    assert_eq!(input.value(), "ab");
}

#[test]
fn test_backspace_changes_value() {
    let mut input = InputState::new();
    input.set_value("abc");

    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.value(), "ab");
}

#[test]
fn test_cursor_movement_is_not_a_change() {
    let mut input = InputState::new();
    input.set_value("abc");

    assert!(!input.handle_key(key(KeyCode::Left)));
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_set_value_replaces_everything() {
    let mut input = InputState::new();
    input.set_value("alicia");
    input.handle_key(key(KeyCode::Left));
    input.handle_key(key(KeyCode::Left));

    input.set_value("bob");

    assert_eq!(input.value(), "bob");
    assert_eq!(input.textarea.cursor(), (0, 3));
}

#[test]
fn test_set_value_stays_single_line() {
    let mut input = InputState::new();
    input.set_value("two\nlines");

    assert_eq!(input.textarea.lines().len(), 1);
    assert_eq!(input.value(), "two lines");
}

#[test]
fn test_set_value_with_emoji() {
    let mut input = InputState::new();
    input.set_value("zoë👤");
    input.handle_key(key_with_mods(KeyCode::Char('x'), KeyModifiers::NONE));

    assert_eq!(input.value(), "zoë👤x");
}
