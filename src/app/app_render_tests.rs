//! Tests for full-screen rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::test_utils::test_helpers::{TestApp, test_app, type_query, users_response};

fn draw(t: &mut TestApp, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| t.app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let mut t = test_app();

    let screen = draw(&mut t, 60, 10);

    assert!(screen.contains("Username"));
    assert!(screen.contains("Enter: Accept"));
    assert!(!screen.contains("Suggestions"));
    assert_eq!(t.app.layout_regions.input_field, Some(Rect::new(0, 0, 60, 3)));
    assert!(t.app.layout_regions.suggestions.is_none());
}

#[test]
fn test_pending_lookup_shows_activity() {
    let mut t = test_app();
    type_query(t.app.controller.as_mut().unwrap(), "ali");

    let screen = draw(&mut t, 60, 10);

    assert!(screen.contains("searching"));
}

#[test]
fn test_suggestions_drawn_under_field() {
    let mut t = test_app();
    type_query(t.app.controller.as_mut().unwrap(), "ali");
    t.responses
        .send(users_response(1, "ali", &["alice", "alicia"]))
        .unwrap();
    t.app.poll_lookups();

    let screen = draw(&mut t, 60, 12);

    assert!(screen.contains("Suggestions"));
    assert!(screen.contains("alice"));
    assert!(screen.contains("alicia"));
    assert!(screen.contains("Enter/Tab: Pick"));
    assert!(!screen.contains("searching"));

    let placement = t.app.layout_regions.suggestions.unwrap();
    assert_eq!(placement.area.y, 3);
    assert_eq!(placement.area.height, 4);
    assert_eq!(placement.scroll_offset, 0);
}

#[test]
fn test_regions_reset_when_list_hides() {
    let mut t = test_app();
    type_query(t.app.controller.as_mut().unwrap(), "ali");
    t.responses
        .send(users_response(1, "ali", &["alice"]))
        .unwrap();
    t.app.poll_lookups();
    draw(&mut t, 60, 12);
    assert!(t.app.layout_regions.suggestions.is_some());

    type_query(t.app.controller.as_mut().unwrap(), "al");
    draw(&mut t, 60, 12);

    assert!(t.app.layout_regions.suggestions.is_none());
}

#[test]
fn test_detached_screen() {
    let mut t = test_app();
    t.app.detach();

    let screen = draw(&mut t, 60, 10);

    assert!(screen.contains("No username field to attach to"));
    assert!(t.app.layout_regions.input_field.is_none());
}

#[test]
fn test_notification_drawn() {
    let mut t = test_app();
    t.app.notification.show("Copied username!");

    let screen = draw(&mut t, 60, 10);

    assert!(screen.contains("Copied username!"));
}
