//! Tests for layout hit testing

use ratatui::layout::Rect;

use super::*;
use crate::controller::ClickTarget;
use crate::suggestions::suggestion_render::PopupPlacement;

fn regions_with_popup(scroll_offset: usize) -> LayoutRegions {
    LayoutRegions {
        input_field: Some(Rect::new(0, 0, 60, 3)),
        // Two borders + four items
        suggestions: Some(PopupPlacement {
            area: Rect::new(2, 3, 20, 6),
            scroll_offset,
        }),
    }
}

#[test]
fn test_region_at_input_field() {
    let regions = regions_with_popup(0);
    assert_eq!(region_at(&regions, 10, 1), Some(Region::InputField));
}

#[test]
fn test_region_at_popup() {
    let regions = regions_with_popup(0);
    assert_eq!(region_at(&regions, 5, 4), Some(Region::Suggestions));
    assert_eq!(region_at(&regions, 2, 3), Some(Region::Suggestions));
}

#[test]
fn test_region_at_outside_everything() {
    let regions = regions_with_popup(0);
    assert_eq!(region_at(&regions, 40, 7), None);
    assert_eq!(region_at(&regions, 5, 9), None);
}

#[test]
fn test_region_at_without_popup() {
    let mut regions = regions_with_popup(0);
    regions.suggestions = None;
    assert_eq!(region_at(&regions, 5, 4), None);
}

#[test]
fn test_region_at_empty_layout() {
    assert_eq!(region_at(&LayoutRegions::new(), 0, 0), None);
}

#[test]
fn test_suggestion_target_rows() {
    let regions = regions_with_popup(0);

    assert_eq!(suggestion_target(&regions, 3), ClickTarget::Container);
    assert_eq!(suggestion_target(&regions, 4), ClickTarget::Item(0));
    assert_eq!(suggestion_target(&regions, 7), ClickTarget::Item(3));
    assert_eq!(suggestion_target(&regions, 8), ClickTarget::Container);
}

#[test]
fn test_suggestion_target_with_scroll_offset() {
    let regions = regions_with_popup(5);
    assert_eq!(suggestion_target(&regions, 4), ClickTarget::Item(5));
    assert_eq!(suggestion_target(&regions, 6), ClickTarget::Item(7));
}

#[test]
fn test_suggestion_target_without_popup() {
    let regions = LayoutRegions::new();
    assert_eq!(suggestion_target(&regions, 4), ClickTarget::Container);
}

#[test]
fn test_clear_forgets_regions() {
    let mut regions = regions_with_popup(0);
    regions.clear();
    assert_eq!(regions, LayoutRegions::new());
}
