use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, clamped to the space left in `frame_area`
pub fn popup_below_anchor(
    anchor: Rect,
    frame_area: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.bottom();

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(frame_area.bottom().saturating_sub(popup_y)),
    }
}

/// Place a popup in the bottom-right corner, `margin` cells away from the edges
pub fn popup_bottom_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin));
    let popup_height = height.min(frame_area.height.saturating_sub(margin));

    Rect {
        x: frame_area.right().saturating_sub(popup_width + margin),
        y: frame_area.bottom().saturating_sub(popup_height + margin),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
