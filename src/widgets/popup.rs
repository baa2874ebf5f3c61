use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, flipping above it when the
/// remaining space below is too small
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(anchor.x.saturating_sub(frame_area.x)));
    let bottom = anchor.y.saturating_add(anchor.height);
    let space_below = (frame_area.y + frame_area.height).saturating_sub(bottom);
    let space_above = anchor.y.saturating_sub(frame_area.y);

    if height <= space_below || space_below >= space_above {
        Rect {
            x: anchor.x,
            y: bottom,
            width,
            height: height.min(space_below),
        }
    } else {
        let height = height.min(space_above);
        Rect {
            x: anchor.x,
            y: anchor.y - height,
            width,
            height,
        }
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
