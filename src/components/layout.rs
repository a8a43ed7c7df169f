//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen areas: content, optional status line, help bar
pub struct ScreenLayout {
    pub content: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the main vertical layout
pub fn calculate_screen_layout(area: Rect, has_status: bool) -> ScreenLayout {
    let chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area)
    };

    if has_status {
        ScreenLayout { content: chunks[0], status: Some(chunks[1]), help: chunks[2] }
    } else {
        ScreenLayout { content: chunks[0], status: None, help: chunks[1] }
    }
}

/// Split the content area into form and results columns
pub fn split_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Stack the results column into current and previous panels
pub fn split_result_rows(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        // Popup never exceeds the available area
        let popup = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_screen_layout_status_line() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_screen_layout(area, false);
        assert!(layout.status.is_none());
        assert_eq!(layout.help.height, 3);

        let layout = calculate_screen_layout(area, true);
        assert_eq!(layout.status.unwrap().height, 1);
    }
}
