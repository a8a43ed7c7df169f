//! Location picker dialog
//!
//! A searchable list of municipalities. Typing narrows the list with a
//! case-insensitive substring match; Enter confirms the highlighted entry.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::i18n::{tr, Locale, Msg};
use crate::model::options::all_locations;
use crate::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Filter municipalities by a case-insensitive substring match
pub fn filter_locations(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    all_locations()
        .into_iter()
        .filter(|loc| needle.is_empty() || loc.to_lowercase().contains(&needle))
        .collect()
}

/// Location picker dialog component
#[derive(Default)]
pub struct LocationDialog;

impl LocationDialog {
    pub fn draw_picker(
        &self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
        query: &str,
        selected: usize,
    ) -> Result<()> {
        let popup_area = centered_popup(area, 48, 18);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(format!(" {} ", tr(locale, Msg::Location)))
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        // Search input
        let input = Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.highlight)),
            Span::styled(query, Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.highlight)),
        ]);
        frame.render_widget(Paragraph::new(input), chunks[0]);

        let matches = filter_locations(query);

        if matches.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                tr(locale, Msg::LocationUnknown),
                Style::default().fg(palette.muted),
            )));
            frame.render_widget(empty, chunks[2]);
            return Ok(());
        }

        let selected = selected.min(matches.len() - 1);

        let items: Vec<ListItem> = matches
            .iter()
            .map(|loc| ListItem::new(Line::from(*loc)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(palette.accent)
                    .fg(palette.inverse)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(selected));

        frame.render_stateful_widget(list, chunks[2], &mut state);
        Ok(())
    }
}

impl Component for LocationDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Up => Some(Action::ModalUp),
            KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Backspace => Some(Action::ModalBackspace),
            KeyCode::Char(c) => Some(Action::ModalInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_picker(frame, area, Locale::En, Palette::default(), "", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_substring_case_insensitive() {
        let matches = filter_locations("sara");
        assert!(matches.iter().any(|l| *l == "Sarajevo - Centar"));
        assert!(matches.iter().all(|l| l.to_lowercase().contains("sara")));
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter_locations("").len(), all_locations().len());
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_locations("zzzzzz").is_empty());
    }
}
