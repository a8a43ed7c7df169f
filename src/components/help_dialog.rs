//! Key binding overview dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::i18n::{tr, Locale, Msg};
use crate::theme::Palette;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, Msg)] = &[
    ("Tab / ↑ ↓", Msg::HelpNavigate),
    ("← → / Enter", Msg::HelpEdit),
    ("Enter", Msg::HelpSubmit),
    ("n", Msg::HelpNewEstimation),
    ("r", Msg::HelpReset),
    ("l", Msg::HelpLanguage),
    ("t", Msg::HelpTheme),
    ("q / Esc", Msg::HelpQuit),
];

/// Key binding overview dialog
#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn draw_localized(
        &self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
    ) -> Result<()> {
        let height = BINDINGS.len() as u16 + 4;
        let popup_area = centered_popup(area, 44, height);

        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        for (keys, msg) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", keys),
                    Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(tr(locale, *msg), Style::default().fg(palette.text)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ", tr(locale, Msg::HelpTitle)))
                .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        // Any key dismisses the overview
        Ok(Some(Action::CloseModal))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_localized(frame, area, Locale::En, Palette::default())
    }
}
