//! Estimation result display
//!
//! Renders the pending spinner, the animated count-up once a price lands,
//! and the property summary beneath it. The same component draws the
//! fullscreen result, the current panel, and the previous panel of the
//! comparison layout.

use crate::i18n::{format_price, tr, Locale, Msg};
use crate::model::options::{
    self, CONDITION_OPTIONS, FURNISHED_OPTIONS, HEATING_OPTIONS, YEAR_BUILT_OPTIONS,
};
use crate::model::{EstimationOutcome, Slot};
use crate::theme::Palette;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Count-up animation from zero to the estimated price
pub struct AnimatedCounter {
    target: f64,
    started: Instant,
    duration: Duration,
}

impl AnimatedCounter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            started: Instant::now(),
            duration: Duration::from_millis(2000),
        }
    }

    /// Deceleration curve: fast at first, settling gently on the target
    fn ease_out_quint(t: f64) -> f64 {
        1.0 - (1.0 - t).powi(5)
    }

    /// The value to display right now
    pub fn value(&self) -> u64 {
        let t = (self.started.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        (self.target * Self::ease_out_quint(t)).floor().max(0.0) as u64
    }

    pub fn is_done(&self) -> bool {
        self.started.elapsed() >= self.duration
    }
}

/// Result display component
#[derive(Default)]
pub struct ResultComponent {
    /// Running count-up for the current slot's price, if any
    counter: Option<AnimatedCounter>,
    /// For animating the pending spinner
    started: Option<Instant>,
}

impl ResultComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the count-up for a freshly delivered price
    pub fn start_count_up(&mut self, price: f64) {
        self.counter = Some(AnimatedCounter::new(price));
    }

    /// Drop any running animation
    pub fn reset(&mut self) {
        self.counter = None;
        self.started = None;
    }

    fn spinner_frame(&mut self) -> &'static str {
        let started = *self.started.get_or_insert_with(Instant::now);
        let index =
            (started.elapsed().as_millis() / SPINNER_INTERVAL.as_millis()) as usize;
        SPINNER_FRAMES[index % SPINNER_FRAMES.len()]
    }

    fn displayed_price(&self, price: f64) -> u64 {
        match &self.counter {
            Some(counter) => counter.value(),
            None => price.floor().max(0.0) as u64,
        }
    }

    /// Placeholder panel shown before anything was submitted
    pub fn draw_ready_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
    ) -> Result<()> {
        let block = result_block(tr(locale, Msg::ResultTitle), palette.muted);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                tr(locale, Msg::Ready),
                Style::default().fg(palette.subtle).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tr(locale, Msg::ReadyDetail),
                Style::default().fg(palette.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        Ok(())
    }

    /// The current estimation, fullscreen or as the top comparison panel
    pub fn draw_current_panel(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
        slot: &Slot,
    ) -> Result<()> {
        let block = result_block(tr(locale, Msg::ResultTitle), palette.accent);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        match slot.outcome {
            EstimationOutcome::Pending => {
                lines.push(Line::from(vec![
                    Span::styled(self.spinner_frame(), Style::default().fg(palette.highlight)),
                    Span::raw(" "),
                    Span::styled(
                        tr(locale, Msg::Calculating),
                        Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    tr(locale, Msg::CalculatingDetail),
                    Style::default().fg(palette.muted),
                )));
            }
            EstimationOutcome::Priced(price) => {
                lines.push(Line::from(Span::styled(
                    tr(locale, Msg::EstimatedPrice),
                    Style::default().fg(palette.subtle),
                )));
                lines.push(Line::from(vec![
                    Span::styled(
                        format_price(self.displayed_price(price)),
                        Style::default()
                            .fg(palette.success)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(tr(locale, Msg::Currency), Style::default().fg(palette.success)),
                ]));
                lines.push(Line::from(""));
                lines.extend(property_summary(&slot.record, locale, palette));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    tr(locale, Msg::Disclaimer),
                    Style::default().fg(palette.muted),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        Ok(())
    }

    /// The retained earlier estimation in the comparison layout
    pub fn draw_previous_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
        slot: &Slot,
    ) -> Result<()> {
        let block = result_block(tr(locale, Msg::PreviousEstimation), palette.secondary);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        if let Some(price) = slot.outcome.price() {
            // Previous prices render settled; the count-up only ever runs
            // on the current slot.
            lines.push(Line::from(vec![
                Span::styled(
                    format_price(price.floor().max(0.0) as u64),
                    Style::default()
                        .fg(palette.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(tr(locale, Msg::Currency), Style::default().fg(palette.secondary)),
            ]));
            lines.push(Line::from(Span::styled(
                tr(locale, Msg::Completed),
                Style::default().fg(palette.muted),
            )));
            lines.push(Line::from(""));
            lines.extend(property_summary(&slot.record, locale, palette));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        Ok(())
    }
}

fn result_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Compact summary of the record behind an estimate
fn property_summary(
    record: &crate::model::PropertyRecord,
    locale: Locale,
    palette: Palette,
) -> Vec<Line<'static>> {
    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(palette.muted)),
            Span::styled(value, Style::default().fg(palette.text)),
        ])
    };

    let lookup = |catalog, code: &str| {
        options::find_option(catalog, code)
            .map(|o| o.label(locale).to_string())
            .unwrap_or_else(|| code.to_string())
    };

    vec![
        detail(tr(locale, Msg::Location), record.location.clone()),
        detail(tr(locale, Msg::Size), format!("{} m²", record.size_m2)),
        detail(tr(locale, Msg::Rooms), record.rooms.to_string()),
        detail(tr(locale, Msg::Floor), record.floor.to_string()),
        detail(tr(locale, Msg::Bathrooms), record.bathrooms.to_string()),
        detail(
            tr(locale, Msg::YearBuilt),
            lookup(YEAR_BUILT_OPTIONS, &record.year_built),
        ),
        detail(
            tr(locale, Msg::Condition),
            lookup(CONDITION_OPTIONS, &record.condition),
        ),
        detail(
            tr(locale, Msg::Furnished),
            lookup(FURNISHED_OPTIONS, &record.furnished),
        ),
        detail(
            tr(locale, Msg::Heating),
            lookup(HEATING_OPTIONS, &record.heating_type),
        ),
    ]
}
