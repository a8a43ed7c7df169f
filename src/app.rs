//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to children.
//! It owns the view state machine and the prediction client; children
//! communicate with it through Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_screen_layout, split_columns, split_result_rows, FormComponent, HelpDialog,
    LocationDialog, QuitDialog, ResultComponent, SplashComponent,
};
use crate::components::location_dialog::filter_locations;
use crate::config::Config;
use crate::i18n::{tr, Locale, Msg};
use crate::model::{Modal, ModalStack, ViewEvent, ViewState};
use crate::services::{PredictionClient, PredictionMessage};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

/// Which top-level screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// The view state machine
    pub view: ViewState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Owner of the single in-flight prediction request
    pub predictor: PredictionClient,

    /// Active display language
    pub locale: Locale,

    /// Active color scheme
    pub theme: Theme,

    /// Persisted settings
    pub config: Config,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Transient status-line message, e.g. after a failed estimation
    pub notice: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub form: FormComponent,
    pub result: ResultComponent,
    pub quit_dialog: QuitDialog,
    pub location_dialog: LocationDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();
        let predictor = PredictionClient::new(&config.effective_api_base_url());
        let locale = config.locale;
        let theme = config.theme;

        App {
            mode: AppMode::Splash,
            view: ViewState::default(),
            modals: ModalStack::new(),
            predictor,
            locale,
            theme,
            config,
            should_quit: false,
            notice: None,
            splash: SplashComponent::new(),
            form: FormComponent::new(),
            result: ResultComponent::new(),
            quit_dialog: QuitDialog,
            location_dialog: LocationDialog,
            help_dialog: HelpDialog,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::ForceQuit);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelpDialog),
            KeyCode::Char('l') => Some(Action::SwitchLanguage),
            KeyCode::Char('t') => Some(Action::SwitchTheme),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('n') => Some(Action::NewEstimation),
            _ => None,
        }
    }

    fn submit_form(&mut self) {
        // Only submit from states where the machine accepts the event;
        // in FullResult the form is not on screen at all
        if !matches!(self.view, ViewState::Form | ViewState::SplitView { .. }) {
            warn!("submission ignored: the form is not active");
            return;
        }
        if !self.view.can_submit() {
            warn!("submission ignored: a request is already pending");
            return;
        }
        if let Some(record) = self.form.submit() {
            self.predictor.submit(&record);
            self.view = std::mem::take(&mut self.view).apply(ViewEvent::Submit(record));
            self.result.reset();
            self.notice = None;
        }
    }

    fn poll_prediction(&mut self) {
        match self.predictor.poll() {
            Some(PredictionMessage::Success(price)) => {
                self.view = std::mem::take(&mut self.view).apply(ViewEvent::Success(price));
                self.result.start_count_up(price);
            }
            Some(PredictionMessage::Failure) => {
                self.view = std::mem::take(&mut self.view).apply(ViewEvent::Failure);
                self.notice = Some(tr(self.locale, Msg::EstimationFailed).to_string());
            }
            None => {}
        }
    }

    /// Apply a modal-targeted action to the top modal
    fn update_modal(&mut self, action: Action) {
        match action {
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(Modal::LocationPicker { query, selected }) = self.modals.top().cloned() {
                    let matches = filter_locations(&query);
                    if let Some(location) = matches.get(selected.min(matches.len().saturating_sub(1))) {
                        self.form.set_location(location);
                        self.modals.pop();
                    }
                }
            }
            Action::ModalUp => {
                if let Some(Modal::LocationPicker { selected, .. }) = self.modals.top_mut() {
                    *selected = selected.saturating_sub(1);
                }
            }
            Action::ModalDown => {
                if let Some(Modal::LocationPicker { query, selected }) = self.modals.top_mut() {
                    let count = filter_locations(query).len();
                    if count > 0 {
                        *selected = (*selected + 1).min(count - 1);
                    }
                }
            }
            Action::ModalInput(c) => {
                if let Some(Modal::LocationPicker { query, selected }) = self.modals.top_mut() {
                    query.push(c);
                    *selected = 0;
                }
            }
            Action::ModalBackspace => {
                if let Some(Modal::LocationPicker { query, selected }) = self.modals.top_mut() {
                    query.pop();
                    *selected = 0;
                }
            }
            _ => {}
        }
    }

    fn draw_status_line(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            let line = Line::from(Span::styled(
                format!(" ✗ {}", notice),
                Style::default().fg(self.theme.palette().danger),
            ));
            frame.render_widget(Paragraph::new(line), area);
        }
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let hint = |key: &str, msg: Msg| {
            vec![
                Span::styled(key.to_string(), Style::default().fg(palette.highlight)),
                Span::styled(
                    format!(" {}  ", tr(self.locale, msg)),
                    Style::default().fg(palette.muted),
                ),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(hint("Tab/↑↓", Msg::HelpNavigate));
        spans.extend(hint("←→/Enter", Msg::HelpEdit));
        spans.extend(hint("Enter", Msg::HelpSubmit));
        if self.view.can_request_new_estimation() {
            spans.extend(hint("n", Msg::HelpNewEstimation));
        }
        spans.extend(hint("r", Msg::HelpReset));
        spans.extend(hint("l", Msg::HelpLanguage));
        spans.extend(hint("t", Msg::HelpTheme));
        spans.extend(hint("?", Msg::HelpTitle));
        spans.extend(hint("q", Msg::HelpQuit));

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.muted)));
        frame.render_widget(paragraph, area);
    }

    fn draw_content(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let pending = self.view.is_pending();
        let palette = self.theme.palette();
        let view = self.view.clone();

        match view {
            ViewState::Form => {
                let (left, right) = split_columns(area);
                self.form.draw_with_context(frame, left, self.locale, palette, pending)?;
                self.result.draw_ready_panel(frame, right, self.locale, palette)?;
            }
            ViewState::FullResult { current } => {
                self.result
                    .draw_current_panel(frame, area, self.locale, palette, &current)?;
            }
            ViewState::SplitView { current, previous } => {
                let (left, right) = split_columns(area);
                self.form.draw_with_context(frame, left, self.locale, palette, pending)?;
                let (top, bottom) = split_result_rows(right);
                match &current {
                    Some(slot) => self
                        .result
                        .draw_current_panel(frame, top, self.locale, palette, slot)?,
                    None => self.result.draw_ready_panel(frame, top, self.locale, palette)?,
                }
                if let Some(slot) = &previous {
                    self.result
                        .draw_previous_panel(frame, bottom, self.locale, palette, slot)?;
                }
            }
        }
        Ok(())
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.mode == AppMode::Splash {
            return self.splash.handle_key_event(key);
        }

        // Only the top modal receives input
        match self.modals.top() {
            Some(Modal::QuitConfirm) => return self.quit_dialog.handle_key_event(key),
            Some(Modal::LocationPicker { .. }) => {
                return self.location_dialog.handle_key_event(key)
            }
            Some(Modal::Help) => return self.help_dialog.handle_key_event(key),
            None => {}
        }

        // The form only receives keys while it is on screen; in
        // FullResult the result panel fills the content area. When it
        // is visible, the form declines letter keys, which keeps them
        // free as global shortcuts.
        if !matches!(self.view, ViewState::FullResult { .. }) {
            if let Some(action) = self.form.handle_key_event(key)? {
                return Ok(Some(action));
            }
        }
        Ok(self.handle_global_key(key))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.poll_prediction();
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            Action::SubmitForm => self.submit_form(),
            Action::NewEstimation => {
                if self.view.can_request_new_estimation() {
                    self.view = std::mem::take(&mut self.view).apply(ViewEvent::NewEstimation);
                    self.result.reset();
                }
            }
            Action::Reset => {
                self.view = std::mem::take(&mut self.view).apply(ViewEvent::Reset);
                self.predictor.clear();
                self.result.reset();
                self.notice = None;
            }

            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelpDialog => self.modals.push(Modal::Help),
            Action::OpenLocationPicker => self.modals.push(Modal::LocationPicker {
                query: String::new(),
                selected: 0,
            }),
            Action::CloseModal
            | Action::ConfirmModal
            | Action::ModalUp
            | Action::ModalDown
            | Action::ModalInput(_)
            | Action::ModalBackspace => self.update_modal(action),

            Action::SwitchLanguage => {
                self.locale = self.locale.other();
                self.config.locale = self.locale;
                if let Err(error) = self.config.save() {
                    warn!(%error, "failed to persist language change");
                }
            }
            Action::SwitchTheme => {
                self.theme = self.theme.other();
                self.config.theme = self.theme;
                if let Err(error) = self.config.save() {
                    warn!(%error, "failed to persist theme change");
                }
            }

            Action::NextField
            | Action::PrevField
            | Action::Input(_)
            | Action::Backspace
            | Action::NextOption
            | Action::PrevOption
            | Action::ToggleFlag => return self.form.update(action),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.mode == AppMode::Splash {
            return self.splash.draw(frame, area);
        }

        let layout = calculate_screen_layout(area, self.notice.is_some());
        self.draw_content(frame, layout.content)?;
        if let Some(status) = layout.status {
            self.draw_status_line(frame, status);
        }
        self.draw_help_bar(frame, layout.help);

        let palette = self.theme.palette();
        match self.modals.top().cloned() {
            Some(Modal::QuitConfirm) => {
                self.quit_dialog.draw_localized(frame, area, self.locale, palette)?;
            }
            Some(Modal::LocationPicker { query, selected }) => {
                self.location_dialog
                    .draw_picker(frame, area, self.locale, palette, &query, selected)?;
            }
            Some(Modal::Help) => {
                self.help_dialog.draw_localized(frame, area, self.locale, palette)?;
            }
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EstimationOutcome, Slot};
    use crate::model::property::RawPropertyInput;

    fn record() -> crate::model::PropertyRecord {
        RawPropertyInput {
            location: "Sarajevo - Centar".to_string(),
            size_m2: "65".to_string(),
            rooms: "3".to_string(),
            floor: "2".to_string(),
            bathrooms: "1".to_string(),
            year_built: "2015+".to_string(),
            condition: "Dobro stanje".to_string(),
            furnished: "Namješten".to_string(),
            heating_type: "Plin".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    fn running_app() -> App {
        let mut app = App::new();
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn test_quit_dialog_open_confirm() {
        let mut app = running_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_location_picker_confirm_fills_form() {
        let mut app = running_app();
        app.update(Action::OpenLocationPicker).unwrap();
        for c in "tuzla".chars() {
            app.update(Action::ModalInput(c)).unwrap();
        }
        app.update(Action::ConfirmModal).unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.form.input.location, "Tuzla");
    }

    #[test]
    fn test_picker_selection_stays_in_bounds() {
        let mut app = running_app();
        app.update(Action::OpenLocationPicker).unwrap();
        app.update(Action::ModalUp).unwrap();
        for _ in 0..500 {
            app.update(Action::ModalDown).unwrap();
        }
        let Some(Modal::LocationPicker { query, selected }) = app.modals.top() else {
            panic!("picker should still be open");
        };
        assert!(*selected < filter_locations(query).len());
    }

    #[test]
    fn test_failure_notice_cleared_on_reset() {
        let mut app = running_app();
        app.view = ViewState::FullResult { current: Slot::pending(record()) };
        app.notice = Some("failed".to_string());

        app.update(Action::Reset).unwrap();
        assert_eq!(app.view, ViewState::Form);
        assert!(app.notice.is_none());
        assert!(!app.predictor.is_pending());
    }

    #[test]
    fn test_new_estimation_requires_completed_price() {
        let mut app = running_app();
        app.view = ViewState::FullResult { current: Slot::pending(record()) };
        app.update(Action::NewEstimation).unwrap();
        assert!(matches!(app.view, ViewState::FullResult { .. }));

        app.view = ViewState::FullResult {
            current: Slot { outcome: EstimationOutcome::Priced(185000.0), record: record() },
        };
        app.update(Action::NewEstimation).unwrap();
        let ViewState::SplitView { current, previous } = &app.view else {
            panic!("expected SplitView");
        };
        assert!(current.is_none());
        assert!(previous.is_some());
    }

    #[test]
    fn test_submit_ignored_while_full_result_shown() {
        let mut app = running_app();
        app.view = ViewState::FullResult {
            current: Slot { outcome: EstimationOutcome::Priced(185000.0), record: record() },
        };
        // The invisible form holds a different property
        app.form.input.location = "Tuzla".to_string();
        app.form.input.size_m2 = "48".to_string();
        app.form.input.rooms = "2".to_string();
        app.form.input.floor = "1".to_string();
        app.form.input.bathrooms = "1".to_string();
        app.form.input.year_built = "2010+".to_string();
        app.form.input.condition = "Renoviran".to_string();
        app.form.input.furnished = "Nenamješten".to_string();
        app.form.input.heating_type = "Struja".to_string();

        app.update(Action::SubmitForm).unwrap();

        // No request launched, no hidden state divergence
        assert!(!app.predictor.is_pending());
        let ViewState::FullResult { current } = &app.view else {
            panic!("view should be unchanged");
        };
        assert_eq!(current.record.location, "Sarajevo - Centar");
        assert!(!app.view.is_pending());
    }

    #[test]
    fn test_form_keys_not_routed_in_full_result() {
        let mut app = running_app();
        app.view = ViewState::FullResult {
            current: Slot { outcome: EstimationOutcome::Priced(185000.0), record: record() },
        };

        // Enter would hit the still-focused submit control if the hidden
        // form were receiving input
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);

        // Global shortcuts still work
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::NewEstimation));
    }

    #[test]
    fn test_splash_key_advances_mode() {
        let mut app = App::new();
        assert_eq!(app.mode, AppMode::Splash);
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SplashComplete));
        app.update(Action::SplashComplete).unwrap();
        assert_eq!(app.mode, AppMode::Running);
    }
}
