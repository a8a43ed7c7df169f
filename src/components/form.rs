//! Property attribute form
//!
//! One focusable entry per attribute, plus the submit button. Numeric
//! fields take typed digits, categorical fields cycle through their
//! catalog with Left/Right, the location opens the picker dialog, and
//! toggles flip with Space. Validation runs on submit and pins every
//! failure to its field until the next attempt.

use crate::action::Action;
use crate::component::Component;
use crate::i18n::{tr, Locale, Msg};
use crate::model::options::{
    self, SelectOption, CONDITION_OPTIONS, FURNISHED_OPTIONS, HEATING_OPTIONS, YEAR_BUILT_OPTIONS,
};
use crate::model::{FieldError, FieldId, PropertyRecord, RawPropertyInput};
use crate::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Everything that can hold focus inside the form, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Location,
    Size,
    Rooms,
    Floor,
    Bathrooms,
    YearBuilt,
    Condition,
    Furnished,
    Heating,
    Balcony,
    Garage,
    Parking,
    Elevator,
    Registered,
    ArmoredDoor,
    Submit,
}

const FOCUS_ORDER: &[FormField] = &[
    FormField::Location,
    FormField::Size,
    FormField::Rooms,
    FormField::Floor,
    FormField::Bathrooms,
    FormField::YearBuilt,
    FormField::Condition,
    FormField::Furnished,
    FormField::Heating,
    FormField::Balcony,
    FormField::Garage,
    FormField::Parking,
    FormField::Elevator,
    FormField::Registered,
    FormField::ArmoredDoor,
    FormField::Submit,
];

impl FormField {
    fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormField::Size | FormField::Rooms | FormField::Floor | FormField::Bathrooms
        )
    }

    fn is_select(&self) -> bool {
        matches!(
            self,
            FormField::YearBuilt | FormField::Condition | FormField::Furnished | FormField::Heating
        )
    }

    fn is_toggle(&self) -> bool {
        matches!(
            self,
            FormField::Balcony
                | FormField::Garage
                | FormField::Parking
                | FormField::Elevator
                | FormField::Registered
                | FormField::ArmoredDoor
        )
    }

    fn catalog(&self) -> Option<&'static [SelectOption]> {
        match self {
            FormField::YearBuilt => Some(YEAR_BUILT_OPTIONS),
            FormField::Condition => Some(CONDITION_OPTIONS),
            FormField::Furnished => Some(FURNISHED_OPTIONS),
            FormField::Heating => Some(HEATING_OPTIONS),
            _ => None,
        }
    }

    fn error_id(&self) -> Option<FieldId> {
        match self {
            FormField::Location => Some(FieldId::Location),
            FormField::Size => Some(FieldId::Size),
            FormField::Rooms => Some(FieldId::Rooms),
            FormField::Floor => Some(FieldId::Floor),
            FormField::Bathrooms => Some(FieldId::Bathrooms),
            FormField::YearBuilt => Some(FieldId::YearBuilt),
            FormField::Condition => Some(FieldId::Condition),
            FormField::Furnished => Some(FieldId::Furnished),
            FormField::Heating => Some(FieldId::Heating),
            _ => None,
        }
    }

    fn label(&self) -> Msg {
        match self {
            FormField::Location => Msg::Location,
            FormField::Size => Msg::Size,
            FormField::Rooms => Msg::Rooms,
            FormField::Floor => Msg::Floor,
            FormField::Bathrooms => Msg::Bathrooms,
            FormField::YearBuilt => Msg::YearBuilt,
            FormField::Condition => Msg::Condition,
            FormField::Furnished => Msg::Furnished,
            FormField::Heating => Msg::Heating,
            FormField::Balcony => Msg::Balcony,
            FormField::Garage => Msg::Garage,
            FormField::Parking => Msg::Parking,
            FormField::Elevator => Msg::Elevator,
            FormField::Registered => Msg::Registered,
            FormField::ArmoredDoor => Msg::ArmoredDoor,
            FormField::Submit => Msg::Submit,
        }
    }
}

/// Property form component
pub struct FormComponent {
    pub input: RawPropertyInput,
    focus: usize,
    errors: Vec<FieldError>,
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormComponent {
    pub fn new() -> Self {
        Self {
            input: RawPropertyInput::default(),
            focus: 0,
            errors: Vec::new(),
        }
    }

    pub fn focused(&self) -> FormField {
        FOCUS_ORDER[self.focus]
    }

    /// Validate and hand out the record for submission.
    ///
    /// On failure the errors stay attached to the form until the next
    /// attempt.
    pub fn submit(&mut self) -> Option<PropertyRecord> {
        match self.input.validate() {
            Ok(record) => {
                self.errors.clear();
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Set the municipality chosen in the picker dialog
    pub fn set_location(&mut self, location: &str) {
        self.input.location = location.to_string();
        self.errors.retain(|e| e.field != FieldId::Location);
    }

    fn error_for(&self, field: FieldId) -> Option<Msg> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_ORDER.len();
    }

    fn prev_field(&mut self) {
        self.focus = (self.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
    }

    fn text_value_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Size => Some(&mut self.input.size_m2),
            FormField::Rooms => Some(&mut self.input.rooms),
            FormField::Floor => Some(&mut self.input.floor),
            FormField::Bathrooms => Some(&mut self.input.bathrooms),
            _ => None,
        }
    }

    fn select_value_mut(&mut self) -> Option<(&'static [SelectOption], &mut String)> {
        let catalog = self.focused().catalog()?;
        let value = match self.focused() {
            FormField::YearBuilt => &mut self.input.year_built,
            FormField::Condition => &mut self.input.condition,
            FormField::Furnished => &mut self.input.furnished,
            FormField::Heating => &mut self.input.heating_type,
            _ => return None,
        };
        Some((catalog, value))
    }

    /// Step the focused select field through its catalog
    fn cycle_option(&mut self, step: isize) {
        let Some((catalog, value)) = self.select_value_mut() else {
            return;
        };
        let len = catalog.len() as isize;
        let current = catalog.iter().position(|o| o.value == value.as_str());
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len) as usize,
            // Unset: forward lands on the first entry, backward on the last
            None if step >= 0 => 0,
            None => (len - 1) as usize,
        };
        *value = catalog[next].value.to_string();
        if let Some(field) = self.focused().error_id() {
            self.errors.retain(|e| e.field != field);
        }
    }

    fn toggle_flag(&mut self) {
        let flag = match self.focused() {
            FormField::Balcony => &mut self.input.has_balcony,
            FormField::Garage => &mut self.input.has_garage,
            FormField::Parking => &mut self.input.has_parking,
            FormField::Elevator => &mut self.input.has_elevator,
            FormField::Registered => &mut self.input.is_registered,
            FormField::ArmoredDoor => &mut self.input.has_armored_door,
            _ => return,
        };
        *flag = !*flag;
    }

    fn field_display_value(&self, field: FormField, locale: Locale) -> String {
        match field {
            FormField::Location => {
                if self.input.location.is_empty() {
                    tr(locale, Msg::LocationPlaceholder).to_string()
                } else {
                    self.input.location.clone()
                }
            }
            FormField::Size => self.input.size_m2.clone(),
            FormField::Rooms => self.input.rooms.clone(),
            FormField::Floor => self.input.floor.clone(),
            FormField::Bathrooms => self.input.bathrooms.clone(),
            FormField::YearBuilt
            | FormField::Condition
            | FormField::Furnished
            | FormField::Heating => {
                let code = match field {
                    FormField::YearBuilt => &self.input.year_built,
                    FormField::Condition => &self.input.condition,
                    FormField::Furnished => &self.input.furnished,
                    _ => &self.input.heating_type,
                };
                match field.catalog().and_then(|c| options::find_option(c, code)) {
                    Some(option) => format!("◂ {} ▸", option.label(locale)),
                    None => format!("◂ {} ▸", tr(locale, Msg::SelectOption)),
                }
            }
            FormField::Balcony
            | FormField::Garage
            | FormField::Parking
            | FormField::Elevator
            | FormField::Registered
            | FormField::ArmoredDoor => {
                let on = match field {
                    FormField::Balcony => self.input.has_balcony,
                    FormField::Garage => self.input.has_garage,
                    FormField::Parking => self.input.has_parking,
                    FormField::Elevator => self.input.has_elevator,
                    FormField::Registered => self.input.is_registered,
                    _ => self.input.has_armored_door,
                };
                if on { "[x]".to_string() } else { "[ ]".to_string() }
            }
            FormField::Submit => String::new(),
        }
    }

    /// Draw with the active locale, theme, and the pending flag from the app
    pub fn draw_with_context(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        locale: Locale,
        palette: Palette,
        pending: bool,
    ) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(format!(" {} ", tr(locale, Msg::FormTitle)))
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Align values past the widest label. Bosnian labels carry
        // diacritics, so measure display width rather than bytes.
        let label_width = FOCUS_ORDER
            .iter()
            .filter(|f| **f != FormField::Submit)
            .map(|f| tr(locale, f.label()).width())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            tr(locale, Msg::FormSubtitle),
            Style::default().fg(palette.muted),
        ))];
        lines.push(Line::from(""));

        for field in FOCUS_ORDER {
            let focused = *field == self.focused();
            if *field == FormField::Balcony {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    tr(locale, Msg::Extras),
                    Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
                )));
            }
            if *field == FormField::Submit {
                lines.push(Line::from(""));
                let label = if pending {
                    tr(locale, Msg::Submitting)
                } else {
                    tr(locale, Msg::Submit)
                };
                let style = if pending {
                    Style::default().fg(palette.muted)
                } else if focused {
                    Style::default()
                        .bg(palette.success)
                        .fg(palette.inverse)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.success)
                };
                lines.push(Line::from(Span::styled(format!("  {}  ", label), style)));
                continue;
            }

            let label = tr(locale, field.label());
            let padding = " ".repeat(label_width.saturating_sub(label.width()) + 2);
            let marker = if focused { "▶ " } else { "  " };
            let value = self.field_display_value(*field, locale);

            let value_style = if focused {
                Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
            } else if field.is_toggle() {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.subtle)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(palette.highlight)),
                Span::styled(label.to_string(), Style::default().fg(palette.text)),
                Span::raw(padding),
                Span::styled(value, value_style),
            ];

            if let Some(message) = field.error_id().and_then(|id| self.error_for(id)) {
                spans.push(Span::styled(
                    format!("  ✗ {}", tr(locale, message)),
                    Style::default().fg(palette.danger),
                ));
            }

            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);
        Ok(())
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let field = self.focused();
        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter => match field {
                FormField::Location => Some(Action::OpenLocationPicker),
                FormField::Submit => Some(Action::SubmitForm),
                f if f.is_toggle() => Some(Action::ToggleFlag),
                f if f.is_select() => Some(Action::NextOption),
                _ => Some(Action::NextField),
            },
            KeyCode::Left if field.is_select() => Some(Action::PrevOption),
            KeyCode::Right if field.is_select() => Some(Action::NextOption),
            KeyCode::Char(' ') if field.is_toggle() => Some(Action::ToggleFlag),
            KeyCode::Backspace if field.is_numeric() => Some(Action::Backspace),
            // Numeric fields only take digits, the decimal point, and a
            // leading minus; letters stay free for global shortcuts.
            KeyCode::Char(c)
                if field.is_numeric() && (c.is_ascii_digit() || c == '.' || c == '-') =>
            {
                Some(Action::Input(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextField => self.next_field(),
            Action::PrevField => self.prev_field(),
            Action::NextOption => self.cycle_option(1),
            Action::PrevOption => self.cycle_option(-1),
            Action::ToggleFlag => self.toggle_flag(),
            Action::Input(c) => {
                let field = self.focused();
                if let Some(value) = self.text_value_mut() {
                    value.push(c);
                    if let Some(id) = field.error_id() {
                        self.errors.retain(|e| e.field != id);
                    }
                }
            }
            Action::Backspace => {
                if let Some(value) = self.text_value_mut() {
                    value.pop();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_context(frame, area, Locale::En, Palette::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormComponent {
        let mut form = FormComponent::new();
        form.input = RawPropertyInput {
            location: "Sarajevo - Centar".to_string(),
            size_m2: "72".to_string(),
            rooms: "3".to_string(),
            floor: "4".to_string(),
            bathrooms: "2".to_string(),
            year_built: "2010+".to_string(),
            condition: "Renoviran".to_string(),
            furnished: "Nenamješten".to_string(),
            heating_type: "Plin".to_string(),
            ..Default::default()
        };
        form
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = FormComponent::new();
        assert_eq!(form.focused(), FormField::Location);
        form.prev_field();
        assert_eq!(form.focused(), FormField::Submit);
        form.next_field();
        assert_eq!(form.focused(), FormField::Location);
    }

    #[test]
    fn test_submit_valid_form_yields_record() {
        let mut form = filled_form();
        let record = form.submit().expect("filled form should validate");
        assert_eq!(record.location, "Sarajevo - Centar");
        assert_eq!(record.size_m2, 72.0);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_submit_invalid_form_pins_errors() {
        let mut form = FormComponent::new();
        assert!(form.submit().is_none());
        assert!(form.error_for(FieldId::Location).is_some());
        assert!(form.error_for(FieldId::Size).is_some());
    }

    #[test]
    fn test_set_location_clears_its_error() {
        let mut form = FormComponent::new();
        form.submit();
        assert!(form.error_for(FieldId::Location).is_some());
        form.set_location("Tuzla");
        assert!(form.error_for(FieldId::Location).is_none());
        assert_eq!(form.input.location, "Tuzla");
    }

    #[test]
    fn test_cycle_option_from_unset() {
        let mut form = FormComponent::new();
        form.focus = FOCUS_ORDER
            .iter()
            .position(|f| *f == FormField::Condition)
            .unwrap();
        form.cycle_option(1);
        assert_eq!(form.input.condition, CONDITION_OPTIONS[0].value);
        form.cycle_option(-1);
        assert_eq!(
            form.input.condition,
            CONDITION_OPTIONS[CONDITION_OPTIONS.len() - 1].value
        );
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut form = FormComponent::new();
        form.focus = FOCUS_ORDER
            .iter()
            .position(|f| *f == FormField::Furnished)
            .unwrap();
        // Start from a set value so a full lap lands back on it
        form.input.furnished = FURNISHED_OPTIONS[0].value.to_string();
        for _ in 0..FURNISHED_OPTIONS.len() {
            form.cycle_option(1);
        }
        assert_eq!(form.input.furnished, FURNISHED_OPTIONS[0].value);

        form.cycle_option(-1);
        assert_eq!(
            form.input.furnished,
            FURNISHED_OPTIONS[FURNISHED_OPTIONS.len() - 1].value
        );
    }

    #[test]
    fn test_numeric_input_and_backspace() {
        let mut form = FormComponent::new();
        form.focus = FOCUS_ORDER.iter().position(|f| *f == FormField::Size).unwrap();
        form.update(Action::Input('6')).unwrap();
        form.update(Action::Input('5')).unwrap();
        assert_eq!(form.input.size_m2, "65");
        form.update(Action::Backspace).unwrap();
        assert_eq!(form.input.size_m2, "6");
    }

    #[test]
    fn test_letters_are_not_consumed_by_numeric_fields() {
        use crossterm::event::{KeyEvent, KeyModifiers};
        let mut form = FormComponent::new();
        form.focus = FOCUS_ORDER.iter().position(|f| *f == FormField::Size).unwrap();
        let action = form
            .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_toggle_flag() {
        let mut form = FormComponent::new();
        form.focus = FOCUS_ORDER
            .iter()
            .position(|f| *f == FormField::Balcony)
            .unwrap();
        form.toggle_flag();
        assert!(form.input.has_balcony);
        form.toggle_flag();
        assert!(!form.input.has_balcony);
    }

    #[test]
    fn test_enter_on_location_opens_picker() {
        use crossterm::event::{KeyEvent, KeyModifiers};
        let mut form = FormComponent::new();
        let action = form
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::OpenLocationPicker));
    }
}
