//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations and background-job polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next form field
    NextField,
    /// Focus the previous form field
    PrevField,
    /// Type a character into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Cycle the focused select field forward
    NextOption,
    /// Cycle the focused select field backward
    PrevOption,
    /// Flip the focused toggle field
    ToggleFlag,
    /// Open the searchable municipality picker
    OpenLocationPicker,

    // ─────────────────────────────────────────────────────────────────────────
    // Estimation flow
    // ─────────────────────────────────────────────────────────────────────────
    /// Validate the form and submit one estimation request
    SubmitForm,
    /// Retain the completed result and start a comparison estimation
    NewEstimation,
    /// Discard all session data and return to the empty form
    Reset,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the key binding overview
    OpenHelpDialog,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Move selection up inside the top modal
    ModalUp,
    /// Move selection down inside the top modal
    ModalDown,
    /// Type a character into the top modal's query
    ModalInput(char),
    /// Delete the last character of the top modal's query
    ModalBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle between English and Bosnian
    SwitchLanguage,
    /// Toggle between the dark and light color schemes
    SwitchTheme,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextField => write!(f, "NextField"),
            Action::PrevField => write!(f, "PrevField"),
            Action::Input(c) => write!(f, "Input('{}')", c),
            Action::Backspace => write!(f, "Backspace"),
            Action::NextOption => write!(f, "NextOption"),
            Action::PrevOption => write!(f, "PrevOption"),
            Action::ToggleFlag => write!(f, "ToggleFlag"),
            Action::OpenLocationPicker => write!(f, "OpenLocationPicker"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::NewEstimation => write!(f, "NewEstimation"),
            Action::Reset => write!(f, "Reset"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelpDialog => write!(f, "OpenHelpDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::ModalInput(c) => write!(f, "ModalInput('{}')", c),
            Action::ModalBackspace => write!(f, "ModalBackspace"),
            Action::SwitchLanguage => write!(f, "SwitchLanguage"),
            Action::SwitchTheme => write!(f, "SwitchTheme"),
        }
    }
}
