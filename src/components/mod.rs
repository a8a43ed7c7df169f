//! UI components

pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod location_dialog;
pub mod quit_dialog;
pub mod result;
pub mod splash;

pub use form::FormComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_screen_layout, centered_popup, split_columns, split_result_rows};
pub use location_dialog::LocationDialog;
pub use quit_dialog::QuitDialog;
pub use result::ResultComponent;
pub use splash::SplashComponent;
