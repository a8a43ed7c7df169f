//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `ViewState` - the active presentation mode and its data slots
//! - `PropertyRecord` / `RawPropertyInput` - validated and raw form data
//! - option catalogs for the categorical fields
//! - `ModalStack` - modal overlay management

pub mod modal;
pub mod options;
pub mod property;
pub mod view_state;

// Re-export commonly used types
pub use modal::{Modal, ModalStack};
pub use options::SelectOption;
pub use property::{FieldError, FieldId, PropertyRecord, RawPropertyInput};
pub use view_state::{EstimationOutcome, Slot, ViewEvent, ViewState};
