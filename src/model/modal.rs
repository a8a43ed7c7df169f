//! Modal stack for overlays
//!
//! Overlays (quit confirmation, location picker) are a proper stack rather
//! than a set of boolean flags; only the top modal receives input.

/// An overlay displayed on top of the active view
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Searchable municipality picker for the location field
    LocationPicker { query: String, selected: usize },
    /// Key binding overview
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::LocationPicker { query: String::new(), selected: 0 });

        assert_eq!(
            stack.pop(),
            Some(Modal::LocationPicker { query: String::new(), selected: 0 })
        );
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::LocationPicker { query: String::new(), selected: 0 });

        if let Some(Modal::LocationPicker { query, selected }) = stack.top_mut() {
            query.push('t');
            *selected = 3;
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::LocationPicker { query: "t".to_string(), selected: 3 })
        );
    }
}
