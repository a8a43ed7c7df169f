//! View state machine
//!
//! The single source of truth for what the user sees: which of the three
//! presentation modes is active and which estimation data each mode shows.
//! Transitions are a pure function over (state, event) so the whole machine
//! is unit-testable without a terminal or a network.
//!
//! Only the app's update loop feeds events in; presentation code gets a
//! shared reference and never mutates the state directly.

use crate::model::property::PropertyRecord;

/// The result of one pricing request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimationOutcome {
    /// Request submitted, no reply yet
    Pending,
    /// The service answered with a price in KM
    Priced(f64),
}

impl EstimationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, EstimationOutcome::Pending)
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            EstimationOutcome::Pending => None,
            EstimationOutcome::Priced(p) => Some(*p),
        }
    }
}

/// One estimation: the outcome so far and the record that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub outcome: EstimationOutcome,
    pub record: PropertyRecord,
}

impl Slot {
    pub fn pending(record: PropertyRecord) -> Self {
        Self { outcome: EstimationOutcome::Pending, record }
    }
}

/// The three mutually exclusive presentation modes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Form only, nothing submitted
    #[default]
    Form,
    /// One estimation filling the screen, pending or priced
    FullResult { current: Slot },
    /// Form beside results; `previous` retains the last completed estimation
    SplitView {
        current: Option<Slot>,
        previous: Option<Slot>,
    },
}

/// Events the machine consumes
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// User submitted a validated record
    Submit(PropertyRecord),
    /// The in-flight request completed with a price
    Success(f64),
    /// The in-flight request failed (any cause)
    Failure,
    /// User asked to compare against a new estimation
    NewEstimation,
    /// User asked to start over
    Reset,
}

impl ViewState {
    /// Whether a request is currently awaiting its outcome
    pub fn is_pending(&self) -> bool {
        match self {
            ViewState::Form => false,
            ViewState::FullResult { current } => current.outcome.is_pending(),
            ViewState::SplitView { current, .. } => {
                current.as_ref().is_some_and(|s| s.outcome.is_pending())
            }
        }
    }

    /// A new submission is accepted unless one is already in flight
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// "New estimation" is only offered once the current slot holds a price
    pub fn can_request_new_estimation(&self) -> bool {
        match self {
            ViewState::Form => false,
            ViewState::FullResult { current } => !current.outcome.is_pending(),
            ViewState::SplitView { current, .. } => {
                current.as_ref().is_some_and(|s| !s.outcome.is_pending())
            }
        }
    }

    /// The slot being estimated or most recently estimated
    pub fn current_slot(&self) -> Option<&Slot> {
        match self {
            ViewState::Form => None,
            ViewState::FullResult { current } => Some(current),
            ViewState::SplitView { current, .. } => current.as_ref(),
        }
    }

    /// The retained earlier estimation shown for comparison
    pub fn previous_slot(&self) -> Option<&Slot> {
        match self {
            ViewState::SplitView { previous, .. } => previous.as_ref(),
            _ => None,
        }
    }

    /// Apply one event, producing the next state.
    ///
    /// Events that do not apply in the current state leave it unchanged:
    /// submissions while a request is pending, completions with no request
    /// in flight, "new estimation" without a completed price.
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (_, ViewEvent::Reset) => ViewState::Form,

            (ViewState::Form, ViewEvent::Submit(record)) => {
                ViewState::FullResult { current: Slot::pending(record) }
            }
            (ViewState::SplitView { current, previous }, ViewEvent::Submit(record)) => {
                if current.as_ref().is_some_and(|s| s.outcome.is_pending()) {
                    ViewState::SplitView { current, previous }
                } else {
                    ViewState::SplitView { current: Some(Slot::pending(record)), previous }
                }
            }

            (ViewState::FullResult { current }, ViewEvent::Success(price)) => {
                ViewState::FullResult {
                    current: Slot { outcome: EstimationOutcome::Priced(price), record: current.record },
                }
            }
            (ViewState::SplitView { current: Some(slot), previous }, ViewEvent::Success(price)) => {
                ViewState::SplitView {
                    current: Some(Slot {
                        outcome: EstimationOutcome::Priced(price),
                        record: slot.record,
                    }),
                    previous,
                }
            }

            (ViewState::FullResult { .. }, ViewEvent::Failure) => ViewState::Form,
            // A failed second submission keeps the earlier completed result
            (ViewState::SplitView { previous, .. }, ViewEvent::Failure) => {
                ViewState::SplitView { current: None, previous }
            }

            (ViewState::FullResult { current }, ViewEvent::NewEstimation) => {
                if current.outcome.is_pending() {
                    ViewState::FullResult { current }
                } else {
                    ViewState::SplitView { current: None, previous: Some(current) }
                }
            }
            (ViewState::SplitView { current, previous }, ViewEvent::NewEstimation) => {
                match current {
                    Some(slot) if !slot.outcome.is_pending() => {
                        ViewState::SplitView { current: None, previous: Some(slot) }
                    }
                    current => ViewState::SplitView { current, previous },
                }
            }

            (state, _) => state,
        }
    }
}
