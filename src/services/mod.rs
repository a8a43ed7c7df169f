//! External service interactions
//!
//! The only external system is the price-prediction HTTP endpoint; the
//! predictor owns the request lifecycle and background execution.

pub mod predictor;

pub use predictor::{PredictionClient, PredictionMessage};
