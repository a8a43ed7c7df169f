//! Estimation request lifecycle
//!
//! Turns one `PropertyRecord` into exactly one completion message, with at
//! most one request in flight per session. The HTTP call runs on a spawned
//! thread and reports back through an mpsc channel that the app polls on
//! every tick; the UI thread never blocks on the network.

use crate::model::PropertyRecord;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Path appended to the configured base URL
pub const PREDICT_PATH: &str = "/predict";

/// Transport-level ceiling; there is no application retry or timeout policy
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a request failed. The distinction only survives in the log; the
/// state machine sees a single failure kind because the user's only
/// recovery is resubmitting the form.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response has no numeric estimated_price_km field")]
    MalformedResponse,
}

/// Completion of one submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionMessage {
    Success(f64),
    Failure,
}

struct InFlight {
    receiver: Receiver<PredictionMessage>,
    start: Instant,
}

/// Client owning the single in-flight prediction request
pub struct PredictionClient {
    endpoint: String,
    job: Option<InFlight>,
}

impl PredictionClient {
    /// `base_url` is the service root; the predict path is appended here
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH),
            job: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.job.is_some()
    }

    /// Spawn the request thread for one validated record.
    ///
    /// The view state machine refuses submissions while a slot is pending,
    /// so an overlapping call indicates a wiring bug; it is logged and
    /// dropped rather than racing two requests.
    pub fn submit(&mut self, record: &PropertyRecord) {
        if self.job.is_some() {
            warn!("submit ignored: a prediction request is already in flight");
            return;
        }

        info!(endpoint = %self.endpoint, location = %record.location, "prediction request submitted");

        let (tx, rx) = mpsc::channel();
        let endpoint = self.endpoint.clone();
        let record = record.clone();

        thread::spawn(move || {
            run_request(&endpoint, &record, tx);
        });

        self.job = Some(InFlight { receiver: rx, start: Instant::now() });
    }

    /// Poll for completion. Returns at most one message per submission:
    /// the thread's single send, or a synthesized failure if the thread
    /// died without sending.
    pub fn poll(&mut self) -> Option<PredictionMessage> {
        let job = self.job.as_ref()?;

        match job.receiver.try_recv() {
            Ok(message) => {
                let elapsed = job.start.elapsed();
                match message {
                    PredictionMessage::Success(price) => {
                        info!(price, ?elapsed, "prediction completed");
                    }
                    PredictionMessage::Failure => {
                        warn!(?elapsed, "prediction failed");
                    }
                }
                self.job = None;
                Some(message)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("prediction thread ended without a reply");
                self.job = None;
                Some(PredictionMessage::Failure)
            }
        }
    }

    /// Drop the in-flight handle; a late reply is simply never observed
    pub fn clear(&mut self) {
        self.job = None;
    }
}

/// Issue the POST and send exactly one completion message
fn run_request(endpoint: &str, record: &PropertyRecord, tx: Sender<PredictionMessage>) {
    let message = match request_price(endpoint, record) {
        Ok(price) => PredictionMessage::Success(price),
        Err(error) => {
            warn!(%error, "prediction request error");
            PredictionMessage::Failure
        }
    };
    let _ = tx.send(message);
}

fn request_price(endpoint: &str, record: &PropertyRecord) -> Result<f64, PredictError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.post(endpoint).json(record).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(PredictError::Status(status));
    }

    parse_prediction_body(&response.text()?)
}

/// Extract `estimated_price_km` from the service reply
fn parse_prediction_body(body: &str) -> Result<f64, PredictError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| PredictError::MalformedResponse)?;
    value
        .get("estimated_price_km")
        .and_then(|v| v.as_f64())
        .ok_or(PredictError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawPropertyInput;

    fn record() -> PropertyRecord {
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

    #[test]
    fn test_submit_lifecycle_against_unreachable_service() {
        // Nothing listens on port 1, so the request thread fails fast and
        // the full submit/poll lifecycle can run without a server
        let mut client = PredictionClient::new("http://127.0.0.1:1");
        client.submit(&record());
        assert!(client.is_pending());

        // A second submission while one is in flight is dropped
        client.submit(&record());
        assert!(client.is_pending());

        let deadline = Instant::now() + Duration::from_secs(10);
        let message = loop {
            if let Some(message) = client.poll() {
                break message;
            }
            assert!(Instant::now() < deadline, "no completion observed");
            thread::sleep(Duration::from_millis(10));
        };

        assert_eq!(message, PredictionMessage::Failure);
        assert!(!client.is_pending());
        assert!(client.poll().is_none(), "exactly one message per submission");
    }

    #[test]
    fn test_parse_valid_body() {
        let price = parse_prediction_body(r#"{"estimated_price_km": 185000}"#).unwrap();
        assert_eq!(price, 185000.0);

        let price = parse_prediction_body(r#"{"estimated_price_km": 99500.5, "extra": 1}"#).unwrap();
        assert_eq!(price, 99500.5);
    }

    #[test]
    fn test_parse_malformed_bodies() {
        for body in [
            "",
            "not json",
            "[]",
            r#"{"price": 185000}"#,
            r#"{"estimated_price_km": "185000"}"#,
            r#"{"estimated_price_km": null}"#,
        ] {
            assert!(
                matches!(parse_prediction_body(body), Err(PredictError::MalformedResponse)),
                "body {body:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_endpoint_building() {
        let client = PredictionClient::new("http://localhost:8000");
        assert_eq!(client.endpoint, "http://localhost:8000/predict");

        let client = PredictionClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint, "http://localhost:8000/predict");
    }

    #[test]
    fn test_poll_without_job() {
        let mut client = PredictionClient::new("http://localhost:8000");
        assert!(client.poll().is_none());
        assert!(!client.is_pending());
    }

    #[test]
    fn test_poll_disconnected_yields_single_failure() {
        let mut client = PredictionClient::new("http://localhost:8000");
        let (tx, rx) = mpsc::channel();
        drop(tx);
        client.job = Some(InFlight { receiver: rx, start: Instant::now() });

        assert_eq!(client.poll(), Some(PredictionMessage::Failure));
        // The failure is observed exactly once
        assert!(client.poll().is_none());
        assert!(!client.is_pending());
    }

    #[test]
    fn test_poll_delivers_success_once() {
        let mut client = PredictionClient::new("http://localhost:8000");
        let (tx, rx) = mpsc::channel();
        client.job = Some(InFlight { receiver: rx, start: Instant::now() });

        assert!(client.poll().is_none(), "no message yet");
        tx.send(PredictionMessage::Success(120000.0)).unwrap();

        assert_eq!(client.poll(), Some(PredictionMessage::Success(120000.0)));
        assert!(client.poll().is_none());
    }
}
