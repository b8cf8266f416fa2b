//! Submission transport abstraction
//!
//! The form controller only defines the trigger point and the state
//! transitions around it; how the payload actually leaves the page is a
//! swappable collaborator behind this trait.

use super::field::FieldName;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The four field values captured at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionPayload {
    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }
}

/// Acknowledgement from the remote end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// Transport failure surfaced back into the submit flow
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("submission request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("submission endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("no submission endpoint configured")]
    NoEndpoint,
}

/// Trait for delivering a form submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError>;
}

/// Demo transport: waits out a fixed latency, then acknowledges.
///
/// Stands in for a real network call; it never fails.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<Ack, TransportError> {
        tokio::time::sleep(self.latency).await;
        Ok(Ack)
    }
}

/// Real transport: POSTs the payload as JSON to a configured endpoint
/// (a Formspree-style form backend).
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status()));
        }

        Ok(Ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there!".to_string(),
        }
    }

    #[test]
    fn test_payload_field_lookup() {
        let p = payload();
        assert_eq!(p.field(FieldName::Name), "Ann");
        assert_eq!(p.field(FieldName::Message), "Hello there!");
    }

    #[test]
    fn test_payload_serializes_all_four_fields() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "ann@x.com");
        assert_eq!(json["subject"], "Hi");
        assert_eq!(json["message"], "Hello there!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_full_latency() {
        let transport = SimulatedTransport::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let ack = transport.submit(&payload()).await.unwrap();
        assert_eq!(ack, Ack);
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn test_mock_transport_can_fail() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit()
            .returning(|_| Err(TransportError::NoEndpoint));
        let err = tokio_test::block_on(mock.submit(&payload())).unwrap_err();
        assert!(matches!(err, TransportError::NoEndpoint));
    }
}
