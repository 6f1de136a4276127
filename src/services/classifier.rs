use crate::error::{ClassifyError, Result};
use crate::models::classify_types::{PredictRequest, PredictResponse};
use std::future::Future;
use std::time::Duration;

/// Message shown when the service claims success but sends no label.
const NO_LABEL_MESSAGE: &str = "The service returned no label for this image";
/// Message shown when the service fails without an explanation.
const UNEXPLAINED_FAILURE_MESSAGE: &str = "The service could not classify this image";

/// Seam between the upload pipeline and the model that produces labels.
pub trait Classify: Send + Sync + 'static {
    /// Submit one encoded image and resolve to its label.
    ///
    /// At most one network round trip per call; no internal retry.
    fn predict(&self, encoded_image: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client for the remote classification service.
#[derive(Clone)]
pub struct RemoteClassifier {
    http_client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    /// Build a client for the given predict endpoint with a per-request
    /// timeout, so a stalled request resolves the item instead of leaving
    /// it loading forever.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifyError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

impl Classify for RemoteClassifier {
    async fn predict(&self, encoded_image: &str) -> Result<String> {
        let request = PredictRequest {
            image: encoded_image.to_string(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Prediction request failed: {}", e);
                ClassifyError::Transport
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Prediction response aborted: {}", e);
            ClassifyError::Transport
        })?;

        // The service wraps error statuses in the same JSON envelope, so
        // parse the body before looking at the status line.
        let parsed: PredictResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%status, "Response was not the predict envelope: {}", e);
            ClassifyError::Transport
        })?;

        outcome_from_response(parsed)
    }
}

/// Map the wire envelope onto a label-or-error outcome.
fn outcome_from_response(response: PredictResponse) -> Result<String> {
    if response.success {
        match response.prediction {
            Some(label) if !label.is_empty() => Ok(label),
            // A "success" with no label still fails the item.
            _ => Err(ClassifyError::Service(NO_LABEL_MESSAGE.to_string())),
        }
    } else {
        let message = response
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNEXPLAINED_FAILURE_MESSAGE.to_string());
        Err(ClassifyError::Service(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(success: bool, prediction: Option<&str>, error: Option<&str>) -> PredictResponse {
        PredictResponse {
            success,
            prediction: prediction.map(String::from),
            error: error.map(String::from),
        }
    }

    #[test]
    fn success_with_label_yields_the_label() {
        let outcome = outcome_from_response(response(true, Some("cat"), None));
        assert_eq!(outcome, Ok("cat".to_string()));
    }

    #[test]
    fn success_without_label_is_a_service_error() {
        let outcome = outcome_from_response(response(true, None, None));
        assert_eq!(
            outcome,
            Err(ClassifyError::Service(NO_LABEL_MESSAGE.to_string()))
        );
    }

    #[test]
    fn success_with_empty_label_is_a_service_error() {
        let outcome = outcome_from_response(response(true, Some(""), None));
        assert!(matches!(outcome, Err(ClassifyError::Service(_))));
    }

    #[test]
    fn failure_passes_the_service_message_through() {
        let outcome = outcome_from_response(response(false, None, Some("blurry image")));
        assert_eq!(
            outcome,
            Err(ClassifyError::Service("blurry image".to_string()))
        );
    }

    #[test]
    fn failure_without_message_gets_the_fallback() {
        let outcome = outcome_from_response(response(false, None, None));
        assert_eq!(
            outcome,
            Err(ClassifyError::Service(
                UNEXPLAINED_FAILURE_MESSAGE.to_string()
            ))
        );
    }
}
