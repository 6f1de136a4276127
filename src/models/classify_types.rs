use serde::{Deserialize, Serialize};

/// Request body for the predict endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct PredictRequest {
    /// Base64 `data:` URI of the submitted image.
    pub image: String,
}

/// Response body of the predict endpoint.
///
/// The service sends this same envelope on error statuses, so both optional
/// fields tolerate being absent.
#[derive(Debug, Deserialize, Clone)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
