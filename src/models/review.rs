// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Payload sent to the analysis endpoint. Captured from the form once, at the
/// moment the submission flow starts, and never re-read on retry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub text: String,          // Free-form review text
    pub aircraft_type: String, // e.g. "Boeing 737"
    pub route: String,         // e.g. "NBO-LHR"
}

/// Response from the analysis endpoint. Extra fields the endpoint echoes back
/// (aircraftType, route) are ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub review_id: String, // Identifier assigned by the endpoint
    pub sentiment: String, // "positive" | "negative" | "neutral"
}

/// One row of the reviews table; also the element type of the listing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub review_id: String,
    pub aircraft_type: String,
    pub route: String,
    pub review_text: String,
    pub sentiment: String,
}

impl ReviewRecord {
    /// Combines the submitted request with the endpoint's verdict into a row.
    pub fn from_analysis(request: &ReviewRequest, result: &AnalysisResult) -> Self {
        Self {
            review_id: result.review_id.clone(),
            aircraft_type: request.aircraft_type.clone(),
            route: request.route.clone(),
            review_text: request.text.clone(),
            sentiment: result.sentiment.clone(),
        }
    }
}
