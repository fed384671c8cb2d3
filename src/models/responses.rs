use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation body for `DELETE /api/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub status: String,
    pub id: i64,
}

impl DeletedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            status: "deleted".to_string(),
            id,
        }
    }
}

/// Fare suggestion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEstimate {
    #[serde(rename = "suggestedAmount")]
    pub suggested_amount: f64,
}

/// Terms-of-use response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsResponse {
    pub terms: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
