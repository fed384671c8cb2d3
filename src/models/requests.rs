use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::models::domain::{IssueDraft, RatingDraft, UserDraft, UserPatch};

/// Body for `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "typicalDrivingTimes", default)]
    pub typical_driving_times: Option<String>,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: Option<String>,
    #[serde(rename = "parkingPass", default)]
    pub parking_pass: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub extracurriculars: Option<String>,
}

impl CreateUserRequest {
    /// Trimmed field values with empty-string defaults. The handler still
    /// rejects an empty name.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            name: trim_or_empty(self.name),
            bio: trim_or_empty(self.bio),
            location: trim_or_empty(self.location),
            typical_driving_times: trim_or_empty(self.typical_driving_times),
            contact_info: trim_or_empty(self.contact_info),
            parking_pass: trim_or_empty(self.parking_pass),
            major: trim_or_empty(self.major),
            extracurriculars: trim_or_empty(self.extracurriculars),
        }
    }
}

/// Body for `PUT /api/users/{id}`. Absent and null fields are left alone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "typicalDrivingTimes", default)]
    pub typical_driving_times: Option<String>,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: Option<String>,
    #[serde(rename = "parkingPass", default)]
    pub parking_pass: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub extracurriculars: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name.map(trim_owned),
            bio: self.bio.map(trim_owned),
            location: self.location.map(trim_owned),
            typical_driving_times: self.typical_driving_times.map(trim_owned),
            contact_info: self.contact_info.map(trim_owned),
            parking_pass: self.parking_pass.map(trim_owned),
            major: self.major.map(trim_owned),
            extracurriculars: self.extracurriculars.map(trim_owned),
        }
    }
}

/// Body for `POST /api/ratings`.
///
/// The referenced ids are type-checked only, never resolved against the
/// directory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    #[serde(rename = "fromUserId")]
    pub from_user_id: i64,
    #[serde(rename = "toUserId")]
    pub to_user_id: i64,
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i64,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl SubmitRatingRequest {
    pub fn into_draft(self) -> RatingDraft {
        let role = match self.role {
            Some(role) if !role.is_empty() => role.to_lowercase(),
            _ => "driver".to_string(),
        };
        RatingDraft {
            from_user_id: self.from_user_id,
            to_user_id: self.to_user_id,
            role,
            score: self.score,
            comments: trim_or_empty(self.comments),
        }
    }
}

/// Body for `POST /api/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportIssueRequest {
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl ReportIssueRequest {
    pub fn into_draft(self) -> IssueDraft {
        IssueDraft {
            user_id: self.user_id,
            message: trim_or_empty(self.message),
            category: self.category,
            metadata: self.metadata,
        }
    }
}

fn default_category() -> String {
    "general".to_string()
}

/// Body for `POST /api/payments/suggestions`. Missing values default to 0.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSuggestionRequest {
    #[serde(rename = "distanceMiles", default)]
    pub distance_miles: f64,
    #[serde(rename = "gasPrice", default)]
    pub gas_price: f64,
}

/// Query string for `GET /api/recommendations`.
///
/// A missing `userId` parses as 0, which never resolves to a user.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(rename = "userId", default)]
    pub user_id: i64,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Query string for `GET /api/ratings`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRatingsQuery {
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
}

fn trim_or_empty(value: Option<String>) -> String {
    value.map(trim_owned).unwrap_or_default()
}

fn trim_owned(value: String) -> String {
    value.trim().to_string()
}
