use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rider/driver profile stored by the directory.
///
/// The wire format keeps single-word attributes as-is and renames the
/// three multi-word ones to camelCase; the serde attributes below are the
/// single place that mapping lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "typicalDrivingTimes", default)]
    pub typical_driving_times: String,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: String,
    #[serde(rename = "parkingPass", default)]
    pub parking_pass: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub extracurriculars: String,
}

/// Profile fields for a creation, already trimmed. The store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub typical_driving_times: String,
    pub contact_info: String,
    pub parking_pass: String,
    pub major: String,
    pub extracurriculars: String,
}

/// Partial profile update. `None` leaves the current value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub typical_driving_times: Option<String>,
    pub contact_info: Option<String>,
    pub parking_pass: Option<String>,
    pub major: Option<String>,
    pub extracurriculars: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut UserProfile) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
        if let Some(location) = self.location {
            user.location = location;
        }
        if let Some(times) = self.typical_driving_times {
            user.typical_driving_times = times;
        }
        if let Some(contact) = self.contact_info {
            user.contact_info = contact;
        }
        if let Some(pass) = self.parking_pass {
            user.parking_pass = pass;
        }
        if let Some(major) = self.major {
            user.major = major;
        }
        if let Some(extras) = self.extracurriculars {
            user.extracurriculars = extras;
        }
    }
}

/// Peer rating, append-only once created.
///
/// The referenced user ids are not checked against the directory; a
/// rating may outlive the users it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub role: String,
    pub score: i64,
    #[serde(default)]
    pub comments: String,
}

/// Rating fields before the store assigns an id.
#[derive(Debug, Clone)]
pub struct RatingDraft {
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub role: String,
    pub score: i64,
    pub comments: String,
}

/// Free-form issue report, append-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub id: i64,
    pub user_id: Option<i64>,
    pub message: String,
    pub category: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Issue fields before the store assigns an id.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub user_id: Option<i64>,
    pub message: String,
    pub category: String,
    pub metadata: Map<String, Value>,
}

/// Candidate profile paired with its compatibility score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub user: UserProfile,
    pub score: i64,
}

/// Points awarded per shared profile attribute.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityWeights {
    pub location: i64,
    pub driving_times: i64,
    pub major: i64,
    pub extracurriculars: i64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            location: 3,
            driving_times: 2,
            major: 2,
            extracurriculars: 1,
        }
    }
}

/// Parameters of the fare suggestion formula.
#[derive(Debug, Clone, Copy)]
pub struct PaymentParams {
    pub fuel_efficiency_mpg: f64,
    pub base_fare: f64,
    pub wear_rate_per_mile: f64,
}

impl Default for PaymentParams {
    fn default() -> Self {
        Self {
            fuel_efficiency_mpg: 24.0,
            base_fare: 2.5,
            wear_rate_per_mile: 0.12,
        }
    }
}
