//! Campus Rideshare - coordination backend for the Campus Rideshare
//! Companion.
//!
//! Stores rider/driver profiles, scores compatibility between riders,
//! suggests trip fares, records peer ratings, and accepts free-text
//! issue reports. All state is in-memory and lives for the process
//! lifetime.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use crate::core::{compatibility_score, suggest_payment, Recommender};
pub use crate::error::ApiError;
pub use crate::models::{
    CompatibilityWeights, IssueReport, PaymentParams, Rating, UserProfile,
};
pub use crate::store::Store;
