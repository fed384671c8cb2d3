// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompatibilityWeights, IssueDraft, IssueReport, PaymentParams, Rating, RatingDraft,
    ScoredCandidate, UserDraft, UserPatch, UserProfile,
};
pub use requests::{
    CreateUserRequest, ListRatingsQuery, PaymentSuggestionRequest, RecommendationsQuery,
    ReportIssueRequest, SubmitRatingRequest, UpdateUserRequest,
};
pub use responses::{DeletedResponse, ErrorBody, HealthResponse, PaymentEstimate, TermsResponse};
