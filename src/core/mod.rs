// Core algorithm exports
pub mod compatibility;
pub mod payment;
pub mod recommend;

pub use compatibility::compatibility_score;
pub use payment::suggest_payment;
pub use recommend::Recommender;
