use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::RecommendationsQuery;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations));
}

/// Rank every other rider for the reference user, best matches first.
///
/// `GET /api/recommendations?userId={id}&limit={n}`
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    let reference = state
        .store
        .get_user(query.user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let candidates = state.store.list_users().await;
    // A supplied limit is clamped to at least one entry
    let limit = query.limit.map(|value| value.max(1) as usize);

    let ranked = state.recommender.rank(&reference, candidates, limit);
    tracing::debug!(
        "returning {} recommendations for user {}",
        ranked.len(),
        reference.id
    );

    Ok(HttpResponse::Ok().json(ranked))
}
