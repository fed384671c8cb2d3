use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{ListRatingsQuery, SubmitRatingRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ratings", web::post().to(submit_rating))
        .route("/ratings", web::get().to(list_ratings));
}

async fn submit_rating(
    state: web::Data<AppState>,
    req: web::Json<SubmitRatingRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    req.validate()
        .map_err(|errors| ApiError::validation(errors.to_string()))?;

    let rating = state.store.add_rating(req.into_draft()).await;
    tracing::info!(
        "recorded rating {} for user {} (score {})",
        rating.id,
        rating.to_user_id,
        rating.score
    );

    Ok(HttpResponse::Created().json(rating))
}

/// All ratings in creation order, optionally filtered by recipient.
async fn list_ratings(
    state: web::Data<AppState>,
    query: web::Query<ListRatingsQuery>,
) -> HttpResponse {
    let ratings = state.store.list_ratings(query.user_id).await;
    HttpResponse::Ok().json(ratings)
}
