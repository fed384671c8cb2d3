use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::{CreateUserRequest, DeletedResponse, UpdateUserRequest};
use crate::routes::AppState;

/// Configure the user directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::put().to(update_user))
        .route("/users/{id}", web::delete().to(delete_user))
        .route("/users/{id}/reviews", web::get().to(get_user_reviews));
}

async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    let users = state.store.list_users().await;
    HttpResponse::Ok().json(users)
}

async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = req.into_inner().into_draft();
    if draft.name.is_empty() {
        return Err(ApiError::validation("Name is required"));
    }

    let user = state.store.create_user(draft).await;
    tracing::info!("created user {} ({})", user.id, user.name);

    Ok(HttpResponse::Created().json(user))
}

async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let user = state
        .store
        .get_user(id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(user))
}

async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let patch = req.into_inner().into_patch();

    let user = state
        .store
        .update_user(id, patch)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    tracing::debug!("updated user {}", id);

    Ok(HttpResponse::Ok().json(user))
}

async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !state.store.delete_user(id).await {
        return Err(ApiError::not_found("User not found"));
    }
    tracing::info!("deleted user {}", id);

    Ok(HttpResponse::Ok().json(DeletedResponse::new(id)))
}

async fn get_user_reviews(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let reviews = state
        .store
        .reviews_for(id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(reviews))
}
