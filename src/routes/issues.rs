use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::ReportIssueRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/issues", web::post().to(report_issue))
        .route("/issues", web::get().to(list_issues));
}

async fn report_issue(
    state: web::Data<AppState>,
    req: web::Json<ReportIssueRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = req.into_inner().into_draft();
    if draft.message.is_empty() {
        return Err(ApiError::validation("Message is required"));
    }

    let issue = state.store.add_issue(draft).await;
    tracing::info!("recorded issue {} in category {}", issue.id, issue.category);

    Ok(HttpResponse::Created().json(issue))
}

async fn list_issues(state: web::Data<AppState>) -> HttpResponse {
    let issues = state.store.list_issues().await;
    HttpResponse::Ok().json(issues)
}
