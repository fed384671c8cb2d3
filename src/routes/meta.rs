use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, TermsResponse};

const TERMS_TEXT: &str = "By using the Campus Rideshare Companion you agree to be respectful, \
    share accurate profile details, and follow all campus transportation policies. Payments, \
    ride logistics, and safety checks occur between riders; the platform only facilitates \
    coordination.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/terms", web::get().to(get_terms))
        .route("/health", web::get().to(health_check));
}

async fn get_terms() -> impl Responder {
    HttpResponse::Ok().json(TermsResponse {
        terms: TERMS_TEXT.to_string(),
    })
}

/// Health check endpoint. There is no backing infrastructure to probe,
/// so a responding process is a healthy one.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
