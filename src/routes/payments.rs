use actix_web::{web, HttpResponse, Responder};

use crate::core::suggest_payment;
use crate::models::{PaymentEstimate, PaymentSuggestionRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/payments/suggestions", web::post().to(suggest));
}

/// `POST /api/payments/suggestions` with `{distanceMiles, gasPrice}`.
/// Non-numeric values are rejected by the JSON payload handler.
async fn suggest(
    state: web::Data<AppState>,
    req: web::Json<PaymentSuggestionRequest>,
) -> impl Responder {
    let suggested = suggest_payment(req.distance_miles, req.gas_price, &state.payment);

    HttpResponse::Ok().json(PaymentEstimate {
        suggested_amount: suggested,
    })
}
