// Route exports
pub mod issues;
pub mod meta;
pub mod payments;
pub mod ratings;
pub mod recommendations;
pub mod users;

use std::sync::Arc;

use actix_web::web;

use crate::core::Recommender;
use crate::models::PaymentParams;
use crate::store::Store;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub recommender: Recommender,
    pub payment: PaymentParams,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(users::configure)
            .configure(recommendations::configure)
            .configure(payments::configure)
            .configure(ratings::configure)
            .configure(issues::configure)
            .configure(meta::configure),
    );
}
