use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::domain::repository::SharedPaymentRepository;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

/// Token forwarded to the processors' admin endpoints.
#[derive(Clone)]
pub struct AdminToken(pub String);

#[post("/purge-payments")]
pub async fn payments_purge(
	purge_use_case: web::Data<PurgePaymentsUseCase<SharedPaymentRepository>>,
	admin_token: web::Data<AdminToken>,
) -> impl Responder {
	info!("Received request to purge payments");
	match purge_use_case.execute(&admin_token.0).await {
		Ok(()) => {
			info!("Payments purged successfully");
			HttpResponse::Ok().body("Payments purged successfully")
		}
		Err(e) => {
			error!("Failed to purge payments: {e}");
			ApiError::from(e).error_response()
		}
	}
}
