use actix_web::{HttpResponse, Responder, post, web};
use log::debug;

use crate::adapters::web::schema::{PaymentRequest, PaymentResponse};
use crate::domain::repository::SharedPaymentRepository;
use crate::infrastructure::queue::retry_queue::RetryQueue;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

pub type AppCreatePaymentUseCase =
	CreatePaymentUseCase<SharedPaymentRepository, RetryQueue>;

#[post("/payments")]
pub async fn payments(
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<AppCreatePaymentUseCase>,
) -> impl Responder {
	let command = CreatePaymentCommand {
		correlation_id: payload.correlation_id,
		amount:         payload.amount,
	};

	create_payment_use_case.execute(command).await;
	debug!("Payment accepted: {}", payload.correlation_id);

	HttpResponse::Ok().json(PaymentResponse {
		payment: payload.0,
		status:  "accepted".to_string(),
	})
}
