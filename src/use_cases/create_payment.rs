use crate::domain::payment::Payment;
use crate::domain::queue::Queue;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

/// Accepts a payment from the outside and runs its first attempt.
///
/// Returns once the payment is delivered or parked on the retry queue, so a
/// full queue stalls the caller.
#[derive(Clone)]
pub struct CreatePaymentUseCase<R: PaymentRepository, Q: Queue<Payment>> {
	process_payment: ProcessPaymentUseCase<R, Q>,
}

impl<R, Q> CreatePaymentUseCase<R, Q>
where
	R: PaymentRepository + Clone,
	Q: Queue<Payment> + Clone,
{
	pub fn new(process_payment: ProcessPaymentUseCase<R, Q>) -> Self {
		Self { process_payment }
	}

	pub async fn execute(&self, command: CreatePaymentCommand) -> Payment {
		let payment = Payment::new(command.correlation_id, command.amount);

		self.process_payment.execute(payment.clone()).await;

		payment
	}
}
