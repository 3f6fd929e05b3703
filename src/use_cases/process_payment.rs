use std::sync::Arc;

use log::{debug, error, warn};

use crate::domain::errors::ProcessorError;
use crate::domain::payment::Payment;
use crate::domain::payment_processor::Endpoint;
use crate::domain::payment_router::PaymentRouter;
use crate::domain::queue::{Message, Queue};
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::http::payment_processor_client::PaymentProcessorClient;
use crate::use_cases::dto::ProcessOutcome;

pub struct ProcessPaymentUseCase<R: PaymentRepository, Q: Queue<Payment>> {
	router:       Arc<dyn PaymentRouter>,
	client:       PaymentProcessorClient,
	payment_repo: R,
	retry_queue:  Q,
	max_retries:  Option<u32>,
}

impl<R: PaymentRepository + Clone, Q: Queue<Payment> + Clone> Clone
	for ProcessPaymentUseCase<R, Q>
{
	fn clone(&self) -> Self {
		Self {
			router:       Arc::clone(&self.router),
			client:       self.client.clone(),
			payment_repo: self.payment_repo.clone(),
			retry_queue:  self.retry_queue.clone(),
			max_retries:  self.max_retries,
		}
	}
}

impl<R: PaymentRepository, Q: Queue<Payment>> ProcessPaymentUseCase<R, Q> {
	pub fn new(
		router: Arc<dyn PaymentRouter>,
		client: PaymentProcessorClient,
		payment_repo: R,
		retry_queue: Q,
		max_retries: Option<u32>,
	) -> Self {
		Self {
			router,
			client,
			payment_repo,
			retry_queue,
			max_retries,
		}
	}

	/// First delivery attempt for a fresh payment.
	pub async fn execute(&self, payment: Payment) -> ProcessOutcome {
		self.process(Message::with(payment.correlation_id, payment))
			.await
	}

	/// One attempt. A retryable failure puts the message on the retry queue:
	/// a fresh payment waits for a free slot, one already owned by the queue
	/// goes back on its own slot. Anything that leaves for good frees it.
	pub async fn process(&self, mut message: Message<Payment>) -> ProcessOutcome {
		let from_queue = message.attempts > 0;

		let err = match self.attempt(&mut message.body).await {
			Ok(Some(_)) => return self.finish(from_queue, ProcessOutcome::Processed),
			Ok(None) => return self.finish(from_queue, ProcessOutcome::Discarded),
			Err(err) if !err.is_retryable() => {
				warn!("Payment {} will not be retried: {err}", message.id);
				return self.finish(from_queue, ProcessOutcome::Discarded);
			}
			Err(err) => err,
		};

		message.attempts = message.attempts.saturating_add(1);

		if let Some(max_retries) = self.max_retries &&
			message.attempts > max_retries
		{
			error!(
				"Dropping payment {} after {} attempts: {}",
				message.id,
				message.attempts,
				ProcessorError::RetriesExhausted
			);
			return self.finish(from_queue, ProcessOutcome::Dropped);
		}

		debug!(
			"Re-queueing payment {} (attempt {}): {err}",
			message.id, message.attempts
		);

		let id = message.id;
		let queued = if from_queue {
			self.retry_queue.requeue(message)
		} else {
			self.retry_queue.push(message).await
		};

		match queued {
			Ok(()) => ProcessOutcome::Requeued,
			Err(e) => {
				error!("Failed to re-queue payment {id}: {e}");
				ProcessOutcome::Dropped
			}
		}
	}

	fn finish(&self, from_queue: bool, outcome: ProcessOutcome) -> ProcessOutcome {
		if from_queue {
			self.retry_queue.release();
		}
		outcome
	}

	/// Routes and sends once. `Ok(None)` means the processor rejected the
	/// payload for good and the payment is considered done.
	pub async fn attempt(
		&self,
		payment: &mut Payment,
	) -> Result<Option<Endpoint>, ProcessorError> {
		let endpoint = self
			.router
			.processor_for_payment()
			.ok_or(ProcessorError::UnavailableProcessor)?;

		match self.send_payment(payment, endpoint).await {
			Ok(()) => Ok(Some(endpoint)),
			Err(ProcessorError::InvalidRequest) => {
				warn!(
					"Payment {} rejected by {endpoint} as invalid. Not retrying.",
					payment.correlation_id
				);
				Ok(None)
			}
			Err(err) => Err(err),
		}
	}

	async fn send_payment(
		&self,
		payment: &mut Payment,
		endpoint: Endpoint,
	) -> Result<(), ProcessorError> {
		self.client.send_payment(payment, endpoint).await?;

		self.payment_repo
			.add(payment, endpoint)
			.await
			.map_err(|e| ProcessorError::Persistence(e.to_string()))
	}
}
