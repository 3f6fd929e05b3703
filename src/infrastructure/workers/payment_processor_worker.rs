use std::time::Duration;

use log::{error, info};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::domain::payment::Payment;
use crate::domain::queue::Queue;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

/// Drains the retry queue: wait `retry_delay`, then run the payment through
/// `Process` again, which puts it back if it fails once more.
pub async fn payment_processing_worker<R, Q>(
	id: usize,
	retry_queue: Q,
	process_payment_use_case: ProcessPaymentUseCase<R, Q>,
	retry_delay: Duration,
	shutdown: CancellationToken,
) where
	R: PaymentRepository,
	Q: Queue<Payment>,
{
	loop {
		let message = tokio::select! {
			_ = shutdown.cancelled() => break,
			popped = retry_queue.pop() => match popped {
				Ok(Some(message)) => message,
				Ok(None) => {
					info!("Retry queue closed, stopping worker {id}");
					break;
				}
				Err(e) => {
					error!("Failed to pop from retry queue: {e}");
					sleep(retry_delay).await;
					continue;
				}
			},
		};

		tokio::select! {
			_ = shutdown.cancelled() => break,
			_ = async {
				sleep(retry_delay).await;
				process_payment_use_case.process(message).await
			} => {}
		}
	}
}
