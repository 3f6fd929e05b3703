use log::info;

use crate::domain::errors::ProcessorError;
use crate::domain::payment_processor::Endpoint;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::http::payment_processor_client::PaymentProcessorClient;

#[derive(Clone)]
pub struct PurgePaymentsUseCase<R: PaymentRepository> {
	repository: R,
	client:     PaymentProcessorClient,
}

impl<R: PaymentRepository> PurgePaymentsUseCase<R> {
	pub fn new(repository: R, client: PaymentProcessorClient) -> Self {
		Self { repository, client }
	}

	/// Repository first, then default, then fallback. Stops at the first
	/// failure.
	pub async fn execute(&self, token: &str) -> Result<(), ProcessorError> {
		self.repository
			.purge()
			.await
			.map_err(|e| ProcessorError::Persistence(e.to_string()))?;

		for endpoint in Endpoint::ALL {
			self.client.purge(endpoint, token).await?;
			info!("Purged payments on {endpoint} processor");
		}

		Ok(())
	}
}
