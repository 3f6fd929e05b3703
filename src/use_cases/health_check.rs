use log::debug;

use crate::domain::errors::ProcessorError;
use crate::domain::health_status::HealthSnapshot;
use crate::domain::health_store::HealthStore;
use crate::domain::payment_processor::Endpoint;
use crate::infrastructure::http::payment_processor_client::PaymentProcessorClient;

/// Probes a processor and publishes the result to the shared store.
#[derive(Clone)]
pub struct HealthCheckUseCase<S: HealthStore> {
	health_store: S,
	client:       PaymentProcessorClient,
}

impl<S: HealthStore> HealthCheckUseCase<S> {
	pub fn new(health_store: S, client: PaymentProcessorClient) -> Self {
		Self {
			health_store,
			client,
		}
	}

	pub async fn execute(
		&self,
		endpoint: Endpoint,
	) -> Result<HealthSnapshot, ProcessorError> {
		let snapshot = self.client.health(endpoint).await?;

		let encoded = serde_json::to_string(&snapshot)
			.map_err(|e| ProcessorError::Decode(e.to_string()))?;

		self.health_store
			.set(endpoint.health_key(), encoded)
			.await
			.map_err(|e| ProcessorError::HealthStore(e.to_string()))?;

		debug!("Stored {endpoint} health: {snapshot:?}");
		Ok(snapshot)
	}
}
