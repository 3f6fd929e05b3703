use std::sync::Arc;

use crate::domain::errors::ProcessorError;
use crate::domain::health_status::HealthSnapshot;
use crate::domain::health_store::HealthStore;
use crate::domain::payment_processor::Endpoint;
use crate::infrastructure::routing::in_memory_payment_router::InMemoryPaymentRouter;

/// Copies the shared store's snapshot into the local router cell.
#[derive(Clone)]
pub struct SyncHealthUseCase<S: HealthStore> {
	health_store: S,
	router:       Arc<InMemoryPaymentRouter>,
}

impl<S: HealthStore> SyncHealthUseCase<S> {
	pub fn new(health_store: S, router: Arc<InMemoryPaymentRouter>) -> Self {
		Self {
			health_store,
			router,
		}
	}

	/// A missing key is not an error: nobody has polled yet, so the cell
	/// keeps what it has.
	pub async fn execute(
		&self,
		endpoint: Endpoint,
	) -> Result<Option<HealthSnapshot>, ProcessorError> {
		let Some(raw) = self
			.health_store
			.get(endpoint.health_key())
			.await
			.map_err(|e| ProcessorError::HealthStore(e.to_string()))?
		else {
			return Ok(None);
		};

		let snapshot: HealthSnapshot = serde_json::from_str(&raw)
			.map_err(|e| ProcessorError::Decode(e.to_string()))?;

		self.router.update_processor_health(endpoint, snapshot);
		Ok(Some(snapshot))
	}
}
