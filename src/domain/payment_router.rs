use crate::domain::health_status::HealthSnapshot;
use crate::domain::payment_processor::Endpoint;

/// Picks a processor from locally cached health. Implementations must not
/// touch the network.
pub trait PaymentRouter: Send + Sync + 'static {
	fn processor_for_payment(&self) -> Option<Endpoint>;
	fn health_of(&self, endpoint: Endpoint) -> HealthSnapshot;
}
