use std::time::Duration;

use log::debug;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::domain::health_store::HealthStore;
use crate::domain::payment_processor::Endpoint;
use crate::use_cases::health_check::HealthCheckUseCase;

/// Polls one processor's health endpoint and publishes it to the shared
/// store. Only one instance of a fleet should run this.
pub async fn health_check_worker<S>(
	health_check_use_case: HealthCheckUseCase<S>,
	endpoint: Endpoint,
	period: Duration,
	shutdown: CancellationToken,
) where
	S: HealthStore,
{
	let mut ticker = interval(period);
	ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

	loop {
		tokio::select! {
			_ = shutdown.cancelled() => break,
			_ = ticker.tick() => {}
		}

		if let Err(e) = health_check_use_case.execute(endpoint).await {
			debug!("Failed to update the {endpoint} health check: {e}");
		}
	}
}
