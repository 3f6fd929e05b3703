use std::time::Duration;

use log::debug;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::domain::health_store::HealthStore;
use crate::domain::payment_processor::Endpoint;
use crate::use_cases::sync_health::SyncHealthUseCase;

pub async fn health_sync_worker<S>(
	sync_health_use_case: SyncHealthUseCase<S>,
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

		match sync_health_use_case.execute(endpoint).await {
			Ok(Some(snapshot)) => {
				debug!("Synced {endpoint} health: {snapshot:?}")
			}
			Ok(None) => debug!("No {endpoint} health published yet"),
			Err(e) => debug!("Failed to sync the {endpoint} health check: {e}"),
		}
	}
}
