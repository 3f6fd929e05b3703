use std::time::Duration;

use log::debug;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::domain::payment::Payment;
use crate::domain::queue::Queue;

pub async fn queue_monitor_worker<Q>(
	retry_queue: Q,
	period: Duration,
	shutdown: CancellationToken,
) where
	Q: Queue<Payment>,
{
	let mut ticker = interval(period);

	loop {
		tokio::select! {
			_ = shutdown.cancelled() => break,
			_ = ticker.tick() => {
				debug!("Status of queue: {} payments waiting", retry_queue.len())
			}
		}
	}
}
