use std::future::Future;

use log::{error, info};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Owns every background loop so they can be stopped together.
pub struct WorkerSupervisor {
	shutdown: CancellationToken,
	tasks:    JoinSet<()>,
}

impl WorkerSupervisor {
	pub fn new() -> Self {
		Self {
			shutdown: CancellationToken::new(),
			tasks:    JoinSet::new(),
		}
	}

	/// Token handed to each loop; cancelled on `shutdown`.
	pub fn token(&self) -> CancellationToken {
		self.shutdown.clone()
	}

	pub fn spawn<F>(&mut self, task: F)
	where
		F: Future<Output = ()> + Send + 'static,
	{
		self.tasks.spawn(task);
	}

	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	pub async fn shutdown(mut self) {
		info!("Stopping {} background workers", self.tasks.len());
		self.shutdown.cancel();

		while let Some(result) = self.tasks.join_next().await {
			if let Err(e) = result {
				error!("Background worker ended abnormally: {e}");
			}
		}
	}
}

impl Default for WorkerSupervisor {
	fn default() -> Self {
		Self::new()
	}
}
