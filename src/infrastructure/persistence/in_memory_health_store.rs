use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::health_store::HealthStore;

/// Store for a single instance with no redis around.
#[derive(Clone, Default)]
pub struct InMemoryHealthStore {
	entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryHealthStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl HealthStore for InMemoryHealthStore {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>> {
		Ok(self.entries.read().await.get(key).cloned())
	}

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.entries.write().await.insert(key.to_string(), value);
		Ok(())
	}
}
