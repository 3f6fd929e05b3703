use async_trait::async_trait;

/// Key/value store shared by every instance. Values never expire.
#[async_trait]
pub trait HealthStore: Send + Sync + 'static {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>>;
	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
}
