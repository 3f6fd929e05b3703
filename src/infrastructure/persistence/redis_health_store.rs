use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::health_store::HealthStore;

#[derive(Clone)]
pub struct RedisHealthStore {
	client: Client,
}

impl RedisHealthStore {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl HealthStore for RedisHealthStore {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		con.get(key)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		con.set::<_, _, ()>(key, value)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}
}
