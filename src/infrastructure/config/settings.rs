use std::time::Duration;

use serde::Deserialize;

pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(1);
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);
pub const PAYMENT_TIMEOUT: Duration = Duration::from_secs(10);
pub const PURGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const RETRY_DELAY: Duration = Duration::from_millis(10);
pub const QUEUE_REPORT_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub default_payment_processor_url: String,
	pub fallback_payment_processor_url: String,
	pub health_check_enabled: bool,
	pub workers: usize,
	pub retry_queue_capacity: usize,
	pub max_retries: Option<u32>,
	pub admin_token: String,
	pub server_port: u16,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("health_check_enabled", false)?
			.set_default("workers", 10)?
			.set_default("retry_queue_capacity", 10_000)?
			.set_default("admin_token", "123")?
			.set_default("server_port", 9999)?
			.set_default("server_keepalive", 60)?
			.add_source(config::Environment::with_prefix("APP").try_parsing(true))
			.build()?;

		config_builder.try_deserialize()
	}
}
