use async_trait::async_trait;
use redis::{Client, Script};
use time::OffsetDateTime;

use crate::domain::payment::Payment;
use crate::domain::payment_processor::Endpoint;
use crate::domain::repository::{PaymentRepository, SummaryData, SummaryResponse};
use crate::infrastructure::config::redis::{
	PAYMENT_SUMMARY_KEY_PREFIX, PROCESSED_PAYMENTS_SET_KEY,
};

#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	async fn connection(
		&self,
	) -> Result<redis::aio::MultiplexedConnection, Box<dyn std::error::Error + Send>>
	{
		self.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}

	async fn summary_of(
		con: &mut redis::aio::MultiplexedConnection,
		endpoint: Endpoint,
		from_ms: &str,
		to_ms: &str,
	) -> redis::RedisResult<SummaryData> {
		let lua = Script::new(
			r#"
            local ids = redis.call("ZRANGEBYSCORE", KEYS[1], ARGV[1], ARGV[2])
            local total_requests = 0
            local total_amount = 0.0

            for i, id in ipairs(ids) do
                local amount = redis.call("HGET", ARGV[3] .. ":" .. id, "amount")
                if amount then
                    total_requests = total_requests + 1
                    total_amount = total_amount + tonumber(amount)
                end
            end

            return {tostring(total_requests), tostring(total_amount)}
        "#,
		);

		let response: (String, String) = lua
			.key(PROCESSED_PAYMENTS_SET_KEY)
			.arg(from_ms)
			.arg(to_ms)
			.arg(summary_key_prefix(endpoint))
			.invoke_async(con)
			.await?;

		Ok(SummaryData {
			total_requests: response.0.parse().unwrap_or_default(),
			total_amount:   response.1.parse().unwrap_or_default(),
		})
	}
}

fn summary_key_prefix(endpoint: Endpoint) -> String {
	format!("{PAYMENT_SUMMARY_KEY_PREFIX}:{endpoint}")
}

fn unix_millis(ts: OffsetDateTime) -> i64 {
	(ts.unix_timestamp_nanos() / 1_000_000) as i64
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn add(
		&self,
		payment: &Payment,
		endpoint: Endpoint,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self.connection().await?;

		let payment_id = payment.correlation_id.to_string();
		let payment_key = format!("{}:{payment_id}", summary_key_prefix(endpoint));
		let requested_at =
			unix_millis(payment.requested_at.unwrap_or_else(OffsetDateTime::now_utc));

		redis::pipe()
			.atomic()
			.hset_multiple(&payment_key, &[
				("amount", payment.amount.to_string()),
				("requested_at", requested_at.to_string()),
			])
			.ignore()
			.zadd(PROCESSED_PAYMENTS_SET_KEY, payment_id, requested_at)
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}

	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<SummaryResponse, Box<dyn std::error::Error + Send>> {
		let mut con = self.connection().await?;

		let from_ms = from.map_or("-inf".to_string(), |ts| unix_millis(ts).to_string());
		let to_ms = to.map_or("+inf".to_string(), |ts| unix_millis(ts).to_string());

		let default = Self::summary_of(&mut con, Endpoint::Default, &from_ms, &to_ms)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;
		let fallback =
			Self::summary_of(&mut con, Endpoint::Fallback, &from_ms, &to_ms)
				.await
				.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(SummaryResponse { default, fallback })
	}

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self.connection().await?;

		let lua = Script::new(
			r#"
            for _, key in ipairs(redis.call("KEYS", ARGV[1])) do
                redis.call("DEL", key)
            end
            redis.call("DEL", KEYS[1])
            return 1
        "#,
		);

		lua.key(PROCESSED_PAYMENTS_SET_KEY)
			.arg(format!("{PAYMENT_SUMMARY_KEY_PREFIX}:*"))
			.invoke_async::<i64>(&mut con)
			.await
			.map(|_| ())
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)
	}
}
