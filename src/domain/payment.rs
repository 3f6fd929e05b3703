use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Payment as forwarded to a processor. Only `requested_at` is touched by
/// the router; the rest passes through untouched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
	pub correlation_id: Uuid,
	pub amount:         f64,
	#[serde(
		with = "time::serde::rfc3339::option",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub requested_at:   Option<OffsetDateTime>,
}

impl Payment {
	pub fn new(correlation_id: Uuid, amount: f64) -> Self {
		Self {
			correlation_id,
			amount,
			requested_at: None,
		}
	}

	/// Stamps the payment right before a send attempt.
	pub fn update_request_time(&mut self) {
		self.requested_at = Some(OffsetDateTime::now_utc());
	}
}
