use serde::{Deserialize, Serialize};

/// Highest `minResponseTime` (ms) a processor may report and still receive
/// traffic.
pub const MAX_MIN_RESPONSE_TIME_MS: u64 = 80;

/// Last observed health of one processor, exactly as the processor reports
/// it on `/payments/service-health` and as it is kept in the shared store.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSnapshot {
	pub failing:           bool,
	#[serde(rename = "minResponseTime")]
	pub min_response_time: u64,
}

impl HealthSnapshot {
	pub fn new(failing: bool, min_response_time: u64) -> Self {
		Self {
			failing,
			min_response_time,
		}
	}

	pub fn is_eligible(&self) -> bool {
		!self.failing && self.min_response_time < MAX_MIN_RESPONSE_TIME_MS
	}
}
