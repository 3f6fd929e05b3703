use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub correlation_id: Uuid,
	pub amount:         f64,
}

#[derive(Debug, Clone, Default)]
pub struct GetPaymentSummaryQuery {
	pub from: Option<OffsetDateTime>,
	pub to:   Option<OffsetDateTime>,
}

/// What `Process` did with a payment. Callers never see an error; this is
/// only for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
	Processed,
	Discarded,
	Requeued,
	Dropped,
}
