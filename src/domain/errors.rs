use derive_more::derive::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ProcessorError {
	/// The processor refused the payload itself; retrying cannot help.
	#[display("invalid request")]
	InvalidRequest,
	#[display("unavailable processor")]
	UnavailableProcessor,
	#[display("retries are over")]
	RetriesExhausted,
	#[display("processor answered with status {_0}")]
	Rejected(#[error(not(source))] u16),
	#[display("failed to persist payment: {_0}")]
	Persistence(#[error(not(source))] String),
	#[display("health store failure: {_0}")]
	HealthStore(#[error(not(source))] String),
	#[display("failed to decode payload: {_0}")]
	Decode(#[error(not(source))] String),
}

impl ProcessorError {
	/// Whether a payment that failed with this error goes back on the retry
	/// queue.
	pub fn is_retryable(&self) -> bool {
		!matches!(
			self,
			ProcessorError::InvalidRequest | ProcessorError::RetriesExhausted
		)
	}
}
