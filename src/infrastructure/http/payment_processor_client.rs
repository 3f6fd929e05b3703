use std::time::Duration;

use log::debug;
use reqwest::header::{CONNECTION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use crate::domain::errors::ProcessorError;
use crate::domain::health_status::HealthSnapshot;
use crate::domain::payment::Payment;
use crate::domain::payment_processor::Endpoint;
use crate::infrastructure::config::settings::{
	HEALTH_CHECK_TIMEOUT, PAYMENT_TIMEOUT, PURGE_TIMEOUT,
};

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Outbound calls to the two payment processors.
#[derive(Clone)]
pub struct PaymentProcessorClient {
	http_client:     Client,
	default_url:     String,
	fallback_url:    String,
	payment_timeout: Duration,
	health_timeout:  Duration,
	purge_timeout:   Duration,
}

impl PaymentProcessorClient {
	pub fn new(http_client: Client, default_url: &str, fallback_url: &str) -> Self {
		Self {
			http_client,
			default_url: default_url.trim_end_matches('/').to_string(),
			fallback_url: fallback_url.trim_end_matches('/').to_string(),
			payment_timeout: PAYMENT_TIMEOUT,
			health_timeout: HEALTH_CHECK_TIMEOUT,
			purge_timeout: PURGE_TIMEOUT,
		}
	}

	pub fn with_payment_timeout(mut self, timeout: Duration) -> Self {
		self.payment_timeout = timeout;
		self
	}

	pub fn url_of(&self, endpoint: Endpoint) -> &str {
		match endpoint {
			Endpoint::Default => &self.default_url,
			Endpoint::Fallback => &self.fallback_url,
		}
	}

	/// Stamps `requested_at` and posts the payment. `Ok` only on HTTP 200.
	pub async fn send_payment(
		&self,
		payment: &mut Payment,
		endpoint: Endpoint,
	) -> Result<(), ProcessorError> {
		payment.update_request_time();

		let body = serde_json::to_vec(&*payment)
			.map_err(|_| ProcessorError::InvalidRequest)?;

		let url = format!("{}/payments", self.url_of(endpoint));
		debug!("Sending payment {} to {url}", payment.correlation_id);

		let response = self
			.http_client
			.post(&url)
			.timeout(self.payment_timeout)
			.header(CONTENT_TYPE, "application/json")
			.header(CONNECTION, "keep-alive")
			.body(body)
			.send()
			.await
			.map_err(|e| {
				debug!(
					"Failed to send payment {} to {endpoint}: {e}",
					payment.correlation_id
				);
				ProcessorError::UnavailableProcessor
			})?;

		classify_payment_status(response.status())
	}

	pub async fn health(
		&self,
		endpoint: Endpoint,
	) -> Result<HealthSnapshot, ProcessorError> {
		let url = format!("{}/payments/service-health", self.url_of(endpoint));

		let response = self
			.http_client
			.get(&url)
			.timeout(self.health_timeout)
			.send()
			.await
			.map_err(|e| {
				debug!("Failed to health check {endpoint}: {e}");
				ProcessorError::UnavailableProcessor
			})?;

		if response.status() != StatusCode::OK {
			return Err(ProcessorError::Rejected(response.status().as_u16()));
		}

		response
			.json::<HealthSnapshot>()
			.await
			.map_err(|e| ProcessorError::Decode(e.to_string()))
	}

	pub async fn purge(
		&self,
		endpoint: Endpoint,
		token: &str,
	) -> Result<(), ProcessorError> {
		let url = format!("{}/admin/purge-payments", self.url_of(endpoint));

		let response = self
			.http_client
			.post(&url)
			.timeout(self.purge_timeout)
			.header(ADMIN_TOKEN_HEADER, token)
			.send()
			.await
			.map_err(|e| {
				log::error!("Failed to purge {endpoint} at {url}: {e}");
				ProcessorError::UnavailableProcessor
			})?;

		match response.status() {
			StatusCode::OK => Ok(()),
			status => Err(ProcessorError::Rejected(status.as_u16())),
		}
	}
}

/// 400 and 422 mean the processor will never take this payload, so they
/// are not retried. This narrows the older retry-every-non-200 rule on
/// purpose; anything else that is not 200 is still worth another try.
fn classify_payment_status(status: StatusCode) -> Result<(), ProcessorError> {
	match status {
		StatusCode::OK => Ok(()),
		StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
			Err(ProcessorError::InvalidRequest)
		}
		_ => Err(ProcessorError::UnavailableProcessor),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classify_payment_status() {
		assert_eq!(classify_payment_status(StatusCode::OK), Ok(()));
		assert_eq!(
			classify_payment_status(StatusCode::UNPROCESSABLE_ENTITY),
			Err(ProcessorError::InvalidRequest)
		);
		assert_eq!(
			classify_payment_status(StatusCode::BAD_REQUEST),
			Err(ProcessorError::InvalidRequest)
		);
		assert_eq!(
			classify_payment_status(StatusCode::CREATED),
			Err(ProcessorError::UnavailableProcessor)
		);
		assert_eq!(
			classify_payment_status(StatusCode::INTERNAL_SERVER_ERROR),
			Err(ProcessorError::UnavailableProcessor)
		);
		assert_eq!(
			classify_payment_status(StatusCode::TOO_MANY_REQUESTS),
			Err(ProcessorError::UnavailableProcessor)
		);
	}

	#[test]
	fn test_trailing_slashes_are_trimmed() {
		let client = PaymentProcessorClient::new(
			Client::new(),
			"http://default/",
			"http://fallback",
		);

		assert_eq!(client.url_of(Endpoint::Default), "http://default");
		assert_eq!(client.url_of(Endpoint::Fallback), "http://fallback");
	}
}
