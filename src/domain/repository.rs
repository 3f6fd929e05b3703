use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::payment::Payment;
use crate::domain::payment_processor::Endpoint;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct SummaryData {
	#[serde(rename = "totalRequests")]
	pub total_requests: usize,
	#[serde(rename = "totalAmount")]
	pub total_amount:   f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct SummaryResponse {
	pub default:  SummaryData,
	pub fallback: SummaryData,
}

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	async fn add(
		&self,
		payment: &Payment,
		endpoint: Endpoint,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<SummaryResponse, Box<dyn std::error::Error + Send>>;
	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>>;
}

pub type SharedPaymentRepository = Arc<dyn PaymentRepository>;

#[async_trait]
impl<T: PaymentRepository + ?Sized> PaymentRepository for Arc<T> {
	async fn add(
		&self,
		payment: &Payment,
		endpoint: Endpoint,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		(**self).add(payment, endpoint).await
	}

	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<SummaryResponse, Box<dyn std::error::Error + Send>> {
		(**self).summary(from, to).await
	}

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		(**self).purge().await
	}
}
