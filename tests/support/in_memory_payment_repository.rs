use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use payment_failover::domain::payment::Payment;
use payment_failover::domain::payment_processor::Endpoint;
use payment_failover::domain::repository::{
	PaymentRepository, SummaryData, SummaryResponse,
};
use time::OffsetDateTime;

#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	payments:    Arc<Mutex<Vec<(Payment, Endpoint)>>>,
	fail_add:    Arc<AtomicBool>,
	fail_purge:  Arc<AtomicBool>,
	purge_calls: Arc<AtomicUsize>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_fail_add(&self, fail: bool) {
		self.fail_add.store(fail, Ordering::SeqCst);
	}

	pub fn set_fail_purge(&self, fail: bool) {
		self.fail_purge.store(fail, Ordering::SeqCst);
	}

	pub fn purge_calls(&self) -> usize {
		self.purge_calls.load(Ordering::SeqCst)
	}

	pub fn stored(&self) -> Vec<(Payment, Endpoint)> {
		self.payments.lock().unwrap().clone()
	}
}

fn failure(message: &str) -> Box<dyn std::error::Error + Send> {
	Box::new(std::io::Error::other(message.to_string()))
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn add(
		&self,
		payment: &Payment,
		endpoint: Endpoint,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		if self.fail_add.load(Ordering::SeqCst) {
			return Err(failure("repository is down"));
		}
		self.payments
			.lock()
			.unwrap()
			.push((payment.clone(), endpoint));
		Ok(())
	}

	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<SummaryResponse, Box<dyn std::error::Error + Send>> {
		let mut summary = SummaryResponse::default();
		for (payment, endpoint) in self.payments.lock().unwrap().iter() {
			let at = payment.requested_at;
			if from.is_some_and(|from| at.is_none_or(|at| at < from)) ||
				to.is_some_and(|to| at.is_none_or(|at| at > to))
			{
				continue;
			}
			let data: &mut SummaryData = match endpoint {
				Endpoint::Default => &mut summary.default,
				Endpoint::Fallback => &mut summary.fallback,
			};
			data.total_requests += 1;
			data.total_amount += payment.amount;
		}
		Ok(summary)
	}

	async fn purge(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.purge_calls.fetch_add(1, Ordering::SeqCst);
		if self.fail_purge.load(Ordering::SeqCst) {
			return Err(failure("purge refused"));
		}
		self.payments.lock().unwrap().clear();
		Ok(())
	}
}
