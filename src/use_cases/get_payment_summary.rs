use crate::domain::repository::{PaymentRepository, SummaryResponse};
use crate::use_cases::dto::GetPaymentSummaryQuery;

#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> GetPaymentSummaryUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		query: GetPaymentSummaryQuery,
	) -> Result<SummaryResponse, Box<dyn std::error::Error + Send>> {
		self.payment_repo.summary(query.from, query.to).await
	}
}
