use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::domain::health_status::HealthSnapshot;
use crate::domain::payment_processor::Endpoint;
use crate::domain::payment_router::PaymentRouter;

/// Process-local view of both processors' health.
///
/// Each cell is swapped whole by its sync loop, so readers always see a
/// complete snapshot (or the optimistic default) without taking a lock.
pub struct InMemoryPaymentRouter {
	default_health:  ArcSwap<HealthSnapshot>,
	fallback_health: ArcSwap<HealthSnapshot>,
}

impl InMemoryPaymentRouter {
	pub fn new() -> Self {
		Self {
			default_health:  ArcSwap::from_pointee(HealthSnapshot::default()),
			fallback_health: ArcSwap::from_pointee(HealthSnapshot::default()),
		}
	}

	pub fn update_processor_health(
		&self,
		endpoint: Endpoint,
		snapshot: HealthSnapshot,
	) {
		self.cell(endpoint).store(Arc::new(snapshot));
	}

	fn cell(&self, endpoint: Endpoint) -> &ArcSwap<HealthSnapshot> {
		match endpoint {
			Endpoint::Default => &self.default_health,
			Endpoint::Fallback => &self.fallback_health,
		}
	}
}

impl Default for InMemoryPaymentRouter {
	fn default() -> Self {
		Self::new()
	}
}

impl PaymentRouter for InMemoryPaymentRouter {
	fn processor_for_payment(&self) -> Option<Endpoint> {
		Endpoint::ALL
			.into_iter()
			.find(|endpoint| self.health_of(*endpoint).is_eligible())
	}

	fn health_of(&self, endpoint: Endpoint) -> HealthSnapshot {
		**self.cell(endpoint).load()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn router_with(
		default: HealthSnapshot,
		fallback: HealthSnapshot,
	) -> InMemoryPaymentRouter {
		let router = InMemoryPaymentRouter::new();
		router.update_processor_health(Endpoint::Default, default);
		router.update_processor_health(Endpoint::Fallback, fallback);
		router
	}

	#[test]
	fn test_starts_with_optimistic_defaults() {
		let router = InMemoryPaymentRouter::new();

		assert_eq!(router.health_of(Endpoint::Default), HealthSnapshot::default());
		assert_eq!(
			router.health_of(Endpoint::Fallback),
			HealthSnapshot::default()
		);
		assert_eq!(router.processor_for_payment(), Some(Endpoint::Default));
	}

	#[test]
	fn test_healthy_default_wins_over_faster_fallback() {
		let router = router_with(
			HealthSnapshot::new(false, 50),
			HealthSnapshot::new(false, 30),
		);

		assert_eq!(router.processor_for_payment(), Some(Endpoint::Default));
	}

	#[test]
	fn test_healthy_default_wins_whatever_fallback_reports() {
		for fallback in [
			HealthSnapshot::new(true, 0),
			HealthSnapshot::new(false, 500),
			HealthSnapshot::new(true, 500),
		] {
			let router = router_with(HealthSnapshot::new(false, 79), fallback);
			assert_eq!(router.processor_for_payment(), Some(Endpoint::Default));
		}
	}

	#[test]
	fn test_failing_default_routes_to_fallback() {
		let router = router_with(
			HealthSnapshot::new(true, 0),
			HealthSnapshot::new(false, 40),
		);

		assert_eq!(router.processor_for_payment(), Some(Endpoint::Fallback));
	}

	#[test]
	fn test_slow_default_routes_to_fallback() {
		let router = router_with(
			HealthSnapshot::new(false, 80),
			HealthSnapshot::new(false, 10),
		);

		assert_eq!(router.processor_for_payment(), Some(Endpoint::Fallback));
	}

	#[test]
	fn test_no_processor_when_both_are_ineligible() {
		let router = router_with(
			HealthSnapshot::new(false, 120),
			HealthSnapshot::new(true, 0),
		);

		assert_eq!(router.processor_for_payment(), None);
	}

	#[test]
	fn test_update_replaces_whole_snapshot() {
		let router = InMemoryPaymentRouter::new();

		router
			.update_processor_health(Endpoint::Fallback, HealthSnapshot::new(true, 7));

		assert_eq!(
			router.health_of(Endpoint::Fallback),
			HealthSnapshot::new(true, 7)
		);
		assert_eq!(router.health_of(Endpoint::Default), HealthSnapshot::default());
	}
}
