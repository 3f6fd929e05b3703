use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::errors::{json_config, query_config};
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_purge_handler::{AdminToken, payments_purge};
use crate::adapters::web::payments_summary_handler::payments_summary;
use crate::domain::health_store::HealthStore;
use crate::domain::payment_processor::Endpoint;
use crate::domain::queue::Queue;
use crate::domain::repository::{PaymentRepository, SharedPaymentRepository};
use crate::infrastructure::config::settings::{
	Config, HEALTH_CHECK_INTERVAL, QUEUE_REPORT_INTERVAL, RETRY_DELAY,
};
use crate::infrastructure::http::payment_processor_client::PaymentProcessorClient;
use crate::infrastructure::persistence::redis_health_store::RedisHealthStore;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::infrastructure::queue::retry_queue::RetryQueue;
use crate::infrastructure::routing::in_memory_payment_router::InMemoryPaymentRouter;
use crate::infrastructure::workers::health_check_worker::health_check_worker;
use crate::infrastructure::workers::health_sync_worker::health_sync_worker;
use crate::infrastructure::workers::payment_processor_worker::payment_processing_worker;
use crate::infrastructure::workers::queue_monitor_worker::queue_monitor_worker;
use crate::infrastructure::workers::supervisor::WorkerSupervisor;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::health_check::HealthCheckUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;
use crate::use_cases::sync_health::SyncHealthUseCase;

pub mod domain {
	pub mod errors;
	pub mod health_status;
	pub mod health_store;
	pub mod payment;
	pub mod payment_processor;
	pub mod payment_router;
	pub mod queue;
	pub mod repository;
}

pub mod use_cases {
	pub mod create_payment;
	pub mod dto;
	pub mod get_payment_summary;
	pub mod health_check;
	pub mod process_payment;
	pub mod purge_payments;
	pub mod sync_health;
}

pub mod infrastructure {
	pub mod config {
		pub mod redis;
		pub mod settings;
	}
	pub mod http {
		pub mod payment_processor_client;
	}
	pub mod persistence {
		pub mod in_memory_health_store;
		pub mod redis_health_store;
		pub mod redis_payment_repository;
	}
	pub mod queue {
		pub mod retry_queue;
	}
	pub mod routing {
		pub mod in_memory_payment_router;
	}
	pub mod workers {
		pub mod health_check_worker;
		pub mod health_sync_worker;
		pub mod payment_processor_worker;
		pub mod queue_monitor_worker;
		pub mod supervisor;
	}
}

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod payments_handler;
		pub mod payments_purge_handler;
		pub mod payments_summary_handler;
		pub mod schema;
	}
}

/// Intervals the background loops tick at.
#[derive(Debug, Clone, Copy)]
pub struct WorkerTimings {
	pub health_check_interval: Duration,
	pub retry_delay:           Duration,
	pub queue_report_interval: Duration,
}

impl Default for WorkerTimings {
	fn default() -> Self {
		Self {
			health_check_interval: HEALTH_CHECK_INTERVAL,
			retry_delay:           RETRY_DELAY,
			queue_report_interval: QUEUE_REPORT_INTERVAL,
		}
	}
}

/// Launches every background loop under one supervisor: the health pollers
/// (only when `health_check_enabled`), one cache-sync loop per processor,
/// the queue depth reporter and `workers` retry workers.
#[allow(clippy::too_many_arguments)]
pub fn start_workers<S, R>(
	health_store: S,
	router: Arc<InMemoryPaymentRouter>,
	client: PaymentProcessorClient,
	retry_queue: RetryQueue,
	process_payment_use_case: ProcessPaymentUseCase<R, RetryQueue>,
	health_check_enabled: bool,
	workers: usize,
	timings: WorkerTimings,
) -> WorkerSupervisor
where
	S: HealthStore + Clone,
	R: PaymentRepository + Clone,
{
	let mut supervisor = WorkerSupervisor::new();

	if health_check_enabled {
		let health_check_use_case =
			HealthCheckUseCase::new(health_store.clone(), client);
		for endpoint in Endpoint::ALL {
			info!("Starting {endpoint} health check worker...");
			supervisor.spawn(health_check_worker(
				health_check_use_case.clone(),
				endpoint,
				timings.health_check_interval,
				supervisor.token(),
			));
		}
	}

	let sync_health_use_case = SyncHealthUseCase::new(health_store, router);
	for endpoint in Endpoint::ALL {
		supervisor.spawn(health_sync_worker(
			sync_health_use_case.clone(),
			endpoint,
			timings.health_check_interval,
			supervisor.token(),
		));
	}

	supervisor.spawn(queue_monitor_worker(
		retry_queue.clone(),
		timings.queue_report_interval,
		supervisor.token(),
	));

	info!("Starting {workers} payment retry workers...");
	for id in 0..workers {
		supervisor.spawn(payment_processing_worker(
			id,
			retry_queue.clone(),
			process_payment_use_case.clone(),
			timings.retry_delay,
			supervisor.token(),
		));
	}

	supervisor
}

fn io_error(e: impl std::error::Error + Send + Sync + 'static) -> std::io::Error {
	std::io::Error::other(e)
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let redis_client = redis::Client::open(config.redis_url.as_str()).map_err(io_error)?;
	let http_client = Client::builder()
		.pool_idle_timeout(Duration::from_secs(config.server_keepalive))
		.build()
		.map_err(io_error)?;

	let processor_client = PaymentProcessorClient::new(
		http_client,
		&config.default_payment_processor_url,
		&config.fallback_payment_processor_url,
	);
	let payment_repo: SharedPaymentRepository =
		Arc::new(RedisPaymentRepository::new(redis_client.clone()));
	let health_store = RedisHealthStore::new(redis_client);
	let router = Arc::new(InMemoryPaymentRouter::new());
	let retry_queue = RetryQueue::new(config.retry_queue_capacity);

	let process_payment_use_case = ProcessPaymentUseCase::new(
		router.clone(),
		processor_client.clone(),
		payment_repo.clone(),
		retry_queue.clone(),
		config.max_retries,
	);
	let create_payment_use_case =
		CreatePaymentUseCase::new(process_payment_use_case.clone());
	let get_payment_summary_use_case =
		GetPaymentSummaryUseCase::new(payment_repo.clone());
	let purge_payments_use_case =
		PurgePaymentsUseCase::new(payment_repo, processor_client.clone());
	let admin_token = AdminToken(config.admin_token.clone());

	let supervisor = start_workers(
		health_store,
		router,
		processor_client,
		retry_queue.clone(),
		process_payment_use_case,
		config.health_check_enabled,
		config.workers,
		WorkerTimings::default(),
	);

	info!(
		"Starting Actix-Web server on 0.0.0.0:{} (health check {})...",
		config.server_port,
		if config.health_check_enabled {
			"enabled"
		} else {
			"disabled"
		}
	);
	let server = HttpServer::new(move || {
		App::new()
			.app_data(json_config())
			.app_data(query_config())
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_summary_use_case.clone()))
			.app_data(web::Data::new(purge_payments_use_case.clone()))
			.app_data(web::Data::new(admin_token.clone()))
			.service(payments)
			.service(payments_summary)
			.service(payments_purge)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.server_port));

	let result = match server {
		Ok(server) => server.run().await,
		Err(e) => Err(e),
	};

	info!(
		"Server stopped with {} payments still waiting for retry",
		retry_queue.len()
	);
	supervisor.shutdown().await;
	result
}
