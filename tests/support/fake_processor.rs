use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU16, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payment_failover::domain::health_status::HealthSnapshot;

/// Payment processor stand-in that counts calls per route and answers with
/// whatever status the test sets.
pub struct FakeProcessorState {
	pub payment_calls:  AtomicUsize,
	pub health_calls:   AtomicUsize,
	pub purge_calls:    AtomicUsize,
	pub payment_status: AtomicU16,
	pub health_status:  AtomicU16,
	pub purge_status:   AtomicU16,
	pub payment_delay:  AtomicU64,
	pub health:         Mutex<HealthSnapshot>,
	pub received:       Mutex<Vec<serde_json::Value>>,
	pub purge_tokens:   Mutex<Vec<Option<String>>>,
}

impl Default for FakeProcessorState {
	fn default() -> Self {
		Self {
			payment_calls:  AtomicUsize::new(0),
			health_calls:   AtomicUsize::new(0),
			purge_calls:    AtomicUsize::new(0),
			payment_status: AtomicU16::new(200),
			health_status:  AtomicU16::new(200),
			purge_status:   AtomicU16::new(200),
			payment_delay:  AtomicU64::new(0),
			health:         Mutex::new(HealthSnapshot::default()),
			received:       Mutex::new(Vec::new()),
			purge_tokens:   Mutex::new(Vec::new()),
		}
	}
}

pub struct FakeProcessor {
	pub url:   String,
	pub state: web::Data<FakeProcessorState>,
	handle:    ServerHandle,
}

impl FakeProcessor {
	pub async fn start() -> FakeProcessor {
		let state = web::Data::new(FakeProcessorState::default());
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();

		let data = state.clone();
		let server = HttpServer::new(move || {
			App::new()
				.app_data(data.clone())
				.route("/payments", web::post().to(receive_payment))
				.route("/payments/service-health", web::get().to(service_health))
				.route("/admin/purge-payments", web::post().to(purge_payments))
		})
		.workers(1)
		.listen(listener)
		.unwrap()
		.run();

		let handle = server.handle();
		actix_web::rt::spawn(server);

		FakeProcessor {
			url: format!("http://127.0.0.1:{port}"),
			state,
			handle,
		}
	}

	pub fn payment_calls(&self) -> usize {
		self.state.payment_calls.load(Ordering::SeqCst)
	}

	pub fn health_calls(&self) -> usize {
		self.state.health_calls.load(Ordering::SeqCst)
	}

	pub fn purge_calls(&self) -> usize {
		self.state.purge_calls.load(Ordering::SeqCst)
	}

	pub fn set_payment_status(&self, status: u16) {
		self.state.payment_status.store(status, Ordering::SeqCst);
	}

	pub fn set_health_status(&self, status: u16) {
		self.state.health_status.store(status, Ordering::SeqCst);
	}

	pub fn set_purge_status(&self, status: u16) {
		self.state.purge_status.store(status, Ordering::SeqCst);
	}

	pub fn set_payment_delay(&self, delay: Duration) {
		self.state
			.payment_delay
			.store(delay.as_millis() as u64, Ordering::SeqCst);
	}

	pub fn set_health(&self, snapshot: HealthSnapshot) {
		*self.state.health.lock().unwrap() = snapshot;
	}

	pub fn received(&self) -> Vec<serde_json::Value> {
		self.state.received.lock().unwrap().clone()
	}

	pub fn purge_tokens(&self) -> Vec<Option<String>> {
		self.state.purge_tokens.lock().unwrap().clone()
	}

	pub async fn stop(&self) {
		self.handle.stop(false).await;
	}
}

fn status_of(code: &AtomicU16) -> StatusCode {
	StatusCode::from_u16(code.load(Ordering::SeqCst)).unwrap()
}

async fn receive_payment(
	state: web::Data<FakeProcessorState>,
	body: web::Json<serde_json::Value>,
) -> HttpResponse {
	state.payment_calls.fetch_add(1, Ordering::SeqCst);
	state.received.lock().unwrap().push(body.into_inner());

	let delay = state.payment_delay.load(Ordering::SeqCst);
	if delay > 0 {
		actix_web::rt::time::sleep(Duration::from_millis(delay)).await;
	}

	HttpResponse::build(status_of(&state.payment_status)).finish()
}

async fn service_health(state: web::Data<FakeProcessorState>) -> HttpResponse {
	state.health_calls.fetch_add(1, Ordering::SeqCst);

	let status = status_of(&state.health_status);
	if status != StatusCode::OK {
		return HttpResponse::build(status).finish();
	}

	let snapshot = *state.health.lock().unwrap();
	HttpResponse::Ok().json(snapshot)
}

async fn purge_payments(
	state: web::Data<FakeProcessorState>,
	req: HttpRequest,
) -> HttpResponse {
	state.purge_calls.fetch_add(1, Ordering::SeqCst);
	let token = req
		.headers()
		.get("X-Admin-Token")
		.and_then(|value| value.to_str().ok())
		.map(str::to_string);
	state.purge_tokens.lock().unwrap().push(token);

	HttpResponse::build(status_of(&state.purge_status)).finish()
}
