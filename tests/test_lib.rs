use std::sync::Arc;

use payment_failover::infrastructure::config::settings::Config;

#[actix_web::test]
async fn test_run_bind_error() {
	let listener = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	let config = Config {
		redis_url: "redis://127.0.0.1:1/".to_string(),
		default_payment_processor_url: "http://127.0.0.1:1".to_string(),
		fallback_payment_processor_url: "http://127.0.0.1:1".to_string(),
		health_check_enabled: false,
		workers: 2,
		retry_queue_capacity: 10,
		max_retries: None,
		admin_token: "123".to_string(),
		server_port: port,
		server_keepalive: 60,
	};

	assert!(payment_failover::run(Arc::new(config)).await.is_err());
	drop(listener);
}
