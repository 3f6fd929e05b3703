use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error, web};
use derive_more::derive::{Display, Error};
use log::debug;
use serde::Serialize;

use crate::domain::errors::ProcessorError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Could not read from the payment repository.")]
	RepositoryError,
	#[display("A payment processor could not complete the request.")]
	ProcessorError,
	#[display("Request data is invalid.")]
	BadClientDataError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::RepositoryError => "Service Unavailable".to_string(),
			ApiError::ProcessorError => "Bad Gateway".to_string(),
			ApiError::BadClientDataError => "Bad request".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::RepositoryError => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::ProcessorError => StatusCode::BAD_GATEWAY,
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
		}
	}
}

impl From<ProcessorError> for ApiError {
	fn from(err: ProcessorError) -> Self {
		match err {
			ProcessorError::Persistence(_) => ApiError::RepositoryError,
			_ => ApiError::ProcessorError,
		}
	}
}

/// Body extractor config answering malformed payloads with the JSON error
/// body instead of actix's plain text.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		debug!("Rejected request body: {err}");
		ApiError::BadClientDataError.into()
	})
}

pub fn query_config() -> web::QueryConfig {
	web::QueryConfig::default().error_handler(|err, _req| {
		debug!("Rejected query string: {err}");
		ApiError::BadClientDataError.into()
	})
}
