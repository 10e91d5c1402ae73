use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("Invalid backend url: {0}")]
	InvalidUrl(#[from] url::ParseError),

	#[error("Request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// 401/403 on an authenticated endpoint. The stored token is no longer good.
	#[error("Unauthorized")]
	Unauthorized,

	#[error("Invalid credentials")]
	InvalidCredentials,

	#[error("Backend responded with {status}: {body}")]
	Status { status: StatusCode, body: String },

	#[error("Unexpected response body: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ApiError {
	pub(crate) async fn from_response(response: reqwest::Response) -> Self {
		let status = response.status();
		if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
			return Self::Unauthorized;
		}
		let body = response.text().await.unwrap_or_default();
		Self::Status { status, body }
	}
}
