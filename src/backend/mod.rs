//! HTTP client for the registration backend.
//!
//! Same `reqwest` client on the server and in the browser (where it goes through `fetch`).
mod error;
mod types;

pub use error::*;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
pub use types::*;
use url::Url;

use crate::{
	auth::{AuthToken, Credentials},
	registration::multipart::{self, FormPart},
};

#[derive(Clone, Debug)]
pub struct BackendClient {
	http: Client,
	base: Url,
}

impl BackendClient {
	pub fn new(base_url: &str) -> Result<Self, ApiError> {
		Self::with_client(Client::new(), base_url)
	}

	pub fn with_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
		let mut base = Url::parse(base_url)?;
		// `Url::join` replaces the last segment unless the path ends in '/'
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		Ok(Self { http, base })
	}

	pub fn base_url(&self) -> &Url {
		&self.base
	}

	fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		Ok(self.base.join(path.trim_start_matches('/'))?)
	}

	/// `POST /auth/login`. Only a 200 whose body parses as a token counts as success.
	#[instrument(skip_all, fields(email = %credentials.email))]
	pub async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
		let response = self.http.post(self.endpoint("/auth/login")?).json(credentials).send().await?;

		let status = response.status();
		if status != StatusCode::OK {
			debug!(%status, "login rejected");
			return Err(match status {
				StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::InvalidCredentials,
				_ => ApiError::from_response(response).await,
			});
		}

		let body = response.text().await?;
		AuthToken::from_login_body(&body).ok_or(ApiError::InvalidCredentials)
	}

	/// `GET /api/employee` for whoever the token belongs to.
	#[instrument(skip_all)]
	pub async fn fetch_profile(&self, token: &AuthToken) -> Result<ProfileData, ApiError> {
		let response = self.http.get(self.endpoint("/api/employee")?).bearer_auth(token.expose()).send().await?;
		if !response.status().is_success() {
			return Err(ApiError::from_response(response).await);
		}
		let body = response.text().await?;
		Ok(serde_json::from_str(&body)?)
	}

	#[instrument(skip_all)]
	pub async fn fetch_catalog(&self) -> Result<Vec<CourseOffering>, ApiError> {
		let response = self.http.get(self.endpoint("/api/courses")?).send().await?;
		if !response.status().is_success() {
			return Err(ApiError::from_response(response).await);
		}
		let body = response.text().await?;
		let catalog: Vec<CourseOffering> = serde_json::from_str(&body)?;
		debug!(offerings = catalog.len(), "catalog loaded");
		Ok(catalog)
	}

	/// `POST /faculty/register` with the multipart body produced by [multipart::encode].
	#[instrument(skip_all, fields(parts = parts.len()))]
	pub async fn register_faculty(&self, parts: Vec<FormPart>) -> Result<(), ApiError> {
		let form = multipart::into_form(parts)?;
		let response = self
			.http
			.post(self.endpoint("/faculty/register")?)
			.multipart(form)
			.send()
			.await?;
		if !response.status().is_success() {
			return Err(ApiError::from_response(response).await);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_keep_base_path_prefix() {
		let client = BackendClient::new("http://localhost:8080/backend").unwrap();
		assert_eq!(client.endpoint("/auth/login").unwrap().as_str(), "http://localhost:8080/backend/auth/login");

		let client = BackendClient::new("http://localhost:8080").unwrap();
		assert_eq!(client.endpoint("/api/courses").unwrap().as_str(), "http://localhost:8080/api/courses");
	}
}
