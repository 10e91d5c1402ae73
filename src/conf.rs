extern crate clap;

use leptos::prelude::use_context;
use serde::{Deserialize, Serialize};

use crate::{
	auth::LocalStorageSession,
	backend::{ApiError, BackendClient},
};

#[derive(Clone, Debug, v_utils::macros::MyConfigPrimitives)]
#[cfg_attr(feature = "ssr", derive(v_utils::macros::Settings))]
pub struct Settings {
	/// Base URL of the registration backend; endpoint paths are joined onto it
	#[serde(default = "__default_backend_url")]
	#[primitives(skip)]
	pub backend_url: String,
	/// `localStorage` key the auth token is persisted under
	#[serde(default = "__default_token_storage_key")]
	#[primitives(skip)]
	pub token_storage_key: String,
}

fn __default_backend_url() -> String {
	"http://localhost:8080".to_string()
}

fn __default_token_storage_key() -> String {
	"jwtToken".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			backend_url: __default_backend_url(),
			token_storage_key: __default_token_storage_key(),
		}
	}
}

/// The part of [Settings] islands need in the browser. Passed to them as a prop, since server context doesn't cross into islands.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientSettings {
	pub backend_url: String,
	pub token_key: String,
}

impl Default for ClientSettings {
	fn default() -> Self {
		Settings::default().into()
	}
}

impl From<Settings> for ClientSettings {
	fn from(settings: Settings) -> Self {
		Self {
			backend_url: settings.backend_url,
			token_key: settings.token_storage_key,
		}
	}
}

impl ClientSettings {
	/// Read from the server-provided [Settings] context, falling back to defaults outside of a request.
	pub fn from_context() -> Self {
		use_context::<Settings>().map(Self::from).unwrap_or_default()
	}

	pub fn backend(&self) -> Result<BackendClient, ApiError> {
		BackendClient::new(&self.backend_url)
	}

	pub fn session(&self) -> LocalStorageSession {
		LocalStorageSession::new(self.token_key.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_point_at_local_backend() {
		let client = ClientSettings::default();
		assert_eq!(client.backend_url, "http://localhost:8080");
		assert_eq!(client.token_key, "jwtToken");
		assert!(client.backend().is_ok());
	}

	#[test]
	fn malformed_backend_url_is_rejected() {
		let client = ClientSettings {
			backend_url: "not a url".into(),
			token_key: "k".into(),
		};
		assert!(matches!(client.backend(), Err(ApiError::InvalidUrl(_))));
	}
}
