use std::sync::RwLock;

use thiserror::Error;
use tracing::warn;

use super::AuthToken;

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Browser storage is not available")]
	Unavailable,
	#[error("Failed to write to browser storage: {0}")]
	Write(String),
}

/// Where the auth token lives between page loads. Injected into every screen that needs it.
pub trait SessionStore {
	fn get(&self) -> Option<AuthToken>;
	fn set(&self, token: &AuthToken) -> Result<(), SessionError>;
	fn clear(&self);
}

/// `window.localStorage` under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
	key: String,
}

impl LocalStorageSession {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}

	fn storage() -> Option<web_sys::Storage> {
		web_sys::window().and_then(|w| w.local_storage().ok().flatten())
	}
}

impl SessionStore for LocalStorageSession {
	fn get(&self) -> Option<AuthToken> {
		let stored = Self::storage()?.get_item(&self.key).ok().flatten()?;
		AuthToken::new(stored)
	}

	fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
		let storage = Self::storage().ok_or(SessionError::Unavailable)?;
		storage.set_item(&self.key, token.expose()).map_err(|e| SessionError::Write(format!("{e:?}")))
	}

	fn clear(&self) {
		match Self::storage() {
			Some(storage) =>
				if let Err(e) = storage.remove_item(&self.key) {
					warn!("Couldn't remove stored token: {e:?}");
				},
			None => warn!("Browser storage unavailable, nothing to clear"),
		}
	}
}

#[derive(Debug, Default)]
pub struct MemorySession {
	token: RwLock<Option<AuthToken>>,
}

impl MemorySession {
	pub fn with_token(token: AuthToken) -> Self {
		Self { token: RwLock::new(Some(token)) }
	}
}

impl SessionStore for MemorySession {
	fn get(&self) -> Option<AuthToken> {
		self.token.read().ok().and_then(|t| t.clone())
	}

	fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
		let mut slot = self.token.write().map_err(|e| SessionError::Write(e.to_string()))?;
		*slot = Some(token.clone());
		Ok(())
	}

	fn clear(&self) {
		if let Ok(mut slot) = self.token.write() {
			*slot = None;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_session_roundtrip() {
		let session = MemorySession::default();
		assert!(session.get().is_none());

		session.set(&AuthToken::new("abc").unwrap()).unwrap();
		assert_eq!(session.get().unwrap().expose(), "abc");

		session.clear();
		assert!(session.get().is_none());
		// clearing twice is fine
		session.clear();
	}
}
