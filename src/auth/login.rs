use tracing::{info, warn};

use super::{Credentials, SessionStore};
use crate::backend::BackendClient;

/// Shown for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
	/// Token stored; go to the profile screen.
	Authenticated,
	Rejected(&'static str),
}

pub async fn submit_login(client: &BackendClient, session: &dyn SessionStore, credentials: &Credentials) -> LoginOutcome {
	let token = match client.login(credentials).await {
		Ok(token) => token,
		Err(e) => {
			warn!("Login failed: {e}");
			return LoginOutcome::Rejected(INVALID_CREDENTIALS);
		}
	};

	if let Err(e) = session.set(&token) {
		warn!("Couldn't persist session: {e}");
		return LoginOutcome::Rejected(INVALID_CREDENTIALS);
	}
	info!("Login successful");
	LoginOutcome::Authenticated
}

/// Drop the stored token. Callers navigate back to the login screen.
pub fn logout(session: &dyn SessionStore) {
	session.clear();
	info!("Logged out");
}
