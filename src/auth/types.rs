use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, derive_new::new)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

/// Opaque bearer credential issued by the backend at login.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AuthToken(String);

/// What older backends answer with a 200 instead of refusing the login.
const REJECTION_BODY: &str = "Wrong Password or Email";

#[derive(Deserialize)]
#[serde(untagged)]
enum LoginBody {
	Object { token: String },
	Bare(String),
}

impl AuthToken {
	/// Kept verbatim; blank text and the rejection message aren't tokens.
	pub fn new(token: impl Into<String>) -> Option<Self> {
		let token = token.into();
		let trimmed = token.trim();
		match trimmed.is_empty() || trimmed == REJECTION_BODY {
			true => None,
			false => Some(Self(token)),
		}
	}

	/// Parse the body of a successful login response: `{"token": ".."}`, a JSON string, or raw token text.
	/// Any other JSON is a rejection.
	pub fn from_login_body(body: &str) -> Option<Self> {
		if serde_json::from_str::<serde_json::Value>(body).is_err() {
			return Self::new(body);
		}
		match serde_json::from_str::<LoginBody>(body) {
			Ok(LoginBody::Object { token } | LoginBody::Bare(token)) => Self::new(token),
			Err(_) => None,
		}
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Debug for AuthToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("AuthToken(***)")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn login_body_shapes() {
		assert_eq!(AuthToken::from_login_body("eyJhbGciOi.abc.def").unwrap().expose(), "eyJhbGciOi.abc.def");
		assert_eq!(AuthToken::from_login_body(r#""quoted-token""#).unwrap().expose(), "quoted-token");
		assert_eq!(AuthToken::from_login_body(r#"{"token":"structured"}"#).unwrap().expose(), "structured");
	}

	#[test]
	fn rejection_bodies_are_not_tokens() {
		assert!(AuthToken::from_login_body("").is_none());
		assert!(AuthToken::from_login_body("  \n").is_none());
		assert!(AuthToken::from_login_body("Wrong Password or Email").is_none());
		assert!(AuthToken::from_login_body(r#""Wrong Password or Email""#).is_none());
		assert!(AuthToken::from_login_body(r#"{"error":"bad credentials"}"#).is_none());
		assert!(AuthToken::from_login_body("null").is_none());
		assert!(AuthToken::from_login_body("true").is_none());
		assert!(AuthToken::from_login_body(r#"{"token":123}"#).is_none());
		assert!(AuthToken::from_login_body(r#"{"token":""}"#).is_none());
	}

	#[test]
	fn token_is_stored_verbatim() {
		assert_eq!(AuthToken::new(" abc.def \n").unwrap().expose(), " abc.def \n");
		assert_eq!(AuthToken::from_login_body(r#""  padded""#).unwrap().expose(), "  padded");
	}

	#[test]
	fn debug_does_not_leak() {
		let token = AuthToken::new("secret").unwrap();
		assert_eq!(format!("{token:?}"), "AuthToken(***)");
	}
}
