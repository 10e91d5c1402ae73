mod view;

use tracing::{error, info};
pub use view::*;

use crate::{
	auth::SessionStore,
	backend::{ApiError, BackendClient, ProfileData},
};

pub const PROFILE_UNAVAILABLE: &str = "Couldn't load your profile. Please try again.";

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileLoad {
	/// No token, or the backend refused it. Any stored token has been cleared.
	RedirectToLogin,
	Loaded(ProfileData),
	/// Anything else went wrong; the token is kept and the user can retry.
	Failed(&'static str),
}

pub async fn load_profile(client: &BackendClient, session: &dyn SessionStore) -> ProfileLoad {
	let Some(token) = session.get() else {
		info!("No stored token, redirecting to login");
		return ProfileLoad::RedirectToLogin;
	};

	match client.fetch_profile(&token).await {
		Ok(profile) => ProfileLoad::Loaded(profile),
		Err(ApiError::Unauthorized) => {
			info!("Stored token rejected, logging out");
			session.clear();
			ProfileLoad::RedirectToLogin
		}
		Err(e) => {
			error!("Error fetching profile data: {e}");
			ProfileLoad::Failed(PROFILE_UNAVAILABLE)
		}
	}
}
