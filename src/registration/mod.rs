//! Faculty signup: the form, its course picker and the submission.
mod form;
pub mod multipart;
mod selection;
mod view;

pub use form::*;
pub use selection::*;
use tracing::{debug, error, info, warn};
pub use view::*;

use crate::backend::{BackendClient, CourseId, CourseOffering};

pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
	#[default]
	Loading,
	Loaded,
	/// Fetch failed; the picker shows no courses but the rest of the form keeps working.
	Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
	form: FacultyRegistration,
	catalog: Vec<CourseOffering>,
	catalog_status: CatalogStatus,
	selection: CourseSelection,
	conflict: Option<String>,
}

impl RegistrationState {
	pub fn with_catalog(catalog: Vec<CourseOffering>) -> Self {
		let mut state = Self::default();
		state.set_catalog(Some(catalog));
		state
	}

	/// `None` marks a failed fetch.
	pub fn set_catalog(&mut self, catalog: Option<Vec<CourseOffering>>) {
		match catalog {
			Some(catalog) => {
				self.catalog = catalog;
				self.catalog_status = CatalogStatus::Loaded;
			}
			None => {
				self.catalog.clear();
				self.catalog_status = CatalogStatus::Unavailable;
			}
		}
	}

	/// Read-only: `course_ids` only moves in lockstep with the selection.
	pub fn form(&self) -> &FacultyRegistration {
		&self.form
	}

	pub fn set_field(&mut self, field: Field, value: String) {
		self.form.set_field(field, value);
	}

	pub fn set_photograph(&mut self, photograph: Option<Photograph>) {
		self.form.photograph = photograph;
	}

	pub fn catalog(&self) -> &[CourseOffering] {
		&self.catalog
	}

	pub fn catalog_status(&self) -> &CatalogStatus {
		&self.catalog_status
	}

	pub fn selection(&self) -> &CourseSelection {
		&self.selection
	}

	pub fn conflict(&self) -> Option<&str> {
		self.conflict.as_deref()
	}

	/// Catalog entries that aren't selected yet, for the picker.
	pub fn available(&self) -> impl Iterator<Item = &CourseOffering> {
		self.catalog.iter().filter(|o| !self.selection.contains(o.course_id()))
	}

	pub fn select_course(&mut self, course_id: CourseId) -> Result<(), SelectError> {
		let Some(candidate) = self.catalog.iter().find(|o| o.course_id() == course_id).cloned() else {
			debug!(course_id, "ignoring selection of a course not in the catalog");
			return Err(SelectError::UnknownCourse(course_id));
		};

		match self.selection.try_add(candidate) {
			Ok(()) => {
				self.form.course_ids.push(course_id);
				self.conflict = None;
				Ok(())
			}
			Err(e) => {
				debug!("{e}");
				self.conflict = e.user_message();
				Err(e)
			}
		}
	}

	pub fn remove_course(&mut self, course_id: CourseId) {
		if self.selection.remove(course_id) {
			self.form.course_ids.retain(|id| *id != course_id);
		}
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		self.form.validate()
	}

	pub fn encode(&self) -> Vec<multipart::FormPart> {
		multipart::encode(&self.form, &self.selection)
	}
}

/// Fetch the course catalog. `None` if it couldn't be loaded; the failure is only logged.
pub async fn load_catalog(client: &BackendClient) -> Option<Vec<CourseOffering>> {
	match client.fetch_catalog().await {
		Ok(catalog) => Some(catalog),
		Err(e) => {
			error!("Couldn't load course catalog: {e}");
			None
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Didn't pass validation; nothing was sent.
	Blocked(ValidationError),
	Registered,
	Failed(&'static str),
}

impl SubmitOutcome {
	pub fn user_message(&self) -> Option<&'static str> {
		match self {
			Self::Blocked(_) => Some(REGISTRATION_INCOMPLETE),
			Self::Registered => None,
			Self::Failed(msg) => Some(*msg),
		}
	}
}

pub async fn submit_registration(client: &BackendClient, state: &RegistrationState) -> SubmitOutcome {
	if let Err(e) = state.validate() {
		info!("Registration blocked: {e}");
		return SubmitOutcome::Blocked(e);
	}

	match client.register_faculty(state.encode()).await {
		Ok(()) => {
			info!(courses = state.selection.len(), "Faculty registered");
			SubmitOutcome::Registered
		}
		Err(e) => {
			warn!("Registration failed: {e}");
			SubmitOutcome::Failed(REGISTRATION_FAILED)
		}
	}
}
