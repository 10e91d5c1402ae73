use thiserror::Error;

use crate::backend::CourseId;

/// Shown whenever the form is submitted incomplete. No per-field messages.
pub const REGISTRATION_INCOMPLETE: &str = "Please fill in all required fields and select at least one course.";

/// The binary photo part of the registration.
#[derive(Clone, PartialEq, Eq, derive_new::new)]
pub struct Photograph {
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Photograph {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Photograph")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Field {
	#[display("firstName")]
	FirstName,
	#[display("lastName")]
	LastName,
	#[display("email")]
	Email,
	#[display("title")]
	Title,
	#[display("department")]
	Department,
	#[display("password")]
	Password,
}

impl Field {
	/// In the order they're sent and rendered.
	pub const ALL: [Self; 6] = [Self::FirstName, Self::LastName, Self::Email, Self::Title, Self::Department, Self::Password];

	pub fn label(self) -> &'static str {
		match self {
			Self::FirstName => "First Name",
			Self::LastName => "Last Name",
			Self::Email => "Email",
			Self::Title => "Title",
			Self::Department => "Department",
			Self::Password => "Password",
		}
	}

	pub fn input_type(self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Password => "password",
			_ => "text",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("{0} is required")]
	MissingField(Field),
	#[error("at least one course must be selected")]
	NoCourses,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacultyRegistration {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub title: String,
	pub department: String,
	pub password: String,
	pub photograph: Option<Photograph>,
	/// Kept in lockstep with the course selection.
	pub course_ids: Vec<CourseId>,
}

impl FacultyRegistration {
	pub fn field(&self, field: Field) -> &str {
		match field {
			Field::FirstName => &self.first_name,
			Field::LastName => &self.last_name,
			Field::Email => &self.email,
			Field::Title => &self.title,
			Field::Department => &self.department,
			Field::Password => &self.password,
		}
	}

	pub fn set_field(&mut self, field: Field, value: String) {
		let slot = match field {
			Field::FirstName => &mut self.first_name,
			Field::LastName => &mut self.last_name,
			Field::Email => &mut self.email,
			Field::Title => &mut self.title,
			Field::Department => &mut self.department,
			Field::Password => &mut self.password,
		};
		*slot = value;
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		if let Some(missing) = Field::ALL.into_iter().find(|f| self.field(*f).is_empty()) {
			return Err(ValidationError::MissingField(missing));
		}
		if self.course_ids.is_empty() {
			return Err(ValidationError::NoCourses);
		}
		Ok(())
	}
}
