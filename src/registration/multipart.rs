//! Multipart encoding of a faculty registration.
//!
//! Schema version 1, parsed positionally by the backend:
//! - `schemaVersion`: text part, always first
//! - `firstName`, `lastName`, `email`, `title`, `department`, `password`: text parts
//! - `photograph`: file part, only when a photo was picked
//! - `courses[i].courseId`, `courses[i].courseCode`, `courses[i].name`, `courses[i].day`, `courses[i].time`:
//!   one group per selected course, `i` being its position in the selection
//!
//! Changing any of the names means bumping [SCHEMA_VERSION] together with the backend.
//! The version travels in the body rather than a header, so the cross-origin POST stays a simple request.
use reqwest::multipart::{Form, Part};

use super::{Field, FacultyRegistration, Photograph};
use crate::backend::{ApiError, CourseOffering};

pub const SCHEMA_VERSION: u16 = 1;
pub const SCHEMA_VERSION_PART: &str = "schemaVersion";

pub const PHOTOGRAPH_PART: &str = "photograph";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
	Text(String),
	File(Photograph),
}

#[derive(Clone, Debug, PartialEq, Eq, derive_new::new)]
pub struct FormPart {
	pub name: String,
	pub value: PartValue,
}

impl FormPart {
	fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new(name.into(), PartValue::Text(value.into()))
	}

	pub fn as_text(&self) -> Option<&str> {
		match &self.value {
			PartValue::Text(s) => Some(s),
			PartValue::File(_) => None,
		}
	}
}

pub fn encode(form: &FacultyRegistration, courses: &[CourseOffering]) -> Vec<FormPart> {
	let mut parts = vec![FormPart::text(SCHEMA_VERSION_PART, SCHEMA_VERSION.to_string())];
	parts.extend(Field::ALL.into_iter().map(|f| FormPart::text(f.to_string(), form.field(f))));

	if let Some(photo) = &form.photograph {
		parts.push(FormPart::new(PHOTOGRAPH_PART.to_owned(), PartValue::File(photo.clone())));
	}

	for (i, offering) in courses.iter().enumerate() {
		parts.extend([
			FormPart::text(format!("courses[{i}].courseId"), offering.course.course_id.to_string()),
			FormPart::text(format!("courses[{i}].courseCode"), offering.course.course_code.as_str()),
			FormPart::text(format!("courses[{i}].name"), offering.course.name.as_str()),
			FormPart::text(format!("courses[{i}].day"), offering.day.as_str()),
			FormPart::text(format!("courses[{i}].time"), offering.time.as_str()),
		]);
	}
	parts
}

pub fn into_form(parts: Vec<FormPart>) -> Result<Form, ApiError> {
	parts.into_iter().try_fold(Form::new(), |form, part| {
		Ok(match part.value {
			PartValue::Text(value) => form.text(part.name, value),
			PartValue::File(photo) => {
				let file = Part::bytes(photo.bytes).file_name(photo.file_name);
				let file = match photo.content_type.is_empty() {
					true => file,
					false => file.mime_str(&photo.content_type)?,
				};
				form.part(part.name, file)
			}
		})
	})
}
