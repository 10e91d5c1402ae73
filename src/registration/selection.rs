use thiserror::Error;

use crate::backend::{CourseId, CourseOffering};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectError {
	#[error("Course {0} is not in the catalog")]
	UnknownCourse(CourseId),
	#[error("{} conflicts with {} on {} at {}", candidate.course.course_code, existing.course.course_code, existing.day, existing.time)]
	Conflict { candidate: CourseOffering, existing: CourseOffering },
}

impl SelectError {
	/// Text for the inline message under the course picker. `None` for errors the user isn't told about.
	pub fn user_message(&self) -> Option<String> {
		match self {
			Self::UnknownCourse(_) => None,
			Self::Conflict { candidate, existing } => Some(format!(
				"Time conflict: {} ({} {}) overlaps with already selected {}.",
				candidate.course.name, candidate.day, candidate.time, existing.course.name
			)),
		}
	}
}

/// Courses picked so far, in selection order. No two share a `(day, time)` slot, so no two share an id either.
#[derive(Clone, Debug, Default, PartialEq, Eq, derive_more::Deref)]
pub struct CourseSelection(Vec<CourseOffering>);

impl CourseSelection {
	pub fn conflicting(&self, candidate: &CourseOffering) -> Option<&CourseOffering> {
		self.0.iter().find(|selected| selected.conflicts_with(candidate))
	}

	pub fn try_add(&mut self, candidate: CourseOffering) -> Result<(), SelectError> {
		if let Some(existing) = self.conflicting(&candidate).or_else(|| self.0.iter().find(|s| s.course_id() == candidate.course_id())) {
			return Err(SelectError::Conflict {
				existing: existing.clone(),
				candidate,
			});
		}
		self.0.push(candidate);
		Ok(())
	}

	/// Returns whether anything was removed.
	pub fn remove(&mut self, course_id: CourseId) -> bool {
		let before = self.0.len();
		self.0.retain(|s| s.course_id() != course_id);
		self.0.len() != before
	}

	pub fn contains(&self, course_id: CourseId) -> bool {
		self.0.iter().any(|s| s.course_id() == course_id)
	}

	pub fn course_ids(&self) -> Vec<CourseId> {
		self.0.iter().map(CourseOffering::course_id).collect()
	}
}
