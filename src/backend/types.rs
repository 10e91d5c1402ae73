use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

pub type CourseId = i64;

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct Course {
	/// Form controls hand ids around as strings, so accept `"3"` as well as `3`.
	#[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
	pub course_id: CourseId,
	pub course_code: String,
	pub name: String,
}

/// A catalog entry: a course in a specific day/time slot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, derive_new::new)]
pub struct CourseOffering {
	pub course: Course,
	pub day: String,
	pub time: String,
}

impl CourseOffering {
	pub fn course_id(&self) -> CourseId {
		self.course.course_id
	}

	/// Offerings conflict iff both `day` and `time` match verbatim.
	pub fn conflicts_with(&self, other: &Self) -> bool {
		self.day == other.day && self.time == other.time
	}

	pub fn label(&self) -> String {
		format!("{} - {} ({} {})", self.course.course_code, self.course.name, self.day, self.time)
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProfileData {
	pub employee: EmployeeProfile,
	#[serde(default)]
	pub courses: Option<Vec<CourseTaught>>,
}

impl ProfileData {
	pub fn courses(&self) -> &[CourseTaught] {
		self.courses.as_deref().unwrap_or_default()
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeProfile {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub title: String,
	pub department: String,
	/// Base64-encoded JPEG
	pub photograph_path: Option<String>,
}

impl EmployeeProfile {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	pub fn photo_data_uri(&self) -> Option<String> {
		self.photograph_path.as_deref().filter(|p| !p.is_empty()).map(|p| format!("data:image/jpeg;base64,{p}"))
	}
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTaught {
	#[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
	pub course_id: CourseId,
	#[serde(default)]
	pub course_code: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub credits: Option<f64>,
	#[serde(default)]
	pub term: Option<String>,
	#[serde(default)]
	pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_entry_accepts_string_ids() {
		let json = r#"{"course":{"courseId":"7","courseCode":"CS101","name":"Intro"},"day":"Mon","time":"10:00"}"#;
		let offering: CourseOffering = serde_json::from_str(json).unwrap();
		assert_eq!(offering.course_id(), 7);
		assert_eq!(offering.label(), "CS101 - Intro (Mon 10:00)");
	}

	#[test]
	fn conflicts_compare_verbatim() {
		let a = CourseOffering::new(Course::new(1, "A".into(), "a".into()), "Mon".into(), "10:00".into());
		let b = CourseOffering::new(Course::new(2, "B".into(), "b".into()), "Mon".into(), "10:00".into());
		let c = CourseOffering::new(Course::new(3, "C".into(), "c".into()), "mon".into(), "10:00".into());
		assert!(a.conflicts_with(&b));
		assert!(!a.conflicts_with(&c));
	}

	#[test]
	fn profile_tolerates_missing_courses_and_photo() {
		let json = r#"{"employee":{"firstName":"Ada","lastName":"Lovelace","email":"ada@uni.edu","title":"Professor","department":"CS"},"courses":null}"#;
		let profile: ProfileData = serde_json::from_str(json).unwrap();
		assert_eq!(profile.employee.full_name(), "Ada Lovelace");
		assert!(profile.courses().is_empty());
		assert_eq!(profile.employee.photo_data_uri(), None);
	}

	#[test]
	fn photo_renders_as_jpeg_data_uri() {
		let employee = EmployeeProfile {
			photograph_path: Some("AAAA".into()),
			..Default::default()
		};
		assert_eq!(employee.photo_data_uri().as_deref(), Some("data:image/jpeg;base64,AAAA"));
	}
}
