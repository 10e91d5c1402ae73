use faculty_portal::{
	backend::{Course, CourseId, CourseOffering},
	registration::{RegistrationState, SelectError},
};
use proptest::prelude::*;

const DAYS: [&str; 3] = ["Mon", "Tue", "Wed"];
const TIMES: [&str; 2] = ["09:00", "10:00"];

#[derive(Clone, Debug)]
enum Action {
	Select(CourseId),
	Remove(CourseId),
}

fn catalog_strategy() -> impl Strategy<Value = Vec<CourseOffering>> {
	// few slots, so conflicts are common
	prop::collection::vec((0..DAYS.len(), 0..TIMES.len()), 1..10).prop_map(|slots| {
		slots
			.into_iter()
			.enumerate()
			.map(|(i, (d, t))| {
				let id = i as CourseId + 1;
				CourseOffering::new(Course::new(id, format!("C{id}"), format!("Course {id}")), DAYS[d].into(), TIMES[t].into())
			})
			.collect()
	})
}

fn action_strategy() -> impl Strategy<Value = Action> {
	// ids past the catalog end exercise the unknown-course path
	prop_oneof![(0..14_i64).prop_map(Action::Select), (0..14_i64).prop_map(Action::Remove)]
}

proptest! {
	#[test]
	fn course_ids_track_selection(catalog in catalog_strategy(), actions in prop::collection::vec(action_strategy(), 0..40)) {
		let mut state = RegistrationState::with_catalog(catalog);
		for action in actions {
			match action {
				Action::Select(id) => { let _ = state.select_course(id); }
				Action::Remove(id) => state.remove_course(id),
			}
			prop_assert_eq!(&state.form().course_ids, &state.selection().course_ids());
		}
	}

	#[test]
	fn selection_never_holds_two_courses_in_one_slot(catalog in catalog_strategy(), actions in prop::collection::vec(action_strategy(), 0..40)) {
		let mut state = RegistrationState::with_catalog(catalog);
		for action in actions {
			match action {
				Action::Select(id) => { let _ = state.select_course(id); }
				Action::Remove(id) => state.remove_course(id),
			}
			let selected = state.selection();
			for (i, a) in selected.iter().enumerate() {
				for b in &selected[i + 1..] {
					prop_assert!(!a.conflicts_with(b));
					prop_assert_ne!(a.course_id(), b.course_id());
				}
			}
		}
	}

	#[test]
	fn same_slot_pair_admits_exactly_one(day in 0..DAYS.len(), time in 0..TIMES.len()) {
		let slot = |id: CourseId| CourseOffering::new(Course::new(id, format!("C{id}"), format!("Course {id}")), DAYS[day].into(), TIMES[time].into());
		let mut state = RegistrationState::with_catalog(vec![slot(1), slot(2)]);

		prop_assert!(state.select_course(1).is_ok());
		let is_conflict = matches!(state.select_course(2), Err(SelectError::Conflict { .. }));
		prop_assert!(is_conflict);
		prop_assert_eq!(state.selection().course_ids(), vec![1]);
		prop_assert!(state.conflict().is_some());
	}

	#[test]
	fn removing_absent_course_changes_nothing(catalog in catalog_strategy(), picks in prop::collection::vec(1..10_i64, 0..5), absent in 100..200_i64) {
		let mut state = RegistrationState::with_catalog(catalog);
		for id in picks {
			let _ = state.select_course(id);
		}
		let before = state.clone();
		state.remove_course(absent);
		prop_assert_eq!(state, before);
	}
}
