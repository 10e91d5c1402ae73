use leptos::{ev, html::*, prelude::{Track, *}};
use leptos_meta::{Title, TitleProps};

use super::{PROFILE_UNAVAILABLE, ProfileLoad, load_profile};
use crate::{
	app::AppRoutes,
	auth::logout,
	backend::{CourseTaught, EmployeeProfile, ProfileData},
	conf::ClientSettings,
	utils::{error_banner, navigate_to},
};

#[component]
pub fn ProfileView() -> impl IntoView {
	section().class("flex items-center justify-center min-h-screen p-4").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Profile".into()),
		}),
		ProfileContent(ProfileContentProps {
			settings: ClientSettings::from_context(),
		}),
	))
}

#[island]
fn ProfileContent(settings: ClientSettings) -> impl IntoView {
	let attempt = RwSignal::new(0_u32);
	let fetch_settings = settings.clone();
	let profile = LocalResource::new(move || {
		attempt.track();
		let settings = fetch_settings.clone();
		async move {
			let outcome = match settings.backend() {
				Ok(client) => load_profile(&client, &settings.session()).await,
				Err(e) => {
					leptos::logging::error!("Backend misconfigured: {e}");
					ProfileLoad::Failed(PROFILE_UNAVAILABLE)
				}
			};
			if let ProfileLoad::Failed(msg) = &outcome {
				leptos::logging::error!("Error fetching profile data: {msg}");
			}
			outcome
		}
	});

	let on_logout = move |_: web_sys::MouseEvent| {
		logout(&settings.session());
		navigate_to(&AppRoutes::Login.to_string());
	};

	move || match profile.get().map(|w| w.take()) {
		None => p().class("text-center text-lg mt-8").child("Loading...").into_any(),
		Some(ProfileLoad::RedirectToLogin) => {
			Effect::new(move |_| navigate_to(&AppRoutes::Login.to_string()));
			p().class("text-center text-lg mt-8").child("Loading...").into_any()
		}
		Some(ProfileLoad::Failed(msg)) => div()
			.class("text-center")
			.child((
				error_banner(msg),
				button()
					.attr("type", "button")
					.class("px-4 py-2 bg-purple-500 text-white rounded hover:bg-purple-600")
					.on(ev::click, move |_| attempt.update(|n| *n += 1))
					.child("Retry"),
			))
			.into_any(),
		Some(ProfileLoad::Loaded(profile)) => profile_card(profile, on_logout.clone()).into_any(),
	}
}

fn profile_card(profile: ProfileData, on_logout: impl FnMut(web_sys::MouseEvent) + 'static) -> impl IntoView {
	let courses = profile.courses().to_vec();
	div().class("w-full max-w-5xl bg-white rounded-lg shadow-lg p-6").child((
		div().class("flex items-center space-x-6").child((
			avatar(&profile.employee),
			div().class("flex-1").child((
				h2().class("text-2xl font-bold text-gray-800").child(profile.employee.full_name()),
				p().class("text-lg text-gray-600").child(profile.employee.title.clone()),
				p().class("text-gray-500").child(profile.employee.email.clone()),
				p().class("text-gray-500").child(profile.employee.department.clone()),
			)),
			button()
				.attr("type", "button")
				.class("px-4 py-2 bg-red-500 text-white rounded hover:bg-red-600 transition-colors")
				.on(ev::click, on_logout)
				.child("Logout"),
		)),
		div().class("mt-8").child((
			h3().class("text-xl font-semibold text-gray-700").child("Courses Taught"),
			match courses.is_empty() {
				true => p().class("text-gray-500 mt-4").child("No courses assigned.").into_any(),
				false => div()
					.class("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mt-4")
					.child(courses.into_iter().map(course_card).collect::<Vec<_>>())
					.into_any(),
			},
		)),
	))
}

fn avatar(employee: &EmployeeProfile) -> impl IntoView {
	let inner = match employee.photo_data_uri() {
		Some(src) => img().attr("src", src).attr("alt", "Profile").class("w-full h-full object-cover").into_any(),
		None => div()
			.class("w-full h-full bg-gray-300 flex items-center justify-center text-gray-500 text-lg")
			.child("No Image")
			.into_any(),
	};
	div().class("w-36 h-36 rounded-full overflow-hidden").child(inner)
}

fn course_card(course: CourseTaught) -> impl IntoView {
	fn row(name: &'static str, value: Option<String>) -> impl IntoView {
		value.map(|v| p().class("text-gray-600").child((span().class("font-bold").child(name), " ", v)))
	}

	div().class("bg-gray-50 border border-gray-200 rounded-lg p-4 shadow-sm").child((
		h4().class("text-lg font-semibold text-gray-800").child(course.name),
		row("Code:", Some(course.course_code)),
		row("Credits:", course.credits.map(|c| c.to_string())),
		row("Term:", course.term),
		row("Year:", course.year.map(|y| y.to_string())),
	))
}
