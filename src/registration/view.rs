use leptos::{ev, html::*, prelude::*};
use leptos_meta::{Title, TitleProps};

use super::{CatalogStatus, Field, Photograph, REGISTRATION_FAILED, RegistrationState, SubmitOutcome, load_catalog, submit_registration};
use crate::{
	app::AppRoutes,
	backend::CourseId,
	conf::ClientSettings,
	utils::{BUTTON_CLASS, INPUT_CLASS, error_banner, navigate_to},
};

#[component]
pub fn SignupView() -> impl IntoView {
	section().class("flex items-center justify-center min-h-screen p-4").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Faculty Registration".into()),
		}),
		SignupForm(SignupFormProps {
			settings: ClientSettings::from_context(),
		}),
	))
}

#[island]
fn SignupForm(settings: ClientSettings) -> impl IntoView {
	let state = RwSignal::new(RegistrationState::default());
	let error = RwSignal::new(Option::<String>::None);
	let is_loading = RwSignal::new(false);

	let catalog_settings = settings.clone();
	let catalog = LocalResource::new(move || {
		let settings = catalog_settings.clone();
		async move {
			let catalog = match settings.backend() {
				Ok(client) => load_catalog(&client).await,
				Err(e) => {
					leptos::logging::error!("Backend misconfigured: {e}");
					None
				}
			};
			if catalog.is_none() {
				leptos::logging::error!("Couldn't load course catalog");
			}
			catalog
		}
	});
	Effect::new(move |_| {
		if let Some(catalog) = catalog.get() {
			state.update(|s| s.set_catalog(catalog.take()));
		}
	});

	let on_submit = move |e: web_sys::SubmitEvent| {
		e.prevent_default();
		error.set(None);
		is_loading.set(true);

		let snapshot = state.get_untracked();
		let settings = settings.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let outcome = match settings.backend() {
				Ok(client) => submit_registration(&client, &snapshot).await,
				Err(e) => {
					leptos::logging::error!("Backend misconfigured: {e}");
					SubmitOutcome::Failed(REGISTRATION_FAILED)
				}
			};
			match outcome {
				SubmitOutcome::Registered => navigate_to(&AppRoutes::Login.to_string()),
				other => {
					if let SubmitOutcome::Failed(msg) = &other {
						leptos::logging::error!("Registration failed: {msg}");
					}
					error.set(other.user_message().map(str::to_owned));
					is_loading.set(false);
				}
			}
		});
	};

	div().class("w-full max-w-lg bg-white rounded-3xl shadow-xl p-8").child((
		h2().class("text-3xl font-bold text-center text-gray-800 mb-6").child("Faculty Registration"),
		move || error.get().map(error_banner),
		form().class("space-y-4").on(ev::submit, on_submit).child((
			Field::ALL.into_iter().map(|field| field_input(field, state)).collect::<Vec<_>>(),
			photo_input(state),
			course_picker(state),
			button()
				.attr("type", "submit")
				.attr("disabled", move || is_loading.get())
				.class(BUTTON_CLASS)
				.child(move || if is_loading.get() { "Registering..." } else { "Register" }),
		)),
		p().class("mt-6 text-center text-gray-600").child((
			"Already have an account? ",
			a().attr("href", AppRoutes::Login.to_string()).class("text-purple-500 font-medium").child("Login"),
		)),
	))
}

fn field_input(field: Field, state: RwSignal<RegistrationState>) -> impl IntoView {
	let id = field.to_string();
	div().child((
		label().class("block text-gray-600 font-medium mb-2").attr("for", id.clone()).child(field.label()),
		input()
			.attr("type", field.input_type())
			.attr("id", id)
			.attr("required", "")
			.class(INPUT_CLASS)
			.prop("value", move || state.with(|s| s.form().field(field).to_owned()))
			.on(ev::input, move |e| {
				let value = event_target_value(&e);
				state.update(|s| s.set_field(field, value));
			}),
	))
}

fn photo_input(state: RwSignal<RegistrationState>) -> impl IntoView {
	let on_change = move |e: web_sys::Event| {
		let input = event_target::<web_sys::HtmlInputElement>(&e);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			state.update(|s| s.set_photograph(None));
			return;
		};
		wasm_bindgen_futures::spawn_local(async move {
			match read_photograph(file).await {
				Ok(photo) => state.update(|s| s.set_photograph(Some(photo))),
				Err(e) => leptos::logging::error!("Couldn't read photograph: {e}"),
			}
		});
	};

	div().child((
		label().class("block text-gray-600 font-medium mb-2").attr("for", "photograph").child("Photograph"),
		input()
			.attr("type", "file")
			.attr("id", "photograph")
			.attr("accept", "image/*")
			.class("w-full text-gray-600")
			.on(ev::change, on_change),
	))
}

async fn read_photograph(file: web_sys::File) -> Result<Photograph, String> {
	let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.map_err(|e| format!("{e:?}"))?;
	let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
	Ok(Photograph::new(file.name(), file.type_(), bytes))
}

fn course_picker(state: RwSignal<RegistrationState>) -> impl IntoView {
	let placeholder = move || {
		state.with(|s| match s.catalog_status() {
			CatalogStatus::Loading => "Loading courses...",
			CatalogStatus::Unavailable => "No courses available",
			CatalogStatus::Loaded if s.catalog().is_empty() => "No courses available",
			CatalogStatus::Loaded => "Select a course",
		})
	};

	let on_pick = move |e: web_sys::Event| {
		// anything that doesn't parse is ignored, same as an id missing from the catalog
		if let Ok(course_id) = event_target_value(&e).parse::<CourseId>() {
			state.update(|s| {
				let _ = s.select_course(course_id);
			});
		}
		event_target::<web_sys::HtmlSelectElement>(&e).set_value("");
	};

	div().child((
		label().class("block text-gray-600 font-medium mb-2").attr("for", "courses").child("Courses"),
		select()
			.attr("id", "courses")
			.class("w-full px-4 py-2 border border-gray-300 rounded-full bg-white")
			.on(ev::change, on_pick)
			.child((
				option().attr("value", "").child(placeholder),
				move || {
					state.with(|s| {
						s.available()
							.map(|o| option().attr("value", o.course_id().to_string()).child(o.label()))
							.collect::<Vec<_>>()
					})
				},
			)),
		move || state.with(|s| s.conflict().map(|msg| p().class("text-red-500 text-sm mt-2").child(msg.to_owned()))),
		ul().class("mt-3 space-y-2").child(move || {
			state.with(|s| {
				s.selection()
					.iter()
					.map(|o| {
						let course_id = o.course_id();
						li().class("flex items-center justify-between p-2 bg-gray-50 rounded").child((
							span().child(o.label()),
							button()
								.attr("type", "button")
								.class("text-red-500 hover:underline")
								.on(ev::click, move |_| state.update(|s| s.remove_course(course_id)))
								.child("Remove"),
						))
					})
					.collect::<Vec<_>>()
			})
		}),
	))
}
