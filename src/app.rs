use leptos::{ev, html::*, prelude::*};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_routable::prelude::*;
use leptos_router::components::{A, AProps, Router};

use crate::{
	auth::{Credentials, LoginOutcome, submit_login},
	conf::ClientSettings,
	profile::ProfileView,
	registration::SignupView,
	utils::{BUTTON_CLASS, INPUT_CLASS, error_banner, navigate_to},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<AutoReload options=options.clone() />
				<HydrationScripts options islands=true />
				<MetaTags />
			</head>
			<body>
				<App />
			</body>
		</html>
	}
}

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	(
		Stylesheet(StylesheetProps {
			id: Some("leptos".to_owned()),
			href: format!("/pkg/{}.css", env!("CARGO_PKG_NAME")),
		}),
		Title(TitleProps {
			formatter: None,
			text: Some("Faculty Portal".into()),
		}),
		view! {
			<Router>
				<main class="min-h-screen bg-gray-100">{move || AppRoutes::routes()}</main>
			</Router>
		},
	)
}

#[derive(Routable)]
#[routes(view_prefix = "", view_suffix = "View", transition = false)]
pub enum AppRoutes {
	#[route(path = "/")]
	Login,
	#[route(path = "/signup")]
	Signup,
	#[route(path = "/profile")]
	Profile,
	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

#[component]
fn LoginView() -> impl IntoView {
	section().class("flex items-center justify-center min-h-screen p-4").child((
		Title(TitleProps {
			formatter: None,
			text: Some("Login".into()),
		}),
		LoginForm(LoginFormProps {
			settings: ClientSettings::from_context(),
		}),
	))
}

#[island]
fn LoginForm(settings: ClientSettings) -> impl IntoView {
	let email = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let error = RwSignal::new(Option::<String>::None);
	let is_loading = RwSignal::new(false);

	let on_submit = move |e: web_sys::SubmitEvent| {
		e.prevent_default();
		error.set(None);
		is_loading.set(true);

		let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
		let settings = settings.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let outcome = match settings.backend() {
				Ok(client) => submit_login(&client, &settings.session(), &credentials).await,
				Err(e) => {
					leptos::logging::error!("Backend misconfigured: {e}");
					LoginOutcome::Rejected(crate::auth::INVALID_CREDENTIALS)
				}
			};
			match outcome {
				LoginOutcome::Authenticated => navigate_to(&AppRoutes::Profile.to_string()),
				LoginOutcome::Rejected(msg) => {
					leptos::logging::warn!("Login rejected");
					error.set(Some(msg.to_owned()));
					is_loading.set(false);
				}
			}
		});
	};

	div().class("relative w-full max-w-md").child((
		div().class("absolute inset-0 bg-gradient-to-br from-pink-300 via-purple-300 to-yellow-300 rounded-3xl w-full z-0 shadow-lg"),
		div().class("relative bg-white rounded-3xl shadow-xl p-8 z-10").child((
			h2().class("text-3xl font-bold text-center text-gray-800 mb-6").child("Welcome Back"),
			move || error.get().map(error_banner),
			form().class("space-y-6").on(ev::submit, on_submit).child((
				div().child((
					label().class("block text-gray-600 font-medium mb-2").attr("for", "email").child("Email"),
					input()
						.attr("type", "email")
						.attr("id", "email")
						.attr("required", "")
						.attr("placeholder", "Enter your email")
						.class(INPUT_CLASS)
						.prop("value", move || email.get())
						.on(ev::input, move |e| email.set(event_target_value(&e))),
				)),
				div().child((
					label().class("block text-gray-600 font-medium mb-2").attr("for", "password").child("Password"),
					input()
						.attr("type", "password")
						.attr("id", "password")
						.attr("required", "")
						.attr("placeholder", "Enter your password")
						.class(INPUT_CLASS)
						.prop("value", move || password.get())
						.on(ev::input, move |e| password.set(event_target_value(&e))),
				)),
				button()
					.attr("type", "submit")
					.attr("disabled", move || is_loading.get())
					.class(BUTTON_CLASS)
					.child(move || if is_loading.get() { "Signing in..." } else { "Sign In" }),
			)),
			p().class("mt-6 text-center text-gray-600").child((
				"Don't have an account? ",
				a().attr("href", AppRoutes::Signup.to_string()).class("text-purple-500 font-medium").child("Sign up"),
			)),
		)),
	))
}

#[component]
pub fn NotFoundView() -> impl IntoView {
	div().class("p-4 text-center").child((
		h1().class("text-2xl font-bold").child("404: Not Found"),
		p().child("Sorry, we can't find that page"),
		A(AProps {
			href: AppRoutes::Login.to_string(),
			children: Box::new(|| view! { "Go to Login" }.into_any()),
			target: None,
			exact: false,
			strict_trailing_slash: false,
			scroll: true,
		})
		.attr("class", "inline-block px-4 py-2 bg-purple-500 text-white rounded mt-4"),
	))
}
