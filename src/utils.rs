use leptos::{html::*, prelude::*};

/// Full page navigation. Islands aren't under the router, so this goes through `window.location`.
pub fn navigate_to(path: &str) {
	if let Some(window) = web_sys::window() {
		if let Err(e) = window.location().set_href(path) {
			leptos::logging::error!("Failed to navigate to {path}: {e:?}");
		}
	}
}

pub fn error_banner(msg: impl Into<String>) -> impl IntoView {
	p().class("bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4 text-center").child(msg.into())
}

pub const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-full focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent";
pub const BUTTON_CLASS: &str =
	"w-full py-2 px-4 bg-purple-500 text-white font-semibold rounded-full shadow-md hover:bg-purple-600 transition-all duration-300 disabled:opacity-50";
