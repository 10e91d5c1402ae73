#![recursion_limit = "256"]
pub mod app;
pub mod auth;
pub mod backend;
pub mod conf;
pub mod profile;
pub mod registration;
pub(crate) mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	console_error_panic_hook::set_once();
	leptos::mount::hydrate_islands();
}
