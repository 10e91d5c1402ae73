#![recursion_limit = "256"]
#[cfg(feature = "ssr")]
use clap::Parser;
#[cfg(feature = "ssr")]
use faculty_portal::conf::*;

#[cfg(feature = "ssr")]
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[clap(flatten)]
	settings: SettingsFlags,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	use axum::Router;
	use color_eyre::eyre::WrapErr as _;
	use faculty_portal::app::*;
	use leptos::prelude::*;
	use leptos_axum::{LeptosRoutes, generate_route_list};
	use tracing::{debug, info};

	v_utils::clientside!();
	let cli = Cli::parse();
	let settings = Settings::try_build(cli.settings)?;
	info!(backend_url = %settings.backend_url, "Using registration backend");

	let conf = get_configuration(None).wrap_err("Failed to read leptos configuration")?;
	let addr = conf.leptos_options.site_addr;
	let leptos_options = conf.leptos_options;

	let routes = generate_route_list(App);
	debug!(?routes);

	let app = Router::new()
		.leptos_routes_with_context(&leptos_options, routes, move || provide_context(settings.clone()), {
			let leptos_options = leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(leptos_axum::file_and_error_handler(shell))
		.with_state(leptos_options);

	let listener = tokio::net::TcpListener::bind(&addr).await.wrap_err_with(|| format!("Failed to bind {addr}"))?;
	info!("listening on http://{}", &addr);
	axum::serve(listener, app.into_make_service()).await?;
	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// hydration is bootstrapped in [./lib.rs]
	panic!("not the correct access point");
}
