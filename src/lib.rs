//! advent-snow: Christmas countdown with an animated snowfall overlay.
//!
//! This crate provides a WASM page that renders a live countdown to the
//! next Dec 25 behind a full-viewport snow effect, with controls for
//! toggling the snow and copying the page link.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::countdown::Countdown;
pub use components::share::CopyLinkButton;
pub use components::snow::{OverlayConfig, SnowCanvas, SnowStyle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("advent-snow: logging initialized");
}

/// Load overlay tuning from a script element with id="snow-config".
/// Expected format: JSON with optional { density, film_alpha }.
fn load_overlay_config() -> Option<OverlayConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("snow-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<OverlayConfig>(&json_text) {
		Ok(config) => {
			info!("advent-snow: loaded overlay config: {config:?}");
			Some(config)
		}
		Err(e) => {
			warn!("advent-snow: failed to parse overlay config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the countdown, the snowfall canvas, and the page controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Overlay tuning comes from the DOM when present
	let config = load_overlay_config().unwrap_or_default();
	let snow_on = RwSignal::new(true);

	view! {
		<Html attr:lang="sk" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Odpočet do Vianoc" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SnowCanvas enabled=snow_on config=config />
		<main class="page">
			<h1>"Odpočet do Vianoc"</h1>
			<Countdown />
			<div class="controls">
				<button
					id="toggle-snow"
					class="toggle-snow"
					on:click=move |_| snow_on.update(|on| *on = !*on)
				>
					{move || if snow_on.get() { "Stop Snow ❄️" } else { "Start Snow ❄️" }}
				</button>
				<CopyLinkButton />
			</div>
		</main>
	}
}
