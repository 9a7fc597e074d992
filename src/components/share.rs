//! Copy-the-page-link button with a transient status label.
//!
//! The clipboard write is the only fallible operation on the page; a
//! rejection (permission policy, insecure context) is mapped to a short
//! error label and logged, nothing propagates further.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

const IDLE_LABEL: &str = "Kopírovať odkaz";
const COPIED_LABEL: &str = "Skopírované ✓";
const FAILED_LABEL: &str = "Chyba";

/// How long a transient status label stays up before reverting.
const REVERT_MS: i32 = 2000;

fn revert_after(label: RwSignal<&'static str>, delay_ms: i32) {
	let cb = Closure::once(move || label.set(IDLE_LABEL));
	let _ = web_sys::window()
		.unwrap()
		.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			delay_ms,
		);
	cb.forget();
}

/// Button that copies the current page address to the system clipboard and
/// flashes a confirmation (or error) label for two seconds.
#[component]
pub fn CopyLinkButton() -> impl IntoView {
	let label = RwSignal::new(IDLE_LABEL);

	let on_click = move |_| {
		let window = web_sys::window().unwrap();
		let href = match window.location().href() {
			Ok(href) => href,
			Err(err) => {
				warn!("copy link: page address unavailable: {err:?}");
				label.set(FAILED_LABEL);
				revert_after(label, REVERT_MS);
				return;
			}
		};
		let clipboard = window.navigator().clipboard();
		spawn_local(async move {
			match JsFuture::from(clipboard.write_text(&href)).await {
				Ok(_) => label.set(COPIED_LABEL),
				Err(err) => {
					warn!("copy link: clipboard write rejected: {err:?}");
					label.set(FAILED_LABEL);
				}
			}
			revert_after(label, REVERT_MS);
		});
	};

	view! {
		<button id="copy-link" class="copy-link" on:click=on_click>
			{move || label.get()}
		</button>
	}
}
