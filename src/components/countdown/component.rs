//! Leptos component rendering the live countdown fields.
//!
//! The target instant is computed once when the component mounts. A
//! `setInterval` closure then refreshes the remaining-time signal every
//! second; the interval runs for the page's lifetime and is never
//! cancelled.

use js_sys::Date;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::time::{self, TimeParts};

/// Countdown to the next Dec 25, rendered as four zero-padded fields.
#[component]
pub fn Countdown() -> impl IntoView {
	let parts = RwSignal::new(TimeParts::ZERO);

	Effect::new(move |_| {
		let window = web_sys::window().unwrap();
		let target_ms = time::next_target(&Date::new_0()).get_time();

		// First render happens immediately, not after the first tick.
		parts.set(time::decompose(target_ms - Date::now()));

		let tick = Closure::<dyn FnMut()>::new(move || {
			parts.set(time::decompose(target_ms - Date::now()));
		});
		let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			1000,
		);
		// Page-lifetime ticker; the closure stays registered forever.
		tick.forget();
	});

	view! {
		<div class="countdown">
			<div class="countdown-unit">
				<span class="countdown-value" id="days">{move || time::pad(parts.get().days)}</span>
				<span class="countdown-label">"Dní"</span>
			</div>
			<div class="countdown-unit">
				<span class="countdown-value" id="hours">{move || time::pad(parts.get().hours)}</span>
				<span class="countdown-label">"Hodín"</span>
			</div>
			<div class="countdown-unit">
				<span class="countdown-value" id="minutes">{move || time::pad(parts.get().minutes)}</span>
				<span class="countdown-label">"Minút"</span>
			</div>
			<div class="countdown-unit">
				<span class="countdown-value" id="seconds">{move || time::pad(parts.get().seconds)}</span>
				<span class="countdown-label">"Sekúnd"</span>
			</div>
		</div>
	}
}
