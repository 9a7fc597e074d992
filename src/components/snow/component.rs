//! Leptos component wrapping the snowfall canvas.
//!
//! The component creates a full-viewport canvas and drives the simulation
//! from a `requestAnimationFrame` loop. The pending frame handle doubles
//! as the on/off state: stopping the overlay cancels the handle and clears
//! the surface, restarting requests a fresh frame. Window `resize` and
//! `orientationchange` refit the canvas and regenerate the flake pool.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::Snowfield;
use super::render;
use super::theme::SnowStyle;
use super::types::OverlayConfig;

/// Bundles the drawing context with the simulation it renders.
struct SnowContext {
	ctx: CanvasRenderingContext2d,
	field: Snowfield,
	style: SnowStyle,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}

/// Renders the animated snowfall overlay on a full-viewport canvas.
///
/// While `enabled` is true the field is advanced and redrawn once per
/// animation frame. Turning it off cancels the scheduled frame and clears
/// the canvas; turning it back on refits the canvas to the viewport,
/// regenerates the pool, and resumes the loop.
#[component]
pub fn SnowCanvas(
	#[prop(into)] enabled: Signal<bool>,
	#[prop(optional)] config: OverlayConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SnowContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let running = enabled.get();

		let first_mount = context.borrow().is_none();
		if first_mount {
			let ctx: CanvasRenderingContext2d = canvas
				.get_context("2d")
				.unwrap()
				.unwrap()
				.dyn_into()
				.unwrap();

			let (w, h) = viewport_size(&window);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			let mut style = SnowStyle::default();
			style.apply_config(&config);
			let seed = js_sys::Date::now() as u32;
			let field = Snowfield::new(w, h, &style, seed);
			info!("snow overlay: {} flakes for {w:.0}x{h:.0}", field.flakes.len());
			*context.borrow_mut() = Some(SnowContext { ctx, field, style });

			let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = viewport_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.field.resize(nw, nh, &c.style);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				let _ = window.add_event_listener_with_callback(
					"orientationchange",
					cb.as_ref().unchecked_ref(),
				);
			}

			let (context_anim, animate_inner, frame_anim) =
				(context.clone(), animate.clone(), frame.clone());
			*animate.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.field.update(&c.style);
					render::draw(&c.ctx, &c.field, &c.style);
				}
				// Reschedule only while a frame handle is held; a cleared
				// handle means the overlay was stopped.
				if frame_anim.get().is_some() {
					if let Some(ref cb) = *animate_inner.borrow() {
						let id = web_sys::window()
							.unwrap()
							.request_animation_frame(cb.as_ref().unchecked_ref())
							.ok();
						frame_anim.set(id);
					}
				}
			}));
		}

		if running {
			if !first_mount {
				// Refit to the viewport and rebuild the pool before resuming.
				let (w, h) = viewport_size(&window);
				canvas.set_width(w as u32);
				canvas.set_height(h as u32);
				if let Some(ref mut c) = *context.borrow_mut() {
					c.field.resize(w, h, &c.style);
				}
			}
			if frame.get().is_none() {
				if let Some(ref cb) = *animate.borrow() {
					let id = window
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok();
					frame.set(id);
				}
			}
		} else {
			if let Some(id) = frame.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref c) = *context.borrow() {
				render::clear(&c.ctx, c.field.width(), c.field.height());
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="snow-canvas"
			class="snow-canvas"
			style="display: block;"
		/>
	}
}
