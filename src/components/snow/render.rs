//! Canvas drawing for the snow overlay.
//!
//! One pass per frame: wipe the surface, lay the faint film that leaves a
//! trailing shimmer, then draw every flake as a filled circle at its own
//! opacity.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Snowfield;
use super::theme::SnowStyle;

/// Draws one frame of the snowfall.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &Snowfield, style: &SnowStyle) {
	let (width, height) = (field.width(), field.height());

	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_fill_style_str(&style.color.with_alpha(style.film_alpha).to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	for flake in &field.flakes {
		ctx.set_fill_style_str(&style.color.with_alpha(flake.alpha).to_css());
		ctx.begin_path();
		let _ = ctx.arc(flake.x, flake.y, flake.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

/// Wipes the surface; used when the overlay is switched off.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
}
