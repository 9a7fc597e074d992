//! Visual styling for the snow overlay.

use super::types::OverlayConfig;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Snowfall look and density.
///
/// Ranges are half-open: a spawned value lies in `[min, max)`.
#[derive(Clone, Debug)]
pub struct SnowStyle {
	/// Flake (and film) color.
	pub color: Color,
	/// Minimum flake radius in pixels.
	pub radius_min: f64,
	/// Maximum flake radius in pixels.
	pub radius_max: f64,
	/// Upper bound of the per-flake sway phase offset.
	pub phase_max: f64,
	/// Horizontal drift bound; per-flake drift lies in `[-drift, drift)`.
	pub drift: f64,
	/// Minimum fall speed in pixels per frame.
	pub fall_min: f64,
	/// Maximum fall speed in pixels per frame.
	pub fall_max: f64,
	/// Minimum flake opacity.
	pub alpha_min: f64,
	/// Maximum flake opacity.
	pub alpha_max: f64,
	/// Viewport area in square pixels per flake.
	pub density: f64,
	/// Alpha of the translucent film laid over each frame.
	pub film_alpha: f64,
	/// Sway angle advance per frame.
	pub sway: f64,
}

impl SnowStyle {
	/// Merge page-provided overrides into the style. Out-of-range values
	/// are dropped rather than clamped into effect.
	pub fn apply_config(&mut self, config: &OverlayConfig) {
		if let Some(density) = config.density {
			if density > 0.0 {
				self.density = density;
			}
		}
		if let Some(film_alpha) = config.film_alpha {
			if (0.0..=1.0).contains(&film_alpha) {
				self.film_alpha = film_alpha;
			}
		}
	}
}

impl Default for SnowStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(255, 255, 255),
			radius_min: 1.0,
			radius_max: 4.0,
			phase_max: 50.0,
			drift: 0.3,
			fall_min: 0.3,
			fall_max: 1.3,
			alpha_min: 0.4,
			alpha_max: 1.0,
			density: 30_000.0,
			film_alpha: 0.02,
			sway: 0.002,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgb(255, 255, 255).with_alpha(0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
		assert_eq!(Color::rgba(10, 20, 30, 0.25).to_css(), "rgba(10, 20, 30, 0.25)");
	}

	#[test]
	fn config_overrides_density_and_film() {
		let mut style = SnowStyle::default();
		style.apply_config(&OverlayConfig {
			density: Some(15_000.0),
			film_alpha: Some(0.1),
		});
		assert_eq!(style.density, 15_000.0);
		assert_eq!(style.film_alpha, 0.1);
	}

	#[test]
	fn out_of_range_config_values_are_ignored() {
		let mut style = SnowStyle::default();
		style.apply_config(&OverlayConfig {
			density: Some(0.0),
			film_alpha: Some(1.5),
		});
		assert_eq!(style.density, 30_000.0);
		assert_eq!(style.film_alpha, 0.02);
	}
}
