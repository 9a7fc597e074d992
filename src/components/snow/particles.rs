//! Snowfall simulation: the flake pool and its per-frame motion.
//!
//! The pool is sized from the viewport area and mutated in place every
//! frame; flakes are only reallocated on explicit repopulation (resize,
//! orientation change, re-enabling the overlay).

use super::theme::SnowStyle;

/// A single falling snowflake.
#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Offset into the shared sway oscillation.
	pub phase: f64,
	/// Horizontal speed, scaled by the sway sine each frame.
	pub drift: f64,
	/// Vertical speed in pixels per frame.
	pub fall: f64,
	pub alpha: f64,
}

/// Viewport-sized flake pool plus the shared sway angle.
pub struct Snowfield {
	pub flakes: Vec<Snowflake>,
	width: f64,
	height: f64,
	angle: f64,
	rng: Xorshift32,
}

impl Snowfield {
	/// Creates a field populated for the given viewport.
	pub fn new(width: f64, height: f64, style: &SnowStyle, seed: u32) -> Self {
		let mut field = Self {
			flakes: Vec::new(),
			width,
			height,
			angle: 0.0,
			rng: Xorshift32::new(seed),
		};
		field.populate(style);
		field
	}

	/// Number of flakes for a viewport: one per `density` square pixels.
	pub fn population(width: f64, height: f64, density: f64) -> usize {
		(width * height / density).round() as usize
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Adopt new viewport bounds and regenerate the whole pool.
	pub fn resize(&mut self, width: f64, height: f64, style: &SnowStyle) {
		self.width = width;
		self.height = height;
		self.populate(style);
	}

	fn populate(&mut self, style: &SnowStyle) {
		let count = Self::population(self.width, self.height, style.density);
		self.flakes.clear();
		self.flakes.reserve(count);
		for _ in 0..count {
			let flake = Snowflake {
				x: self.rng.next() * self.width,
				y: self.rng.next() * self.height,
				radius: style.radius_min + self.rng.next() * (style.radius_max - style.radius_min),
				phase: self.rng.next() * style.phase_max,
				drift: (self.rng.next() * 2.0 - 1.0) * style.drift,
				fall: style.fall_min + self.rng.next() * (style.fall_max - style.fall_min),
				alpha: style.alpha_min + self.rng.next() * (style.alpha_max - style.alpha_min),
			};
			self.flakes.push(flake);
		}
	}

	/// Advance one frame: sway, fall, then apply the edge rules.
	///
	/// A flake past the bottom margin respawns at the top at a fresh
	/// random x; a flake past either side margin wraps to the opposite
	/// side.
	pub fn update(&mut self, style: &SnowStyle) {
		self.angle += style.sway;
		for i in 0..self.flakes.len() {
			let flake = &mut self.flakes[i];
			flake.x += (self.angle + flake.phase).sin() * flake.drift;
			flake.y += flake.fall;

			if flake.y > self.height + 5.0 {
				flake.y = -10.0;
				flake.x = self.rng.next() * self.width;
			}
			if flake.x > self.width + 20.0 {
				flake.x = -20.0;
			} else if flake.x < -20.0 {
				flake.x = self.width + 20.0;
			}
		}
	}
}

/// xorshift32 generator yielding uniform values in `[0, 1)`.
struct Xorshift32 {
	state: u32,
}

impl Xorshift32 {
	fn new(seed: u32) -> Self {
		// The all-zero state is a fixed point; force a bit on.
		Self { state: seed | 1 }
	}

	fn next(&mut self) -> f64 {
		self.state ^= self.state << 13;
		self.state ^= self.state >> 17;
		self.state ^= self.state << 5;
		(self.state >> 8) as f64 * (1.0 / 16_777_216.0)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const SEED: u32 = 0x5EED;

	#[test]
	fn population_scales_with_area() {
		assert_eq!(Snowfield::population(1920.0, 1080.0, 30_000.0), 69);
		assert_eq!(Snowfield::population(800.0, 600.0, 30_000.0), 16);
		assert_eq!(Snowfield::population(0.0, 0.0, 30_000.0), 0);
	}

	#[test]
	fn new_field_matches_population() {
		let style = SnowStyle::default();
		let field = Snowfield::new(1024.0, 768.0, &style, SEED);
		assert_eq!(
			field.flakes.len(),
			Snowfield::population(1024.0, 768.0, style.density)
		);
	}

	#[test]
	fn resize_regenerates_to_new_area() {
		let style = SnowStyle::default();
		let mut field = Snowfield::new(1024.0, 768.0, &style, SEED);
		field.resize(400.0, 300.0, &style);
		assert_eq!(
			field.flakes.len(),
			Snowfield::population(400.0, 300.0, style.density)
		);
		assert_eq!(field.width(), 400.0);
		assert_eq!(field.height(), 300.0);
	}

	#[test]
	fn spawned_flakes_stay_in_range() {
		let style = SnowStyle::default();
		let field = Snowfield::new(1280.0, 720.0, &style, SEED);
		for flake in &field.flakes {
			assert!(flake.x >= 0.0 && flake.x < 1280.0);
			assert!(flake.y >= 0.0 && flake.y < 720.0);
			assert!(flake.radius >= style.radius_min && flake.radius < style.radius_max);
			assert!(flake.phase >= 0.0 && flake.phase < style.phase_max);
			assert!(flake.drift >= -style.drift && flake.drift < style.drift);
			assert!(flake.fall >= style.fall_min && flake.fall < style.fall_max);
			assert!(flake.alpha >= style.alpha_min && flake.alpha < style.alpha_max);
		}
	}

	#[test]
	fn bottom_edge_respawns_at_top() {
		let style = SnowStyle::default();
		let mut field = Snowfield::new(640.0, 480.0, &style, SEED);
		field.flakes[0].y = 480.0 + 6.0;
		field.flakes[0].drift = 0.0;
		field.update(&style);
		assert_eq!(field.flakes[0].y, -10.0);
		assert!(field.flakes[0].x >= 0.0 && field.flakes[0].x < 640.0);
	}

	#[test]
	fn side_edges_wrap() {
		let style = SnowStyle::default();
		let mut field = Snowfield::new(640.0, 480.0, &style, SEED);

		field.flakes[0].x = 640.0 + 25.0;
		field.flakes[0].y = 10.0;
		field.flakes[0].drift = 0.0;
		field.update(&style);
		assert_eq!(field.flakes[0].x, -20.0);

		field.flakes[1].x = -25.0;
		field.flakes[1].y = 10.0;
		field.flakes[1].drift = 0.0;
		field.update(&style);
		assert_eq!(field.flakes[1].x, 640.0 + 20.0);
	}

	#[test]
	fn sway_advances_by_fixed_increment() {
		let style = SnowStyle::default();
		let mut field = Snowfield::new(640.0, 480.0, &style, SEED);
		field.flakes[0].x = 320.0;
		field.flakes[0].y = 0.0;
		let (phase, drift) = (field.flakes[0].phase, field.flakes[0].drift);

		field.update(&style);
		let after_one = 320.0 + (style.sway + phase).sin() * drift;
		assert_eq!(field.flakes[0].x, after_one);

		field.update(&style);
		let after_two = after_one + (2.0 * style.sway + phase).sin() * drift;
		assert_eq!(field.flakes[0].x, after_two);
	}

	#[test]
	fn same_seed_same_field() {
		let style = SnowStyle::default();
		let a = Snowfield::new(800.0, 600.0, &style, SEED);
		let b = Snowfield::new(800.0, 600.0, &style, SEED);
		assert_eq!(a.flakes, b.flakes);
	}
}
