//! Overlay configuration embedded in the host page.

use serde::Deserialize;

/// Optional tuning knobs read from a
/// `<script id="snow-config" type="application/json">` element.
///
/// Every key may be omitted; absent keys keep their built-in defaults and
/// unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct OverlayConfig {
	/// Viewport area in square pixels per snowflake (smaller = denser).
	pub density: Option<f64>,
	/// Strength of the translucent film laid over each frame, 0.0 to 1.0.
	pub film_alpha: Option<f64>,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parses_partial_config() {
		let config: OverlayConfig = serde_json::from_str(r#"{"density": 20000}"#).unwrap();
		assert_eq!(config.density, Some(20_000.0));
		assert_eq!(config.film_alpha, None);
	}

	#[test]
	fn ignores_unknown_keys() {
		let config: OverlayConfig =
			serde_json::from_str(r#"{"film_alpha": 0.05, "theme": "aurora"}"#).unwrap();
		assert_eq!(config.film_alpha, Some(0.05));
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(serde_json::from_str::<OverlayConfig>("{nope").is_err());
	}
}
