//! Page configuration, deserialized from an optional JSON script element.
//!
//! Every field has a default, so the page can supply a partial document (or
//! none at all). Values are sanitized before use; see
//! [`StarfieldConfig::sanitized`].

use serde::Deserialize;

/// Tunables for the starfield simulation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
	/// DOM id of the background canvas.
	pub canvas_id: String,
	/// Number of stars, fixed for the page's lifetime.
	pub star_count: usize,
	/// Pairs closer than this (logical units) are linked.
	pub link_distance: f64,
	/// Largest absolute speed per axis, in logical units per frame.
	pub max_speed: f64,
	/// Star radius range `(min, max)`.
	pub size_range: (f64, f64),
	/// Star opacity range `(min, max)`.
	pub opacity_range: (f64, f64),
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			canvas_id: "stars-canvas".into(),
			star_count: 350,
			link_distance: 150.0,
			max_speed: 0.4,
			size_range: (0.5, 3.0),
			opacity_range: (0.4, 1.0),
		}
	}
}

impl StarfieldConfig {
	/// Returns a copy with ranges ordered and values forced into usable bounds.
	///
	/// Opacity is kept within (0, 1], sizes and distances non-negative, and
	/// non-finite numbers fall back to the defaults.
	pub fn sanitized(&self) -> Self {
		let defaults = Self::default();
		let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };

		let (s0, s1) = (
			finite_or(self.size_range.0, defaults.size_range.0).max(0.0),
			finite_or(self.size_range.1, defaults.size_range.1).max(0.0),
		);
		let (o0, o1) = (
			finite_or(self.opacity_range.0, defaults.opacity_range.0).clamp(f64::EPSILON, 1.0),
			finite_or(self.opacity_range.1, defaults.opacity_range.1).clamp(f64::EPSILON, 1.0),
		);

		Self {
			canvas_id: self.canvas_id.clone(),
			star_count: self.star_count,
			link_distance: finite_or(self.link_distance, defaults.link_distance).max(0.0),
			max_speed: finite_or(self.max_speed, defaults.max_speed).abs(),
			size_range: (s0.min(s1), s0.max(s1)),
			opacity_range: (o0.min(o1), o0.max(o1)),
		}
	}
}

/// Tunables for the rotating headline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
	/// DOM id of the element whose text is replaced.
	pub element_id: String,
	/// Phrases typed out in order, cycling forever.
	pub phrases: Vec<String>,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			element_id: "typing-text".into(),
			phrases: vec!["Kyle Zimmer".into(), "Zimmer-Sec".into(), "Portfolio".into()],
		}
	}
}

/// Tunables for the section fade-in.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
	/// CSS selector of the elements to reveal.
	pub selector: String,
	/// Id of the section shown immediately on load.
	pub initial_id: String,
	/// Fraction of the element that must be visible.
	pub threshold: f64,
	/// Observer root margin (CSS shorthand).
	pub root_margin: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: "section".into(),
			initial_id: "home".into(),
			threshold: 0.1,
			root_margin: "0px 0px -100px 0px".into(),
		}
	}
}

/// Complete page configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	pub starfield: StarfieldConfig,
	pub typing: TypingConfig,
	pub reveal: RevealConfig,
}

impl PageConfig {
	/// Parse a JSON document; absent fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let cfg = PageConfig::from_json(r#"{ "starfield": { "star_count": 80 } }"#).unwrap();
		assert_eq!(cfg.starfield.star_count, 80);
		assert_eq!(cfg.starfield.link_distance, 150.0);
		assert_eq!(cfg.starfield.canvas_id, "stars-canvas");
		assert_eq!(cfg.typing, TypingConfig::default());
		assert_eq!(cfg.reveal.root_margin, "0px 0px -100px 0px");
	}

	#[test]
	fn empty_object_is_the_default_config() {
		assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(PageConfig::from_json("{ starfield: ").is_err());
		assert!(PageConfig::from_json(r#"{ "starfield": { "star_count": -1 } }"#).is_err());
	}

	#[test]
	fn sanitize_orders_ranges_and_clamps() {
		let cfg = StarfieldConfig {
			size_range: (3.0, -1.0),
			opacity_range: (2.0, 0.0),
			max_speed: -0.7,
			link_distance: f64::NAN,
			..StarfieldConfig::default()
		}
		.sanitized();

		assert_eq!(cfg.size_range, (0.0, 3.0));
		assert_eq!(cfg.opacity_range.1, 1.0);
		assert!(cfg.opacity_range.0 > 0.0);
		assert_eq!(cfg.max_speed, 0.7);
		assert_eq!(cfg.link_distance, 150.0);
	}

	#[test]
	fn default_config_is_already_sane() {
		let cfg = StarfieldConfig::default();
		assert_eq!(cfg.sanitized(), cfg);
	}
}
