//! Visual theming for the starfield.
//!
//! Colors, glow and link styling. Geometry (sizes, speeds, distances) lives in
//! [`super::config`]; this module only decides how things look.

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

	/// CSS `rgba()` string. Alpha is clamped to [0, 1].
	pub fn to_css(self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r,
			self.g,
			self.b,
			self.a.clamp(0.0, 1.0)
		)
	}
}

/// Soft halo drawn around each star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Shadow blur radius in logical units.
	pub blur: f64,
	pub color: Color,
}

/// Star appearance.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Base star color; alpha is replaced per star by its opacity.
	pub color: Color,
	/// Glow blur radius, independent of star size.
	pub glow_blur: f64,
	/// Glow alpha as a fraction of the star's opacity.
	pub glow_alpha: f64,
}

/// Connecting line appearance.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Accent color; alpha is replaced per line by the distance falloff.
	pub color: Color,
	/// Stroke width in logical units.
	pub line_width: f64,
	/// Alpha of a line between two coincident stars.
	pub max_alpha: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct StarfieldTheme {
	pub name: &'static str,
	pub star: StarStyle,
	pub link: LinkStyle,
}

impl StarfieldTheme {
	/// White stars with a faint glow, joined by blue accent lines (default)
	pub fn night_sky() -> Self {
		Self {
			name: "night_sky",
			star: StarStyle {
				color: Color::rgb(255, 255, 255),
				glow_blur: 2.0,
				glow_alpha: 0.5,
			},
			link: LinkStyle {
				color: Color::rgb(74, 158, 255),
				line_width: 1.5,
				max_alpha: 0.4,
			},
		}
	}

	/// Glow for a star of the given opacity.
	pub fn star_glow(&self, opacity: f64) -> Glow {
		Glow {
			blur: self.star.glow_blur,
			color: self.star.color.with_alpha(opacity * self.star.glow_alpha),
		}
	}
}

impl Default for StarfieldTheme {
	fn default() -> Self {
		Self::night_sky()
	}
}
