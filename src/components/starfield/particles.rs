//! Stars: randomly seeded points that drift and bounce off the page edges.

use super::config::StarfieldConfig;
use super::surface::Surface;
use super::theme::StarfieldTheme;
use super::viewport::Bounds;

/// A single drifting star.
///
/// Size and opacity are fixed when the star is created; only position and
/// velocity change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	size: f64,
	opacity: f64,
}

/// Uniform sample from `[lo, hi]`.
fn sample(rng: &mut fastrand::Rng, (lo, hi): (f64, f64)) -> f64 {
	lo + rng.f64() * (hi - lo)
}

/// Reflect `speed` so that it points back into `[0, extent]` when `pos` has
/// left that range.
fn reflect(pos: f64, speed: f64, extent: f64) -> f64 {
	if pos < 0.0 {
		speed.abs()
	} else if pos > extent {
		-speed.abs()
	} else {
		speed
	}
}

impl Star {
	pub fn new(x: f64, y: f64, speed_x: f64, speed_y: f64, size: f64, opacity: f64) -> Self {
		Self {
			x,
			y,
			speed_x,
			speed_y,
			size,
			opacity,
		}
	}

	/// Random star inside `bounds`, with size, opacity and speed drawn from
	/// the configured ranges.
	pub fn create(bounds: Bounds, config: &StarfieldConfig, rng: &mut fastrand::Rng) -> Self {
		let speed = (-config.max_speed, config.max_speed);
		Self {
			x: rng.f64() * bounds.width,
			y: rng.f64() * bounds.height,
			size: sample(rng, config.size_range),
			speed_x: sample(rng, speed),
			speed_y: sample(rng, speed),
			opacity: sample(rng, config.opacity_range),
		}
	}

	pub fn size(&self) -> f64 {
		self.size
	}

	pub fn opacity(&self) -> f64 {
		self.opacity
	}

	/// Advance one frame and bounce off the edges.
	///
	/// A star may overshoot an edge by up to one frame's travel; its velocity
	/// already points inward, so it comes back on the next update.
	pub fn update(&mut self, bounds: Bounds) {
		self.x += self.speed_x;
		self.y += self.speed_y;

		self.speed_x = reflect(self.x, self.speed_x, bounds.width);
		self.speed_y = reflect(self.y, self.speed_y, bounds.height);
	}

	/// Paint the star with its glow, then switch the glow off again so it
	/// does not leak into whatever is drawn next.
	pub fn draw<S: Surface>(&self, surface: &mut S, theme: &StarfieldTheme) {
		surface.set_glow(Some(theme.star_glow(self.opacity)));
		surface.fill_circle(
			self.x,
			self.y,
			self.size,
			theme.star.color.with_alpha(self.opacity),
		);
		surface.set_glow(None);
	}
}

/// The full set of stars, created once and kept for the page's lifetime.
#[derive(Clone, Debug, Default)]
pub struct StarField {
	pub stars: Vec<Star>,
}

impl StarField {
	pub fn spawn(bounds: Bounds, config: &StarfieldConfig, rng: &mut fastrand::Rng) -> Self {
		Self {
			stars: (0..config.star_count)
				.map(|_| Star::create(bounds, config, rng))
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}
}
