//! Proximity lines between nearby stars.
//!
//! Every unordered pair is compared once per frame, which is O(n²). At a few
//! hundred stars that is roughly 60k distance checks per frame and well within
//! budget; much beyond a couple of thousand stars this becomes the frame's
//! bottleneck and would need a spatial grid.

use super::particles::Star;
use super::surface::Surface;
use super::theme::LinkStyle;

/// Counters from one [`ProximityLinker::connect`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
	/// Number of unordered pairs whose distance was computed.
	pub pairs_evaluated: usize,
	/// Number of lines actually stroked.
	pub lines_drawn: usize,
}

/// Draws a fading line between any two stars closer than `threshold`.
#[derive(Clone, Debug)]
pub struct ProximityLinker {
	threshold: f64,
	style: LinkStyle,
}

impl ProximityLinker {
	pub fn new(threshold: f64, style: LinkStyle) -> Self {
		Self { threshold, style }
	}

	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Line alpha for a pair `distance` apart, or `None` when no line should
	/// be drawn at all.
	///
	/// Alpha falls off linearly from `max_alpha` at distance 0 to zero at the
	/// threshold, which itself is excluded.
	pub fn link_opacity(&self, distance: f64) -> Option<f64> {
		if distance < self.threshold {
			Some((1.0 - distance / self.threshold) * self.style.max_alpha)
		} else {
			None
		}
	}

	/// Stroke lines for all close pairs in `stars`.
	pub fn connect<S: Surface>(&self, stars: &[Star], surface: &mut S) -> LinkStats {
		let mut stats = LinkStats::default();

		for (i, a) in stars.iter().enumerate() {
			for b in &stars[i + 1..] {
				stats.pairs_evaluated += 1;

				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				let Some(alpha) = self.link_opacity(distance) else {
					continue;
				};

				surface.stroke_line(
					(a.x, a.y),
					(b.x, b.y),
					self.style.color.with_alpha(alpha),
					self.style.line_width,
				);
				stats.lines_drawn += 1;
			}
		}

		stats
	}
}
