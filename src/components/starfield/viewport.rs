//! Viewport measurement and change tracking.
//!
//! # Coordinate Spaces
//!
//! - **Logical units**: CSS pixels. Star positions, speeds, radii and link
//!   distances are all expressed in logical units.
//! - **Backing pixels**: the canvas buffer. One logical unit covers `scale`
//!   backing pixels, where `scale` is the device pixel ratio.
//!
//! The logical height is the full scrollable content height, not the visible
//! window height, so the starfield covers the whole page background.

/// Logical extent that stars bounce inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

/// Sanitized drawable size and device scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	width: f64,
	height: f64,
	scale: f64,
}

impl Viewport {
	/// Smallest drawable extent on either axis.
	pub const MIN_EXTENT: f64 = 1.0;

	/// Builds a viewport, clamping degenerate input.
	///
	/// Extents that are non-finite or below [`Self::MIN_EXTENT`] become
	/// `MIN_EXTENT`; a non-finite or non-positive scale becomes 1.
	pub fn new(width: f64, height: f64, scale: f64) -> Self {
		let extent = |v: f64| {
			if v.is_finite() {
				v.max(Self::MIN_EXTENT)
			} else {
				Self::MIN_EXTENT
			}
		};
		Self {
			width: extent(width),
			height: extent(height),
			scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	pub fn bounds(&self) -> Bounds {
		Bounds {
			width: self.width,
			height: self.height,
		}
	}

	/// Backing buffer dimensions in device pixels, at least 1×1.
	pub fn backing_size(&self) -> (u32, u32) {
		let px = |v: f64| (v * self.scale).round().max(1.0) as u32;
		(px(self.width), px(self.height))
	}
}

/// Something that can report the current page extent and pixel ratio.
pub trait ViewportSource {
	fn measure(&self) -> Viewport;
}

/// Tracks the viewport across resize and scroll notifications.
///
/// Resize replaces the viewport outright. Scroll only ever grows the height:
/// content may be added after load, and shrinking the surface on scroll would
/// clip stars that are already placed lower on the page.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
	current: Viewport,
}

impl ViewportTracker {
	/// Starts tracking from the initial measurement.
	pub fn new(initial: Viewport) -> Self {
		Self { current: initial }
	}

	/// Measures the source once and starts tracking.
	pub fn compute_initial(source: &impl ViewportSource) -> Self {
		Self::new(source.measure())
	}

	pub fn current(&self) -> Viewport {
		self.current
	}

	/// Full recompute. Always yields a viewport for the surface to adopt.
	pub fn on_resize(&mut self, measured: Viewport) -> Viewport {
		self.current = measured;
		self.current
	}

	/// Growth-only recompute.
	///
	/// Returns the new viewport only when the content height exceeds the
	/// last-known height; the width is left as is until the next resize.
	pub fn on_scroll(&mut self, measured: Viewport) -> Option<Viewport> {
		if measured.height <= self.current.height {
			return None;
		}
		self.current = Viewport::new(self.current.width, measured.height, measured.scale);
		Some(self.current)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(Viewport);

	impl ViewportSource for Fixed {
		fn measure(&self) -> Viewport {
			self.0
		}
	}

	#[test]
	fn degenerate_sizes_clamp_to_one() {
		let vp = Viewport::new(0.0, f64::NAN, f64::INFINITY);
		assert_eq!((vp.width(), vp.height(), vp.scale()), (1.0, 1.0, 1.0));
		assert_eq!(vp.backing_size(), (1, 1));

		let vp = Viewport::new(-20.0, 300.0, -2.0);
		assert_eq!((vp.width(), vp.height(), vp.scale()), (1.0, 300.0, 1.0));
	}

	#[test]
	fn backing_size_rounds_fractional_ratios() {
		assert_eq!(Viewport::new(800.0, 600.0, 2.0).backing_size(), (1600, 1200));
		assert_eq!(Viewport::new(333.0, 10.0, 1.5).backing_size(), (500, 15));
	}

	#[test]
	fn resize_always_replaces() {
		let mut tracker = ViewportTracker::compute_initial(&Fixed(Viewport::new(1024.0, 3000.0, 1.0)));
		let vp = tracker.on_resize(Viewport::new(640.0, 1200.0, 2.0));
		assert_eq!(vp, Viewport::new(640.0, 1200.0, 2.0));
		assert_eq!(tracker.current(), vp);
	}

	#[test]
	fn scroll_only_grows_height() {
		let mut tracker = ViewportTracker::new(Viewport::new(800.0, 1000.0, 1.0));

		let grown = tracker.on_scroll(Viewport::new(900.0, 1500.0, 1.0));
		assert_eq!(grown, Some(Viewport::new(800.0, 1500.0, 1.0)));

		assert_eq!(tracker.on_scroll(Viewport::new(800.0, 1200.0, 1.0)), None);
		assert_eq!(tracker.on_scroll(Viewport::new(800.0, 1500.0, 1.0)), None);
		assert_eq!(tracker.current().height(), 1500.0);
	}
}
