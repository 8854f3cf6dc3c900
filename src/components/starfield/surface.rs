//! Drawable surface abstraction and resolution management.
//!
//! [`Surface`] is the minimal set of drawing primitives the starfield needs.
//! The browser implementation lives in [`super::canvas`]; tests use an
//! in-memory recorder. [`SurfaceManager`] layers the HiDPI sizing rules on top.

use super::theme::{Color, Glow};
use super::viewport::Viewport;

/// Drawing primitives. All coordinates are logical units once
/// [`Surface::set_scale`] has been applied.
pub trait Surface {
	/// Resize the backing pixel buffer. Implementations backed by a canvas
	/// lose their transform here.
	fn set_backing_size(&mut self, width: u32, height: u32);
	/// Set the displayed (CSS) size in logical units.
	fn set_display_size(&mut self, width: f64, height: f64);
	/// Replace the current transform with a uniform scale.
	fn set_scale(&mut self, scale: f64);
	/// Clear the rectangle `(0, 0, width, height)` in logical units.
	fn clear_rect(&mut self, width: f64, height: f64);
	/// Enable (`Some`) or disable (`None`) the glow applied to fills.
	fn set_glow(&mut self, glow: Option<Glow>);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

/// Owns a [`Surface`] and keeps its buffer in step with the viewport.
pub struct SurfaceManager<S> {
	surface: S,
	viewport: Viewport,
}

impl<S: Surface> SurfaceManager<S> {
	/// Takes ownership of the surface and sizes it for `viewport`.
	pub fn new(surface: S, viewport: Viewport) -> Self {
		let mut manager = Self { surface, viewport };
		manager.resize(viewport);
		manager
	}

	/// Resize backing buffer and display size, then reapply the scale.
	///
	/// The scale is always set absolutely after the buffer resize, so calling
	/// this repeatedly with the same viewport is idempotent.
	pub fn resize(&mut self, viewport: Viewport) {
		let (bw, bh) = viewport.backing_size();
		self.surface.set_backing_size(bw, bh);
		self.surface
			.set_display_size(viewport.width(), viewport.height());
		self.surface.set_scale(viewport.scale());
		self.viewport = viewport;
	}

	/// Clear the whole logical area.
	pub fn clear(&mut self) {
		self.surface
			.clear_rect(self.viewport.width(), self.viewport.height());
	}

	/// Last viewport applied to the surface.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn backing_size(&self) -> (u32, u32) {
		self.viewport.backing_size()
	}

	pub fn display_size(&self) -> (f64, f64) {
		(self.viewport.width(), self.viewport.height())
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}

#[cfg(test)]
pub(crate) mod recording {
	//! In-memory surface that mimics canvas transform semantics.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear(f64, f64),
		Circle { x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow> },
		Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64, glow: Option<Glow> },
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub backing: (u32, u32),
		pub display: (f64, f64),
		/// Reset to 1.0 by every backing resize, like a canvas context.
		pub transform: f64,
		pub glow: Option<Glow>,
		pub ops: Vec<Op>,
		pub backing_resizes: usize,
	}

	impl RecordingSurface {
		pub fn lines(&self) -> impl Iterator<Item = &Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Line { .. }))
		}

		pub fn circles(&self) -> impl Iterator<Item = &Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Circle { .. }))
		}
	}

	impl Surface for RecordingSurface {
		fn set_backing_size(&mut self, width: u32, height: u32) {
			self.backing = (width, height);
			self.transform = 1.0;
			self.backing_resizes += 1;
		}

		fn set_display_size(&mut self, width: f64, height: f64) {
			self.display = (width, height);
		}

		fn set_scale(&mut self, scale: f64) {
			self.transform = scale;
		}

		fn clear_rect(&mut self, width: f64, height: f64) {
			self.ops.push(Op::Clear(width, height));
		}

		fn set_glow(&mut self, glow: Option<Glow>) {
			self.glow = glow;
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.ops.push(Op::Circle { x, y, radius, color, glow: self.glow });
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
			self.ops.push(Op::Line { from, to, color, width, glow: self.glow });
		}
	}
}

#[cfg(test)]
mod tests {
	use super::recording::{Op, RecordingSurface};
	use super::*;

	#[test]
	fn resize_scales_backing_but_not_display() {
		let mut manager = SurfaceManager::new(RecordingSurface::default(), Viewport::new(100.0, 100.0, 1.0));
		manager.resize(Viewport::new(800.0, 600.0, 2.0));

		assert_eq!(manager.backing_size(), (1600, 1200));
		assert_eq!(manager.display_size(), (800.0, 600.0));
		assert_eq!(manager.surface().backing, (1600, 1200));
		assert_eq!(manager.surface().display, (800.0, 600.0));
		assert_eq!(manager.surface().transform, 2.0);
	}

	#[test]
	fn repeated_resize_does_not_drift() {
		let vp = Viewport::new(800.0, 600.0, 2.0);
		let mut manager = SurfaceManager::new(RecordingSurface::default(), vp);
		manager.resize(vp);
		manager.resize(vp);

		assert_eq!(manager.surface().backing, (1600, 1200));
		assert_eq!(manager.surface().transform, 2.0);
		assert_eq!(manager.surface().backing_resizes, 3);
	}

	#[test]
	fn clear_covers_the_logical_area() {
		let mut manager = SurfaceManager::new(RecordingSurface::default(), Viewport::new(320.0, 2400.0, 3.0));
		manager.clear();
		assert_eq!(manager.surface().ops, vec![Op::Clear(320.0, 2400.0)]);
	}
}
