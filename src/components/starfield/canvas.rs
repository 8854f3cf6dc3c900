//! Browser implementations of the starfield's seams: a 2d canvas
//! [`Surface`], a window-backed [`ViewportSource`] and a
//! `requestAnimationFrame` [`FrameScheduler`].

use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::driver::FrameScheduler;
use super::surface::Surface;
use super::theme::{Color, Glow};
use super::viewport::{Viewport, ViewportSource};
use crate::error::StartupError;

/// A `<canvas>` and its 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, id: &str) -> Result<Self, StartupError> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| StartupError::NoContext(id.to_string()))?
			.dyn_into()
			.map_err(|_| StartupError::NoContext(id.to_string()))?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn set_backing_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_display_size(&mut self, width: f64, height: f64) {
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{width}px"));
		let _ = style.set_property("height", &format!("{height}px"));
	}

	fn set_scale(&mut self, scale: f64) {
		let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
	}

	fn clear_rect(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn set_glow(&mut self, glow: Option<Glow>) {
		match glow {
			Some(glow) => {
				self.ctx.set_shadow_blur(glow.blur);
				self.ctx.set_shadow_color(&glow.color.to_css());
			}
			None => self.ctx.set_shadow_blur(0.0),
		}
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

/// Page extent from the live window: inner width, full document scroll
/// height and device pixel ratio.
pub struct WindowViewport {
	window: Window,
}

impl WindowViewport {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl ViewportSource for WindowViewport {
	fn measure(&self) -> Viewport {
		let width = self
			.window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(0.0);
		let height = self
			.window
			.document()
			.and_then(|d| d.document_element())
			.map(|e| e.scroll_height() as f64)
			.unwrap_or(0.0);
		// Degenerate values are clamped by `Viewport::new`.
		Viewport::new(width, height, self.window.device_pixel_ratio())
	}
}

/// Schedules frames with `window.requestAnimationFrame`.
pub struct AnimationFrameScheduler {
	window: Window,
}

impl AnimationFrameScheduler {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn request_frame(&self, frame: Box<dyn FnOnce()>) {
		let cb = Closure::once_into_js(move || frame());
		if let Err(e) = self.window.request_animation_frame(cb.unchecked_ref()) {
			warn!("star-backdrop: requestAnimationFrame failed, animation stopped: {e:?}");
		}
	}
}
