//! Wires the starfield into the host page.
//!
//! Attaches to the existing background canvas, sizes it for the device pixel
//! ratio, starts the `requestAnimationFrame` loop and listens for window
//! resize and scroll. The listeners live as long as the page does.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::canvas::{AnimationFrameScheduler, CanvasSurface, WindowViewport};
use super::config::StarfieldConfig;
use super::driver::AnimationLoop;
use super::state::StarfieldSystem;
use super::theme::StarfieldTheme;
use super::viewport::ViewportSource;
use crate::components::dom;
use crate::error::StartupError;

/// Handle to the running starfield.
pub struct Starfield {
	pub system: Rc<RefCell<StarfieldSystem<CanvasSurface>>>,
	pub animation: AnimationLoop,
}

/// Start the starfield on the canvas named by `config.canvas_id`.
///
/// Fails if the canvas is missing, is not a canvas, or has no 2d context.
pub fn mount_starfield(config: &StarfieldConfig) -> Result<Starfield, StartupError> {
	let window = dom::window()?;
	let document = dom::document()?;
	let canvas: HtmlCanvasElement = dom::element_by_id(&document, &config.canvas_id, "canvas")?;
	let surface = CanvasSurface::new(canvas, &config.canvas_id)?;

	let source = Rc::new(WindowViewport::new(window.clone()));
	let viewport = source.measure();
	let mut rng = fastrand::Rng::new();
	let system = Rc::new(RefCell::new(StarfieldSystem::new(
		surface,
		viewport,
		config,
		StarfieldTheme::default(),
		&mut rng,
	)));
	info!(
		"star-backdrop: {} stars on {}x{} @{}x",
		system.borrow().stars().len(),
		viewport.width(),
		viewport.height(),
		viewport.scale()
	);

	let (system_resize, source_resize) = (system.clone(), source.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		system_resize
			.borrow_mut()
			.handle_resize(source_resize.measure());
	});
	window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
	on_resize.forget();

	let (system_scroll, source_scroll) = (system.clone(), source);
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		system_scroll
			.borrow_mut()
			.handle_scroll(source_scroll.measure());
	});
	window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
	on_scroll.forget();

	let scheduler = Rc::new(AnimationFrameScheduler::new(window));
	let animation = AnimationLoop::start(system.clone(), scheduler);

	Ok(Starfield { system, animation })
}
