//! Starfield simulation state.
//!
//! [`StarfieldSystem`] is the single owner of everything the animation loop
//! touches: the stars, the surface, the viewport tracker and the linker.
//! It is created once at startup and then stepped once per display frame.
//! Resize and scroll handlers go through it too, so all mutation happens on
//! one thread between frames.

use super::config::StarfieldConfig;
use super::linker::{LinkStats, ProximityLinker};
use super::particles::StarField;
use super::surface::{Surface, SurfaceManager};
use super::theme::StarfieldTheme;
use super::viewport::{Viewport, ViewportTracker};

/// Counters from one [`StarfieldSystem::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	pub links: LinkStats,
	pub stars_drawn: usize,
}

/// Stars plus the surface they are drawn on.
pub struct StarfieldSystem<S> {
	field: StarField,
	surface: SurfaceManager<S>,
	tracker: ViewportTracker,
	linker: ProximityLinker,
	theme: StarfieldTheme,
	frames: u64,
}

impl<S: Surface> StarfieldSystem<S> {
	/// Size the surface for `viewport` and spawn `config.star_count` stars in it.
	pub fn new(
		surface: S,
		viewport: Viewport,
		config: &StarfieldConfig,
		theme: StarfieldTheme,
		rng: &mut fastrand::Rng,
	) -> Self {
		let config = config.sanitized();
		let field = StarField::spawn(viewport.bounds(), &config, rng);
		Self::with_field(surface, viewport, field, &config, theme)
	}

	/// Like [`Self::new`] but with a caller-provided star set.
	pub fn with_field(
		surface: S,
		viewport: Viewport,
		field: StarField,
		config: &StarfieldConfig,
		theme: StarfieldTheme,
	) -> Self {
		let linker = ProximityLinker::new(config.link_distance, theme.link.clone());
		Self {
			field,
			surface: SurfaceManager::new(surface, viewport),
			tracker: ViewportTracker::new(viewport),
			linker,
			theme,
			frames: 0,
		}
	}

	/// One animation step: clear, link, then update and draw every star.
	///
	/// Links are computed from the positions at the start of the frame; stars
	/// are drawn at their post-update positions.
	pub fn frame(&mut self) -> FrameStats {
		self.surface.clear();

		let links = self
			.linker
			.connect(&self.field.stars, self.surface.surface_mut());

		let bounds = self.tracker.current().bounds();
		for star in &mut self.field.stars {
			star.update(bounds);
			star.draw(self.surface.surface_mut(), &self.theme);
		}

		self.frames += 1;
		FrameStats {
			links,
			stars_drawn: self.field.len(),
		}
	}

	/// Window resize: always resize the surface.
	pub fn handle_resize(&mut self, measured: Viewport) {
		let viewport = self.tracker.on_resize(measured);
		self.surface.resize(viewport);
	}

	/// Window scroll: resize only if the page content grew.
	///
	/// Returns whether the surface was resized.
	pub fn handle_scroll(&mut self, measured: Viewport) -> bool {
		match self.tracker.on_scroll(measured) {
			Some(viewport) => {
				self.surface.resize(viewport);
				true
			}
			None => false,
		}
	}

	pub fn stars(&self) -> &StarField {
		&self.field
	}

	pub fn viewport(&self) -> Viewport {
		self.tracker.current()
	}

	pub fn surface(&self) -> &SurfaceManager<S> {
		&self.surface
	}

	pub fn linker(&self) -> &ProximityLinker {
		&self.linker
	}

	/// Frames rendered so far.
	pub fn frame_count(&self) -> u64 {
		self.frames
	}
}
