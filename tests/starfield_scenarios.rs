//! Integration test: drive a full starfield against an in-memory surface and
//! check linking, containment and the resize/scroll policies end to end.

use std::cell::RefCell;
use std::rc::Rc;

use star_backdrop::components::starfield::{
	AnimationLoop, Color, Glow, ManualScheduler, Star, StarField, StarfieldConfig,
	StarfieldSystem, StarfieldTheme, Surface, Viewport,
};

/// Counts what was drawn and tracks canvas-like buffer state.
#[derive(Debug, Default)]
struct CountingSurface {
	backing: (u32, u32),
	display: (f64, f64),
	scale: f64,
	resizes: usize,
	glow_on: bool,
	lines: Vec<f64>,
	circles: usize,
	clears: usize,
	lines_with_glow: usize,
}

impl Surface for CountingSurface {
	fn set_backing_size(&mut self, width: u32, height: u32) {
		self.backing = (width, height);
		self.scale = 1.0;
		self.resizes += 1;
	}

	fn set_display_size(&mut self, width: f64, height: f64) {
		self.display = (width, height);
	}

	fn set_scale(&mut self, scale: f64) {
		self.scale = scale;
	}

	fn clear_rect(&mut self, _width: f64, _height: f64) {
		self.clears += 1;
	}

	fn set_glow(&mut self, glow: Option<Glow>) {
		self.glow_on = glow.is_some();
	}

	fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color) {
		self.circles += 1;
	}

	fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), color: Color, _width: f64) {
		if self.glow_on {
			self.lines_with_glow += 1;
		}
		self.lines.push(color.a);
	}
}

fn fixed_system(stars: Vec<Star>, viewport: Viewport) -> StarfieldSystem<CountingSurface> {
	StarfieldSystem::with_field(
		CountingSurface::default(),
		viewport,
		StarField { stars },
		&StarfieldConfig::default(),
		StarfieldTheme::default(),
	)
}

#[test]
fn two_stars_ten_apart_draw_one_line() {
	let mut system = fixed_system(
		vec![
			Star::new(0.0, 0.0, 0.0, 0.0, 1.0, 1.0),
			Star::new(10.0, 0.0, 0.0, 0.0, 1.0, 1.0),
		],
		Viewport::new(800.0, 600.0, 1.0),
	);

	let stats = system.frame();
	assert_eq!(stats.links.pairs_evaluated, 1);
	assert_eq!(stats.links.lines_drawn, 1);

	let lines = &system.surface().surface().lines;
	assert_eq!(lines.len(), 1);
	assert!((lines[0] - 0.37333).abs() < 1e-4, "opacity was {}", lines[0]);
}

#[test]
fn full_size_field_runs_through_the_loop() {
	let config = StarfieldConfig::default();
	let viewport = Viewport::new(1280.0, 4000.0, 2.0);
	let system = Rc::new(RefCell::new(StarfieldSystem::new(
		CountingSurface::default(),
		viewport,
		&config,
		StarfieldTheme::default(),
		&mut fastrand::Rng::with_seed(2024),
	)));
	let scheduler = Rc::new(ManualScheduler::new());
	let _animation = AnimationLoop::start(Rc::clone(&system), Rc::clone(&scheduler));
	scheduler.step(199);

	let system = system.borrow();
	let surface = system.surface().surface();
	assert_eq!(system.frame_count(), 200);
	assert_eq!(surface.clears, 200);
	assert_eq!(surface.circles, 200 * 350);
	assert_eq!(surface.lines_with_glow, 0);
	assert!(surface.lines.iter().all(|a| *a > 0.0 && *a <= 0.4));

	let slack = config.max_speed;
	for star in &system.stars().stars {
		assert!(star.x >= -slack && star.x <= viewport.width() + slack);
		assert!(star.y >= -slack && star.y <= viewport.height() + slack);
	}
}

#[test]
fn content_growth_resizes_but_shrink_does_not() {
	let mut system = fixed_system(Vec::new(), Viewport::new(1024.0, 1000.0, 1.0));
	let before = system.surface().surface().resizes;

	assert!(system.handle_scroll(Viewport::new(1024.0, 1500.0, 1.0)));
	assert_eq!(system.surface().surface().backing, (1024, 1500));
	assert_eq!(system.surface().surface().resizes, before + 1);

	assert!(!system.handle_scroll(Viewport::new(1024.0, 1400.0, 1.0)));
	assert_eq!(system.surface().surface().resizes, before + 1);
	assert_eq!(system.surface().display_size(), (1024.0, 1500.0));
}

#[test]
fn resize_reapplies_scale_every_time() {
	let mut system = fixed_system(Vec::new(), Viewport::new(800.0, 600.0, 1.0));

	system.handle_resize(Viewport::new(800.0, 600.0, 2.0));
	system.handle_resize(Viewport::new(800.0, 600.0, 2.0));

	let surface = system.surface().surface();
	assert_eq!(surface.backing, (1600, 1200));
	assert_eq!(surface.display, (800.0, 600.0));
	assert_eq!(surface.scale, 2.0);
}

#[test]
fn zero_sized_viewport_still_draws_finite_values() {
	let mut system = StarfieldSystem::new(
		CountingSurface::default(),
		Viewport::new(0.0, 0.0, 0.0),
		&StarfieldConfig::default(),
		StarfieldTheme::default(),
		&mut fastrand::Rng::with_seed(9),
	);
	for _ in 0..10 {
		system.frame();
	}

	assert_eq!(system.surface().backing_size(), (1, 1));
	for star in &system.stars().stars {
		assert!(star.x.is_finite() && star.y.is_finite());
	}
}
