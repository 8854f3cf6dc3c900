//! The self-rescheduling animation loop.
//!
//! Frame timing is injected through [`FrameScheduler`]: in the browser it is
//! `requestAnimationFrame`, in tests a [`ManualScheduler`] that only runs
//! frames when asked to. Motion is per frame, not per second, so the visual
//! speed follows the achieved frame rate.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::state::StarfieldSystem;
use super::surface::Surface;

/// Runs a callback before the next repaint.
pub trait FrameScheduler {
	fn request_frame(&self, frame: Box<dyn FnOnce()>);
}

/// Handle to a running animation loop.
///
/// The loop reschedules itself forever. Dropping the handle does not stop
/// it; call [`AnimationLoop::stop`] for teardown.
#[derive(Clone, Debug)]
pub struct AnimationLoop {
	running: Rc<Cell<bool>>,
}

impl AnimationLoop {
	/// Render the first frame immediately, then keep rendering one frame per
	/// scheduler callback.
	pub fn start<S, F>(system: Rc<RefCell<StarfieldSystem<S>>>, scheduler: Rc<F>) -> Self
	where
		S: Surface + 'static,
		F: FrameScheduler + ?Sized + 'static,
	{
		let running = Rc::new(Cell::new(true));
		run_frame(system, scheduler, Rc::clone(&running));
		Self { running }
	}

	/// Stop before the next frame. Already-requested callbacks become no-ops.
	pub fn stop(&self) {
		self.running.set(false);
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}
}

fn run_frame<S, F>(
	system: Rc<RefCell<StarfieldSystem<S>>>,
	scheduler: Rc<F>,
	running: Rc<Cell<bool>>,
) where
	S: Surface + 'static,
	F: FrameScheduler + ?Sized + 'static,
{
	if !running.get() {
		return;
	}
	system.borrow_mut().frame();

	let next = Rc::clone(&scheduler);
	scheduler.request_frame(Box::new(move || run_frame(system, next, running)));
}

/// Scheduler that queues frames until [`ManualScheduler::step`] runs them.
#[derive(Default)]
pub struct ManualScheduler {
	queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of frames waiting to run.
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}

	/// Run up to `frames` queued callbacks, oldest first. Callbacks queued
	/// while stepping run in later steps. Returns how many ran.
	pub fn step(&self, frames: usize) -> usize {
		let mut ran = 0;
		while ran < frames {
			// Release the queue borrow before the callback requeues itself.
			let Some(frame) = self.queue.borrow_mut().pop_front() else {
				break;
			};
			frame();
			ran += 1;
		}
		ran
	}
}

impl FrameScheduler for ManualScheduler {
	fn request_frame(&self, frame: Box<dyn FnOnce()>) {
		self.queue.borrow_mut().push_back(frame);
	}
}
