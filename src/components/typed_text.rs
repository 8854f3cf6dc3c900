//! Typewriter-style rotating headline.
//!
//! [`Typewriter`] is a plain state machine that yields the next visible text
//! and how long to wait before the following step. [`TypedText`] drives it
//! from a leptos signal with `set_timeout`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::info;
use web_sys::HtmlElement;

use super::dom;
use crate::error::StartupError;

/// Delay after typing one character.
pub const TYPE_DELAY: Duration = Duration::from_millis(150);
/// Delay after deleting one character.
pub const DELETE_DELAY: Duration = Duration::from_millis(100);
/// Pause on a fully typed phrase.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause on empty text before the next phrase.
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

/// Text to show now and how long to show it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
	pub text: String,
	pub delay: Duration,
}

/// Cycles through phrases, typing each out and deleting it again.
#[derive(Clone, Debug)]
pub struct Typewriter {
	phrases: Vec<Vec<char>>,
	phrase: usize,
	chars: usize,
	deleting: bool,
}

impl Typewriter {
	pub fn new<I, S>(phrases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			phrases: phrases
				.into_iter()
				.map(|p| p.as_ref().chars().collect())
				.collect(),
			phrase: 0,
			chars: 0,
			deleting: false,
		}
	}

	/// Type or delete one character and return the resulting text.
	pub fn advance(&mut self) -> TypeStep {
		let Some(current) = self.phrases.get(self.phrase) else {
			return TypeStep {
				text: String::new(),
				delay: HOLD_DELAY,
			};
		};
		let len = current.len();

		let mut delay = if self.deleting {
			self.chars = self.chars.saturating_sub(1);
			DELETE_DELAY
		} else {
			self.chars = (self.chars + 1).min(len);
			TYPE_DELAY
		};
		let text: String = current[..self.chars].iter().collect();

		if !self.deleting && self.chars == len {
			delay = HOLD_DELAY;
			self.deleting = true;
		} else if self.deleting && self.chars == 0 {
			delay = NEXT_PHRASE_DELAY;
			self.deleting = false;
			self.phrase = (self.phrase + 1) % self.phrases.len();
		}

		TypeStep { text, delay }
	}
}

fn schedule_step(writer: Rc<RefCell<Typewriter>>, text: RwSignal<String>, delay: Duration) {
	set_timeout(
		move || {
			let step = writer.borrow_mut().advance();
			text.set(step.text);
			schedule_step(writer, text, step.delay);
		},
		delay,
	);
}

/// Headline that types and deletes `phrases` in a loop.
#[component]
pub fn TypedText(phrases: Vec<String>) -> impl IntoView {
	let text = RwSignal::new(String::new());
	schedule_step(
		Rc::new(RefCell::new(Typewriter::new(phrases))),
		text,
		Duration::ZERO,
	);

	view! { <span class="typed-text">{move || text.get()}</span> }
}

/// Replace the contents of `#element_id` with a [`TypedText`].
pub fn mount_typed_text(element_id: &str, phrases: Vec<String>) -> Result<(), StartupError> {
	let document = dom::document()?;
	let host: HtmlElement = dom::element_by_id(&document, element_id, "HTML element")?;
	host.set_text_content(None);

	info!("star-backdrop: typing {} phrases into #{}", phrases.len(), element_id);
	leptos::mount::mount_to(host, move || view! { <TypedText phrases=phrases /> }).forget();
	Ok(())
}
