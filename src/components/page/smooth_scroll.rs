//! Smooth scrolling for in-page anchor links.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::dom;
use crate::error::StartupError;

/// Selector for the target of an anchor `href`, if it names one.
///
/// A bare `#` is a valid link to the top of the page but not a valid
/// selector, so it yields `None` and the browser's default is kept.
pub fn anchor_selector(href: &str) -> Option<&str> {
	(href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Attach a smooth-scroll click handler to every `a[href^="#"]`.
///
/// Returns the number of links wired.
pub fn enable_smooth_scroll() -> Result<u32, StartupError> {
	let document = dom::document()?;
	let anchors = document.query_selector_all("a[href^=\"#\"]")?;
	let mut wired = 0;

	for i in 0..anchors.length() {
		let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let Some(href) = anchor.get_attribute("href") else {
			continue;
		};
		if anchor_selector(&href).is_none() {
			continue;
		}

		let document = document.clone();
		let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			let Some(selector) = anchor_selector(&href) else {
				return;
			};
			ev.prevent_default();
			match document.query_selector(selector) {
				Ok(Some(target)) => {
					let options = ScrollIntoViewOptions::new();
					options.set_behavior(ScrollBehavior::Smooth);
					options.set_block(ScrollLogicalPosition::Start);
					target.scroll_into_view_with_scroll_into_view_options(&options);
				}
				_ => debug!("star-backdrop: no scroll target for {selector}"),
			}
		});
		anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
		wired += 1;
	}

	Ok(wired)
}
