//! Fade sections in as they scroll into view.

use js_sys::Array;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
	HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::components::dom;
use crate::components::starfield::RevealConfig;
use crate::error::StartupError;

/// Inline style of a section before it has been seen.
pub const HIDDEN: &[(&str, &str)] = &[
	("opacity", "0"),
	("transform", "translateY(50px)"),
	("transition", "opacity 0.8s ease, transform 0.8s ease"),
];

/// Inline style once a section has been revealed.
pub const VISIBLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

fn apply(element: &HtmlElement, props: &[(&str, &str)]) {
	let style = element.style();
	for (name, value) in props {
		let _ = style.set_property(name, value);
	}
}

/// Hide every matching section and reveal each one the first time it
/// crosses the visibility threshold. The initial section is shown at once.
///
/// Returns the number of observed sections.
pub fn enable_reveal(config: &RevealConfig) -> Result<u32, StartupError> {
	let document = dom::document()?;

	let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		|entries: Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
					apply(&target, VISIBLE);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	options.set_root_margin(&config.root_margin);
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	on_intersect.forget();

	let sections = document.query_selector_all(&config.selector)?;
	let mut observed = 0;
	for i in 0..sections.length() {
		let Some(section) = sections
			.item(i)
			.and_then(|n| n.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		apply(&section, HIDDEN);
		observer.observe(&section);
		observed += 1;
	}

	let initial: HtmlElement = dom::element_by_id(&document, &config.initial_id, "HTML element")?;
	apply(&initial, VISIBLE);

	info!("star-backdrop: observing {observed} sections");
	Ok(observed)
}
