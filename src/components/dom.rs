//! Small DOM lookups shared by the page features.

use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::error::StartupError;

pub fn window() -> Result<Window, StartupError> {
	web_sys::window().ok_or(StartupError::NoWindow)
}

pub fn document() -> Result<Document, StartupError> {
	window()?.document().ok_or(StartupError::NoDocument)
}

/// Look up `#id` and cast it to `T`, failing loudly if it is absent or of the
/// wrong kind.
pub fn element_by_id<T: JsCast>(
	document: &Document,
	id: &str,
	expected: &'static str,
) -> Result<T, StartupError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| StartupError::MissingElement(id.to_string()))?
		.dyn_into::<T>()
		.map_err(|_| StartupError::WrongElement {
			id: id.to_string(),
			expected,
		})
}
