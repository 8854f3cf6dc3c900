//! Startup errors.
//!
//! Only initialization can fail. Once a feature is running, drawing and
//! styling calls are best-effort.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a page feature could not be started.
#[derive(Debug, Error)]
pub enum StartupError {
	#[error("no global `window` available")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("element #{0} not found")]
	MissingElement(String),
	#[error("element #{id} is not a {expected}")]
	WrongElement { id: String, expected: &'static str },
	#[error("canvas #{0} has no 2d context")]
	NoContext(String),
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for StartupError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
