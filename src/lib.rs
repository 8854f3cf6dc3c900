//! star-backdrop: animated starfield background and page effects.
//!
//! This crate attaches to an existing page and starts four independent
//! features: the starfield canvas, the typed headline, smooth anchor scrolling
//! and section fade-in. Each one fails loudly on its own when its host
//! elements are missing, without taking the others down.

use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod error;

pub use components::starfield::{PageConfig, Starfield, StarfieldConfig, mount_starfield};
pub use error::StartupError;

/// DOM id of the optional JSON configuration script.
pub const CONFIG_ELEMENT_ID: &str = "starfield-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("star-backdrop: logging initialized");
}

/// Load page configuration from a script element with id="starfield-config".
/// Expected format: JSON matching [`PageConfig`]; every field is optional.
fn load_page_config() -> PageConfig {
	let Some(json_text) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
		.and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|s| s.text().ok())
	else {
		return PageConfig::default();
	};

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!("star-backdrop: loaded page config from #{CONFIG_ELEMENT_ID}");
			config
		}
		Err(e) => {
			warn!("star-backdrop: failed to parse page config, using defaults: {}", e);
			PageConfig::default()
		}
	}
}

fn report<T>(feature: &str, result: Result<T, StartupError>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(e) => {
			error!("star-backdrop: {feature} disabled: {e}");
			None
		}
	}
}

/// Start every page feature. Returns the starfield handle if it started.
pub fn start_page() -> Option<Starfield> {
	let config = load_page_config();

	let starfield = report("starfield", mount_starfield(&config.starfield));
	report(
		"typed text",
		components::typed_text::mount_typed_text(
			&config.typing.element_id,
			config.typing.phrases.clone(),
		),
	);
	report("smooth scroll", components::page::enable_smooth_scroll());
	report("section reveal", components::page::enable_reveal(&config.reveal));

	starfield
}
