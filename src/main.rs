//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use star_backdrop::{init_logging, start_page};

fn main() {
	init_logging();

	// The animation loop and listeners hold their own references; the handle
	// is only needed for teardown, which a static page never does.
	let _starfield = start_page();
}
