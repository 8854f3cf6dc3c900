//! Page components: the starfield background and the page effects around it.

pub(crate) mod dom;
pub mod page;
pub mod starfield;
pub mod typed_text;
