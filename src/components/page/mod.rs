//! Page interaction effects that sit alongside the starfield.

pub mod reveal;
pub mod smooth_scroll;

pub use reveal::enable_reveal;
pub use smooth_scroll::{anchor_selector, enable_smooth_scroll};
