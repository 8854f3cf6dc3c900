//! Animated starfield background.
//!
//! Draws drifting stars on a full-page canvas with:
//! - Random placement, size, opacity and drift per star
//! - Elastic bouncing off the page edges
//! - Fading lines between stars closer than a threshold
//! - HiDPI backing buffers that follow window resizes and content growth
//!
//! The simulation ([`StarfieldSystem`]) is independent of the browser. It
//! draws through the [`Surface`] trait and is stepped by a [`FrameScheduler`],
//! so it runs the same against a canvas or an in-memory recorder.
//!
//! # Example
//!
//! ```ignore
//! use star_backdrop::components::starfield::{mount_starfield, StarfieldConfig};
//!
//! let starfield = mount_starfield(&StarfieldConfig::default())?;
//! ```

mod canvas;
mod component;
pub mod config;
mod driver;
mod linker;
mod particles;
mod state;
pub mod surface;
pub mod theme;
pub mod viewport;

pub use canvas::{AnimationFrameScheduler, CanvasSurface, WindowViewport};
pub use component::{Starfield, mount_starfield};
pub use config::{PageConfig, RevealConfig, StarfieldConfig, TypingConfig};
pub use driver::{AnimationLoop, FrameScheduler, ManualScheduler};
pub use linker::{LinkStats, ProximityLinker};
pub use particles::{Star, StarField};
pub use state::{FrameStats, StarfieldSystem};
pub use surface::{Surface, SurfaceManager};
pub use theme::{Color, Glow, StarfieldTheme};
pub use viewport::{Bounds, Viewport, ViewportSource, ViewportTracker};
