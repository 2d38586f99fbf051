//! Animated nested polygon-ring art.
//!
//! This library is the engine behind a ring-art toy: describe rings of
//! regular polygons (rotation, bounded oscillating scale, dot and side
//! styling, position), compose them into groups and groups into a scene,
//! then step the scene one tick at a time and draw each resulting frame.
//! The per-tick math is fully deterministic, so the same config always
//! replays the same animation, which is what makes frame-by-frame export
//! (GIF encoders and friends live outside this crate) possible at all.
//!
//! The short version:
//!
//! ```rust
//! use polyring_rs::prelude::*;
//!
//! let config = SceneConfig {
//!     groups: vec![GroupConfig { rings: vec![RingConfig::default()] }],
//! };
//! let mut scene = Scene::new(&config).unwrap();
//! let renderer = FrameRenderer::new(400.0, 400.0);
//! let mut surface = SvgSurface::new(400.0, 400.0);
//! renderer.render_scene(&mut scene, &mut surface).unwrap();
//! let document = surface.to_svg();
//! assert!(document.to_string().starts_with("<svg"));
//! ```

/// The per-tick animation engine: one [`animator::RingAnimator`] per ring.
pub mod animator;

/// Declarative ring/group/scene configuration, validation, RON scene
/// files, and the randomizer.
pub mod config;

/// Error types for invalid configuration and surface misuse.
pub mod errors;

/// Small shared angle helpers.
pub mod geometry;

/// The frame-to-surface renderer adapter.
pub mod render;

/// Group and scene composition over animators.
pub mod scene;

/// The 2D drawing surface trait and its SVG (and optional nannou) backends.
pub mod surface;

/// One stop shopping for the common types.
pub mod prelude {
    pub use crate::animator::{Frame, RingAnimator};
    pub use crate::config::{GroupConfig, RingConfig, SceneConfig};
    pub use crate::errors::{ConfigError, SurfaceError};
    pub use crate::render::FrameRenderer;
    pub use crate::scene::{RingGroup, Scene};
    pub use crate::surface::svg::SvgSurface;
    pub use crate::surface::Surface;
}
