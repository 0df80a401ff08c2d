//! Montana Texture Backend
//!
//! This crate rasterizes every sprite in the Montana asset vocabulary from
//! parametric shapes. No image files are read; each texture is composed from an
//! ordered list of layers, and the same request always yields the same bytes.
//!
//! # Pipeline
//!
//! 1. [`recipe::layers`] selects the layer list for a sprite kind and pose.
//! 2. [`TextureSynthesizer`] composes the layers onto a transparent [`PixelGrid`]
//!    (last writer wins, no blending, out-of-bounds writes dropped).
//! 3. [`encode()`] flattens the grid into row-major RGBA8 bytes for the renderer.
//!
//! # Example
//!
//! ```
//! use montana_backend_texture::{encode, TextureSynthesizer};
//! use montana_spec::{SpriteKind, SpriteSpec};
//!
//! let synth = TextureSynthesizer::default();
//! let grid = synth.synthesize(&SpriteSpec::new(SpriteKind::Alan, 1));
//! let texture = encode(&grid);
//!
//! assert_eq!((texture.width, texture.height), (32, 64));
//! assert_eq!(texture.bytes.len(), 32 * 64 * 4);
//! ```
//!
//! # Determinism
//!
//! Texture synthesis takes no random input. Identical requests produce
//! byte-identical grids, which is what makes [`TextureCache`] safe.

pub mod cache;
pub mod color;
pub mod encode;
pub mod error;
pub mod grid;
pub mod layer;
pub mod png;
pub mod recipe;
pub mod shape;
pub mod synth;

// Re-export main types for convenience
pub use cache::TextureCache;
pub use color::Rgba8;
pub use encode::{encode, PixelFormat, TextureData};
pub use error::{TextureError, TextureResult};
pub use grid::PixelGrid;
pub use layer::{Layer, Paint};
pub use png::PngConfig;
pub use shape::{Rect, Rise, Shape};
pub use synth::TextureSynthesizer;
