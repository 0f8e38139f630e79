//! Grisaille mask authoring - selection geometry and mask rasterization
//!
//! This crate provides the core of the editing front-end:
//! - [`types::SelectionPath`] - A user-drawn path in display coordinates
//! - [`space::CanvasMapping`] - Display-to-output coordinate mapping
//! - [`surface::MaskSurface`] - Binary mask pixel buffer
//! - [`raster`] - Path-to-mask rasterization
//! - [`encode`] - PNG encoding of finished masks
//! - [`session`] - Pointer-driven drawing session
//! - [`history`] - Bounded undo history of image versions

pub mod constants;
pub mod encode;
pub mod geometry;
pub mod history;
pub mod raster;
pub mod session;
pub mod space;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use encode::*;
pub use geometry::*;
pub use history::*;
pub use raster::*;
pub use session::*;
pub use space::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
