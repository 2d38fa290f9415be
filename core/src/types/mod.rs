//! Core type definitions for secondary capture conversion
//!
//! This module provides the value types passed into and out of the engine:
//! - [`RasterFrame`]: A decoded page or image with its pixel buffer
//! - [`ColorModel`]: The frame's color model, with [`ChannelLayout`] and [`Palette`]
//! - [`PhotometricInterpretation`]: The encoding chosen for the output pixels
//! - [`SourceKind`]: Whether frames came from a paged document or a single image

mod color;
mod enums;
mod frame;

pub use color::{ChannelLayout, ColorModel, Palette};
pub use enums::{PhotometricInterpretation, SourceKind};
pub use frame::RasterFrame;
