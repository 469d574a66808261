//! Procedural padlock icons for the browser extension.
//!
//! [`icon_gen`] lays out and paints the icons; [`draw`] holds the raster
//! primitives it paints with.

pub mod draw;
pub mod icon_gen;
