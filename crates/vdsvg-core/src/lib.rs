#![forbid(unsafe_code)]

//! Android vector drawable parser + typed document model (headless).
//!
//! The parser walks a `roxmltree` document and builds a [`Drawable`]; conversion to SVG lives
//! in `vdsvg-render`. All fallible operations share the [`Error`] type, whose [`ErrorKind`]
//! classifies failures as structural, unknown-variant, or unsupported-feature.

pub mod error;
pub mod model;
pub mod parse;

pub use error::{Error, ErrorKind, Result};
pub use model::{
    ClipPath, ColorSpec, Drawable, Gradient, GradientGeometry, GradientKind, GradientStop, Group,
    Node, Path,
};
pub use parse::{AAPT_NS, ANDROID_NS, parse_drawable, parse_drawable_str, parse_gradient, parse_node};

#[cfg(test)]
mod tests;
