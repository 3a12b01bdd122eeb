#![forbid(unsafe_code)]

//! Converts a parsed [`vdsvg_core::Drawable`] into an SVG element tree and serializes it.

pub mod assemble;
pub mod color;
pub mod convert;
pub mod element;
pub mod ids;
mod number;
pub mod writer;

pub use assemble::{SVG_NS, assemble};
pub use color::{ColorTarget, GradientDefs, resolve_color};
pub use convert::{ConvertState, Scope, convert_children, convert_node};
pub use element::SvgElement;
pub use ids::IdRegistry;
pub use vdsvg_core::{Error, ErrorKind, Result};
pub use writer::{SvgWriteOptions, write_svg};

use vdsvg_core::Drawable;

/// Runs the converter over the whole drawable and wraps the result in the `<svg>` root.
pub fn convert_drawable(drawable: &Drawable) -> Result<SvgElement> {
    let mut state = ConvertState::default();
    if let Some(name) = &drawable.name {
        state.reserve_id(name);
    }
    let children = convert_children(&drawable.children, &mut state)?;
    Ok(assemble(drawable, children, state.into_gradients()))
}
