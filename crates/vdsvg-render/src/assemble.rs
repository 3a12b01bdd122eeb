use crate::color::GradientDefs;
use crate::element::SvgElement;
use vdsvg_core::Drawable;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Builds the `<svg>` root: converted content first, then one `<defs>` when any gradient was
/// registered.
pub fn assemble(
    drawable: &Drawable,
    children: Vec<SvgElement>,
    gradients: GradientDefs,
) -> SvgElement {
    let width = drawable.viewport_width.as_str();
    let height = drawable.viewport_height.as_str();

    let mut svg = SvgElement::new("svg");
    svg.set("xmlns", SVG_NS);
    svg.set("width", width);
    svg.set("height", height);
    svg.set("viewBox", format!("0 0 {width} {height}"));
    svg.set_opt("id", drawable.name.as_deref());
    svg.set_opt("opacity", drawable.alpha.as_deref());

    svg.children = children;
    if !gradients.is_empty() {
        let mut defs = SvgElement::new("defs");
        defs.children = gradients.into_elements();
        svg.push(defs);
    }
    svg
}
