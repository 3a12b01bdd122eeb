//! Color and gradient resolution.
//!
//! A [`ColorSpec`] becomes a color attribute plus an optional opacity attribute on the target
//! element. Gradients additionally register a definition in the document-wide [`GradientDefs`];
//! every use gets its own definition, identical gradients are not merged.

use crate::element::SvgElement;
use crate::ids::IdRegistry;
use crate::number::{fmt, parse_number};
use vdsvg_core::{ColorSpec, Error, Gradient, GradientGeometry, Result};

/// Pair of attribute names a resolved color is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTarget {
    pub color: &'static str,
    pub opacity: &'static str,
}

impl ColorTarget {
    pub const FILL: Self = Self {
        color: "fill",
        opacity: "fill-opacity",
    };
    pub const STROKE: Self = Self {
        color: "stroke",
        opacity: "stroke-opacity",
    };
    pub const STOP: Self = Self {
        color: "stop-color",
        opacity: "stop-opacity",
    };
}

/// Gradient definitions in registration order, emitted once inside `<defs>`.
#[derive(Debug, Clone, Default)]
pub struct GradientDefs {
    items: Vec<SvgElement>,
}

impl GradientDefs {
    /// Claims `gradient_<n>` for the next definition, counting up from the number already
    /// registered and skipping ids taken elsewhere in the document.
    pub fn allocate_id(&self, ids: &mut IdRegistry) -> String {
        let mut n = self.items.len();
        loop {
            let id = format!("gradient_{n}");
            if ids.reserve(&id) {
                return id;
            }
            n += 1;
        }
    }

    pub fn push(&mut self, definition: SvgElement) {
        self.items.push(definition);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_elements(self) -> Vec<SvgElement> {
        self.items
    }
}

pub fn resolve_color(
    spec: &ColorSpec,
    opacity_override: Option<&str>,
    target: ColorTarget,
    element: &mut SvgElement,
    defs: &mut GradientDefs,
    ids: &mut IdRegistry,
) -> Result<()> {
    match spec {
        ColorSpec::Plain(color) => resolve_plain(color, opacity_override, target, element),
        ColorSpec::Gradient(gradient) => {
            resolve_gradient(gradient, opacity_override, target, element, defs, ids)
        }
    }
}

fn resolve_plain(
    color: &str,
    opacity_override: Option<&str>,
    target: ColorTarget,
    element: &mut SvgElement,
) -> Result<()> {
    if color.starts_with('@') || color.starts_with('?') {
        return Err(Error::UnsupportedColorReference {
            color: color.to_string(),
        });
    }

    let Some((alpha, rgb)) = split_argb(color) else {
        element.set(target.color, color);
        if let Some(opacity) = opacity_override {
            element.set(target.opacity, opacity);
        }
        return Ok(());
    };

    element.set(target.color, format!("#{rgb}"));
    let alpha = f64::from(alpha) / 255.0;
    match opacity_override {
        Some(raw) => {
            let factor = parse_number(target.opacity, raw)?;
            element.set(target.opacity, fmt(alpha * factor));
        }
        // Fully opaque: leave the attribute at its SVG default.
        None if alpha >= 1.0 => {}
        None => element.set(target.opacity, fmt(alpha)),
    }
    Ok(())
}

/// Splits `#AARRGGBB` into the alpha byte and the `RRGGBB` digits.
fn split_argb(color: &str) -> Option<(u8, &str)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let alpha = u8::from_str_radix(&hex[..2], 16).ok()?;
    Some((alpha, &hex[2..]))
}

fn resolve_gradient(
    gradient: &Gradient,
    opacity_override: Option<&str>,
    target: ColorTarget,
    element: &mut SvgElement,
    defs: &mut GradientDefs,
    ids: &mut IdRegistry,
) -> Result<()> {
    let (name, geometry) = match &gradient.geometry {
        GradientGeometry::Linear {
            start_x,
            start_y,
            end_x,
            end_y,
        } => (
            "linearGradient",
            vec![("x1", start_x), ("y1", start_y), ("x2", end_x), ("y2", end_y)],
        ),
        GradientGeometry::Radial {
            center_x,
            center_y,
            radius,
        } => (
            "radialGradient",
            vec![("cx", center_x), ("cy", center_y), ("r", radius)],
        ),
        GradientGeometry::Sweep { .. } => return Err(Error::UnsupportedSweepGradient),
    };

    let id = defs.allocate_id(ids);
    let mut definition = SvgElement::new(name);
    definition.set("id", id.as_str());
    for (attribute, value) in geometry {
        definition.set_opt(attribute, value.as_deref());
    }
    definition.set("gradientUnits", "userSpaceOnUse");

    if let Some(tile_mode) = &gradient.tile_mode {
        tracing::debug!(%id, tile_mode, "ignoring gradient tileMode");
    }

    if gradient.stops.is_empty() {
        let convenience = [
            ("0%", &gradient.start_color),
            ("50%", &gradient.center_color),
            ("100%", &gradient.end_color),
        ];
        for (offset, color) in convenience {
            let Some(color) = color else {
                continue;
            };
            let mut stop = SvgElement::new("stop");
            stop.set("offset", offset);
            resolve_plain(color, None, ColorTarget::STOP, &mut stop)?;
            definition.push(stop);
        }
    } else {
        for item in &gradient.stops {
            let mut stop = SvgElement::new("stop");
            stop.set_opt("offset", item.offset.as_deref());
            if let Some(color) = &item.color {
                resolve_plain(color, None, ColorTarget::STOP, &mut stop)?;
            }
            definition.push(stop);
        }
    }

    tracing::debug!(%id, kind = ?gradient.kind(), stops = definition.children.len(), "registered gradient");
    defs.push(definition);

    element.set(target.color, format!("url(#{id})"));
    // Stops carry their own opacity; the override is written as-is.
    if let Some(opacity) = opacity_override {
        element.set(target.opacity, opacity);
    }
    Ok(())
}
