use crate::model::{
    ClipPath, ColorSpec, Drawable, Gradient, GradientGeometry, GradientKind, GradientStop, Group,
    Node, Path,
};
use crate::{Error, Result};
use roxmltree::Document;

pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
pub const AAPT_NS: &str = "http://schemas.android.com/aapt";

type XmlNode<'a, 'input> = roxmltree::Node<'a, 'input>;

/// Attributes that are read for completeness but have no SVG rendition.
const IGNORED_VECTOR_ATTRS: [&str; 3] = ["tint", "tintMode", "autoMirrored"];

pub fn parse_drawable_str(text: &str) -> Result<Drawable> {
    let doc = Document::parse(text)?;
    parse_drawable(&doc)
}

pub fn parse_drawable(doc: &Document<'_>) -> Result<Drawable> {
    let root = doc.root_element();
    if root.tag_name().name() != "vector" || root.tag_name().namespace().is_some() {
        return Err(Error::UnexpectedRoot {
            found: display_name(root),
        });
    }

    let Some(viewport_width) = android_attr(root, "viewportWidth") else {
        return Err(Error::MissingAttribute {
            element: "vector",
            attribute: "viewportWidth",
        });
    };
    let Some(viewport_height) = android_attr(root, "viewportHeight") else {
        return Err(Error::MissingAttribute {
            element: "vector",
            attribute: "viewportHeight",
        });
    };

    for name in IGNORED_VECTOR_ATTRS {
        if let Some(value) = root.attribute((ANDROID_NS, name)) {
            tracing::debug!(attribute = name, value, "ignoring vector attribute");
        }
    }

    let children = element_children(root)
        .map(parse_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(Drawable {
        name: android_attr(root, "name"),
        width: android_attr(root, "width"),
        height: android_attr(root, "height"),
        viewport_width,
        viewport_height,
        tint: android_attr(root, "tint"),
        tint_mode: android_attr(root, "tintMode"),
        auto_mirrored: android_attr(root, "autoMirrored"),
        alpha: android_attr(root, "alpha"),
        children,
    })
}

/// Parses one child of `<vector>` or `<group>`.
pub fn parse_node(node: XmlNode<'_, '_>) -> Result<Node> {
    let tag = node.tag_name();
    tracing::trace!(element = tag.name(), "parsing node");
    match (tag.namespace(), tag.name()) {
        (None, "group") => parse_group(node).map(Node::Group),
        (None, "path") => parse_path(node).map(Node::Path),
        (None, "clip-path") => Ok(Node::ClipPath(ClipPath {
            name: android_attr(node, "name"),
            path_data: android_attr(node, "pathData"),
        })),
        _ => Err(unknown_element(node)),
    }
}

fn parse_group(node: XmlNode<'_, '_>) -> Result<Group> {
    let children = element_children(node)
        .map(parse_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(Group {
        name: android_attr(node, "name"),
        rotation: android_attr(node, "rotation"),
        pivot_x: android_attr(node, "pivotX"),
        pivot_y: android_attr(node, "pivotY"),
        scale_x: android_attr(node, "scaleX"),
        scale_y: android_attr(node, "scaleY"),
        translate_x: android_attr(node, "translateX"),
        translate_y: android_attr(node, "translateY"),
        children,
    })
}

fn parse_path(node: XmlNode<'_, '_>) -> Result<Path> {
    let mut fill_gradient: Option<Gradient> = None;
    let mut stroke_gradient: Option<Gradient> = None;

    for child in element_children(node) {
        let tag = child.tag_name();
        if tag.namespace() != Some(AAPT_NS) || tag.name() != "attr" {
            return Err(unknown_element(child));
        }
        let target = child.attribute("name").unwrap_or_default();
        let slot = match android_target(child, target) {
            Some("fillColor") => &mut fill_gradient,
            Some("strokeColor") => &mut stroke_gradient,
            _ => {
                return Err(Error::UnknownAaptTarget {
                    target: target.to_string(),
                });
            }
        };
        if slot.is_some() {
            return Err(Error::DuplicateGradient {
                target: target.to_string(),
            });
        }

        let elements = element_children(child).collect::<Vec<_>>();
        let [gradient] = elements.as_slice() else {
            return Err(Error::GradientCount {
                target: target.to_string(),
                count: elements.len(),
            });
        };
        if gradient.tag_name().name() != "gradient" || gradient.tag_name().namespace().is_some() {
            return Err(unknown_element(*gradient));
        }
        *slot = Some(parse_gradient(*gradient)?);
    }

    // An inline gradient replaces a plain color attribute of the same name.
    let fill_color = fill_gradient
        .map(ColorSpec::Gradient)
        .or_else(|| android_attr(node, "fillColor").map(ColorSpec::Plain));
    let stroke_color = stroke_gradient
        .map(ColorSpec::Gradient)
        .or_else(|| android_attr(node, "strokeColor").map(ColorSpec::Plain));

    Ok(Path {
        name: android_attr(node, "name"),
        path_data: android_attr(node, "pathData"),
        fill_color,
        fill_alpha: android_attr(node, "fillAlpha"),
        stroke_color,
        stroke_alpha: android_attr(node, "strokeAlpha"),
        stroke_width: android_attr(node, "strokeWidth"),
        stroke_line_cap: android_attr(node, "strokeLineCap"),
        stroke_line_join: android_attr(node, "strokeLineJoin"),
        stroke_miter_limit: android_attr(node, "strokeMiterLimit"),
        trim_path_start: android_attr(node, "trimPathStart"),
        trim_path_end: android_attr(node, "trimPathEnd"),
        trim_path_offset: android_attr(node, "trimPathOffset"),
        fill_type: android_attr(node, "fillType"),
    })
}

/// Parses a `<gradient>` element, dispatching geometry on its own `android:type`.
/// Local name of a `prefix:name` attribute target whose prefix is bound to the android
/// namespace in `node`'s scope.
fn android_target<'t>(node: XmlNode<'_, '_>, target: &'t str) -> Option<&'t str> {
    let (prefix, local) = target.split_once(':')?;
    (node.lookup_namespace_uri(Some(prefix)) == Some(ANDROID_NS)).then_some(local)
}

pub fn parse_gradient(node: XmlNode<'_, '_>) -> Result<Gradient> {
    let Some(gradient_type) = node.attribute((ANDROID_NS, "type")) else {
        return Err(Error::MissingAttribute {
            element: "gradient",
            attribute: "type",
        });
    };
    let Some(kind) = GradientKind::from_source(gradient_type) else {
        return Err(Error::UnknownGradientType {
            gradient_type: gradient_type.to_string(),
        });
    };

    let geometry = match kind {
        GradientKind::Linear => GradientGeometry::Linear {
            start_x: android_attr(node, "startX"),
            start_y: android_attr(node, "startY"),
            end_x: android_attr(node, "endX"),
            end_y: android_attr(node, "endY"),
        },
        GradientKind::Radial => GradientGeometry::Radial {
            center_x: android_attr(node, "centerX"),
            center_y: android_attr(node, "centerY"),
            radius: android_attr(node, "gradientRadius"),
        },
        GradientKind::Sweep => GradientGeometry::Sweep {
            center_x: android_attr(node, "centerX"),
            center_y: android_attr(node, "centerY"),
        },
    };

    let mut stops = Vec::new();
    for item in element_children(node) {
        if item.tag_name().name() != "item" || item.tag_name().namespace().is_some() {
            return Err(unknown_element(item));
        }
        stops.push(GradientStop {
            offset: android_attr(item, "offset"),
            color: android_attr(item, "color"),
        });
    }

    Ok(Gradient {
        start_color: android_attr(node, "startColor"),
        center_color: android_attr(node, "centerColor"),
        end_color: android_attr(node, "endColor"),
        tile_mode: android_attr(node, "tileMode"),
        geometry,
        stops,
    })
}

fn android_attr(node: XmlNode<'_, '_>, name: &str) -> Option<String> {
    node.attribute((ANDROID_NS, name)).map(str::to_string)
}

fn element_children<'a, 'input>(
    node: XmlNode<'a, 'input>,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn unknown_element(node: XmlNode<'_, '_>) -> Error {
    Error::UnknownElement {
        element: display_name(node),
        parent: node
            .parent_element()
            .map(display_name)
            .unwrap_or_default(),
    }
}

fn display_name(node: XmlNode<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|ns| node.lookup_prefix(ns)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
        _ => tag.name().to_string(),
    }
}
