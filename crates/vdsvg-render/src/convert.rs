//! Node tree → SVG element tree.
//!
//! Two kinds of state flow through the walk:
//! - [`ConvertState`] is document-wide and passed by `&mut` everywhere: the registry of every
//!   emitted id, the anonymous clip counter, gradient definitions.
//! - [`Scope`] belongs to one sibling sequence. A `<clip-path>` sets its active clip for the
//!   siblings after it; a `<group>` starts its children with a fresh, empty scope.

use crate::color::{ColorTarget, GradientDefs, resolve_color};
use crate::element::SvgElement;
use crate::ids::IdRegistry;
use crate::number::{fmt, parse_number};
use vdsvg_core::{ClipPath, Group, Node, Path, Result};

#[derive(Debug, Default)]
pub struct ConvertState {
    ids: IdRegistry,
    next_anonymous_clip: usize,
    pub gradients: GradientDefs,
}

impl ConvertState {
    /// Reserves an id emitted outside the converted content (the root `<svg id>`), so clips
    /// and gradients steer around it.
    pub fn reserve_id(&mut self, id: &str) {
        self.ids.reserve(id);
    }

    /// Picks the id for a clip path and registers it. Unnamed clips get `clip_<n>`; an id
    /// already used anywhere in the document gets the first free `_1`, `_2`, ... suffix.
    pub fn allocate_clip_id(&mut self, name: Option<&str>) -> String {
        match name {
            Some(name) => self.ids.claim(name),
            None => {
                let base = format!("clip_{}", self.next_anonymous_clip);
                self.next_anonymous_clip += 1;
                self.ids.claim(&base)
            }
        }
    }

    pub fn into_gradients(self) -> GradientDefs {
        self.gradients
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub active_clip: Option<String>,
}

/// Converts one sibling sequence in document order under a fresh scope.
pub fn convert_children(nodes: &[Node], state: &mut ConvertState) -> Result<Vec<SvgElement>> {
    let mut scope = Scope::default();
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(element) = convert_node(node, &mut scope, state)? {
            out.push(element);
        }
    }
    Ok(out)
}

/// Converts a single node. `None` means the node was pruned (no geometry, or an empty group).
pub fn convert_node(
    node: &Node,
    scope: &mut Scope,
    state: &mut ConvertState,
) -> Result<Option<SvgElement>> {
    match node {
        Node::Group(group) => convert_group(group, scope, state),
        Node::Path(path) => convert_path(path, scope, state),
        Node::ClipPath(clip) => Ok(convert_clip_path(clip, scope, state)),
    }
}

fn convert_group(
    group: &Group,
    scope: &Scope,
    state: &mut ConvertState,
) -> Result<Option<SvgElement>> {
    let children = convert_children(&group.children, state)?;
    if children.is_empty() {
        tracing::debug!(name = ?group.name, "dropping empty group");
        return Ok(None);
    }

    let mut g = SvgElement::new("g");
    if let Some(clip) = &scope.active_clip {
        g.set("clip-path", clip_url(clip));
    }
    if let Some(transform) = group_transform(group) {
        g.set("transform", transform);
    }
    g.children = children;
    Ok(Some(g))
}

/// `translate`, then `rotate`, then `scale`; each step only when authored.
fn group_transform(group: &Group) -> Option<String> {
    let mut parts = Vec::new();

    if group.translate_x.is_some() || group.translate_y.is_some() {
        parts.push(format!(
            "translate({} {})",
            group.translate_x.as_deref().unwrap_or("0"),
            group.translate_y.as_deref().unwrap_or("0"),
        ));
    }

    if let Some(rotation) = &group.rotation {
        if group.pivot_x.is_some() || group.pivot_y.is_some() {
            parts.push(format!(
                "rotate({rotation} {} {})",
                group.pivot_x.as_deref().unwrap_or("0"),
                group.pivot_y.as_deref().unwrap_or("0"),
            ));
        } else {
            parts.push(format!("rotate({rotation})"));
        }
    }

    if group.scale_x.is_some() || group.scale_y.is_some() {
        parts.push(format!(
            "scale({} {})",
            group.scale_x.as_deref().unwrap_or("1"),
            group.scale_y.as_deref().unwrap_or("1"),
        ));
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}

fn convert_path(
    path: &Path,
    scope: &Scope,
    state: &mut ConvertState,
) -> Result<Option<SvgElement>> {
    let Some(d) = &path.path_data else {
        tracing::debug!(name = ?path.name, "dropping path without pathData");
        return Ok(None);
    };

    let mut el = SvgElement::new("path");
    el.set("d", d.as_str());
    if let Some(clip) = &scope.active_clip {
        el.set("clip-path", clip_url(clip));
    }

    if let Some(fill) = &path.fill_color {
        resolve_color(
            fill,
            path.fill_alpha.as_deref(),
            ColorTarget::FILL,
            &mut el,
            &mut state.gradients,
            &mut state.ids,
        )?;
    }
    if let Some(fill_type) = &path.fill_type {
        el.set("fill-rule", fill_type.to_lowercase());
    }

    if let Some(stroke) = &path.stroke_color {
        resolve_color(
            stroke,
            path.stroke_alpha.as_deref(),
            ColorTarget::STROKE,
            &mut el,
            &mut state.gradients,
            &mut state.ids,
        )?;
    }
    el.set_opt("stroke-width", path.stroke_width.as_deref());
    el.set_opt("stroke-linecap", path.stroke_line_cap.as_deref());
    el.set_opt("stroke-linejoin", path.stroke_line_join.as_deref());
    el.set_opt("stroke-miterlimit", path.stroke_miter_limit.as_deref());

    apply_trim(path, &mut el)?;
    Ok(Some(el))
}

/// Emulates trimPathStart/End with a dash pattern over a unit `pathLength`.
fn apply_trim(path: &Path, el: &mut SvgElement) -> Result<()> {
    if !path.has_trim() {
        return Ok(());
    }
    let start = match &path.trim_path_start {
        Some(raw) => parse_number("trimPathStart", raw)?,
        None => 0.0,
    };
    let end = match &path.trim_path_end {
        Some(raw) => parse_number("trimPathEnd", raw)?,
        None => 1.0,
    };
    if start > end {
        // Wrap-around selections have no single-dash equivalent.
        tracing::debug!(start, end, "skipping wrap-around trim");
        return Ok(());
    }

    el.set("pathLength", "1");
    el.set(
        "stroke-dasharray",
        format!("0 {} {} {}", fmt(start), fmt(end - start), fmt(1.0 - end)),
    );
    el.set_opt("stroke-dashoffset", path.trim_path_offset.as_deref());
    Ok(())
}

fn convert_clip_path(
    clip: &ClipPath,
    scope: &mut Scope,
    state: &mut ConvertState,
) -> Option<SvgElement> {
    let Some(d) = &clip.path_data else {
        tracing::debug!(name = ?clip.name, "dropping clip-path without pathData");
        return None;
    };

    let id = state.allocate_clip_id(clip.name.as_deref());
    tracing::trace!(%id, "clip-path now active for following siblings");
    scope.active_clip = Some(id.clone());

    let mut shape = SvgElement::new("path");
    shape.set("d", d.as_str());
    let mut el = SvgElement::new("clipPath");
    el.set("id", id);
    el.push(shape);
    Some(el)
}

fn clip_url(id: &str) -> String {
    format!("url(#{id})")
}
