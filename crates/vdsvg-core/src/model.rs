//! Typed intermediate model of a vector drawable.
//!
//! Numeric attributes are kept as the authored strings; only the converter interprets them,
//! so values it copies through reach the SVG output byte-for-byte.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawable {
    pub name: Option<String>,
    /// Intrinsic size (`android:width`/`android:height`, usually in `dp`). Not emitted.
    pub width: Option<String>,
    pub height: Option<String>,
    pub viewport_width: String,
    pub viewport_height: String,
    pub tint: Option<String>,
    pub tint_mode: Option<String>,
    pub auto_mirrored: Option<String>,
    pub alpha: Option<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Group(Group),
    Path(Path),
    ClipPath(ClipPath),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: Option<String>,
    pub rotation: Option<String>,
    pub pivot_x: Option<String>,
    pub pivot_y: Option<String>,
    pub scale_x: Option<String>,
    pub scale_y: Option<String>,
    pub translate_x: Option<String>,
    pub translate_y: Option<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub name: Option<String>,
    pub path_data: Option<String>,
    pub fill_color: Option<ColorSpec>,
    pub fill_alpha: Option<String>,
    pub stroke_color: Option<ColorSpec>,
    pub stroke_alpha: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke_line_cap: Option<String>,
    pub stroke_line_join: Option<String>,
    pub stroke_miter_limit: Option<String>,
    pub trim_path_start: Option<String>,
    pub trim_path_end: Option<String>,
    pub trim_path_offset: Option<String>,
    pub fill_type: Option<String>,
}

impl Path {
    /// Whether any trim bound was authored; the offset alone does not trim.
    pub fn has_trim(&self) -> bool {
        self.trim_path_start.is_some() || self.trim_path_end.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipPath {
    pub name: Option<String>,
    pub path_data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ColorSpec {
    /// A literal color token (`#AARRGGBB`, `#RRGGBB`, a named color, ...).
    Plain(String),
    Gradient(Gradient),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub start_color: Option<String>,
    pub center_color: Option<String>,
    pub end_color: Option<String>,
    pub tile_mode: Option<String>,
    pub geometry: GradientGeometry,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn kind(&self) -> GradientKind {
        match self.geometry {
            GradientGeometry::Linear { .. } => GradientKind::Linear,
            GradientGeometry::Radial { .. } => GradientKind::Radial,
            GradientGeometry::Sweep { .. } => GradientKind::Sweep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientKind {
    Linear,
    Radial,
    Sweep,
}

impl GradientKind {
    pub fn from_source(value: &str) -> Option<Self> {
        match value {
            "linear" => Some(Self::Linear),
            "radial" => Some(Self::Radial),
            "sweep" => Some(Self::Sweep),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GradientGeometry {
    #[serde(rename_all = "camelCase")]
    Linear {
        start_x: Option<String>,
        start_y: Option<String>,
        end_x: Option<String>,
        end_y: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Radial {
        center_x: Option<String>,
        center_y: Option<String>,
        radius: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Sweep {
        center_x: Option<String>,
        center_y: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: Option<String>,
    pub color: Option<String>,
}
