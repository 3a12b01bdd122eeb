#![forbid(unsafe_code)]

//! `vdsvg` converts Android vector drawables into standalone SVG documents.
//!
//! # Features
//!
//! - `render` (default): conversion + serialization (`vdsvg::render`)

pub use vdsvg_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use vdsvg_render::{
        ConvertState, GradientDefs, Scope, SvgElement, SvgWriteOptions, convert_drawable, write_svg,
    };

    use vdsvg_core::Result;

    /// Parses vector drawable XML and returns the serialized SVG document.
    ///
    /// Fails on the first error; no partial output is produced.
    pub fn render_svg(text: &str, options: &SvgWriteOptions) -> Result<String> {
        let drawable = vdsvg_core::parse_drawable_str(text)?;
        tracing::debug!(
            children = drawable.children.len(),
            viewport_width = %drawable.viewport_width,
            viewport_height = %drawable.viewport_height,
            "parsed drawable"
        );
        let root = convert_drawable(&drawable)?;
        Ok(write_svg(&root, options))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn render_svg_matches_round_trip_example() {
            let text = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android"
                android:viewportWidth="24" android:viewportHeight="24">
                <path android:pathData="M0 0L24 24" android:fillColor="#FF112233"/>
            </vector>"##;
            let svg = render_svg(text, &SvgWriteOptions::default()).unwrap();
            assert_eq!(
                svg,
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">\n  <path d=\"M0 0L24 24\" fill=\"#112233\"/>\n</svg>\n"
            );
        }

        #[test]
        fn render_svg_fails_fast_without_output() {
            let text = r#"<vector xmlns:android="http://schemas.android.com/apk/res/android"
                android:viewportWidth="24" android:viewportHeight="24">
                <path android:pathData="M0 0" android:fillColor="@color/x"/>
            </vector>"#;
            let err = render_svg(text, &SvgWriteOptions::default()).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::UnsupportedFeature);
        }
    }
}
