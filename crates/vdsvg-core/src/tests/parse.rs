use crate::*;
use serde_json::json;

const HEADER: &str = r#"xmlns:android="http://schemas.android.com/apk/res/android" xmlns:aapt="http://schemas.android.com/aapt""#;

fn parse(body: &str) -> Drawable {
    let text = format!(
        r#"<vector {HEADER} android:viewportWidth="24" android:viewportHeight="24">{body}</vector>"#
    );
    parse_drawable_str(&text).unwrap()
}

#[test]
fn parse_drawable_reads_root_attributes() {
    let text = format!(
        r#"<vector {HEADER} android:name="icon" android:width="48dp" android:height="48dp"
            android:viewportWidth="24" android:viewportHeight="12" android:alpha="0.5"
            android:tint="?attr/colorControlNormal" android:tintMode="src_in"/>"#
    );
    let drawable = parse_drawable_str(&text).unwrap();
    assert_eq!(
        serde_json::to_value(&drawable).unwrap(),
        json!({
            "name": "icon",
            "width": "48dp",
            "height": "48dp",
            "viewportWidth": "24",
            "viewportHeight": "12",
            "tint": "?attr/colorControlNormal",
            "tintMode": "src_in",
            "autoMirrored": null,
            "alpha": "0.5",
            "children": []
        })
    );
}

#[test]
fn parse_path_keeps_optional_fields_unset() {
    let drawable = parse(r##"<path android:pathData="M0 0L24 24" android:fillColor="#FF112233"/>"##);
    assert_eq!(
        drawable.children,
        vec![Node::Path(Path {
            path_data: Some("M0 0L24 24".to_string()),
            fill_color: Some(ColorSpec::Plain("#FF112233".to_string())),
            ..Default::default()
        })]
    );
}

#[test]
fn parse_path_reads_stroke_and_trim_attributes() {
    let drawable = parse(
        r#"<path android:name="p" android:pathData="M0 0" android:strokeColor="red"
            android:strokeAlpha="0.3" android:strokeWidth="2" android:strokeLineCap="round"
            android:strokeLineJoin="bevel" android:strokeMiterLimit="4"
            android:trimPathStart="0.1" android:trimPathEnd="0.9" android:trimPathOffset="0.2"
            android:fillType="evenOdd" android:fillAlpha="0.4"/>"#,
    );
    let Node::Path(path) = &drawable.children[0] else {
        panic!("expected path");
    };
    assert_eq!(path.name.as_deref(), Some("p"));
    assert_eq!(path.stroke_color, Some(ColorSpec::Plain("red".to_string())));
    assert_eq!(path.stroke_alpha.as_deref(), Some("0.3"));
    assert_eq!(path.stroke_width.as_deref(), Some("2"));
    assert_eq!(path.stroke_line_cap.as_deref(), Some("round"));
    assert_eq!(path.stroke_line_join.as_deref(), Some("bevel"));
    assert_eq!(path.stroke_miter_limit.as_deref(), Some("4"));
    assert_eq!(path.trim_path_start.as_deref(), Some("0.1"));
    assert_eq!(path.trim_path_end.as_deref(), Some("0.9"));
    assert_eq!(path.trim_path_offset.as_deref(), Some("0.2"));
    assert_eq!(path.fill_type.as_deref(), Some("evenOdd"));
    assert_eq!(path.fill_alpha.as_deref(), Some("0.4"));
    assert!(path.has_trim());
}

#[test]
fn parse_group_preserves_child_order_and_nesting() {
    let drawable = parse(
        r#"<group android:name="outer" android:rotation="45" android:pivotX="12">
             <clip-path android:name="c" android:pathData="M0 0h10v10z"/>
             <path android:pathData="M1 1"/>
             <group android:translateY="3"><path/></group>
           </group>"#,
    );
    assert_eq!(
        serde_json::to_value(&drawable.children).unwrap(),
        json!([{
            "type": "group",
            "name": "outer",
            "rotation": "45",
            "pivotX": "12",
            "pivotY": null,
            "scaleX": null,
            "scaleY": null,
            "translateX": null,
            "translateY": null,
            "children": [
                { "type": "clipPath", "name": "c", "pathData": "M0 0h10v10z" },
                {
                    "type": "path",
                    "name": null,
                    "pathData": "M1 1",
                    "fillColor": null,
                    "fillAlpha": null,
                    "strokeColor": null,
                    "strokeAlpha": null,
                    "strokeWidth": null,
                    "strokeLineCap": null,
                    "strokeLineJoin": null,
                    "strokeMiterLimit": null,
                    "trimPathStart": null,
                    "trimPathEnd": null,
                    "trimPathOffset": null,
                    "fillType": null
                },
                {
                    "type": "group",
                    "name": null,
                    "rotation": null,
                    "pivotX": null,
                    "pivotY": null,
                    "scaleX": null,
                    "scaleY": null,
                    "translateX": null,
                    "translateY": "3",
                    "children": [{
                        "type": "path",
                        "name": null,
                        "pathData": null,
                        "fillColor": null,
                        "fillAlpha": null,
                        "strokeColor": null,
                        "strokeAlpha": null,
                        "strokeWidth": null,
                        "strokeLineCap": null,
                        "strokeLineJoin": null,
                        "strokeMiterLimit": null,
                        "trimPathStart": null,
                        "trimPathEnd": null,
                        "trimPathOffset": null,
                        "fillType": null
                    }]
                }
            ]
        }])
    );
}

#[test]
fn parse_linear_gradient_with_items_in_document_order() {
    let drawable = parse(
        r##"<path android:pathData="M0 0" android:fillColor="#FFFFFFFF">
             <aapt:attr name="android:fillColor">
               <gradient android:type="linear" android:startX="0" android:startY="1"
                   android:endX="24" android:endY="23" android:startColor="#FF000000"
                   android:tileMode="mirror">
                 <item android:offset="0.0" android:color="#FFFF0000"/>
                 <item android:offset="0.7" android:color="#8000FF00"/>
                 <item android:color="blue"/>
               </gradient>
             </aapt:attr>
           </path>"##,
    );
    let Node::Path(path) = &drawable.children[0] else {
        panic!("expected path");
    };
    let Some(ColorSpec::Gradient(gradient)) = &path.fill_color else {
        panic!("inline gradient should replace the plain fill color");
    };
    assert_eq!(gradient.kind(), GradientKind::Linear);
    assert_eq!(
        gradient.geometry,
        GradientGeometry::Linear {
            start_x: Some("0".to_string()),
            start_y: Some("1".to_string()),
            end_x: Some("24".to_string()),
            end_y: Some("23".to_string()),
        }
    );
    assert_eq!(gradient.start_color.as_deref(), Some("#FF000000"));
    assert_eq!(gradient.tile_mode.as_deref(), Some("mirror"));
    let offsets = gradient
        .stops
        .iter()
        .map(|s| s.offset.as_deref())
        .collect::<Vec<_>>();
    assert_eq!(offsets, vec![Some("0.0"), Some("0.7"), None]);
    assert_eq!(gradient.stops[2].color.as_deref(), Some("blue"));
}

#[test]
fn parse_gradient_dispatches_radial_and_sweep_on_own_type() {
    let drawable = parse(
        r#"<path android:pathData="M0 0">
             <aapt:attr name="android:fillColor">
               <gradient android:type="radial" android:centerX="12" android:centerY="10"
                   android:gradientRadius="8" android:startColor="red" android:endColor="blue"/>
             </aapt:attr>
             <aapt:attr name="android:strokeColor">
               <gradient android:type="sweep" android:centerX="1" android:centerY="2"/>
             </aapt:attr>
           </path>"#,
    );
    let Node::Path(path) = &drawable.children[0] else {
        panic!("expected path");
    };
    let Some(ColorSpec::Gradient(fill)) = &path.fill_color else {
        panic!("expected fill gradient");
    };
    assert_eq!(
        fill.geometry,
        GradientGeometry::Radial {
            center_x: Some("12".to_string()),
            center_y: Some("10".to_string()),
            radius: Some("8".to_string()),
        }
    );
    let Some(ColorSpec::Gradient(stroke)) = &path.stroke_color else {
        panic!("expected stroke gradient");
    };
    assert_eq!(stroke.kind(), GradientKind::Sweep);
    assert_eq!(
        stroke.geometry,
        GradientGeometry::Sweep {
            center_x: Some("1".to_string()),
            center_y: Some("2".to_string()),
        }
    );
}

#[test]
fn parse_inline_target_resolves_any_android_prefix() {
    let text = r#"<vector xmlns:a="http://schemas.android.com/apk/res/android"
        xmlns:x="http://schemas.android.com/aapt"
        a:viewportWidth="24" a:viewportHeight="24">
        <path a:pathData="M0 0">
          <x:attr name="a:fillColor">
            <gradient a:type="linear" a:startColor="red" a:endColor="blue"/>
          </x:attr>
          <x:attr name="a:strokeColor">
            <gradient a:type="radial" a:gradientRadius="4"/>
          </x:attr>
        </path>
    </vector>"#;
    let drawable = parse_drawable_str(text).unwrap();
    let Node::Path(path) = &drawable.children[0] else {
        panic!("expected path");
    };
    let Some(ColorSpec::Gradient(fill)) = &path.fill_color else {
        panic!("expected fill gradient");
    };
    assert_eq!(fill.kind(), GradientKind::Linear);
    assert_eq!(fill.start_color.as_deref(), Some("red"));
    let Some(ColorSpec::Gradient(stroke)) = &path.stroke_color else {
        panic!("expected stroke gradient");
    };
    assert_eq!(stroke.kind(), GradientKind::Radial);
}

#[test]
fn parse_ignores_text_and_comments() {
    let drawable = parse("<!-- icon -->\n  text\n<path android:pathData=\"M0 0\"/>");
    assert_eq!(drawable.children.len(), 1);
}
