use crate::element::SvgElement;
use xmlwriter::{Indent, XmlWriter};

#[derive(Debug, Clone)]
pub struct SvgWriteOptions {
    /// Spaces per nesting level. `None` writes the document on a single line.
    pub indent: Option<u8>,
    /// When true, each attribute goes on its own line.
    pub attributes_indent: bool,
    /// When true, prepend an `<?xml ...?>` declaration.
    pub xml_declaration: bool,
}

impl Default for SvgWriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            attributes_indent: false,
            xml_declaration: false,
        }
    }
}

pub fn write_svg(root: &SvgElement, options: &SvgWriteOptions) -> String {
    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: false,
        indent: indent(options.indent),
        attributes_indent: if options.attributes_indent {
            indent(options.indent)
        } else {
            Indent::None
        },
    });
    if options.xml_declaration {
        xml.write_declaration();
    }
    write_element(root, &mut xml);
    let mut out = xml.end_document();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn indent(spaces: Option<u8>) -> Indent {
    match spaces {
        Some(n) if n > 0 => Indent::Spaces(n),
        _ => Indent::None,
    }
}

fn write_element(element: &SvgElement, xml: &mut XmlWriter) {
    xml.start_element(element.name);
    for (name, value) in &element.attributes {
        xml.write_attribute(name, &escape_xml(value));
    }
    for child in &element.children {
        write_element(child, xml);
    }
    xml.end_element();
}

// `xmlwriter` only escapes the quote character in attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
    out
}
