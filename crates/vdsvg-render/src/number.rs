use vdsvg_core::{Error, Result};

/// Shortest round-trip form, matching JavaScript number-to-string.
pub(crate) fn fmt(mut v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v == -0.0 {
        v = 0.0;
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

pub(crate) fn parse_number(attribute: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidNumber {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        }),
    }
}
