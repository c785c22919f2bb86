//! Linear channel interpolation between two RGBA colors

use image::Rgba;

use crate::io::error::{Result, invalid_parameter};

/// Mix one channel: `a * weight + b * (1 - weight)`, clamped and rounded
///
/// A weight of 1 yields `a` exactly and a weight of 0 yields `b` exactly.
pub fn lerp_channel(weight: f64, a: u8, b: u8) -> u8 {
    let mixed = f64::from(a).mul_add(weight, f64::from(b) * (1.0 - weight));
    mixed.clamp(0.0, 255.0).round() as u8
}

/// Mix all four channels of two colors with the same weight
pub fn lerp_color(weight: f64, a: Rgba<u8>, b: Rgba<u8>) -> Rgba<u8> {
    let mut mixed = [0u8; 4];
    for ((out, &ca), &cb) in mixed.iter_mut().zip(&a.0).zip(&b.0) {
        *out = lerp_channel(weight, ca, cb);
    }
    Rgba(mixed)
}

/// Parse `r,g,b`, `r,g,b,a`, `#rrggbb` or `#rrggbbaa`
///
/// Alpha defaults to 255 when omitted.
///
/// # Errors
///
/// Returns `SkyError::InvalidParameter` if the text matches none of the
/// accepted forms or a component is out of range
pub fn parse_color(text: &str) -> Result<Rgba<u8>> {
    let trimmed = text.trim();
    let channels = match trimmed.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_decimal(trimmed),
    };

    match channels.as_deref() {
        Some(&[r, g, b]) => Ok(Rgba([r, g, b, u8::MAX])),
        Some(&[r, g, b, a]) => Ok(Rgba([r, g, b, a])),
        _ => Err(invalid_parameter(
            "color",
            &text,
            &"expected r,g,b[,a] or #rrggbb[aa]",
        )),
    }
}

fn parse_decimal(text: &str) -> Option<Vec<u8>> {
    text.split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect()
}

fn parse_hex(hex: &str) -> Option<Vec<u8>> {
    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|start| {
            hex.get(start..start + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        })
        .collect()
}
