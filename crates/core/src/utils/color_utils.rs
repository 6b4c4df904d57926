//! Conversions between `#rrggbb` hex strings and HSB (hue, saturation, brightness).
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and brightness in `[0, 1]`.

use crate::errors::{Result, TaxonomyError};

/// Converts HSB to a lowercase `#rrggbb` string.
pub fn to_hex(hue: f32, saturation: f32, brightness: f32) -> String {
    let (r, g, b) = hsb_to_rgb(hue / 360.0, saturation, brightness);
    rgb_to_hex(r, g, b)
}

/// Converts a `#rrggbb` string to `[hue, saturation, brightness]`.
pub fn to_hsb(hex: &str) -> Result<[f32; 3]> {
    let (r, g, b) = to_rgb(hex)?;
    let [h, s, v] = rgb_to_hsb(r, g, b);
    Ok([h * 360.0, s, v])
}

/// Parses a `#rrggbb` string (either case) into its channels.
pub fn to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let invalid = || TaxonomyError::InvalidColor(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid().into());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Sextant HSB to RGB conversion. `hue` is a fraction of the full circle.
fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    let scale = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = scale(brightness);
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as i32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    (scale(r), scale(g), scale(b))
}

/// Inverse of [`hsb_to_rgb`]; hue is returned as a fraction of the circle.
fn rgb_to_hsb(r: u8, g: u8, b: u8) -> [f32; 3] {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    if saturation == 0.0 {
        return [0.0, saturation, brightness];
    }

    let span = (cmax - cmin) as f32;
    let redc = (cmax - r) as f32 / span;
    let greenc = (cmax - g) as f32 / span;
    let bluec = (cmax - b) as f32 / span;

    let mut hue = if r == cmax {
        bluec - greenc
    } else if g == cmax {
        2.0 + redc - bluec
    } else {
        4.0 + greenc - redc
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    [hue, saturation, brightness]
}
