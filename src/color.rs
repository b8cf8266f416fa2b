//! Deterministic color derivation for gallery cards
//!
//! Maps a repository name to a stable RGB color with a minimum-contrast
//! floor so white card text stays readable.

/// A 24-bit RGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase 6-digit hex rendering without a leading `#`
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual luminance (ITU-R-style weighted channel sum)
    pub fn luminance(self) -> f64 {
        0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b)
    }
}

/// Luminance above which the color gets darkened for contrast
const LUMINANCE_CEILING: f64 = 180.0;

/// Amount subtracted from each channel when darkening
const DARKEN_STEP: u8 = 80;

/// Derive a stable color from a name string.
///
/// The hash replicates signed 32-bit wraparound semantics over UTF-16 code
/// units (`hash = code + hash * 31`), so the same name always produces the
/// same color. Colors brighter than the luminance ceiling are darkened by a
/// fixed step, floored at zero. Darkening is applied at most once even when
/// the darkened result is still bright.
pub fn derive_color(input: &str) -> Rgb {
    let mut hash: i32 = 0;
    for code in input.encode_utf16() {
        hash = i32::from(code).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    let channel = |i: u32| ((hash >> (i * 8)) & 0xFF) as u8;
    let mut color = Rgb::new(channel(0), channel(1), channel(2));

    if color.luminance() > LUMINANCE_CEILING {
        color = Rgb::new(
            color.r.saturating_sub(DARKEN_STEP),
            color.g.saturating_sub(DARKEN_STEP),
            color.b.saturating_sub(DARKEN_STEP),
        );
    }

    color
}
