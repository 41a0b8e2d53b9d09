//! Hex color parsing for board elements.

/// Parses a `#rrggbb` hex color into RGBA bytes with full alpha.
///
/// Returns `None` for anything that is not six hex digits (with or without
/// the leading `#`). Board colors come from untrusted documents, so a bad
/// color is simply absent rather than an error.
pub fn parse_hex_color(color: &str) -> Option<[u8; 4]> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b, 255])
}
