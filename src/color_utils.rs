//! Color conversion helpers for the status color.

use thiserror::Error;

/// Errors from color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not `#rgb` or `#rrggbb`
    #[error("Bad hex color: {0:?}")]
    BadHex(String),
}

/// Parse `#rgb` or `#rrggbb` into RGB components.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let bad = || ColorError::BadHex(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(bad)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(bad()),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| bad())?;
    Ok((
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

/// Convert a hex color to an opaque CSS `rgba(...)` string.
///
/// # Examples
/// `"#fff"` becomes `"rgba(255,255,255,1)"`.
pub fn hex_to_rgba(hex: &str) -> Result<String, ColorError> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(format!("rgba({},{},{},1)", r, g, b))
}
