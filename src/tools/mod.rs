//! Helpers shared by the command-line front end

use crate::error::{Error, Result};
use crate::models::BitMatrix;
use image::Rgba;
use std::fs;
use std::path::Path;

/// Where the payload of an encode run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text, trimmed and mapped to Latin-1 before encoding
    Text(String),
    /// Raw bytes read from a file
    File(std::path::PathBuf),
    /// Bytes given as hex digits (whitespace ignored)
    Hex(String),
}

/// Load the payload bytes. Text is returned as UTF-8; callers route it
/// through `encode_text`.
pub fn load_input(input: &Input) -> Result<Vec<u8>> {
    match input {
        Input::Text(text) => Ok(text.as_bytes().to_vec()),
        Input::File(path) => read_file(path),
        Input::Hex(hex) => parse_hex_bytes(hex),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Parse hex digit pairs such as `"80 81 ff"` into bytes
pub fn parse_hex_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = hex.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidInput(format!(
            "odd number of hex digits: {}",
            digits.len()
        )));
    }
    digits
        .chunks_exact(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "invalid hex byte: {}",
                        String::from_utf8_lossy(pair)
                    ))
                })
        })
        .collect()
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = || Error::InvalidInput(format!("invalid colour: {}", value));
    let hex = value.trim().trim_start_matches('#');
    let bytes = parse_hex_bytes(hex).map_err(|_| invalid())?;
    match bytes.as_slice() {
        [r, g, b] => Ok(Rgba([*r, *g, *b, 255])),
        [r, g, b, a] => Ok(Rgba([*r, *g, *b, *a])),
        _ => Err(invalid()),
    }
}

/// Draw a matrix with two characters per module, dark as full blocks
pub fn ascii_art(matrix: &BitMatrix, quiet_zone: usize, invert: bool) -> String {
    let width = matrix.width() + 2 * quiet_zone;
    let mut out = String::with_capacity((width * 2 + 1) * (matrix.height() + 2 * quiet_zone));
    for y in 0..matrix.height() + 2 * quiet_zone {
        for x in 0..width {
            let dark = x >= quiet_zone
                && y >= quiet_zone
                && matrix.get(x - quiet_zone, y - quiet_zone);
            out.push_str(if dark != invert { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
