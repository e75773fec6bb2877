//! Parse textual colors into tagged [`Color`] values.
//!
//! Each notation is detected explicitly from its prefix, so a failure names
//! what was wrong instead of falling through to another syntax.

use thiserror::Error;

use crate::color::{Color, Component, Notation};

/// The ways a textual color can fail to parse.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input was empty.
    #[error("empty color string")]
    Empty,
    /// The input did not start with `#`, `rgb(` or `rgba(`.
    #[error("unrecognized color syntax")]
    UnknownFormat,
    /// A `#` color had a digit count other than 3, 4, 6 or 8.
    #[error("invalid hex digit count: {0}")]
    InvalidHexLength(usize),
    /// A `#` color contained characters outside `[0-9a-fA-F]`.
    #[error("invalid hex digits")]
    InvalidHex,
    /// An `rgb()`/`rgba()` color had a component count other than 3 or 4.
    #[error("expected 3 or 4 components, found {0}")]
    InvalidComponentCount(usize),
    /// A color component could not be parsed or was out of range.
    #[error("invalid color component {0:?}")]
    InvalidComponent(String),
}

/// Parse a color written in any of the supported notations.
///
/// ```rust
/// use tinct::{parse_color, Notation};
/// let c = parse_color("#ff8000").unwrap();
/// assert_eq!((c.red, c.green, c.blue), (255, 128, 0));
/// assert_eq!(c.notation, Notation::Hex6);
/// ```
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    if input.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(digits) = input.strip_prefix('#') {
        return parse_hex(digits);
    }
    if let Some(args) = strip_functional(input, "rgba(") {
        return parse_functional(args);
    }
    if let Some(args) = strip_functional(input, "rgb(") {
        return parse_functional(args);
    }

    Err(ParseColorError::UnknownFormat)
}

fn strip_functional<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    input.strip_prefix(prefix)?.strip_suffix(')')
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode a raw alpha byte. 255 maps to exactly 1.0, everything else to a
/// three decimal fraction.
fn hex_alpha(byte: u8) -> Component {
    (byte as Component / 0.255).round() / 1000.0
}

fn parse_hex(digits: &str) -> Result<Color, ParseColorError> {
    use ParseColorError::{InvalidHex, InvalidHexLength};

    let nibble2 = |hi: u8, lo: u8| -> Result<u8, ParseColorError> {
        let h = nibble(hi).ok_or(InvalidHex)?;
        let l = nibble(lo).ok_or(InvalidHex)?;

        Ok(h << 4 | l)
    };

    let bytes = digits.as_bytes();
    match bytes.len() {
        // Shorthand digits expand by duplication, `#fa0` == `#ffaa00`.
        3 | 4 => {
            let r = nibble2(bytes[0], bytes[0])?;
            let g = nibble2(bytes[1], bytes[1])?;
            let b = nibble2(bytes[2], bytes[2])?;

            if bytes.len() == 4 {
                let a = hex_alpha(nibble2(bytes[3], bytes[3])?);
                Ok(Color::new(r, g, b, a, Notation::Hex4))
            } else {
                Ok(Color::new(r, g, b, None, Notation::Hex3))
            }
        }
        6 | 8 => {
            let r = nibble2(bytes[0], bytes[1])?;
            let g = nibble2(bytes[2], bytes[3])?;
            let b = nibble2(bytes[4], bytes[5])?;

            if bytes.len() == 8 {
                let a = hex_alpha(nibble2(bytes[6], bytes[7])?);
                Ok(Color::new(r, g, b, a, Notation::Hex8))
            } else {
                Ok(Color::new(r, g, b, None, Notation::Hex6))
            }
        }
        n => Err(InvalidHexLength(n)),
    }
}

fn parse_functional(args: &str) -> Result<Color, ParseColorError> {
    use ParseColorError::{InvalidComponent, InvalidComponentCount};

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(InvalidComponentCount(parts.len()));
    }

    let channel = |part: &str| -> Result<u8, ParseColorError> {
        part.parse::<u8>()
            .map_err(|_| InvalidComponent(part.to_string()))
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    if parts.len() == 4 {
        let a = parts[3]
            .parse::<Component>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| InvalidComponent(parts[3].to_string()))?
            .clamp(0.0, 1.0);
        Ok(Color::new(r, g, b, a, Notation::Rgba))
    } else {
        Ok(Color::new(r, g, b, None, Notation::Rgb))
    }
}
