//! Integer-text parsing for the solve boundary.
//!
//! Accepts the forms people paste into a number field: optional sign,
//! optional `0x` prefix, and digit-group separators (whitespace, comma,
//! underscore) anywhere in the string. The whole string must parse; there
//! is no prefix-and-stop behavior here.
//!
//! Accumulation is overflow-aware rather than wrapping: once the magnitude
//! would exceed `u64`, the parser keeps validating the remaining digits,
//! records the overflow, and tracks the final digit so the caller still
//! knows the parity of arbitrarily long numerals. The boundary needs
//! exactly that much to classify oversized input correctly.

/// Why a numeral failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntegerError {
    /// No digits at all: empty input, bare sign, or bare `0x` prefix.
    MissingDigits,
    /// A character that is neither a digit of the active base, a
    /// separator, nor a leading sign/prefix.
    UnexpectedCharacter,
}

/// A fully validated numeral, possibly wider than `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInteger {
    /// Exact magnitude, or `u64::MAX` (saturated) when `overflow` is set.
    pub magnitude: u64,
    /// A leading `-` was present.
    pub negative: bool,
    /// The numeral does not fit in `u64`.
    pub overflow: bool,
    /// Low bit of the numeral's final digit. Because both supported bases
    /// are even, this is the parity of the full value even on overflow.
    pub low_bit: bool,
}

impl ParsedInteger {
    /// Parity of the parsed value, valid regardless of overflow.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.low_bit
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '_'
}

/// Parse a separator-tolerant signed numeral.
///
/// Decimal by default; a `0x`/`0X` prefix (after the optional sign)
/// switches to hexadecimal.
pub fn parse_integer_text(text: &str) -> Result<ParsedInteger, ParseIntegerError> {
    let cleaned: String = text.chars().filter(|&c| !is_separator(c)).collect();
    let s = cleaned.as_bytes();
    let len = s.len();
    let mut i = 0;

    let mut negative = false;
    if i < len && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    let mut base: u64 = 10;
    if i + 1 < len && s[i] == b'0' && (s[i + 1] == b'x' || s[i + 1] == b'X') {
        base = 16;
        i += 2;
    }

    let cutoff = u64::MAX / base;
    let cutlim = u64::MAX % base;

    let mut magnitude: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;
    let mut low_bit = false;

    while i < len {
        let c = s[i];
        let digit = match c {
            b'0'..=b'9' => (c - b'0') as u64,
            b'a'..=b'f' => (c - b'a' + 10) as u64,
            b'A'..=b'F' => (c - b'A' + 10) as u64,
            _ => return Err(ParseIntegerError::UnexpectedCharacter),
        };
        if digit >= base {
            return Err(ParseIntegerError::UnexpectedCharacter);
        }

        any_digits = true;
        low_bit = digit & 1 == 1;

        if !overflow {
            if magnitude > cutoff || (magnitude == cutoff && digit > cutlim) {
                overflow = true;
                magnitude = u64::MAX;
            } else {
                magnitude = magnitude * base + digit;
            }
        }
        i += 1;
    }

    if !any_digits {
        return Err(ParseIntegerError::MissingDigits);
    }

    Ok(ParsedInteger {
        magnitude,
        negative,
        overflow,
        low_bit,
    })
}
