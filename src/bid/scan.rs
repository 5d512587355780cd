//! Tokenizes decimal literals.
//!
//! The grammar is
//!
//! ```text
//! literal  = [sign] (special | numeric)
//! special  = "inf" | "infinity" | "nan"      ; any case
//! numeric  = mantissa [exponent]
//! mantissa = digits ["." [digits]] | "." digits
//! exponent = ("e" | "E") [sign] digits
//! ```
//!
//! Input that remains after a complete numeric literal is
//! reported as [`Literal::Trailing`] rather than as an error.

use crate::conv::{equal_fold_ascii, ErrorKind, ParseError};

/// Exponents are saturated to this magnitude. It is far outside
/// of the representable range, yet small enough that adjusting
/// it by the number of fraction digits cannot overflow.
const EXP_SATURATION: i64 = 1_000_000_000_000_000;

/// A scanned literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Literal<'a> {
    /// `inf` or `infinity`.
    Infinity { sign: bool },
    /// `nan`. The sign is discarded.
    NaN,
    /// A numeric literal followed by unparsed input.
    Trailing,
    /// A numeric literal.
    Finite(Finite<'a>),
}

/// A scanned numeric literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Finite<'a> {
    pub sign: bool,
    /// The digits and (at most one) radix point.
    pub mantissa: &'a [u8],
    /// The exponent that follows the mantissa, not yet adjusted
    /// for the radix point.
    pub exp: i64,
}

/// Scans a decimal literal.
pub(crate) fn scan(s: &[u8]) -> Result<Literal<'_>, ParseError> {
    if s.is_empty() {
        return Err(ParseError::empty());
    }

    let mut s = s;
    let mut sign = false;
    if let Some((c @ (b'-' | b'+'), rest)) = s.split_first() {
        sign = *c == b'-';
        s = rest;
    }

    if let Some(b'i' | b'I' | b'n' | b'N') = s.first() {
        return scan_special(sign, s);
    }

    let (mantissa, ndigits, mut s) = scan_mantissa(s)?;

    let mut exp = 0;
    match s.split_first() {
        Some((b'e' | b'E', rest)) => {
            if ndigits == 0 {
                return Err(ParseError::new(ErrorKind::MissingExponentBase));
            }
            (exp, s) = scan_exp(rest)?;
        }
        Some((b'-' | b'+', _)) => {
            return Err(ParseError::new(ErrorKind::MissingExponentMarker));
        }
        _ => {}
    }

    if ndigits == 0 {
        return Err(ParseError::new(ErrorKind::ExpectedDigit));
    }
    if !s.is_empty() {
        return Ok(Literal::Trailing);
    }
    Ok(Literal::Finite(Finite {
        sign,
        mantissa,
        exp,
    }))
}

/// Scans `inf`, `infinity`, or `nan`.
///
/// The sign has already been parsed.
fn scan_special(sign: bool, s: &[u8]) -> Result<Literal<'_>, ParseError> {
    if equal_fold_ascii(s, b"inf") || equal_fold_ascii(s, b"infinity") {
        Ok(Literal::Infinity { sign })
    } else if equal_fold_ascii(s, b"nan") {
        Ok(Literal::NaN)
    } else {
        Err(ParseError::new(ErrorKind::UnknownSpecial))
    }
}

/// Scans the digits and radix point of the mantissa.
///
/// It returns the mantissa, the number of digits in the
/// mantissa, and the unparsed remainder of the input in that
/// order.
fn scan_mantissa(s: &[u8]) -> Result<(&[u8], usize, &[u8]), ParseError> {
    let mut ndigits = 0;
    let mut radix = false;
    let mut rest = s;
    while let Some((&c, tail)) = rest.split_first() {
        match c {
            b'0'..=b'9' => ndigits += 1,
            b'.' if radix => return Err(ParseError::new(ErrorKind::MultipleRadixPoints)),
            b'.' => radix = true,
            _ => break,
        }
        rest = tail;
    }
    if radix && ndigits == 0 {
        return Err(ParseError::new(ErrorKind::RadixWithoutDigits));
    }
    let (mantissa, rest) = s.split_at(s.len() - rest.len());
    Ok((mantissa, ndigits, rest))
}

/// Scans the exponent after the `e` or `E`.
///
/// It returns the saturated exponent and the unparsed remainder
/// of the input.
fn scan_exp(s: &[u8]) -> Result<(i64, &[u8]), ParseError> {
    let mut s = s;
    let mut sign = false;
    if let Some((c @ (b'-' | b'+'), rest)) = s.split_first() {
        sign = *c == b'-';
        s = rest;
    }

    let mut exp: i64 = 0;
    let mut ndigits = 0;
    while let Some((c @ b'0'..=b'9', rest)) = s.split_first() {
        let d = i64::from(*c - b'0');
        exp = exp.saturating_mul(10).saturating_add(d).min(EXP_SATURATION);
        ndigits += 1;
        s = rest;
    }
    if ndigits == 0 {
        return Err(ParseError::new(ErrorKind::MissingExponentPower));
    }
    if sign {
        exp = -exp;
    }
    Ok((exp, s))
}
