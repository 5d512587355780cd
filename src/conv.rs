use core::fmt;

use crate::bid::D128;

/// A buffer for converting decimals to text.
///
/// Formatting into a `Buffer` never allocates.
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    pub(crate) buf: [u8; Self::MAX_STR_LEN],
}

impl Buffer {
    /// The longest string any [`D128`] can format to.
    ///
    /// Plain notation tops out at the same length:
    /// `-0.00000` followed by 34 digits.
    pub const MAX_STR_LEN: usize = "-9.999999999999999999999999999999999E+6144".len();

    /// Creates a `Buffer`.
    pub const fn new() -> Self {
        Self {
            buf: [0; Self::MAX_STR_LEN],
        }
    }

    /// Prints the decimal to the buffer.
    ///
    /// This is the same as [`D128::format`].
    pub fn format(&mut self, d: D128) -> &str {
        d.format(self)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// An error returned when parsing a decimal from a string.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) const fn empty() -> Self {
        Self::new(ErrorKind::Empty)
    }

    pub(crate) const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Returns the reason the literal was rejected.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Reports whether the literal was malformed.
    pub const fn is_syntax(&self) -> bool {
        !self.is_overflow()
    }

    /// Reports whether the literal was well formed but too
    /// large to represent.
    pub const fn is_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::Overflow)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// The reason a [`ParseError`] occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input was empty.
    Empty,
    /// An exponent marker (`e` or `E`) was not followed by any
    /// digits.
    MissingExponentPower,
    /// An exponent marker was not preceded by a coefficient.
    MissingExponentBase,
    /// An exponent sign was not preceded by an exponent
    /// marker.
    MissingExponentMarker,
    /// The coefficient had more than one radix point.
    MultipleRadixPoints,
    /// The coefficient had a radix point but no digits.
    RadixWithoutDigits,
    /// The coefficient had no digits.
    ExpectedDigit,
    /// The input looked like `inf` or `nan` but was neither.
    UnknownSpecial,
    /// The value has more than 34 significant digits at the
    /// largest exponent.
    Overflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse decimal from empty string"),
            Self::MissingExponentPower => write!(f, "missing exponent power"),
            Self::MissingExponentBase => write!(f, "missing exponent base"),
            Self::MissingExponentMarker => write!(f, "missing exponent marker"),
            Self::MultipleRadixPoints => write!(f, "multiple radix points"),
            Self::RadixWithoutDigits => write!(f, "radix point without digits"),
            Self::ExpectedDigit => write!(f, "expected digit"),
            Self::UnknownSpecial => write!(f, "unknown special value"),
            Self::Overflow => write!(f, "value out of range"),
        }
    }
}

/// Reports whether `s` and `t` are equal, ignoring ASCII case.
pub(crate) fn equal_fold_ascii(s: &[u8], t: &[u8]) -> bool {
    s.eq_ignore_ascii_case(t)
}
