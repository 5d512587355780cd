use core::str::FromStr;

use tracing::{debug, trace};

use super::{
    digits::Digits,
    round::{self, Normalized, Rounded},
    scan::{self, Finite, Literal},
    D128,
};
use crate::{conv::ParseError, ctx::Condition};

impl D128 {
    /// Parses a decimal from a string.
    ///
    /// Values with more than [`DIGITS`][Self::DIGITS]
    /// significant digits are rounded half to even. Values too
    /// small to represent round to a signed zero.
    ///
    /// A complete literal followed by other input is not an
    /// error: the result is [`NAN`][Self::NAN].
    ///
    /// # Errors
    ///
    /// It returns an error if the string is not a decimal
    /// literal, or if a non-zero value is too large to
    /// represent.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_with_conditions(s).map(|(d, _)| d)
    }

    /// Parses a decimal from a string, reporting any
    /// exceptional conditions that occurred.
    ///
    /// # Errors
    ///
    /// See [`parse`][Self::parse].
    pub fn parse_with_conditions(s: &str) -> Result<(Self, Condition), ParseError> {
        let mut flags = Condition::empty();
        let d = match scan::scan(s.as_bytes())? {
            Literal::Infinity { sign } => Self::inf(sign),
            Literal::NaN => Self::NAN,
            Literal::Trailing => {
                debug!(input = s, "trailing input after literal");
                flags |= Condition::CONVERSION_SYNTAX;
                Self::NAN
            }
            Literal::Finite(lit) => Self::from_literal(lit, &mut flags)?,
        };
        trace!(input = s, decimal = ?d, ?flags, "parsed");
        Ok((d, flags))
    }

    fn from_literal(lit: Finite<'_>, flags: &mut Condition) -> Result<Self, ParseError> {
        let mut digits = Digits::accumulate(lit.mantissa);

        // If the decimal-part included a decimal point the
        // exponent is then reduced by the count of digits
        // following the decimal point.
        let radix = i64::try_from(digits.radix).unwrap_or(i64::MAX);
        let exp = lit.exp.saturating_sub(radix);

        let exp = match round::normalize(&mut digits, exp, flags)? {
            Normalized::Finite { exp } => exp,
            Normalized::Zero => return Ok(Self::zero(lit.sign, Self::MIN_EXP)),
        };
        match round::round(&mut digits, exp, flags) {
            Rounded::Finite { exp } => Ok(Self::pack(lit.sign, exp, digits.coefficient())),
            Rounded::Infinity => Ok(Self::inf(lit.sign)),
        }
    }
}

impl FromStr for D128 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        D128::parse(s)
    }
}
