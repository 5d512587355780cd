//! Fits parsed digits into the decimal128 exponent range and
//! precision.

use tracing::debug;

use super::{digits::Digits, D128};
use crate::{conv::ParseError, ctx::Condition};

const DIGITS: usize = D128::DIGITS as usize;

/// The result of [`normalize`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Normalized {
    /// The exponent is in [`MIN_EXP`, `MAX_EXP`].
    ///
    /// [`MIN_EXP`]: D128::MIN_EXP
    /// [`MAX_EXP`]: D128::MAX_EXP
    Finite { exp: i16 },
    /// The value is a zero with the exponent
    /// [`MIN_EXP`][D128::MIN_EXP].
    Zero,
}

/// The result of [`round`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Rounded {
    Finite { exp: i16 },
    /// Rounding carried past [`MAX_EXP`][D128::MAX_EXP].
    Infinity,
}

/// Shifts `exp` into [`MIN_EXP`, `MAX_EXP`] by growing or
/// shrinking the kept digits of `digits`.
///
/// It returns an error if the digits are not all zero and
/// would need more than [`DIGITS`][D128::DIGITS] digits at the
/// largest exponent.
///
/// [`MIN_EXP`]: D128::MIN_EXP
/// [`MAX_EXP`]: D128::MAX_EXP
pub(crate) fn normalize(
    digits: &mut Digits,
    exp: i64,
    flags: &mut Condition,
) -> Result<Normalized, ParseError> {
    let min = i64::from(D128::MIN_EXP);
    let max = i64::from(D128::MAX_EXP);
    let mut exp = exp;

    // Even the most significant digit is below half of the
    // smallest representable digit.
    let count = i64::try_from(digits.count).unwrap_or(i64::MAX);
    if exp.saturating_add(count) < min {
        return Ok(underflow(digits, flags));
    }

    // Fold zeros into the coefficient.
    while exp > max {
        digits.kept += 1;
        if digits.kept > DIGITS {
            if digits.is_zero() {
                debug!(exp, "clamping zero to the largest exponent");
                digits.kept -= 1;
                exp = max;
                *flags |= Condition::CLAMPED;
                break;
            }
            debug!(exp, count = digits.count, "overflow");
            return Err(ParseError::overflow());
        }
        *flags |= Condition::CLAMPED;
        exp -= 1;
    }

    // Drop digits that were not stored or that are below the
    // smallest exponent.
    while exp < min || digits.stored < digits.count {
        if digits.stored < digits.count {
            digits.count -= 1;
        } else if digits.kept == 0 {
            return Ok(underflow(digits, flags));
        } else {
            digits.kept -= 1;
        }
        if digits.is_zero() {
            *flags |= Condition::CLAMPED;
        } else {
            *flags |= Condition::ROUNDED;
        }

        if exp < max {
            exp += 1;
        } else if digits.is_zero() {
            exp = max;
            break;
        } else {
            debug!(exp, count = digits.count, "overflow");
            return Err(ParseError::overflow());
        }
    }

    debug_assert!(exp >= min && exp <= max);
    // In [MIN_EXP, MAX_EXP].
    Ok(Normalized::Finite { exp: exp as i16 })
}

/// Records that the value rounded to zero.
fn underflow(digits: &Digits, flags: &mut Condition) -> Normalized {
    if digits.is_zero() {
        *flags |= Condition::CLAMPED;
    } else {
        debug!(count = digits.count, "underflow to zero");
        *flags |= Condition::UNDERFLOW | Condition::INEXACT | Condition::ROUNDED;
    }
    Normalized::Zero
}

/// Rounds the kept digits half to even if any non-zero digits
/// were dropped.
pub(crate) fn round(digits: &mut Digits, exp: i16, flags: &mut Condition) -> Rounded {
    let kept = digits.kept;
    if kept >= digits.significant {
        return Rounded::Finite { exp };
    }
    *flags |= Condition::INEXACT | Condition::ROUNDED;

    let rd = digits.digit(kept);
    let sticky = digits.significant > kept + 1;
    // An empty window is even.
    let last = kept.checked_sub(1).map_or(0, |i| digits.digit(i));
    let up = rd > 5 || (rd == 5 && (last % 2 == 1 || sticky));
    if !up {
        if kept == 0 {
            debug!(exp, "underflow to zero");
            *flags |= Condition::UNDERFLOW;
        }
        return Rounded::Finite { exp };
    }

    if kept == 0 {
        digits.set_one();
        return Rounded::Finite { exp };
    }
    if !digits.increment() {
        return Rounded::Finite { exp };
    }
    if exp < D128::MAX_EXP {
        Rounded::Finite { exp: exp + 1 }
    } else {
        debug!(exp, "rounding overflowed to infinity");
        *flags |= Condition::OVERFLOW;
        Rounded::Infinity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uint128::uint128;

    fn run(mantissa: &str, exp: i64) -> (Result<Normalized, ParseError>, Digits, Condition) {
        let mut digits = Digits::accumulate(mantissa.as_bytes());
        let mut flags = Condition::empty();
        let radix = digits.radix as i64;
        let got = normalize(&mut digits, exp - radix, &mut flags);
        (got, digits, flags)
    }

    #[test]
    fn test_normalize_in_range() {
        let (got, digits, flags) = run("12.5", 3);
        assert_eq!(got, Ok(Normalized::Finite { exp: 2 }));
        assert_eq!(digits.kept, 3);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_normalize_fold_zeros() {
        let (got, digits, flags) = run("1", 6113);
        assert_eq!(got, Ok(Normalized::Finite { exp: 6111 }));
        assert_eq!(digits.coefficient(), uint128::new(100));
        assert_eq!(flags, Condition::CLAMPED);
    }

    #[test]
    fn test_normalize_overflow() {
        let (got, _, _) = run("1", 6145);
        assert_eq!(got, Err(ParseError::overflow()));

        // 34 digits at the largest exponent fit.
        let (got, digits, _) = run("1", 6144);
        assert_eq!(got, Ok(Normalized::Finite { exp: 6111 }));
        assert_eq!(digits.kept, DIGITS);
    }

    #[test]
    fn test_normalize_clamp_zero() {
        let (got, digits, flags) = run("0", 100_000);
        assert_eq!(got, Ok(Normalized::Finite { exp: 6111 }));
        assert_eq!(digits.coefficient(), uint128::MIN);
        assert!(flags.contains(Condition::CLAMPED));

        let (got, _, flags) = run("0", -100_000);
        assert_eq!(got, Ok(Normalized::Zero));
        assert_eq!(flags, Condition::CLAMPED);
    }

    #[test]
    fn test_normalize_underflow() {
        let (got, _, flags) = run("1", -6178);
        assert_eq!(got, Ok(Normalized::Zero));
        assert!(flags.contains(Condition::UNDERFLOW));

        // Within one digit of the smallest exponent, the digit
        // is dropped and left to rounding.
        let (got, digits, _) = run("6", -6177);
        assert_eq!(got, Ok(Normalized::Finite { exp: -6176 }));
        assert_eq!(digits.kept, 0);
    }

    #[test]
    fn test_normalize_unstored_digits() {
        // 36 significant digits.
        let (got, digits, flags) = run("123456789012345678901234567890123456", 0);
        assert_eq!(got, Ok(Normalized::Finite { exp: 2 }));
        assert_eq!(digits.kept, DIGITS);
        assert_eq!(digits.count, DIGITS);
        assert!(flags.contains(Condition::ROUNDED));
    }

    fn round_str(mantissa: &str, exp: i64) -> (Rounded, uint128, Condition) {
        let (got, mut digits, mut flags) = run(mantissa, exp);
        let Ok(Normalized::Finite { exp }) = got else {
            panic!("unexpected {got:?}");
        };
        let r = round(&mut digits, exp, &mut flags);
        (r, digits.coefficient(), flags)
    }

    #[test]
    fn test_round_half_even() {
        // The 35th digit is 5 and nothing follows.
        let even = "12345678901234567890123456789012345";
        let (r, coeff, flags) = round_str(even, 0);
        assert_eq!(r, Rounded::Finite { exp: 1 });
        assert_eq!(
            coeff,
            uint128::new(1_234_567_890_123_456_789_012_345_678_901_234)
        );
        assert!(flags.contains(Condition::INEXACT | Condition::ROUNDED));

        let odd = "12345678901234567890123456789012335";
        let (_, coeff, _) = round_str(odd, 0);
        assert_eq!(
            coeff,
            uint128::new(1_234_567_890_123_456_789_012_345_678_901_234)
        );

        // Sticky digits break the tie.
        let sticky = "123456789012345678901234567890123450001";
        let (r, coeff, _) = round_str(sticky, 0);
        assert_eq!(r, Rounded::Finite { exp: 5 });
        assert_eq!(
            coeff,
            uint128::new(1_234_567_890_123_456_789_012_345_678_901_235)
        );
    }

    #[test]
    fn test_round_carry() {
        let nines = "99999999999999999999999999999999995";
        let (r, coeff, _) = round_str(nines, 0);
        assert_eq!(r, Rounded::Finite { exp: 2 });
        assert_eq!(coeff, uint128::new(10u128.pow(33)));

        let (r, _, flags) = round_str(nines, 6110);
        assert_eq!(r, Rounded::Infinity);
        assert!(flags.contains(Condition::OVERFLOW));
    }

    #[test]
    fn test_round_empty_window() {
        // 6E-6177 rounds up to 1E-6176.
        let (r, coeff, _) = round_str("6", -6177);
        assert_eq!(r, Rounded::Finite { exp: -6176 });
        assert_eq!(coeff, uint128::new(1));

        // 5E-6177 is a tie with an even (empty) window.
        let (r, coeff, flags) = round_str("5", -6177);
        assert_eq!(r, Rounded::Finite { exp: -6176 });
        assert_eq!(coeff, uint128::MIN);
        assert!(flags.contains(Condition::UNDERFLOW));

        // 5.1E-6177 is above the tie.
        let (_, coeff, _) = round_str("51", -6178);
        assert_eq!(coeff, uint128::new(1));
    }
}
