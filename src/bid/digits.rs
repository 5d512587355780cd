use super::D128;
use crate::uint128::uint128;

const DIGITS: usize = D128::DIGITS as usize;

/// The significant digits of a numeric literal.
///
/// Digits are stored most significant first, starting at the
/// first non-zero digit. At most [`D128::DIGITS`] digits are
/// stored, but every digit is counted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Digits {
    /// Unused slots are zero.
    buf: [u8; DIGITS],
    /// The first digit that did not fit in `buf`.
    spill: u8,
    /// The number of digits in `buf`.
    pub stored: usize,
    /// The number of digits starting from the first non-zero
    /// digit, including any that were not stored.
    pub count: usize,
    /// The number of digits from the first to the last non-zero
    /// digit. Zero if every digit is zero.
    pub significant: usize,
    /// The number of digits after the radix point.
    pub radix: usize,
    /// The number of digits in the coefficient.
    pub kept: usize,
}

impl Digits {
    /// Collects the digits of `mantissa`, which contains only
    /// ASCII digits and at most one radix point.
    pub fn accumulate(mantissa: &[u8]) -> Self {
        let mut d = Self {
            buf: [0; DIGITS],
            spill: 0,
            stored: 0,
            count: 0,
            significant: 0,
            radix: 0,
            kept: 0,
        };

        debug_assert!(
            mantissa.iter().all(|&c| c.is_ascii_digit() || c == b'.'),
            "invalid mantissa",
        );

        let mut first = None;
        let mut read = 0;
        let mut last = 0;
        let mut saw_radix = false;
        for &c in mantissa {
            if c == b'.' {
                saw_radix = true;
                continue;
            }
            let digit = c.wrapping_sub(b'0');

            if digit != 0 && first.is_none() {
                first = Some(read);
            }
            if first.is_some() {
                if let Some(slot) = d.buf.get_mut(d.stored) {
                    *slot = digit;
                    d.stored += 1;
                } else if d.count == DIGITS {
                    d.spill = digit;
                }
                d.count += 1;
                if digit != 0 {
                    last = read;
                }
            }
            if saw_radix {
                d.radix += 1;
            }
            read += 1;
        }

        match first {
            Some(first) => d.significant = last - first + 1,
            None => {
                // A single zero digit.
                d.stored = 1;
                d.count = 1;
            }
        }
        d.kept = d.stored;
        d
    }

    /// Reports whether every digit is zero.
    pub const fn is_zero(&self) -> bool {
        self.significant == 0
    }

    /// Returns the `i`th significant digit.
    ///
    /// Past the stored digits, only the first unstored digit is
    /// known. Every other position is zero.
    pub fn digit(&self, i: usize) -> u8 {
        match self.buf.get(i) {
            Some(&d) => d,
            None if i == DIGITS => self.spill,
            None => 0,
        }
    }

    /// Adds one to the last kept digit, propagating the carry.
    ///
    /// If the carry propagates out of the first digit, the
    /// window becomes a one followed by zeros (the value divided
    /// by ten) and `true` is returned.
    pub fn increment(&mut self) -> bool {
        debug_assert!(self.kept > 0);

        for d in self.buf.iter_mut().take(self.kept).rev() {
            if *d < 9 {
                *d += 1;
                return false;
            }
            *d = 0;
        }
        if let Some(d) = self.buf.first_mut() {
            *d = 1;
        }
        true
    }

    /// Replaces the empty window with the single digit one.
    pub fn set_one(&mut self) {
        debug_assert!(self.kept == 0);

        if let Some(d) = self.buf.first_mut() {
            *d = 1;
            self.kept = 1;
        }
    }

    /// Assembles the kept digits into a coefficient.
    pub fn coefficient(&self) -> uint128 {
        debug_assert!(self.kept <= DIGITS);

        if self.is_zero() {
            return uint128::MIN;
        }
        let mut coeff = uint128::MIN;
        for &d in self.buf.iter().take(self.kept) {
            coeff = coeff.mul10_add(d);
        }
        debug_assert!(coeff.to_u128() <= D128::MAX_COEFF);
        coeff
    }
}
