// Bitflags
#![allow(clippy::indexing_slicing)]

use bitflags::bitflags;

/// An exceptional condition raised while converting a string
/// to a decimal.
///
/// None of these conditions are errors: the conversion still
/// produces a value. See [`D128::parse_with_conditions`].
///
/// [`D128::parse_with_conditions`]: crate::D128::parse_with_conditions
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Condition(u32);

bitflags! {
    impl Condition: u32 {
        /// Occurs if the exponent has been modified to fit the
        /// constraints of the decimal representation, either
        /// by clamping it or by folding zeros into the
        /// coefficient.
        const CLAMPED = 0x1;
        /// Occurs when a string is converted to a decimal and
        /// does not have a valid syntax.
        ///
        /// Only trailing input after a complete literal
        /// raises this condition. The result is NaN.
        const CONVERSION_SYNTAX = 0x2;
        /// Occurs when non-zero digits were discarded, or when
        /// the [OVERFLOW][Condition::OVERFLOW] or
        /// [UNDERFLOW][Condition::UNDERFLOW] conditions occur.
        const INEXACT = 0x20;
        /// Occurs when rounding carried past the largest
        /// exponent and the result saturated to an infinity.
        /// ([INEXACT][Condition::INEXACT] and
        /// [ROUNDED][Condition::ROUNDED] will also be raised.)
        const OVERFLOW = 0x200;
        /// Occurs when digits were discarded, or if an
        /// [OVERFLOW][Condition::OVERFLOW] or
        /// [UNDERFLOW][Condition::UNDERFLOW] occurs.
        const ROUNDED = 0x400;
        /// Occurs when a non-zero value was too small to
        /// represent and rounded to zero.
        const UNDERFLOW = 0x1000;
    }
}

impl Condition {
    /// Reports whether any digits were lost.
    pub const fn is_inexact(self) -> bool {
        self.contains(Self::INEXACT)
    }
}
