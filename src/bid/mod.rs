//! IEEE 754-2008 decimal128 numbers with binary integer
//! significands.

mod atod;
mod digits;
mod dtoa;
mod pack;
mod round;
mod scan;

use core::mem::size_of;

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

pub(crate) use pack::Unpacked;

use crate::{uint128::uint128, util::const_assert};

/// A 128-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// A `D128` is an opaque bit pattern. It is only ever created by
/// parsing a string, from one of the special constants, or from
/// raw bits. Equality compares bit patterns, so two NaNs are
/// equal and `0` is not equal to `0.0`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct D128(
    /// # Layout
    ///
    /// ## Bits
    ///
    /// 127: S
    /// 126-122: combination field
    /// 109-0: T
    ///
    /// ## Forms
    ///
    /// ### Form 1
    ///
    /// s 00eeeeeeeeeeee (0)ccc tttttttttt tttttttttt
    /// s 01eeeeeeeeeeee (0)ccc tttttttttt tttttttttt
    /// s 10eeeeeeeeeeee (0)ccc tttttttttt tttttttttt
    ///
    /// ### Form 2
    ///
    /// s 11 eeeeeeeeeeeeee (100)c tttttttttt tttttttttt
    ///
    /// ### Specials
    ///
    /// s 11110 ...: infinity
    /// s 11111 ...: NaN
    uint128,
);
const_assert!(size_of::<D128>() == 128 / 8);

// Format constants.
impl D128 {
    /// The number of digits of precision.
    pub const DIGITS: u32 = 34;

    /// The largest unbiased exponent.
    pub const MAX_EXP: i16 = 6111;

    /// The smallest unbiased exponent.
    pub const MIN_EXP: i16 = -6176;

    /// The largest canonical coefficient, 10^34 - 1.
    pub const MAX_COEFF: u128 = 10u128.pow(Self::DIGITS) - 1;

    /// Not a Number.
    pub const NAN: Self = Self(uint128::from_words(0x7c00_0000_0000_0000, 0));

    /// Positive infinity.
    pub const INFINITY: Self = Self(uint128::from_words(0x7800_0000_0000_0000, 0));

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(uint128::from_words(0xf800_0000_0000_0000, 0));

    /// The bias added to the unbiased exponent.
    pub(crate) const BIAS: i16 = -Self::MIN_EXP;

    /// The largest biased exponent.
    pub(crate) const LIMIT: i16 = Self::MAX_EXP + Self::BIAS;

    /// The shift needed to set the sign bit.
    pub(crate) const SIGN_SHIFT: u32 = 127;

    /// The shift needed to reach the combination field.
    pub(crate) const COMB_SHIFT: u32 = 122;
    /// The width of the combination field in bits.
    pub(crate) const COMB_BITS: u32 = 5;
    /// Combination field: infinity.
    pub(crate) const COMB_INF: u32 = 0b11110;
    /// Combination field: NaN.
    pub(crate) const COMB_NAN: u32 = 0b11111;

    /// The width of the biased exponent in bits.
    pub(crate) const EXP_BITS: u32 = 14;

    /// The shift to set the exponent for a form one number.
    pub(crate) const FORM1_EXP_SHIFT: u32 = Self::SIGN_SHIFT - Self::EXP_BITS;
    /// The shift to set the exponent for a form two number.
    pub(crate) const FORM2_EXP_SHIFT: u32 = Self::FORM1_EXP_SHIFT - 2;

    /// The number of bits in the form one coefficient.
    pub(crate) const FORM1_COEFF_BITS: u32 = 3 + Self::T;
    /// The number of bits in the form two coefficient.
    pub(crate) const FORM2_COEFF_BITS: u32 = 1 + Self::T;

    /// The width of the trailing significand in bits.
    pub(crate) const T: u32 = 110;
}
const_assert!(D128::BIAS == 6176);
const_assert!(D128::LIMIT == 12287);
const_assert!(D128::FORM1_EXP_SHIFT == 113);
const_assert!(D128::FORM2_EXP_SHIFT == 111);

// To/from bits.
impl D128 {
    /// Creates a `D128` from its raw bits.
    ///
    /// Any pattern is accepted, including non-canonical ones.
    pub const fn from_bits(bits: u128) -> Self {
        Self(uint128::new(bits))
    }

    /// Returns the raw bits.
    pub const fn to_bits(self) -> u128 {
        self.0.to_u128()
    }

    /// Creates a `D128` from its interchange encoding: two
    /// little-endian 64-bit words, low word first.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(uint128::from_le_bytes(bytes))
    }

    /// Returns the interchange encoding: two little-endian
    /// 64-bit words, low word first.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Returns positive or negative infinity.
    pub(crate) const fn inf(sign: bool) -> Self {
        if sign {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }

    /// Returns a zero with the sign `sign` and the exponent
    /// `exp`.
    pub(crate) fn zero(sign: bool, exp: i16) -> Self {
        Self::pack(sign, exp, uint128::MIN)
    }
}

// Inspection.
impl D128 {
    const fn signbit(self) -> bool {
        self.0.bit(Self::SIGN_SHIFT)
    }

    /// Returns the combination field.
    const fn comb(self) -> u32 {
        self.0.field(Self::COMB_SHIFT, Self::COMB_BITS).to_u128() as u32
    }

    /// Reports whether the number is a NaN.
    pub const fn is_nan(self) -> bool {
        self.comb() == Self::COMB_NAN
    }

    /// Reports whether the number is infinite.
    pub const fn is_infinite(self) -> bool {
        self.comb() == Self::COMB_INF
    }

    /// Reports whether the number is neither infinite nor NaN.
    pub const fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Reports whether the sign bit is set.
    ///
    /// NaNs are always printed without a sign, but their sign
    /// bit is still reported here.
    pub const fn is_sign_negative(self) -> bool {
        self.signbit()
    }

    /// Reports whether the sign bit is clear.
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    /// Reports whether the number is a finite zero.
    ///
    /// Non-canonical coefficients are treated as zero.
    pub const fn is_zero(self) -> bool {
        match self.unpack() {
            Unpacked::Finite { coeff, .. } => {
                coeff.is_zero() || coeff.to_u128() > Self::MAX_COEFF
            }
            _ => false,
        }
    }

    /// Reports whether the number is canonical.
    ///
    /// Every special value is canonical. A finite number is
    /// canonical if its coefficient has at most
    /// [`DIGITS`][Self::DIGITS] digits.
    pub const fn is_canonical(self) -> bool {
        match self.unpack() {
            Unpacked::Finite { coeff, .. } => coeff.to_u128() <= Self::MAX_COEFF,
            _ => true,
        }
    }

    /// Returns the unbiased exponent, or `None` if the number
    /// is infinite or NaN.
    pub const fn exponent(self) -> Option<i16> {
        match self.unpack() {
            Unpacked::Finite { exp, .. } => Some(exp),
            _ => None,
        }
    }

    /// Returns the coefficient, or `None` if the number is
    /// infinite or NaN.
    ///
    /// The coefficient is returned as encoded, so a
    /// non-canonical number can report a coefficient larger
    /// than [`MAX_COEFF`][Self::MAX_COEFF].
    pub const fn coefficient(self) -> Option<u128> {
        match self.unpack() {
            Unpacked::Finite { coeff, .. } => Some(coeff.to_u128()),
            _ => None,
        }
    }
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Distribution<D128> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> D128 {
        D128::from_bits(rng.gen())
    }
}
