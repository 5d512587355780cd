use core::{
    fmt,
    ops::{BitOr, BitOrAssign, Shl, Shr},
};

/// An unsigned 128-bit integer.
///
/// The codec only touches 128-bit patterns through the named
/// operations here.
///
/// Bits are numbered from 0 (least significant) to 127 (most
/// significant).
#[repr(transparent)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct uint128(u128);

impl uint128 {
    /// The number of bits in the integer.
    pub const BITS: u32 = 128;

    /// The largest value that can be represented by this type.
    pub const MAX: Self = Self(u128::MAX);
    /// The smallest value that can be represented by this type.
    pub const MIN: Self = Self(0);

    /// Creates a `uint128`.
    pub const fn new(v: u128) -> Self {
        Self(v)
    }

    /// Creates a `uint128` from its high and low 64-bit words.
    pub const fn from_words(hi: u64, lo: u64) -> Self {
        Self(((hi as u128) << 64) | (lo as u128))
    }

    /// Creates a `uint128` from two little-endian 64-bit words:
    /// bytes 0-7 hold the low word and bytes 8-15 the high word.
    ///
    /// This is the same as the little-endian `u128` layout.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_le_bytes(bytes))
    }

    /// Writes the integer as two little-endian 64-bit words.
    ///
    /// This is the inverse of [`from_le_bytes`][Self::from_le_bytes].
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Converts the `uint128` to a `u128`.
    pub const fn to_u128(self) -> u128 {
        self.0
    }

    /// Reports whether the integer is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Reports whether bit `n` is set.
    pub const fn bit(self, n: u32) -> bool {
        debug_assert!(n < Self::BITS);

        (self.0 >> n) & 1 != 0
    }

    /// Keeps only the low `bits` bits.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn low_bits(self, bits: u32) -> Self {
        debug_assert!(bits <= Self::BITS);

        if bits >= Self::BITS {
            self
        } else {
            Self(self.0 & ((1 << bits) - 1))
        }
    }

    /// Returns the `bits`-wide field that starts at bit `shift`.
    pub const fn field(self, shift: u32, bits: u32) -> Self {
        self.truncating_shr(shift).low_bits(bits)
    }

    /// Computes `self >> rhs`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn truncating_shr(self, rhs: u32) -> Self {
        if rhs < Self::BITS {
            Self(self.0 >> rhs)
        } else {
            Self::MIN
        }
    }

    /// Computes `self * 10 + digit`.
    ///
    /// The result must not overflow.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn mul10_add(self, digit: u8) -> Self {
        debug_assert!(digit < 10);
        debug_assert!(self.0 <= (u128::MAX - 9) / 10);

        Self(self.0 * 10 + digit as u128)
    }

    /// Returns `(q, r)` such that
    ///
    /// ```text
    /// q = self / 10
    /// r = self % 10
    /// ```
    pub const fn quorem10(self) -> (Self, u8) {
        (Self(self.0 / 10), (self.0 % 10) as u8)
    }
}

impl BitOr for uint128 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for uint128 {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Shl<u32> for uint128 {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        if rhs < Self::BITS {
            Self(self.0 << rhs)
        } else {
            Self::MIN
        }
    }
}

impl Shr<u32> for uint128 {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        self.truncating_shr(rhs)
    }
}

impl From<u64> for uint128 {
    fn from(v: u64) -> Self {
        Self(u128::from(v))
    }
}

impl fmt::Debug for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.0)
    }
}

impl fmt::Display for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
