use super::D128;
use crate::uint128::uint128;

/// A `D128` split into its parts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Unpacked {
    /// NaN. The sign is not significant.
    NaN { sign: bool },
    Infinite { sign: bool },
    Finite {
        sign: bool,
        exp: i16,
        /// The coefficient as encoded. It might exceed
        /// [`D128::MAX_COEFF`].
        coeff: uint128,
        /// Whether the coefficient used the form two
        /// encoding.
        form2: bool,
    },
}

impl D128 {
    /// Packs the triple into the interchange layout.
    ///
    /// `exp` must be in [`MIN_EXP`, `MAX_EXP`] and `coeff` must
    /// fit in 114 bits.
    ///
    /// [`MIN_EXP`]: Self::MIN_EXP
    /// [`MAX_EXP`]: Self::MAX_EXP
    pub(crate) fn pack(sign: bool, exp: i16, coeff: uint128) -> Self {
        debug_assert!(exp >= Self::MIN_EXP && exp <= Self::MAX_EXP);
        debug_assert!(coeff.truncating_shr(Self::FORM1_COEFF_BITS + 1).is_zero());

        let biased = uint128::from(u64::from((exp + Self::BIAS).unsigned_abs()));
        let mut bits = if coeff.bit(Self::FORM1_COEFF_BITS) {
            // The implicit `100` prefix takes the place of the
            // top three coefficient bits.
            (uint128::new(0b11) << (Self::SIGN_SHIFT - 2))
                | (biased << Self::FORM2_EXP_SHIFT)
                | coeff.low_bits(Self::FORM2_COEFF_BITS)
        } else {
            (biased << Self::FORM1_EXP_SHIFT) | coeff.low_bits(Self::FORM1_COEFF_BITS)
        };
        if sign {
            bits |= uint128::new(1) << Self::SIGN_SHIFT;
        }
        Self(bits)
    }

    /// Splits the number into its parts.
    ///
    /// This never fails: every bit pattern unpacks to
    /// something, even if the coefficient is not canonical.
    pub(crate) const fn unpack(self) -> Unpacked {
        let sign = self.signbit();
        let comb = self.comb();
        if comb == Self::COMB_NAN {
            return Unpacked::NaN { sign };
        }
        if comb == Self::COMB_INF {
            return Unpacked::Infinite { sign };
        }

        let form2 = comb >> 3 == 0b11;
        let (biased, coeff) = if form2 {
            let biased = self.0.field(Self::FORM2_EXP_SHIFT, Self::EXP_BITS);
            let coeff = self.0.low_bits(Self::FORM2_COEFF_BITS).to_u128()
                | (1 << Self::FORM1_COEFF_BITS);
            (biased, uint128::new(coeff))
        } else {
            let biased = self.0.field(Self::FORM1_EXP_SHIFT, Self::EXP_BITS);
            (biased, self.0.low_bits(Self::FORM1_COEFF_BITS))
        };
        // At most 14 bits.
        let exp = (biased.to_u128() as i16) - Self::BIAS;
        Unpacked::Finite {
            sign,
            exp,
            coeff,
            form2,
        }
    }
}
