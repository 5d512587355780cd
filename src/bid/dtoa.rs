use core::{fmt, str};

use super::{Unpacked, D128};
use crate::{conv::Buffer, uint128::uint128, util::const_assert};

const DIGITS: usize = D128::DIGITS as usize;

/// The decimal digits of a coefficient.
///
/// 36 slots are enough for any 114-bit coefficient.
#[derive(Copy, Clone, Debug)]
struct Expanded {
    buf: [u8; Self::SLOTS],
    /// The index of the most significant digit.
    start: usize,
}
const_assert!(1u128 << 114 < 10u128.pow(Expanded::SLOTS as u32 - 1));

impl Expanded {
    const SLOTS: usize = 36;

    /// Expands `coeff` by repeated division by ten.
    fn new(coeff: uint128) -> Self {
        let mut buf = [b'0'; Self::SLOTS];
        let mut start = Self::SLOTS;
        let mut q = coeff;
        for slot in buf.iter_mut().rev() {
            let (next, r) = q.quorem10();
            *slot = b'0' + r;
            start -= 1;
            q = next;
            if q.is_zero() {
                break;
            }
        }
        Self { buf, start }
    }

    /// Returns the ASCII digits, without leading zeros. Zero is
    /// a single `0`.
    fn as_bytes(&self) -> &[u8] {
        self.buf.get(self.start..).unwrap_or(b"0")
    }
}

/// Writes ASCII into a [`Buffer`].
struct Writer<'a> {
    dst: &'a mut [u8; Buffer::MAX_STR_LEN],
    len: usize,
}

impl<'a> Writer<'a> {
    fn new(dst: &'a mut Buffer) -> Self {
        Self {
            dst: &mut dst.buf,
            len: 0,
        }
    }

    fn push(&mut self, c: u8) {
        debug_assert!(c.is_ascii());
        debug_assert!(self.len < self.dst.len());

        if let Some(slot) = self.dst.get_mut(self.len) {
            *slot = c;
            self.len += 1;
        }
    }

    fn extend(&mut self, s: &[u8]) {
        for &c in s {
            self.push(c);
        }
    }

    fn exp(&mut self, exp: i32) {
        let mut buf = itoa::Buffer::new();
        self.extend(buf.format(exp).as_bytes());
    }

    fn finish(self) -> &'a str {
        let dst: &'a [u8] = self.dst;
        let (s, _) = dst.split_at(self.len);
        // SAFETY: `Writer` only ever writes ASCII.
        unsafe { str::from_utf8_unchecked(s) }
    }
}

impl D128 {
    /// Converts the decimal to its canonical string.
    ///
    /// Finite numbers use plain notation unless the exponent is
    /// positive or the adjusted exponent is outside of
    /// [-6, 33], in which case they use scientific notation.
    /// NaN is always printed as `NaN`, without a sign.
    ///
    /// A non-canonical coefficient prints as zero.
    pub fn format(self, dst: &mut Buffer) -> &str {
        let (sign, exp, coeff) = match self.unpack() {
            Unpacked::NaN { .. } => return "NaN",
            Unpacked::Infinite { sign: false } => return "Infinity",
            Unpacked::Infinite { sign: true } => return "-Infinity",
            Unpacked::Finite {
                sign, exp, coeff, ..
            } => (sign, i32::from(exp), coeff),
        };

        let digits = Expanded::new(coeff);
        let digits = digits.as_bytes();

        let mut w = Writer::new(dst);
        if sign {
            w.push(b'-');
        }

        if digits.len() > DIGITS {
            w.push(b'0');
            if exp != 0 {
                w.push(b'E');
                if exp > 0 {
                    w.push(b'+');
                }
                w.exp(exp);
            }
            return w.finish();
        }

        // At most 34 digits.
        #[allow(clippy::cast_possible_wrap)]
        let sd = digits.len() as i32;
        #[allow(clippy::cast_possible_wrap)]
        let max_sci = D128::DIGITS as i32;
        // The adjusted exponent.
        let sci = sd - 1 + exp;

        if sci >= max_sci || sci <= -7 || exp > 0 {
            if let Some((first, rest)) = digits.split_first() {
                w.push(*first);
                if !rest.is_empty() {
                    w.push(b'.');
                    w.extend(rest);
                }
            }
            w.push(b'E');
            if sci >= 0 {
                w.push(b'+');
            }
            w.exp(sci);
        } else if exp == 0 {
            w.extend(digits);
        } else {
            // The number of digits before the radix point.
            let pre = sd + exp;
            if pre > 0 {
                let (pre, post) = digits.split_at(pre.unsigned_abs() as usize);
                w.extend(pre);
                w.push(b'.');
                w.extend(post);
            } else {
                w.extend(b"0.");
                for _ in 0..pre.unsigned_abs() {
                    w.push(b'0');
                }
                w.extend(digits);
            }
        }
        w.finish()
    }
}

impl fmt::Display for D128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Buffer::new();
        let str = self.format(&mut buf);
        write!(f, "{str}")
    }
}

impl fmt::Debug for D128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unpack() {
            Unpacked::NaN { sign } => write!(f, "[{},NaN]", u8::from(sign)),
            Unpacked::Infinite { sign } => write!(f, "[{},inf]", u8::from(sign)),
            Unpacked::Finite {
                sign,
                exp,
                coeff,
                form2,
            } => write!(
                f,
                "[{},{coeff},{exp},form={}]",
                u8::from(sign),
                u8::from(form2) + 1,
            ),
        }
    }
}

impl fmt::Binary for D128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for D128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for D128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
