//! A summary of how a string encodes, for display.

use alloc::{format, string::String};

use crate::bid::D128;

/// How a string encodes as a [`D128`].
///
/// See [`info`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Info {
    /// The 128 bits in groups of 16, prefixed with `0b`.
    pub binary: String,
    /// The 32 hex digits in groups of 8, prefixed with `0x`.
    pub hex: String,
    /// The canonical string.
    pub decimal: String,
    /// Empty on success. Otherwise, the stage that failed and
    /// why, as `<stage> - <reason>`. Every other field is empty.
    ///
    /// The only stage is `parse`, the string to bits
    /// conversion. Display layers that label it `fromString`
    /// should map `parse - <reason>` to `fromString - <reason>`.
    pub error: String,
}

/// Encodes `s` and describes the result.
///
/// # Example
///
/// ```rust
/// use decimal128::info;
///
/// let info = info("1.50");
/// assert_eq!(info.hex, "0x303c0000_00000000_00000000_00000096");
/// assert_eq!(info.decimal, "1.50");
/// assert!(info.error.is_empty());
///
/// let info = decimal128::info("1.2.3");
/// assert_eq!(info.error, "parse - multiple radix points");
/// ```
pub fn info(s: &str) -> Info {
    let d = match D128::parse(s) {
        Ok(d) => d,
        Err(err) => {
            return Info {
                error: format!("parse - {err}"),
                ..Info::default()
            }
        }
    };
    let bits = d.to_bits();
    Info {
        binary: group("0b", &format!("{bits:0128b}"), 16),
        hex: group("0x", &format!("{bits:032x}"), 8),
        decimal: format!("{d}"),
        error: String::new(),
    }
}

/// Joins `width`-sized groups of `digits` with underscores.
fn group(prefix: &str, digits: &str, width: usize) -> String {
    let mut s = String::with_capacity(prefix.len() + digits.len() + digits.len() / width);
    s.push_str(prefix);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % width == 0 {
            s.push('_');
        }
        s.push(c);
    }
    s
}
