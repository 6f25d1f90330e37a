//! A 16-bit floating point value type.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    decode::half_to_float,
    encode::float_to_half,
    layout::{half_exponent, half_mantissa, HALF_EXP_MASK, HALF_SIGN_MASK},
    limits,
};

/// A half-precision floating point number.
///
/// Stored as its IEEE-754 binary16 bit pattern, so it can be written to
/// files and GPU buffers as-is.  Arithmetic is done in `f32` and rounded
/// back to half.
///
/// Comparisons are numeric: `-0` equals `+0` and NaN is unordered.  Use
/// `to_bits()` to compare bit patterns.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    pub const ZERO: Half = Half(0x0000);
    pub const NEG_ZERO: Half = Half(0x8000);
    pub const ONE: Half = Half(0x3c00);
    pub const POS_INFINITY: Half = Half(0x7c00);
    pub const NEG_INFINITY: Half = Half(0xfc00);

    /// A quiet NaN, bit pattern `0111111111111111`.
    pub const QNAN: Half = Half(0x7fff);

    /// A signaling NaN, bit pattern `0111110111111111`.
    pub const SNAN: Half = Half(0x7dff);

    pub const MAX: Half = Half(0x7bff);
    pub const MIN: Half = Half(0xfbff);
    pub const MIN_POSITIVE: Half = Half(0x0400);
    pub const MIN_POSITIVE_SUBNORMAL: Half = Half(0x0001);
    pub const EPSILON: Half = Half(0x1400);

    pub const MANTISSA_DIGITS: u32 = limits::MANTISSA_DIGITS;
    pub const DIGITS: u32 = limits::DIGITS;
    pub const DECIMAL_DIGITS: u32 = limits::DECIMAL_DIGITS;
    pub const RADIX: u32 = limits::RADIX;
    pub const MIN_EXP: i32 = limits::MIN_EXP;
    pub const MAX_EXP: i32 = limits::MAX_EXP;
    pub const MIN_10_EXP: i32 = limits::MIN_10_EXP;
    pub const MAX_10_EXP: i32 = limits::MAX_10_EXP;

    /// Rounds a float to the nearest half.
    #[inline]
    pub fn from_f32(f: f32) -> Half {
        Half(float_to_half(f))
    }

    #[inline]
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        half_to_float(self.0)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        half_exponent(self.0) < 31
    }

    #[inline]
    pub fn is_normalized(self) -> bool {
        let e = half_exponent(self.0);
        e > 0 && e < 31
    }

    #[inline]
    pub fn is_denormalized(self) -> bool {
        half_exponent(self.0) == 0 && half_mantissa(self.0) != 0
    }

    /// True for both positive and negative zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        (self.0 & !HALF_SIGN_MASK) == 0
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        half_exponent(self.0) == 31 && half_mantissa(self.0) != 0
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        half_exponent(self.0) == 31 && half_mantissa(self.0) == 0
    }

    /// True if the sign bit is set, including for `-0` and negative NaNs.
    #[inline]
    pub fn is_negative(self) -> bool {
        (self.0 & HALF_SIGN_MASK) != 0
    }

    /// Rounds to `n` bits of mantissa, to nearest with ties away from zero.
    ///
    /// For `n >= 10` the value is returned unchanged.  If rounding would
    /// overflow to infinity, the mantissa is truncated instead.  The sign
    /// is always preserved.
    pub fn round(self, n: u32) -> Half {
        if n >= 10 {
            return self;
        }

        let s = self.0 & HALF_SIGN_MASK;
        let mut e = self.0 & !HALF_SIGN_MASK;

        // The exponent adjusts by itself if rounding up overflows the
        // mantissa.
        e >>= 9 - n;
        e += e & 1;
        e <<= 9 - n;

        if e >= HALF_EXP_MASK {
            e = self.0;
            e >>= 10 - n;
            e <<= 10 - n;
        }

        Half(s | e)
    }

    /// Formats the bit pattern as `"s eeeee mmmmmmmmmm"`.
    pub fn bit_string(self) -> String {
        let mut s = String::with_capacity(18);
        for i in (0..16).rev() {
            s.push(if (self.0 >> i) & 1 != 0 { '1' } else { '0' });
            if i == 15 || i == 10 {
                s.push(' ');
            }
        }
        s
    }
}

/// Formats the bit pattern of a float as
/// `"s eeeeeeee mmmmmmmmmmmmmmmmmmmmmmm"`.
pub fn float_bit_string(f: f32) -> String {
    let bits = f.to_bits();
    let mut s = String::with_capacity(34);
    for i in (0..32).rev() {
        s.push(if (bits >> i) & 1 != 0 { '1' } else { '0' });
        if i == 31 || i == 23 {
            s.push(' ');
        }
    }
    s
}

impl From<f32> for Half {
    #[inline]
    fn from(f: f32) -> Half {
        Half::from_f32(f)
    }
}

impl From<Half> for f32 {
    #[inline]
    fn from(h: Half) -> f32 {
        h.to_f32()
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Half) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Half) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Neg for Half {
    type Output = Half;

    /// Flips the sign bit, for every value including NaNs.
    #[inline]
    fn neg(self) -> Half {
        Half(self.0 ^ HALF_SIGN_MASK)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Half({} [{:#06x}])", self.to_f32(), self.0)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $trait for Half {
            type Output = Half;

            #[inline]
            fn $fn(self, other: Half) -> Half {
                Half::from_f32(self.to_f32() $op other.to_f32())
            }
        }

        impl $trait<f32> for Half {
            type Output = Half;

            #[inline]
            fn $fn(self, other: f32) -> Half {
                Half::from_f32(self.to_f32() $op other)
            }
        }

        impl $assign_trait for Half {
            #[inline]
            fn $assign_fn(&mut self, other: Half) {
                *self = *self $op other;
            }
        }

        impl $assign_trait<f32> for Half {
            #[inline]
            fn $assign_fn(&mut self, other: f32) {
                *self = *self $op other;
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, +);
impl_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_binop!(Div, div, DivAssign, div_assign, /);
