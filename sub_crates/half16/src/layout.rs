// Bit layouts of the two formats.
//
// This file is also pulled into `build.rs` with `include!`, so it must stay
// free of inner attributes and of references to other crate modules.

/// Sign bit of a binary32 value.
pub const F32_SIGN_MASK: u32 = 0x8000_0000;

/// Exponent field of a binary32 value, in place.
pub const F32_EXP_MASK: u32 = 0x7f80_0000;

/// Mantissa field of a binary32 value.
pub const F32_MANT_MASK: u32 = 0x007f_ffff;

/// Implicit leading mantissa bit of a normalized binary32 value.
pub const F32_HIDDEN_BIT: u32 = 0x0080_0000;

pub const F32_MANT_BITS: u32 = 23;
pub const F32_EXP_BIAS: i32 = 127;

/// Sign bit of a half value.
pub const HALF_SIGN_MASK: u16 = 0x8000;

/// Exponent field of a half value, in place.  Also the bit pattern of
/// positive infinity.
pub const HALF_EXP_MASK: u16 = 0x7c00;

/// Mantissa field of a half value.
pub const HALF_MANT_MASK: u16 = 0x03ff;

pub const HALF_MANT_BITS: u32 = 10;
pub const HALF_EXP_BIAS: i32 = 15;

/// Largest biased exponent of a finite half.
pub const HALF_MAX_BIASED_EXP: i32 = 30;

/// Distance between the two exponent biases.
pub const REBIAS: i32 = F32_EXP_BIAS - HALF_EXP_BIAS;

/// Number of mantissa bits dropped when narrowing binary32 to half.
pub const MANT_SHIFT: u32 = F32_MANT_BITS - HALF_MANT_BITS;

/// Index mask for the (sign, exponent) lookup table: the 9 most
/// significant bits of a binary32 value, after shifting out the mantissa.
pub const SIGN_EXP_INDEX_MASK: u32 = 0x1ff;

/// Biased exponent field of a half, shifted down.
#[inline(always)]
pub const fn half_exponent(h: u16) -> u16 {
    (h >> HALF_MANT_BITS) & 0x1f
}

#[inline(always)]
pub const fn half_mantissa(h: u16) -> u16 {
    h & HALF_MANT_MASK
}

/// Assembles a half from an in-place sign bit, a biased exponent, and a
/// 10-bit mantissa.
#[inline(always)]
pub const fn pack_half(sign: u16, biased_exp: u16, mantissa: u16) -> u16 {
    sign | (biased_exp << HALF_MANT_BITS) | mantissa
}

/// Assembles a binary32 bit pattern from an in-place sign bit, a biased
/// exponent, and a 23-bit mantissa.
#[inline(always)]
pub const fn pack_f32(sign: u32, biased_exp: u32, mantissa: u32) -> u32 {
    sign | (biased_exp << F32_MANT_BITS) | mantissa
}
