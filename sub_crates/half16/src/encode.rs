//! Binary32 to half conversion.
//!
//! All of the encoders here produce identical bits for every one of the
//! 2^32 possible inputs.  They differ only in how they get there:
//!
//! - `float_to_half()` looks up the half sign and exponent in a 512-entry
//!   table, which handles nearly all values that become normal halfs with
//!   just a rounding add.  Everything else goes through the slow path.
//! - `float_to_half_slow()` is the slow path on its own: a full bit-level
//!   conversion that handles every case.
//! - `float_to_half_table_free()` classifies by magnitude thresholds
//!   instead, and needs no table at all.
//!
//! Rounding is always to nearest, ties to even.  Values too large for half
//! saturate to a signed infinity, and NaNs always stay NaN.

use crate::{
    algorithm::{float_bits_to_half, round_mantissa},
    layout::{
        F32_EXP_MASK, F32_MANT_BITS, F32_MANT_MASK, F32_SIGN_MASK, HALF_EXP_MASK, MANT_SHIFT,
        SIGN_EXP_INDEX_MASK,
    },
    tables::EXPONENT_LUT,
};

/// Converts a float to the nearest half, returning its bit pattern.
///
/// This never fails: overflow saturates to infinity, underflow goes
/// gradually through the half subnormals to a zero of the same sign, and
/// NaN input produces a NaN half.
#[inline]
pub fn float_to_half(f: f32) -> u16 {
    let x = f.to_bits();

    // Numeric comparison, so that both zeros end up here with their sign.
    if f == 0.0 {
        return (x >> 16) as u16;
    }

    let e = EXPONENT_LUT[((x >> F32_MANT_BITS) & SIGN_EXP_INDEX_MASK) as usize];
    if e != 0 {
        // A rounding carry out of the mantissa correctly bumps the exponent,
        // and the table excludes the exponent where that could overflow.
        e + (round_mantissa(x & F32_MANT_MASK) >> MANT_SHIFT) as u16
    } else {
        float_bits_to_half(x)
    }
}

/// Converts a float to a half using only the full bit-level algorithm.
///
/// Same result as `float_to_half()` for every input.  Mostly useful as a
/// reference.
#[inline]
pub fn float_to_half_slow(f: f32) -> u16 {
    float_bits_to_half(f.to_bits())
}

/// Converts a float to a half without any lookup table.
///
/// Same result as `float_to_half()` for every input.
#[inline]
pub fn float_to_half_table_free(f: f32) -> u16 {
    let bits = f.to_bits();
    let ui = bits & !F32_SIGN_MASK;
    let ret = ((bits >> 16) & 0x8000) as u16;

    // Zero, or at most half the smallest half subnormal (which ties to zero).
    if ui < 0x3300_0001 {
        return ret;
    }

    // Infinity or NaN.
    if ui >= F32_EXP_MASK {
        if ui == F32_EXP_MASK {
            return ret | HALF_EXP_MASK;
        }
        let m = ((ui & F32_MANT_MASK) >> MANT_SHIFT) as u16;
        return ret | HALF_EXP_MASK | m | (m == 0) as u16;
    }

    // Rounds to at least 65520, which is infinity.
    if ui > 0x477f_efff {
        return ret | HALF_EXP_MASK;
    }

    // Normal half.  Rebias the exponent in place and round.
    if ui >= 0x3880_0000 {
        let ui = ui - 0x3800_0000;
        return ret | ((ui + 0x0fff + ((ui >> 13) & 1)) >> 13) as u16;
    }

    // Subnormal half.
    let e = ui >> 23;
    let shift = 0x7e - e;
    let m = 0x80_0000 | (ui & 0x7f_ffff);
    let r = m << (32 - shift);
    let mut ret = ret | (m >> shift) as u16;
    if r > 0x8000_0000 || (r == 0x8000_0000 && (ret & 1) != 0) {
        ret += 1;
    }
    ret
}

/// Converts a slice of floats to halfs.
///
/// Panics if the slices have different lengths.
pub fn float_to_half_slice(src: &[f32], dst: &mut [u16]) {
    assert_eq!(
        src.len(),
        dst.len(),
        "float_to_half_slice(): source and destination lengths differ"
    );
    for (h, &f) in dst.iter_mut().zip(src.iter()) {
        *h = float_to_half(f);
    }
}
