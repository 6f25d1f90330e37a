// Table-free bit algorithms for both conversion directions.
//
// These are the reference algorithms: the lookup tables are generated from
// them at build time (this file is `include!`d by `build.rs`), and the
// table-driven paths are tested against them.  Like `layout.rs`, this file
// must not use inner attributes or refer to anything outside `layout`.

use super::layout::{
    pack_f32, pack_half, half_exponent, half_mantissa, F32_HIDDEN_BIT, F32_MANT_BITS,
    F32_MANT_MASK, HALF_EXP_MASK, HALF_MANT_BITS, HALF_MANT_MASK, HALF_MAX_BIASED_EXP,
    HALF_SIGN_MASK, MANT_SHIFT, REBIAS,
};

/// Rounds a 23-bit mantissa so that truncating its low 13 bits yields the
/// nearest 10-bit mantissa, ties to even.
///
/// The result may carry into bit 23, which callers must account for.
#[inline(always)]
pub fn round_mantissa(m: u32) -> u32 {
    m + 0x0fff + ((m >> MANT_SHIFT) & 1)
}

/// Converts a binary32 bit pattern to a half bit pattern, handling every
/// case: zeros, results that are subnormal halfs, overflow to infinity,
/// infinities and NaNs.
pub fn float_bits_to_half(x: u32) -> u16 {
    let s = ((x >> 16) as u16) & HALF_SIGN_MASK;
    let e = ((x >> F32_MANT_BITS) & 0xff) as i32 - REBIAS;
    let m = x & F32_MANT_MASK;

    if e <= 0 {
        if e < -10 {
            // Smaller in magnitude than half the smallest half subnormal
            // (or a zero / float subnormal).  Signed zero.
            return s;
        }

        // Subnormal half.  Make the hidden bit explicit, then round away
        // the low `t` bits, ties to even.  If rounding carries out of the
        // subnormal mantissa it lands in the exponent field and produces
        // the smallest normal half, which is the correct result.
        let m = m | F32_HIDDEN_BIT;
        let t = (14 - e) as u32;
        let a = (1 << (t - 1)) - 1;
        let b = (m >> t) & 1;

        s | ((m + a + b) >> t) as u16
    } else if e == 0xff - REBIAS {
        if m == 0 {
            s | HALF_EXP_MASK
        } else {
            // Keep the sign and the top 10 mantissa bits of the NaN.  If
            // those are all zero the result would read as infinity, so at
            // least one bit gets set.
            let m = (m >> MANT_SHIFT) as u16;
            s | HALF_EXP_MASK | m | (m == 0) as u16
        }
    } else {
        let mut e = e;
        let mut m = round_mantissa(m);

        // Mantissa overflowed: the value rounded up to the next power of two.
        if m & F32_HIDDEN_BIT != 0 {
            m = 0;
            e += 1;
        }

        if e > HALF_MAX_BIASED_EXP {
            return s | HALF_EXP_MASK;
        }

        pack_half(s, e as u16, (m >> MANT_SHIFT) as u16)
    }
}

/// Converts a half bit pattern to the binary32 bit pattern of the same
/// value.  Exact for every input; NaN payloads are carried over in the top
/// mantissa bits.
pub fn half_to_float_bits(h: u16) -> u32 {
    let sign = ((h & HALF_SIGN_MASK) as u32) << 16;
    let e = u32::from(half_exponent(h));
    let m = u32::from(half_mantissa(h));

    match e {
        0 if m == 0 => sign,

        // Subnormal half, which is always a normal float.  Shift the
        // leading one up into the hidden bit position and lower the
        // exponent to match.
        0 => {
            let shift = m.leading_zeros() - (31 - HALF_MANT_BITS);
            let m = (m << shift) & u32::from(HALF_MANT_MASK);
            pack_f32(sign, (1 + REBIAS) as u32 - shift, m << MANT_SHIFT)
        }

        0x1f => pack_f32(sign, 0xff, m << MANT_SHIFT),

        _ => pack_f32(sign, e + REBIAS as u32, m << MANT_SHIFT),
    }
}

/// Computes the exponent lookup table entry for the given 9-bit
/// (sign, exponent) index of a binary32 value.
///
/// The entry is the half sign and exponent bits for every float in that
/// class, or zero if the class can produce something other than a normal
/// half (zeros, subnormals, overflow, infinities, NaNs).  The top normal
/// exponent is excluded as well, since rounding may overflow it.
#[cfg_attr(not(test), allow(dead_code))]
pub fn exponent_lut_entry(index: u32) -> u16 {
    let e = (index & 0xff) as i32 - REBIAS;

    if e <= 0 || e >= HALF_MAX_BIASED_EXP {
        0
    } else {
        // The canonical member of the class: zero mantissa.
        float_bits_to_half(index << F32_MANT_BITS)
    }
}
