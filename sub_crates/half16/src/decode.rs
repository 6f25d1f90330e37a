//! Half to binary32 conversion.
//!
//! Every half value is exactly representable as a binary32, so decoding
//! is lossless.  There are two equivalent implementations: a lookup in a
//! table of all 65536 results, and the table-free bit algorithm that the
//! table is generated from.  Which one `half_to_float()` uses depends on
//! the `decode_table` feature, but the results are bit-identical either way.

use crate::algorithm::half_to_float_bits;
#[cfg(feature = "decode_table")]
use crate::tables::TO_FLOAT;

/// Converts a half bit pattern to the float with the same value.
#[inline]
pub fn half_to_float(h: u16) -> f32 {
    #[cfg(feature = "decode_table")]
    {
        half_to_float_table(h)
    }
    #[cfg(not(feature = "decode_table"))]
    {
        half_to_float_table_free(h)
    }
}

/// Converts a half bit pattern to a float with a single table lookup.
#[cfg(feature = "decode_table")]
#[inline(always)]
pub fn half_to_float_table(h: u16) -> f32 {
    f32::from_bits(TO_FLOAT[h as usize])
}

/// Converts a half bit pattern to a float without a lookup table.
#[inline]
pub fn half_to_float_table_free(h: u16) -> f32 {
    f32::from_bits(half_to_float_bits(h))
}

/// Converts a slice of halfs to floats.
///
/// Panics if the slices have different lengths.
pub fn half_to_float_slice(src: &[u16], dst: &mut [f32]) {
    assert_eq!(
        src.len(),
        dst.len(),
        "half_to_float_slice(): source and destination lengths differ"
    );
    for (f, &h) in dst.iter_mut().zip(src.iter()) {
        *f = half_to_float(h);
    }
}
