//! Precomputed conversion tables.
//!
//! The tables are generated by `build.rs` from the algorithms in
//! `algorithm.rs`, so they exist from program start, are never written to,
//! and can be read from any thread.

#![allow(clippy::unreadable_literal)]

// Provides `EXPONENT_LUT`: for each (sign, 8-bit exponent) of a binary32
// value, the half sign and exponent bits, or zero if that class needs the
// slow path.
include!(concat!(env!("OUT_DIR"), "/exponent_lut.inc"));

// Provides `TO_FLOAT`: the binary32 bit pattern of every half bit pattern.
#[cfg(feature = "decode_table")]
mod to_float {
    include!(concat!(env!("OUT_DIR"), "/to_float.inc"));
}

#[cfg(feature = "decode_table")]
pub use self::to_float::TO_FLOAT;
