//! Bit-exact conversion between `f32` and 16-bit half-precision floats.
//!
//! The half format is IEEE-754 binary16: 1 sign bit, 5 exponent bits with
//! a bias of 15, and 10 mantissa bits.  Halfs can represent magnitudes
//! between roughly 6.1e-5 and 6.5e4 with a relative error of about 9.8e-4,
//! and smaller magnitudes down to 6.0e-8 as subnormals.  All integers in
//! `[-2048, 2048]` are exact.
//!
//! Float to half conversion rounds to nearest, ties to even, saturates to
//! infinity on overflow, and keeps NaNs NaN.  Half to float conversion is
//! exact.  Every input bit pattern in both directions has a defined result,
//! and none of the conversions can fail or panic.
//!
//! Both directions have a table-accelerated path and a table-free path
//! that produce identical bits.  The half-to-float table (256 KiB) can be
//! left out by disabling the default `decode_table` feature, which switches
//! `half_to_float()` over to the table-free algorithm.
//!
//! The `hardware` module exposes the CPU's own half conversion (x86 F16C)
//! where available, as an independent reference for cross-checking.
//!
//! The crate also has `succf()`/`predf()`/`succd()`/`predd()` for stepping
//! floats and doubles by one ulp.

#![allow(clippy::unreadable_literal)]

mod algorithm;
mod decode;
mod encode;
mod half;
pub mod hardware;
mod layout;
pub mod limits;
mod tables;
mod ulp;

#[cfg(feature = "decode_table")]
pub use crate::decode::half_to_float_table;
pub use crate::{
    decode::{half_to_float, half_to_float_slice, half_to_float_table_free},
    encode::{float_to_half, float_to_half_slice, float_to_half_slow, float_to_half_table_free},
    half::{float_bit_string, Half},
    ulp::{predd, predf, succd, succf},
};
