//! Hardware half conversion, where the CPU has it.
//!
//! These wrap the x86 F16C instructions, with runtime feature detection.
//! They are here as an independent reference to check the software
//! conversions against: for every non-NaN input they agree with
//! `float_to_half()` and `half_to_float()`.  NaN payloads may differ, since
//! the hardware sets the quiet bit.
//!
//! On other architectures, or CPUs without F16C, everything returns `None`.

/// Whether hardware half conversion is available on this CPU.
#[inline]
pub fn available() -> bool {
    imp::available()
}

/// Converts a float to a half with the CPU's conversion instruction,
/// rounding to nearest even.
#[inline]
pub fn float_to_half(f: f32) -> Option<u16> {
    if imp::available() {
        Some(unsafe { imp::float_to_half(f) })
    } else {
        None
    }
}

/// Converts a half to a float with the CPU's conversion instruction.
#[inline]
pub fn half_to_float(h: u16) -> Option<f32> {
    if imp::available() {
        Some(unsafe { imp::half_to_float(h) })
    } else {
        None
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod imp {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::{
        _mm_cvtph_ps, _mm_cvtps_ph, _mm_cvtsi128_si32, _mm_cvtss_f32, _mm_set1_epi16, _mm_set_ss,
        _MM_FROUND_TO_NEAREST_INT,
    };
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::{
        _mm_cvtph_ps, _mm_cvtps_ph, _mm_cvtsi128_si32, _mm_cvtss_f32, _mm_set1_epi16, _mm_set_ss,
        _MM_FROUND_TO_NEAREST_INT,
    };

    #[inline]
    pub fn available() -> bool {
        is_x86_feature_detected!("f16c")
    }

    #[target_feature(enable = "f16c")]
    pub unsafe fn float_to_half(f: f32) -> u16 {
        _mm_cvtsi128_si32(_mm_cvtps_ph(_mm_set_ss(f), _MM_FROUND_TO_NEAREST_INT)) as u16
    }

    #[target_feature(enable = "f16c")]
    pub unsafe fn half_to_float(h: u16) -> f32 {
        _mm_cvtss_f32(_mm_cvtph_ps(_mm_set1_epi16(h as i16)))
    }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
mod imp {
    #[inline]
    pub fn available() -> bool {
        false
    }

    pub unsafe fn float_to_half(_f: f32) -> u16 {
        unreachable!()
    }

    pub unsafe fn half_to_float(_h: u16) -> f32 {
        unreachable!()
    }
}
