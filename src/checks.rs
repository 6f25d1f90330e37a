//! The verification checks.
//!
//! Every check compares the crate's main conversion paths against another
//! implementation and tallies the result in a `CheckReport`.  The
//! comparisons against the crate's own alternate paths are strict.  The
//! ones against independent implementations (the `half` crate and the
//! CPU's conversion instructions) tolerate differing NaN payloads, but
//! count them.

use half16::{
    float_to_half, float_to_half_slow, float_to_half_table_free, half_to_float,
    half_to_float_table_free, hardware, limits::DENORM_MIN,
};
use log::debug;
use scoped_threadpool::Pool;

use crate::report::CheckReport;

/// How many pieces the full float sweep is split into.
const SWEEP_JOBS: u64 = 256;

fn is_half_nan(h: u16) -> bool {
    (h & 0x7c00) == 0x7c00 && (h & 0x03ff) != 0
}

fn compare_encode(report: &mut CheckReport, f: f32, ours: u16, theirs: u16, nan_tolerant: bool) {
    if ours == theirs {
        report.pass();
    } else if nan_tolerant && is_half_nan(ours) && is_half_nan(theirs) {
        report.nan_mismatch();
    } else {
        report.mismatch(format_args!(
            "{:e} ({:#010x}) encodes to {:#06x}, expected {:#06x}",
            f,
            f.to_bits(),
            ours,
            theirs
        ));
    }
}

fn compare_decode(report: &mut CheckReport, h: u16, ours: f32, theirs: f32, nan_tolerant: bool) {
    if ours.to_bits() == theirs.to_bits() {
        report.pass();
    } else if nan_tolerant && ours.is_nan() && theirs.is_nan() {
        report.nan_mismatch();
    } else {
        report.mismatch(format_args!(
            "{:#06x} decodes to {:e} ({:#010x}), expected {:e} ({:#010x})",
            h,
            ours,
            ours.to_bits(),
            theirs,
            theirs.to_bits()
        ));
    }
}

/// Encodes the value halfway between the two smallest half subnormals with
/// every encoder.  It's a tie, and must round to the even one, `0x0002`.
pub fn subnormal_cross_check() -> CheckReport {
    let mut report = CheckReport::new("subnormal tie");
    let f = DENORM_MIN + DENORM_MIN * 0.5;

    compare_encode(&mut report, f, float_to_half(f), 0x0002, false);
    compare_encode(&mut report, f, float_to_half_slow(f), 0x0002, false);
    compare_encode(&mut report, f, float_to_half_table_free(f), 0x0002, false);

    report
}

/// Decodes every half and encodes it again, which must give back the same
/// bits.  NaNs only need to stay NaN.
pub fn half_round_trip() -> CheckReport {
    let mut report = CheckReport::new("half round trip");

    for i in 0..=u16::max_value() {
        let f = half_to_float(i);
        let h = float_to_half(f);
        if h == i {
            report.pass();
        } else if is_half_nan(i) && half_to_float(h).is_nan() {
            report.nan_mismatch();
        } else {
            report.mismatch(format_args!(
                "{:#06x} -> {:e} ({:#010x}) -> {:#06x}",
                i,
                f,
                f.to_bits(),
                h
            ));
        }
    }

    report
}

/// Compares the table decode against the table-free decode, for every half.
#[cfg(feature = "decode_table")]
pub fn decode_paths() -> CheckReport {
    use half16::half_to_float_table;

    let mut report = CheckReport::new("decode table vs table-free");
    for i in 0..=u16::max_value() {
        compare_decode(
            &mut report,
            i,
            half_to_float_table(i),
            half_to_float_table_free(i),
            false,
        );
    }
    report
}

/// Compares decoding against the `half` crate, for every half.
pub fn reference_decode() -> CheckReport {
    let mut report = CheckReport::new("decode vs half crate");
    for i in 0..=u16::max_value() {
        let theirs = half::f16::from_bits(i).to_f32();
        compare_decode(&mut report, i, half_to_float(i), theirs, true);
    }
    report
}

/// Compares decoding against the CPU, for every half.
///
/// Only call this when `hardware::available()`.
pub fn hardware_decode() -> CheckReport {
    let mut report = CheckReport::new("decode vs hardware");
    for i in 0..=u16::max_value() {
        let theirs = match hardware::half_to_float(i) {
            Some(f) => f,
            None => break,
        };
        compare_decode(&mut report, i, half_to_float(i), theirs, true);
    }
    report
}

/// Compares encoding against the CPU, for every value a half can take and
/// its neighboring floats.
///
/// Only call this when `hardware::available()`.
pub fn hardware_encode() -> CheckReport {
    let mut report = CheckReport::new("encode vs hardware");
    for i in 0..=u16::max_value() {
        let bits = half_to_float_table_free(i).to_bits();
        for &x in &[bits, bits.wrapping_add(1), bits.wrapping_sub(1)] {
            let f = f32::from_bits(x);
            let theirs = match hardware::float_to_half(f) {
                Some(h) => h,
                None => return report,
            };
            compare_encode(&mut report, f, float_to_half(f), theirs, true);
        }
    }
    report
}

/// Encodes every one of the 2^32 float bit patterns with every encoder,
/// and compares against the main one.
///
/// The work is split over the threads of `pool`.
pub fn float_sweep(pool: &mut Pool, use_hardware: bool) -> Vec<CheckReport> {
    let chunk = (1u64 << 32) / SWEEP_JOBS;
    let mut results: Vec<Vec<CheckReport>> = vec![Vec::new(); SWEEP_JOBS as usize];

    pool.scoped(|scope| {
        for (job, slot) in results.iter_mut().enumerate() {
            scope.execute(move || {
                let first = job as u64 * chunk;
                let last = first + chunk - 1;
                *slot = sweep_range(first as u32, last as u32, use_hardware);
                debug!("Swept {:#010x}..={:#010x}", first, last);
            });
        }
    });

    let mut results = results.into_iter();
    let mut merged = results.next().unwrap_or_default();
    for reports in results {
        for (total, r) in merged.iter_mut().zip(reports.iter()) {
            total.merge(r);
        }
    }
    merged
}

fn sweep_range(first: u32, last: u32, use_hardware: bool) -> Vec<CheckReport> {
    let mut slow = CheckReport::new("float sweep: slow path");
    let mut table_free = CheckReport::new("float sweep: table-free");
    let mut reference = CheckReport::new("float sweep: half crate");
    let mut hw = CheckReport::new("float sweep: hardware");

    for bits in first..=last {
        let f = f32::from_bits(bits);
        let h = float_to_half(f);

        compare_encode(&mut slow, f, h, float_to_half_slow(f), false);
        compare_encode(&mut table_free, f, h, float_to_half_table_free(f), false);
        compare_encode(&mut reference, f, h, half::f16::from_f32(f).to_bits(), true);
        if use_hardware {
            if let Some(theirs) = hardware::float_to_half(f) {
                compare_encode(&mut hw, f, h, theirs, true);
            }
        }
    }

    let mut reports = vec![slow, table_free, reference];
    if use_hardware {
        reports.push(hw);
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_domain_checks_pass() {
        assert!(subnormal_cross_check().passed());

        let round_trip = half_round_trip();
        assert!(round_trip.passed());
        assert_eq!(round_trip.checked, 1 << 16);

        let reference = reference_decode();
        assert!(reference.passed());
        assert_eq!(reference.checked, 1 << 16);
    }

    #[cfg(feature = "decode_table")]
    #[test]
    fn decode_paths_pass() {
        let r = decode_paths();
        assert!(r.passed());
        assert_eq!(r.nan_mismatches, 0);
    }

    #[test]
    fn hardware_checks_pass() {
        if !hardware::available() {
            return;
        }
        assert!(hardware_decode().passed());
        assert!(hardware_encode().passed());
    }

    #[test]
    fn sweep_range_around_one() {
        // All the floats in [1.0, 2.0).
        let reports = sweep_range(0x3f80_0000, 0x3fff_ffff, false);
        assert_eq!(reports.len(), 3);
        for r in reports.iter() {
            assert!(r.passed(), "{}", r);
            assert_eq!(r.checked, 1 << 23);
        }
    }

    #[test]
    fn sweep_range_nans() {
        // Positive infinity and the NaNs above it.
        let reports = sweep_range(0x7f80_0000, 0x7f80_ffff, false);
        for r in reports.iter() {
            assert!(r.passed(), "{}", r);
        }
    }
}
