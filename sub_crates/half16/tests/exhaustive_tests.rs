extern crate half16;

use half16::{
    float_to_half, float_to_half_slow, float_to_half_table_free, half_to_float,
    half_to_float_table_free, hardware, limits::DENORM_MIN,
};

fn is_half_nan(h: u16) -> bool {
    (h & 0x7c00) == 0x7c00 && (h & 0x03ff) != 0
}

#[test]
fn subnormal_cross_check() {
    let f = DENORM_MIN + DENORM_MIN * 0.5;
    let fast = float_to_half(f);
    let slow = float_to_half_slow(f);
    let table_free = float_to_half_table_free(f);

    assert_eq!(fast, slow);
    assert_eq!(fast, table_free);
    assert_eq!(fast, 0x0002);
}

#[test]
fn half_round_trip() {
    for i in 0..=u16::max_value() {
        let f = half_to_float(i);
        let h = float_to_half(f);
        if is_half_nan(i) {
            assert!(half_to_float(h).is_nan(), "{:#06x} lost its NaN-ness", i);
        } else {
            assert_eq!(h, i, "{:#06x} -> {} -> {:#06x}", i, f, h);
        }
    }
}

#[test]
fn half_round_trip_all_encoders() {
    for i in 0..=u16::max_value() {
        let f = half_to_float_table_free(i);
        let h = float_to_half(f);
        assert_eq!(float_to_half_slow(f), h);
        assert_eq!(float_to_half_table_free(f), h);
    }
}

#[cfg(feature = "decode_table")]
#[test]
fn decode_table_matches_table_free() {
    use half16::half_to_float_table;

    for i in 0..=u16::max_value() {
        assert_eq!(
            half_to_float_table(i).to_bits(),
            half_to_float_table_free(i).to_bits(),
            "{:#06x}",
            i
        );
    }
}

#[test]
fn encoders_agree_between_halfs() {
    // Every float that sits exactly between two adjacent halfs, and its
    // neighbors one float ulp either side.  These are where rounding
    // decisions happen.
    for i in 0..0x7bffu16 {
        let lo = half_to_float(i) as f64;
        let hi = half_to_float(i + 1) as f64;
        let mid = ((lo + hi) * 0.5) as f32;
        for &x in &[
            f32::from_bits(mid.to_bits() - 1),
            mid,
            f32::from_bits(mid.to_bits() + 1),
        ] {
            for &f in &[x, -x] {
                let h = float_to_half(f);
                assert_eq!(h, float_to_half_slow(f), "{:#010x}", f.to_bits());
                assert_eq!(h, float_to_half_table_free(f), "{:#010x}", f.to_bits());
            }
        }

        // Ties go to the even neighbor.
        let even = if i & 1 == 0 { i } else { i + 1 };
        assert_eq!(float_to_half(mid), even, "tie above {:#06x}", i);
    }
}

#[test]
fn hardware_decode_cross_check() {
    if !hardware::available() {
        return;
    }

    let mut nan_diffs = 0;
    for i in 0..=u16::max_value() {
        let hw = hardware::half_to_float(i).unwrap();
        let sw = half_to_float(i);
        if hw.to_bits() != sw.to_bits() {
            assert!(
                hw.is_nan() && sw.is_nan(),
                "{:#06x}: hardware {:#010x} vs software {:#010x}",
                i,
                hw.to_bits(),
                sw.to_bits()
            );
            nan_diffs += 1;
        }
    }
    if nan_diffs != 0 {
        println!(
            "{} NaN values decoded differently by hardware and software",
            nan_diffs
        );
    }
}

#[test]
fn hardware_encode_cross_check() {
    if !hardware::available() {
        return;
    }

    let mut nan_diffs = 0;
    for i in 0..=u16::max_value() {
        let f = half_to_float(i);
        for &x in &[
            f,
            f32::from_bits(f.to_bits().wrapping_add(1)),
            f32::from_bits(f.to_bits().wrapping_sub(1)),
            f32::from_bits(f.to_bits() | 0x0fff),
            f32::from_bits((f.to_bits() & !0x1fff) | 0x1000),
        ] {
            let hw = hardware::float_to_half(x).unwrap();
            let sw = float_to_half(x);
            if hw != sw {
                assert!(
                    x.is_nan() && is_half_nan(hw) && is_half_nan(sw),
                    "{:#010x}: hardware {:#06x} vs software {:#06x}",
                    x.to_bits(),
                    hw,
                    sw
                );
                nan_diffs += 1;
            }
        }
    }
    if nan_diffs != 0 {
        println!(
            "{} NaN values encoded differently by hardware and software",
            nan_diffs
        );
    }
}
