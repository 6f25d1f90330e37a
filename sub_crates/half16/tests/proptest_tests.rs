#[macro_use]
extern crate proptest;
extern crate half16;

use half16::{
    float_to_half, float_to_half_slow, float_to_half_table_free, half_to_float, predd, predf,
    succd, succf,
};
use proptest::arbitrary::any;
use proptest::test_runner::Config;

/// Whether the float is finite and not adjacent to infinity.
fn steppable_f32(f: f32) -> bool {
    f.is_finite() && f.abs() < std::f32::MAX
}

fn steppable_f64(d: f64) -> bool {
    d.is_finite() && d.abs() < std::f64::MAX
}

proptest! {
    #![proptest_config(Config::with_cases(4096))]

    #[test]
    fn pt_encoders_agree(bits in any::<u32>()) {
        let f = f32::from_bits(bits);
        let h = float_to_half(f);

        assert_eq!(h, float_to_half_slow(f));
        assert_eq!(h, float_to_half_table_free(f));
    }

    #[test]
    fn pt_encode_nan_stays_nan(bits in any::<u32>()) {
        let f = f32::from_bits(bits | 0x7f80_0000);
        prop_assume!(f.is_nan());

        let h = float_to_half(f);
        assert_eq!(h & 0x7c00, 0x7c00);
        assert_ne!(h & 0x03ff, 0);
        assert_eq!(h & 0x8000, (bits >> 16) as u16 & 0x8000);
    }

    #[test]
    fn pt_encode_is_nearest(bits in 0u32..0x477f_e001, neg in any::<bool>()) {
        // Every finite float with magnitude up to 65504 (0x477fe000).
        let f = f32::from_bits(bits | if neg { 0x8000_0000 } else { 0 });

        // No other finite half is closer than the one chosen.
        let h = float_to_half(f);
        let err = (half_to_float(h) as f64 - f as f64).abs();
        let below = half_to_float(h.wrapping_sub(1)) as f64;
        let above = half_to_float(h.wrapping_add(1)) as f64;
        if below.is_finite() {
            assert!(err <= (below - f as f64).abs());
        }
        if above.is_finite() {
            assert!(err <= (above - f as f64).abs());
        }
    }

    #[test]
    fn pt_encode_monotonic(a in any::<u32>(), b in any::<u32>()) {
        let a = f32::from_bits(a);
        let b = f32::from_bits(b);
        prop_assume!(!a.is_nan() && !b.is_nan());

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(half_to_float(float_to_half(lo)) <= half_to_float(float_to_half(hi)));
    }

    #[test]
    fn pt_succf_predf(bits in any::<u32>()) {
        let f = f32::from_bits(bits);
        prop_assume!(steppable_f32(f));

        assert!(predf(f) < f);
        assert!(f < succf(f));
        if f != 0.0 {
            assert_eq!(succf(predf(f)).to_bits(), f.to_bits());
            assert_eq!(predf(succf(f)).to_bits(), f.to_bits());
        }
    }

    #[test]
    fn pt_succd_predd(bits in any::<u64>()) {
        let d = f64::from_bits(bits);
        prop_assume!(steppable_f64(d));

        assert!(predd(d) < d);
        assert!(d < succd(d));
        if d != 0.0 {
            assert_eq!(succd(predd(d)).to_bits(), d.to_bits());
            assert_eq!(predd(succd(d)).to_bits(), d.to_bits());
        }
    }

    #[test]
    fn pt_step_is_adjacent(bits in any::<u32>()) {
        let f = f32::from_bits(bits);
        prop_assume!(steppable_f32(f) && f != 0.0);

        // Nothing fits between a value and its successor, so the midpoint
        // (computed in higher precision) must round back to one of them.
        let s = succf(f);
        let mid = ((f as f64 + s as f64) * 0.5) as f32;
        assert!(mid == f || mid == s);
    }
}
