//! Numeric limits of the half format, as `f32` values where applicable.

/// Smallest positive half, a subnormal: 2^-24.
pub const DENORM_MIN: f32 = 5.960_464_5e-8;

/// Smallest positive normalized half: 2^-14.
pub const NRM_MIN: f32 = 6.103_515_6e-5;

/// Alias of `NRM_MIN`, matching the naming of `std::f32::MIN_POSITIVE`.
pub const MIN_POSITIVE: f32 = NRM_MIN;

/// Largest finite half.
pub const MAX: f32 = 65504.0;

/// Difference between 1.0 and the next larger half: 2^-10.
pub const EPSILON: f32 = 0.000_976_562_5;

/// Number of significant binary digits, including the implicit one.
pub const MANTISSA_DIGITS: u32 = 11;

/// Number of base 10 digits that can be represented without change.
pub const DIGITS: u32 = 3;

/// Number of base 10 digits needed to represent every distinct half.
pub const DECIMAL_DIGITS: u32 = 5;

pub const RADIX: u32 = 2;

/// One greater than the smallest power of two that is a normalized half.
pub const MIN_EXP: i32 = -13;

/// One greater than the largest power of two that is a finite half.
pub const MAX_EXP: i32 = 16;

/// Smallest power of ten that is a normalized half.
pub const MIN_10_EXP: i32 = -4;

/// Largest power of ten that is a finite half.
pub const MAX_10_EXP: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_powers_of_two() {
        assert_eq!(DENORM_MIN, 2.0f32.powi(-24));
        assert_eq!(NRM_MIN, 2.0f32.powi(-14));
        assert_eq!(EPSILON, 2.0f32.powi(-10));
        assert_eq!(MAX, (2.0 - EPSILON) * 32768.0);
    }

    #[test]
    fn exponents_consistent() {
        assert_eq!(NRM_MIN, (RADIX as f32).powi(MIN_EXP - 1));
        assert_eq!(MAX, (RADIX as f32).powi(MAX_EXP) - 32.0);
        assert!(10.0f32.powi(MIN_10_EXP) >= NRM_MIN);
        assert!(10.0f32.powi(MAX_10_EXP) <= MAX);
        assert!(10.0f32.powi(MAX_10_EXP + 1) > MAX);
    }
}
