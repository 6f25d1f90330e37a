//! Stepping floating point values by one ulp.
//!
//! These work on the bit patterns directly: for non-negative values the
//! bit patterns are ordered like the values they represent, and for
//! negative values the order is reversed.
//!
//! Both zeros step to the smallest subnormal of the appropriate sign, and
//! stepping toward zero from the smallest subnormal yields a zero of the
//! same sign.  Infinities and NaNs are returned unchanged.

/// Returns the smallest `f32` greater than `f`.
pub fn succf(f: f32) -> f32 {
    // Handle special cases
    if f.is_infinite() || f.is_nan() {
        return f;
    }

    let bits = f.to_bits();
    let bits = if bits & 0x7fff_ffff == 0 {
        1
    } else if bits & 0x8000_0000 == 0 {
        bits + 1
    } else {
        bits - 1
    };

    f32::from_bits(bits)
}

/// Returns the largest `f32` less than `f`.
pub fn predf(f: f32) -> f32 {
    // Handle special cases
    if f.is_infinite() || f.is_nan() {
        return f;
    }

    let bits = f.to_bits();
    let bits = if bits & 0x7fff_ffff == 0 {
        0x8000_0001
    } else if bits & 0x8000_0000 == 0 {
        bits - 1
    } else {
        bits + 1
    };

    f32::from_bits(bits)
}

/// Returns the smallest `f64` greater than `d`.
pub fn succd(d: f64) -> f64 {
    // Handle special cases
    if d.is_infinite() || d.is_nan() {
        return d;
    }

    let bits = d.to_bits();
    let bits = if bits & 0x7fff_ffff_ffff_ffff == 0 {
        1
    } else if bits & 0x8000_0000_0000_0000 == 0 {
        bits + 1
    } else {
        bits - 1
    };

    f64::from_bits(bits)
}

/// Returns the largest `f64` less than `d`.
pub fn predd(d: f64) -> f64 {
    // Handle special cases
    if d.is_infinite() || d.is_nan() {
        return d;
    }

    let bits = d.to_bits();
    let bits = if bits & 0x7fff_ffff_ffff_ffff == 0 {
        0x8000_0000_0000_0001
    } else if bits & 0x8000_0000_0000_0000 == 0 {
        bits - 1
    } else {
        bits + 1
    };

    f64::from_bits(bits)
}
