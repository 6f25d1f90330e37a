//! Rough timings of each conversion path.

use log::debug;
use rand::{rngs::SmallRng, FromEntropy, Rng};

use half16::{
    float_to_half, float_to_half_slow, float_to_half_table_free, half_to_float,
    half_to_float_table_free, hardware,
};

use crate::timer::Timer;

/// Times every encode and decode path over `count` random values, and
/// prints the average time per value.
pub fn run(count: usize, use_hardware: bool) {
    let mut rng = SmallRng::from_entropy();

    // Spread over the whole half range, from the subnormals to a bit past
    // the largest finite half.
    let floats: Vec<f32> = (0..count)
        .map(|_| {
            let scale = 2.0f32.powi(-rng.gen_range(0, 28));
            (rng.gen::<f32>() * 2.0 - 1.0) * 70000.0 * scale
        })
        .collect();
    let halfs: Vec<u16> = (0..count).map(|_| rng.gen::<u16>()).collect();

    let mut encoded = vec![0u16; count];
    let mut decoded = vec![0.0f32; count];

    println!("Timings over {} values:", count);

    time_encode("encode", &floats, &mut encoded, float_to_half);
    time_encode("encode (slow path)", &floats, &mut encoded, float_to_half_slow);
    time_encode("encode (table-free)", &floats, &mut encoded, float_to_half_table_free);
    if use_hardware {
        time_encode("encode (hardware)", &floats, &mut encoded, |f| {
            hardware::float_to_half(f).unwrap_or(0)
        });
    }

    time_decode("decode", &halfs, &mut decoded, half_to_float);
    #[cfg(feature = "decode_table")]
    time_decode("decode (table)", &halfs, &mut decoded, half16::half_to_float_table);
    time_decode("decode (table-free)", &halfs, &mut decoded, half_to_float_table_free);
    if use_hardware {
        time_decode("decode (hardware)", &halfs, &mut decoded, |h| {
            hardware::half_to_float(h).unwrap_or(0.0)
        });
    }
}

fn time_encode(name: &str, src: &[f32], dst: &mut [u16], encode: impl Fn(f32) -> u16) {
    let mut t = Timer::new();
    for (h, &f) in dst.iter_mut().zip(src.iter()) {
        *h = encode(f);
    }
    let secs = t.tick();

    let checksum = dst.iter().fold(0u32, |sum, &h| sum.wrapping_add(h as u32));
    print_timing(name, secs, src.len());
    debug!("{} checksum: {:#010x}", name, checksum);
}

fn time_decode(name: &str, src: &[u16], dst: &mut [f32], decode: impl Fn(u16) -> f32) {
    let mut t = Timer::new();
    for (f, &h) in dst.iter_mut().zip(src.iter()) {
        *f = decode(h);
    }
    let secs = t.tick();

    let checksum = dst
        .iter()
        .fold(0u32, |sum, &f| sum.wrapping_add(f.to_bits()));
    print_timing(name, secs, src.len());
    debug!("{} checksum: {:#010x}", name, checksum);
}

fn print_timing(name: &str, secs: f64, count: usize) {
    println!(
        "    {:<24} {:>8.3} ns/value",
        name,
        secs * 1.0e9 / count as f64
    );
}
