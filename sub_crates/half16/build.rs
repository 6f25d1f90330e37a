//! Generates the float-to-half exponent table and the half-to-float table.
//!
//! Both tables are computed with the crate's own table-free algorithms, so
//! the table-driven conversion paths are just caches of them.

use std::{env, fs::File, io::Write, path::Path};

#[allow(dead_code)]
mod layout {
    include!("src/layout.rs");
}

#[allow(dead_code)]
mod algorithm {
    include!("src/algorithm.rs");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/layout.rs");
    println!("cargo:rerun-if-changed=src/algorithm.rs");

    let out_dir = env::var("OUT_DIR").unwrap();

    // Exponent table, always built.
    {
        let dest_path = Path::new(&out_dir).join("exponent_lut.inc");
        let mut f = File::create(&dest_path).unwrap();

        f.write_all(b"pub static EXPONENT_LUT: [u16; 1 << 9] = [\n")
            .unwrap();
        for i in 0..(1u32 << 9) {
            if i % 8 == 0 {
                f.write_all(b"   ").unwrap();
            }
            f.write_all(format!(" 0x{:04x},", algorithm::exponent_lut_entry(i)).as_bytes())
                .unwrap();
            if i % 8 == 7 {
                f.write_all(b"\n").unwrap();
            }
        }
        f.write_all(b"];\n").unwrap();
    }

    // Half-to-float table, only when it's enabled.
    if env::var_os("CARGO_FEATURE_DECODE_TABLE").is_some() {
        let dest_path = Path::new(&out_dir).join("to_float.inc");
        let mut f = File::create(&dest_path).unwrap();

        f.write_all(b"pub static TO_FLOAT: [u32; 1 << 16] = [\n")
            .unwrap();
        for h in 0..=u16::max_value() {
            if h % 8 == 0 {
                f.write_all(b"   ").unwrap();
            }
            f.write_all(format!(" 0x{:08x},", algorithm::half_to_float_bits(h)).as_bytes())
                .unwrap();
            if h % 8 == 7 {
                f.write_all(b"\n").unwrap();
            }
        }
        f.write_all(b"];\n").unwrap();
    }
}
