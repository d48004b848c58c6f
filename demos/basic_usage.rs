// ============================================================================
// Basic Usage Example
// ============================================================================

use numstr::prelude::*;

fn main() {
    println!("=== Numeral String Example ===\n");

    // Counting across a carry in several bases
    println!("Incrementing all-max numerals...");
    for (digits, base) in [("99", 10), ("ff", 16), ("zz", 36), ("111", 2)] {
        let next = numstr::inc_int(digits, base).unwrap();
        println!("  {} (base {}) + 1 = {}", digits, base, next);
    }

    // Crossing zero
    println!("\nDecrementing through zero...");
    let mut n = "2".to_string();
    for _ in 0..4 {
        let prev = numstr::dec_int(&n, 10).unwrap();
        println!("  {} - 1 = {}", n, prev);
        n = prev;
    }

    // Normalization
    println!("\nRectifying...");
    for raw in ["000120.0500", "-0.000", ".5"] {
        println!("  {:>12} -> {}", raw, numstr::rectify(raw));
    }

    // Banker's rounding and scientific notation on a value no native type holds
    let big: Numeral = "123456789012345678901234567890123456789".parse().unwrap();
    println!("\n=== Large Integer ===");
    println!("  value:      {}", big);
    println!("  3 digits:   {}", big.round(Precision::Digits(3)).unwrap());
    println!("  scientific: {}", big.to_sci(0, Precision::Digits(6)).unwrap());

    // A dedicated engine with a case-sensitive upper-case alphabet
    let engine = NumeralEngineBuilder::new()
        .alphabet("0123456789ABCDEF")
        .case_sensitive(true)
        .build()
        .unwrap();
    println!("\n=== Case-Sensitive Hex Engine ===");
    println!("  FF + 1 = {}", engine.inc_int("FF", 16).unwrap());
    println!("  'ff' valid? {}", engine.is_num_str("ff", 16, false).unwrap());

    // Hex buffers
    let bytes = decode_hex("0xDEAD BEEF").unwrap();
    println!("\n=== Hex Codec ===");
    println!("  bytes: {:?}", bytes);
    println!("  hex:   {}", encode_hex(&bytes, true));
}
