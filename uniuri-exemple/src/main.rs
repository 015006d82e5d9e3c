#![allow(deprecated)]

use uniuri_core::{chars, length, new, new_bytes_with, new_len, new_len_chars, new_with, UUID_LEN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=trace to see every read from the random source
    env_logger::init();

    // Standard string: 16 symbols from A-Z, a-z and 0-9 (~95 bits of entropy)
    for i in 0..5 {
        println!("Standard id {}: {}", i + 1, new()?);
    }

    // UUID length gives ~119 bits of entropy, still a plain string
    println!("UUID-length id: {}", new_with([length(UUID_LEN)])?);

    // Options override one default each, later ones win
    println!("PIN: {}", new_with([length(6), chars("0123456789")])?);
    println!("Hex: {}", new_with([chars("0123456789abcdef"), length(32)])?);

    // Raw bytes can use any alphabet, even non-text values
    let all_bytes: Vec<u8> = (0..=255).collect();
    println!("Raw key: {:02x?}", new_bytes_with([length(8), chars(all_bytes.as_slice())])?);

    // Deprecated positional forms behave exactly like the options form
    println!("Legacy id: {}", new_len(10)?);
    println!("Legacy octal: {}", new_len_chars(10, b"01234567")?);

    // An alphabet needs between 2 and 256 symbols
    match new_with([chars("a")]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Single-symbol alphabet rejected: {e}"),
    }

    // Duplicate symbols are allowed, they just weigh more
    let skewed = new_with([length(30), chars("aab")])?;
    println!("Skewed towards 'a': {skewed}");

    Ok(())
}
