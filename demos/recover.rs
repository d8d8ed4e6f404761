use std::env;

use bch4fe::Bch;

fn usage() -> ! {
    eprintln!(
        "Usage:
  cargo run --example recover -- <t> <message_string> <bit_pos>...

Example:
  cargo run --example recover -- 4 \"attack at dawn, attack at dawn!!\" 3 70 200

Notes:
- message_string is UTF-8; it will be used as raw bytes.
- only the first 255 bit positions (MSB first) can be located."
    );
    std::process::exit(2);
}

fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0f) as usize] as char);
    }
    s
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 {
        usage();
    }
    let t: usize = args[0].parse().unwrap_or_else(|_| usage());
    let msg = args[1].as_bytes().to_vec();
    let positions = args[2..]
        .iter()
        .map(|a| a.parse::<usize>().unwrap_or_else(|_| usage()))
        .collect::<Vec<_>>();

    let bch = match Bch::new(t) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let reference = bch.compute_syndrome(&msg);
    let mut noisy = msg.clone();
    for &pos in &positions {
        if pos / 8 >= noisy.len() {
            eprintln!("bit {pos} is outside a {}-byte message", noisy.len());
            std::process::exit(1);
        }
        noisy[pos / 8] ^= 1 << (7 - pos % 8);
    }

    let recovered = bch.recover(&noisy, &reference);

    println!("=== BCH recover demo ===");
    println!("t              : {}", bch.t());
    println!("Flipped bits   : {positions:?}");
    println!("Reference      : {}", hex_encode(&reference[1..]));
    println!("Original       : {}", hex_encode(&msg));
    println!("Noisy          : {}", hex_encode(&noisy));
    println!("Recovered      : {}", hex_encode(&recovered));

    if recovered == msg {
        println!("Result         : OK");
    } else {
        println!("Result         : MISMATCH (more flips than t, or positions past bit 254)");
        std::process::exit(1);
    }
}
