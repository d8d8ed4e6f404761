use super::error::SketchError;

/// Pack an ASCII bit string ("0110...") into bytes, 8 characters per byte,
/// most significant bit first.
///
/// A trailing group shorter than 8 characters is read as a plain binary
/// number, so "101" becomes 0x05 rather than 0xA0.
pub fn parse_bit_string(bits: &str) -> Result<Vec<u8>, SketchError> {
    let raw = bits.as_bytes();
    let mut out = Vec::with_capacity(raw.len().div_ceil(8));
    for (chunk_idx, chunk) in raw.chunks(8).enumerate() {
        let mut byte = 0u8;
        for (k, &c) in chunk.iter().enumerate() {
            let bit = match c {
                b'0' => 0,
                b'1' => 1,
                _ => {
                    let index = chunk_idx * 8 + k;
                    let found = bits[index..].chars().next().unwrap_or('\u{FFFD}');
                    return Err(SketchError::InvalidBit { index, found });
                }
            };
            byte = (byte << 1) | bit;
        }
        out.push(byte);
    }
    Ok(out)
}

/// Inverse of [`parse_bit_string`] for whole bytes.
pub fn to_bit_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 8);
    for &b in bytes {
        for k in (0..8).rev() {
            s.push(if (b >> k) & 1 == 1 { '1' } else { '0' });
        }
    }
    s
}
