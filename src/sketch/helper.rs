use super::error::SketchError;
use crate::bch::{BchError, BchParams};

pub const SEED_BYTES: usize = 16;
pub type Seed16 = [u8; SEED_BYTES];

/// Public helper data: the reference syndromes and the extractor seed.
///
/// `syndromes` keeps the decoder layout (length `2t + 1`, slot 0 unused).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelperData {
    pub syndromes: Vec<u8>,
    pub seed: Seed16,
}

impl HelperData {
    /// Hex of `syndromes[1..]` followed by hex of the seed.
    pub fn to_hex(&self) -> String {
        let body = self.syndromes.get(1..).unwrap_or(&[]);
        let mut s = hex_encode(body);
        s.push_str(&hex_encode(&self.seed));
        s
    }

    /// Parse the text form for capacity `t`: `4t` hex chars of syndromes, then 32 of seed.
    pub fn from_hex(text: &str, t: usize) -> Result<Self, SketchError> {
        BchParams::new(t).validate()?;
        // the text length 4t + 32 must fit in a usize
        let max = (usize::MAX - 2 * SEED_BYTES) / 4;
        if t > max {
            return Err(BchError::CapacityTooLarge { t, max }.into());
        }
        let split = 4 * t;
        let expected = split + 2 * SEED_BYTES;
        if text.len() != expected {
            return Err(SketchError::InvalidLength { expected, got: text.len() });
        }
        let raw = text.as_bytes();

        let mut syndromes = Vec::with_capacity(2 * t + 1);
        syndromes.push(0);
        syndromes.extend(hex_decode(&raw[..split], 0)?);

        let seed_bytes = hex_decode(&raw[split..], split)?;
        let mut seed = [0u8; SEED_BYTES];
        seed.copy_from_slice(&seed_bytes);

        Ok(Self { syndromes, seed })
    }
}

pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0f) as usize] as char);
    }
    s
}

/// `offset` is only used to report absolute positions in errors.
fn hex_decode(raw: &[u8], offset: usize) -> Result<Vec<u8>, SketchError> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }

    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks(2).enumerate() {
        let at = offset + 2 * i;
        let hi = nibble(pair[0]).ok_or(SketchError::InvalidHex { index: at })?;
        let lo = pair
            .get(1)
            .copied()
            .and_then(nibble)
            .ok_or(SketchError::InvalidHex { index: at + 1 })?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HelperData {
        HelperData {
            syndromes: vec![0, 0x1d, 0xff, 0x00, 0x80],
            seed: [0xab; SEED_BYTES],
        }
    }

    #[test]
    fn hex_layout_skips_placeholder() {
        let hex = sample().to_hex();
        assert_eq!(&hex[..8], "1dff0080");
        assert_eq!(&hex[8..], "ab".repeat(SEED_BYTES));
    }

    #[test]
    fn from_hex_restores_placeholder() {
        let h = sample();
        let parsed = HelperData::from_hex(&h.to_hex(), 2).unwrap();
        assert_eq!(parsed, h);
        let upper = HelperData::from_hex(&h.to_hex().to_uppercase(), 2).unwrap();
        assert_eq!(upper, h);
    }

    #[test]
    fn from_hex_checks_length() {
        let hex = sample().to_hex();
        assert_eq!(
            HelperData::from_hex(&hex, 3).unwrap_err(),
            SketchError::InvalidLength { expected: 44, got: 40 }
        );
    }

    #[test]
    fn from_hex_validates_capacity() {
        assert_eq!(
            HelperData::from_hex(&"0".repeat(32), 0).unwrap_err(),
            SketchError::Capacity(BchError::ZeroCapacity)
        );
        let huge = usize::MAX / 4 + 1;
        assert!(matches!(
            HelperData::from_hex(&"0".repeat(28), huge),
            Err(SketchError::Capacity(BchError::CapacityTooLarge { t, .. })) if t == huge
        ));
        assert!(matches!(
            HelperData::from_hex("", usize::MAX),
            Err(SketchError::Capacity(BchError::CapacityTooLarge { .. }))
        ));
    }

    #[test]
    fn from_hex_reports_bad_digit_position() {
        let mut hex = sample().to_hex();
        hex.replace_range(9..10, "g");
        assert_eq!(
            HelperData::from_hex(&hex, 2).unwrap_err(),
            SketchError::InvalidHex { index: 9 }
        );
    }
}
