//! Log/antilog tables for GF(2^8).
//!
//! `alpha_to[i]` is α^i and `index_of[x]` is the discrete log of `x`.
//! The zero element has no log, so `index_of[0]` holds -1.

/// Extension degree of the field.
pub const M: usize = 8;
/// Number of nonzero field elements, 2^M - 1.
pub const N: usize = (1 << M) - 1;
/// x^8 + x^4 + x^3 + x^2 + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GfTables {
    pub alpha_to: [u8; N + 1],
    pub index_of: [i16; N + 1],
}

impl GfTables {
    pub fn build() -> Self {
        let mut alpha_to = [0u8; N + 1];
        let mut index_of = [0i16; N + 1];

        // α^0..α^7 are single bits; α^8 is the low part of the primitive polynomial.
        let mut mask: u16 = 1;
        for i in 0..M {
            alpha_to[i] = mask as u8;
            index_of[mask as usize] = i as i16;
            if PRIMITIVE_POLY & mask != 0 {
                alpha_to[M] ^= mask as u8;
            }
            mask <<= 1;
        }
        index_of[alpha_to[M] as usize] = M as i16;

        let lead = (mask >> 1) as u8; // 0x80
        for i in M + 1..=N {
            let prev = alpha_to[i - 1] as u16;
            alpha_to[i] = if alpha_to[i - 1] & lead != 0 {
                ((prev << 1) ^ PRIMITIVE_POLY) as u8
            } else {
                (prev << 1) as u8
            };
            // alpha_to[N] wraps back to 1; its log stays 0.
            if i < N {
                index_of[alpha_to[i] as usize] = i as i16;
            }
        }
        index_of[0] = -1;

        Self { alpha_to, index_of }
    }
}

impl Default for GfTables {
    fn default() -> Self {
        Self::build()
    }
}
