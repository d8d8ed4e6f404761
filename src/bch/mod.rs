//! Binary BCH-style decoder over GF(2^8) driven by a reference syndrome.
//!
//! The encoder side only ever publishes `compute_syndrome(original)`. At decode
//! time the syndrome of the noisy data is XORed with that reference; whatever
//! is left is the syndrome of the bit-flip pattern, which Berlekamp–Massey and
//! a Chien search turn back into bit positions.
//!
//! Bit order: MSB first within each byte, positions counted across bytes.
//! Only the first 255 bit positions can be located; later positions alias
//! onto `pos % 255`.

pub mod error;
pub mod params;
mod locator;
mod syndrome;

pub use error::BchError;
pub use params::BchParams;

use crate::gf::Gf256;
use tracing::{debug, trace};

#[derive(Clone, Debug)]
pub struct Bch {
    t: usize,
    gf: Gf256,
}

impl Bch {
    pub fn new(t: usize) -> Result<Self, BchError> {
        Self::from_params(&BchParams::new(t))
    }

    pub fn from_params(params: &BchParams) -> Result<Self, BchError> {
        params.validate()?;
        debug!(t = params.t, "building GF(2^8) tables for BCH decoder");
        Ok(Self { t: params.t, gf: Gf256::new() })
    }

    /// Maximum number of correctable bit errors.
    #[inline]
    pub fn t(&self) -> usize {
        self.t
    }

    #[inline]
    pub fn syndrome_len(&self) -> usize {
        2 * self.t + 1
    }

    #[inline]
    pub fn field(&self) -> &Gf256 {
        &self.gf
    }

    /// Syndromes S_1..S_2t of `data`; slot 0 is always 0.
    pub fn compute_syndrome(&self, data: &[u8]) -> Vec<u8> {
        let s = syndrome::compute(&self.gf, self.t, data);
        trace!(bytes = data.len(), syndromes = s.len(), "computed syndrome");
        s
    }

    /// Discrepancy between the syndrome of `data` and `reference`.
    ///
    /// Only slots `1..min(2t + 1, reference.len())` are compared; the rest stay 0.
    pub fn discrepancy(&self, data: &[u8], reference: &[u8]) -> Vec<u8> {
        let mut s = self.compute_syndrome(data);
        for i in 1..s.len() {
            match reference.get(i) {
                Some(&r) => s[i] ^= r,
                None => s[i] = 0,
            }
        }
        s
    }

    /// True if `data` reproduces `reference` exactly over the compared slots.
    pub fn is_consistent(&self, data: &[u8], reference: &[u8]) -> bool {
        self.discrepancy(data, reference).iter().all(|&v| v == 0)
    }

    /// Correct up to `t` bit flips in `noisy` given the syndrome of the original.
    ///
    /// Never fails: with no discrepancy the input comes back unchanged, and with
    /// more than `t` flips the output is silently wrong.
    pub fn recover(&self, noisy: &[u8], reference: &[u8]) -> Vec<u8> {
        let s = self.discrepancy(noisy, reference);
        if s.iter().all(|&v| v == 0) {
            debug!(bytes = noisy.len(), "no syndrome discrepancy");
            return noisy.to_vec();
        }

        let (sigma, l) = locator::berlekamp_massey(&self.gf, &s, self.t);
        let positions = locator::chien_search(&self.gf, &sigma, l, noisy.len() * 8);

        let mut recovered = noisy.to_vec();
        let flipped = locator::flip_bits(&mut recovered, &positions);
        if l > self.t || positions.len() != l {
            debug!(degree = l, roots = positions.len(), t = self.t, "locator degree and root count disagree");
        }
        debug!(degree = l, flipped, ?positions, "corrected bit errors");
        recovered
    }
}
