use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use super::hash::hmac_sha256;
use super::helper::{hex_encode, HelperData, Seed16, SEED_BYTES};
use crate::bch::{Bch, BchParams};
use crate::sketch::SketchError;

pub const KEY_BYTES: usize = 32;
pub type Key32 = [u8; KEY_BYTES];

/// Strong extractor: HMAC-SHA256 keyed by the lowercase hex of the seed,
/// over the lowercase hex of the reading.
///
/// Both inputs are hashed as hex text so keys match enrolments made by
/// clients that work on hex strings.
pub fn extract(w: &[u8], seed: &Seed16) -> Key32 {
    let seed_hex = hex_encode(seed);
    let w_hex = hex_encode(w);
    hmac_sha256(seed_hex.as_bytes(), &[w_hex.as_bytes()])
}

/// Lowercase hex form of a key.
pub fn key_to_hex(key: &Key32) -> String {
    hex_encode(key)
}

/// Fuzzy extractor built on the syndrome sketch.
///
/// `generate` publishes the syndrome of the enrolment reading `w` as the
/// sketch; `reproduce` corrects a later reading against it and re-derives the
/// key. A reading more than `t` bits away yields an unrelated key.
#[derive(Clone, Debug)]
pub struct FuzzyExtractor {
    bch: Bch,
}

impl FuzzyExtractor {
    pub fn new(params: BchParams) -> Result<Self, SketchError> {
        Ok(Self { bch: Bch::from_params(&params)? })
    }

    pub fn bch(&self) -> &Bch {
        &self.bch
    }

    /// Enrol with a fresh random seed.
    pub fn generate(&self, w: &[u8]) -> (HelperData, Key32) {
        let mut seed = [0u8; SEED_BYTES];
        OsRng.fill_bytes(&mut seed);
        self.generate_with_seed(w, seed)
    }

    /// Deterministic enrolment (explicit seed; useful for tests).
    pub fn generate_with_seed(&self, w: &[u8], seed: Seed16) -> (HelperData, Key32) {
        let syndromes = self.bch.compute_syndrome(w);
        let key = extract(w, &seed);
        debug!(bytes = w.len(), t = self.bch.t(), "generated helper data");
        (HelperData { syndromes, seed }, key)
    }

    /// Recover the enrolment reading from `w_noisy`.
    pub fn recover_reading(&self, w_noisy: &[u8], helper: &HelperData) -> Vec<u8> {
        self.bch.recover(w_noisy, &helper.syndromes)
    }

    pub fn reproduce(&self, w_noisy: &[u8], helper: &HelperData) -> Key32 {
        let w = self.recover_reading(w_noisy, helper);
        extract(&w, &helper.seed)
    }
}
