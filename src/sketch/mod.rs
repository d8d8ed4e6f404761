//! Secure sketch and fuzzy extractor on top of the syndrome decoder.
//!
//! Enrolment turns a bit string into helper data (reference syndromes plus a
//! random seed) and a 32-byte key; reproduction corrects a fresh, noisy bit
//! string against the helper data and derives the same key.

pub mod bits;
pub mod error;
pub mod extractor;
pub mod helper;
mod hash;

pub use bits::{parse_bit_string, to_bit_string};
pub use error::SketchError;
pub use extractor::{extract, key_to_hex, FuzzyExtractor, Key32, KEY_BYTES};
pub use helper::{HelperData, Seed16, SEED_BYTES};
