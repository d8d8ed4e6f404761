//! Reference-syndrome BCH decoding over GF(2^8).
//!
//! ```
//! use bch4fe::Bch;
//!
//! let bch = Bch::new(4).unwrap();
//! let original = [0x5Au8; 32];
//! let reference = bch.compute_syndrome(&original);
//!
//! let mut noisy = original;
//! noisy[3] ^= 0x10;
//! noisy[20] ^= 0x01;
//! assert_eq!(bch.recover(&noisy, &reference), original);
//! ```

pub mod bch;
pub mod gf;
pub mod sketch;

pub use bch::{Bch, BchError, BchParams};
pub use sketch::{FuzzyExtractor, HelperData, SketchError};
