use bch4fe::{Bch, BchError, BchParams};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{RngCore, SeedableRng};

const LOCATABLE_BITS: usize = 255;

fn flip(data: &mut [u8], pos: usize) {
    data[pos / 8] ^= 1 << (7 - pos % 8);
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut v = vec![0u8; len];
    rng.fill_bytes(&mut v);
    v
}

#[test]
fn construction_validates_capacity() {
    assert_eq!(Bch::new(0).unwrap_err(), BchError::ZeroCapacity);
    assert!(matches!(
        Bch::new(usize::MAX),
        Err(BchError::CapacityTooLarge { t: usize::MAX, .. })
    ));
    assert_eq!(Bch::new(200).unwrap().syndrome_len(), 401);
    let bch = Bch::from_params(&BchParams::default()).unwrap();
    assert_eq!(bch.t(), 12);
    assert_eq!(bch.syndrome_len(), 25);
}

#[test]
fn syndrome_has_placeholder_slot() {
    let bch = Bch::new(5).unwrap();
    let s = bch.compute_syndrome(b"placeholder");
    assert_eq!(s.len(), 11);
    assert_eq!(s[0], 0);
}

#[test]
fn zero_noise_roundtrip() {
    let mut rng = StdRng::seed_from_u64(7);
    for t in [1usize, 2, 5, 12, 40] {
        let bch = Bch::new(t).unwrap();
        for len in [0usize, 1, 7, 32, 33, 100] {
            let data = random_bytes(&mut rng, len);
            let reference = bch.compute_syndrome(&data);
            assert_eq!(bch.recover(&data, &reference), data, "t={t} len={len}");
        }
    }
}

#[test]
fn large_capacity_roundtrip_and_correction() {
    let mut rng = StdRng::seed_from_u64(128);
    for t in [128usize, 200] {
        let bch = Bch::new(t).unwrap();
        let original = random_bytes(&mut rng, 40);
        let reference = bch.compute_syndrome(&original);
        assert_eq!(bch.recover(&original, &reference), original, "t={t}");

        let mut noisy = original.clone();
        flip(&mut noisy, 3);
        flip(&mut noisy, 170);
        assert_eq!(bch.recover(&noisy, &reference), original, "t={t}");
    }
}

#[test]
fn field_accessor_shares_decoder_tables() {
    let bch = Bch::new(2).unwrap();
    let gf = bch.field();
    // S_1 of a lone bit at position p is α^p
    let s = bch.compute_syndrome(&[0x00, 0x04]);
    assert_eq!(s[1], gf.pow_alpha(13));
    assert_eq!(gf.tables().alpha_to[13], s[1]);
}

#[test]
fn corrects_every_single_bit_flip() {
    let bch = Bch::new(1).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let original = random_bytes(&mut rng, 32);
    let reference = bch.compute_syndrome(&original);

    for pos in 0..LOCATABLE_BITS {
        let mut noisy = original.clone();
        flip(&mut noisy, pos);
        assert_eq!(bch.recover(&noisy, &reference), original, "bit {pos}");
    }
}

#[test]
fn corrects_up_to_capacity() {
    let mut rng = StdRng::seed_from_u64(0xB0C4);
    for t in [2usize, 4, 8, 12] {
        let bch = Bch::new(t).unwrap();
        for round in 0..20 {
            let original = random_bytes(&mut rng, 32);
            let reference = bch.compute_syndrome(&original);
            let k = 1 + round % t;

            let mut noisy = original.clone();
            for pos in sample(&mut rng, LOCATABLE_BITS, k).into_iter() {
                flip(&mut noisy, pos);
            }
            assert_ne!(noisy, original);
            assert_eq!(bch.recover(&noisy, &reference), original, "t={t} k={k} round={round}");
        }
    }
}

#[test]
fn corrects_in_short_buffers() {
    let bch = Bch::new(3).unwrap();
    let original = vec![0x3Cu8, 0x00, 0xFF, 0x81];
    let reference = bch.compute_syndrome(&original);

    let mut noisy = original.clone();
    flip(&mut noisy, 0);
    flip(&mut noisy, 13);
    flip(&mut noisy, 31);
    assert_eq!(bch.recover(&noisy, &reference), original);
}

#[test]
fn corrected_output_is_consistent() {
    let bch = Bch::new(6).unwrap();
    let original = b"the quick brown fox jumps over the lazy dog".to_vec();
    let reference = bch.compute_syndrome(&original);

    let mut noisy = original.clone();
    for pos in [3, 64, 150, 201] {
        flip(&mut noisy, pos);
    }
    assert!(!bch.is_consistent(&noisy, &reference));
    let recovered = bch.recover(&noisy, &reference);
    assert!(bch.is_consistent(&recovered, &reference));
    assert_eq!(recovered, original);
}

#[test]
fn aliased_flips_short_circuit() {
    // bits p and p + 255 contribute the same syndrome term and cancel out
    let bch = Bch::new(2).unwrap();
    let original = vec![0u8; 40];
    let reference = bch.compute_syndrome(&original);

    let mut noisy = original.clone();
    flip(&mut noisy, 10);
    flip(&mut noisy, 10 + 255);
    assert_eq!(bch.compute_syndrome(&noisy), reference);
    assert_eq!(bch.recover(&noisy, &reference), noisy);
}

#[test]
fn over_capacity_does_not_panic() {
    let mut rng = StdRng::seed_from_u64(99);
    let bch = Bch::new(3).unwrap();
    for len in [1usize, 4, 16, 32, 64] {
        let original = random_bytes(&mut rng, len);
        let reference = bch.compute_syndrome(&original);
        let mut noisy = original.clone();
        let bits = len * 8;
        for pos in sample(&mut rng, bits, bits.min(10)).into_iter() {
            flip(&mut noisy, pos);
        }
        let out = bch.recover(&noisy, &reference);
        assert_eq!(out.len(), noisy.len());
    }
}

#[test]
fn garbage_reference_is_bounds_safe() {
    let mut rng = StdRng::seed_from_u64(5);
    let bch = Bch::new(8).unwrap();
    for len in [0usize, 1, 3, 31] {
        let data = random_bytes(&mut rng, len);
        for _ in 0..25 {
            let reference = random_bytes(&mut rng, bch.syndrome_len());
            let out = bch.recover(&data, &reference);
            assert_eq!(out.len(), data.len());
        }
    }
}

#[test]
fn short_reference_is_tolerated() {
    let bch = Bch::new(4).unwrap();
    let original = vec![0xC3u8; 32];
    let reference = bch.compute_syndrome(&original);

    let mut noisy = original.clone();
    flip(&mut noisy, 42);

    for cut in 0..reference.len() {
        let out = bch.recover(&noisy, &reference[..cut]);
        assert_eq!(out.len(), noisy.len());
    }
    // an empty reference compares nothing, so nothing is corrected
    assert_eq!(bch.recover(&noisy, &[]), noisy);
}

#[test]
fn decoder_is_shareable_across_threads() {
    let bch = std::sync::Arc::new(Bch::new(4).unwrap());
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let bch = bch.clone();
            std::thread::spawn(move || {
                let original = vec![i.wrapping_mul(37); 32];
                let reference = bch.compute_syndrome(&original);
                let mut noisy = original.clone();
                flip(&mut noisy, 17 + i as usize);
                bch.recover(&noisy, &reference) == original
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
