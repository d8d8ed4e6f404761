use crate::gf::{poly_eval_low, Gf256, N};

/// Berlekamp–Massey over the 1-based syndrome vector `s[1..=2t]`.
///
/// Returns the error-locator polynomial (low order first, length `t + 1`,
/// `sigma[0] == 1`) and its linear complexity `L`. Coefficients that would
/// land beyond degree `t` are dropped, which only happens when the noise
/// exceeds capacity.
pub(crate) fn berlekamp_massey(gf: &Gf256, s: &[u8], t: usize) -> (Vec<u8>, usize) {
    let mut sigma = vec![0u8; t + 1];
    let mut old_sigma = vec![0u8; t + 1];
    sigma[0] = 1;
    old_sigma[0] = 1;

    let mut l: usize = 0;
    let mut m_val: usize = 1;
    let mut b: u8 = 1;

    for r in 1..=2 * t {
        let mut d = s.get(r).copied().unwrap_or(0);
        for i in 1..=l.min(t) {
            if let Some(&s_ri) = s.get(r - i) {
                d ^= gf.mul(sigma[i], s_ri);
            }
        }

        if d == 0 {
            m_val += 1;
            continue;
        }

        let snapshot = sigma.clone();
        let scale = gf.mul(d, gf.inv(b));
        for i in 0..=t {
            if i + m_val > t {
                break;
            }
            sigma[i + m_val] ^= gf.mul(scale, old_sigma[i]);
        }

        if 2 * l <= r - 1 {
            l = r - l;
            old_sigma = snapshot;
            b = d;
            m_val = 1;
        } else {
            m_val += 1;
        }
    }

    (sigma, l)
}

/// Chien search over bit positions `0..min(N, bit_len)`.
///
/// Position `i` is reported when the locator vanishes at α^-i.
pub(crate) fn chien_search(gf: &Gf256, sigma: &[u8], l: usize, bit_len: usize) -> Vec<usize> {
    let sigma = &sigma[..sigma.len().min(l + 1)];
    let mut positions = Vec::new();
    for i in 0..N.min(bit_len) {
        let x_inv = gf.pow_alpha(N - i);
        if poly_eval_low(gf, sigma, x_inv) == 0 {
            positions.push(i);
        }
    }
    positions
}

/// Flip MSB-first bit positions in place, skipping anything past the buffer.
pub(crate) fn flip_bits(buf: &mut [u8], positions: &[usize]) -> usize {
    let mut flipped = 0;
    for &pos in positions {
        let byte_idx = pos / 8;
        let bit_offset = 7 - (pos % 8);
        if let Some(byte) = buf.get_mut(byte_idx) {
            *byte ^= 1 << bit_offset;
            flipped += 1;
        }
    }
    flipped
}
