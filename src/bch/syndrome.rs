use crate::gf::{Gf256, N};

/// Positions (MSB-first, counted across byte boundaries) of every set bit.
pub(crate) fn set_bit_positions(data: &[u8]) -> impl Iterator<Item = usize> + '_ {
    data.iter().enumerate().flat_map(|(byte_idx, &byte)| {
        (0..8usize)
            .filter(move |k| (byte >> (7 - k)) & 1 == 1)
            .map(move |k| byte_idx * 8 + k)
    })
}

/// Evaluate the bit sequence as a 0/1 polynomial at α^1..α^2t.
///
/// Returns `2t + 1` values; index 0 is a placeholder and always 0.
pub(crate) fn compute(gf: &Gf256, t: usize, data: &[u8]) -> Vec<u8> {
    let mut s = vec![0u8; 2 * t + 1];
    for pos in set_bit_positions(data) {
        let e = pos % N;
        for (j, s_j) in s.iter_mut().enumerate().skip(1) {
            *s_j ^= gf.pow_alpha(j * e);
        }
    }
    s
}
