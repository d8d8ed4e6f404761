use super::tables::{GfTables, N};

/// GF(2^8) arithmetic over a set of owned log/antilog tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf256 {
    tables: GfTables,
}

impl Gf256 {
    pub fn new() -> Self {
        Self { tables: GfTables::build() }
    }

    #[inline]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }

    #[inline] pub fn add(a: u8, b: u8) -> u8 { a ^ b }

    /// Discrete log of `a`, `None` for zero.
    #[inline]
    pub fn log(&self, a: u8) -> Option<usize> {
        let l = self.tables.index_of[a as usize];
        if l < 0 { None } else { Some(l as usize) }
    }

    /// α^i for any exponent; reduced mod N.
    #[inline]
    pub fn pow_alpha(&self, i: usize) -> u8 {
        self.tables.alpha_to[i % N]
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        match (self.log(a), self.log(b)) {
            (Some(la), Some(lb)) => self.tables.alpha_to[(la + lb) % N],
            _ => 0,
        }
    }

    /// Multiplicative inverse. Zero maps to zero, which is not a real inverse.
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        match self.log(a) {
            Some(la) => self.tables.alpha_to[N - la],
            None => 0,
        }
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a low-order-first polynomial at `x` (Horner).
#[inline]
pub fn poly_eval_low(gf: &Gf256, p: &[u8], x: u8) -> u8 {
    p.iter().rfold(0, |acc, &c| gf.mul(acc, x) ^ c)
}
