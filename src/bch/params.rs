use super::error::BchError;

/// Decoder configuration. Only the capacity `t` is tunable; the field is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BchParams {
    pub t: usize,
}

impl BchParams {
    /// Largest capacity whose syndrome length `2t + 1` still fits in a `usize`.
    /// Past t = 127 the evaluation points α^j start repeating, which only
    /// weakens correction.
    pub const MAX_T: usize = (usize::MAX - 1) / 2;

    pub fn new(t: usize) -> Self {
        Self { t }
    }

    pub fn validate(&self) -> Result<(), BchError> {
        if self.t == 0 {
            return Err(BchError::ZeroCapacity);
        }
        if self.t > Self::MAX_T {
            return Err(BchError::CapacityTooLarge { t: self.t, max: Self::MAX_T });
        }
        Ok(())
    }

    /// Syndrome vector length, 2t plus the unused slot 0.
    #[inline]
    pub fn syndrome_len(&self) -> usize {
        2 * self.t + 1
    }
}

/// t = 12, the capacity the face-template sketch was tuned for.
impl Default for BchParams {
    fn default() -> Self {
        Self { t: 12 }
    }
}
