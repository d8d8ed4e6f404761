#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BchError {
    #[error("error-correction capacity must be at least 1")]
    ZeroCapacity,
    #[error("error-correction capacity too large: t={t} (max {max})")]
    CapacityTooLarge { t: usize, max: usize },
}
