/// Reasons a solve is refused before any computation begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    #[error("payoff tensor for {n} players over {m} positions exceeds {} entries", crate::MAX_TENSOR_ENTRIES)]
    TensorTooLarge { n: usize, m: usize },
}

impl Error {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
