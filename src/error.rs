//! Error type shared by the generator, the attribute lookup and reporting.

/// Everything that can reject a run. All variants are invalid-argument
/// failures; nothing here is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("unknown attribute {name:?}: expected one of \"skill_scores\", \"luck_scores\", \"total_scores\"")]
    UnknownAttribute { name: String },

    #[error("invalid distribution: mean {mean}, std_dev {std_dev} (std_dev must be finite and >= 0)")]
    InvalidDistribution { mean: f64, std_dev: f64 },

    #[error("skill and luck arrays differ in length: {skill} vs {luck}")]
    LengthMismatch { skill: usize, luck: usize },

    #[error("selected index {index} is outside a population of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("histogram needs at least one bin")]
    InvalidBins,
}

pub type SimResult<T> = Result<T, SimError>;
