//! Error taxonomy for broken content. Every variant points at an authoring
//! mistake in the configuration, never at a runtime condition.

use thiserror::Error;

/// Why a weighted pool could not produce a draw.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SampleError {
    #[error("reward pool is empty")]
    EmptyPool,
    #[error("pool entry {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("pool total weight {total} is not positive")]
    NonPositiveTotalWeight { total: f64 },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{interval} must be positive")]
    ZeroInterval { interval: &'static str },
    #[error("amount multiplier per zone must be finite and non-negative, got {0}")]
    InvalidMultiplier(f64),
    #[error("tier `{tier}` has an unusable reward pool: {source}")]
    Pool {
        tier: String,
        #[source]
        source: SampleError,
    },
    #[error("tier `{tier}` has a bomb but no bomb item")]
    MissingBombItem { tier: String },
    /// `entry` is the pool index, or `None` for the tier's bomb item.
    #[error("tier `{tier}` {} is missing from the catalog", describe_entry(.entry))]
    DanglingItem { tier: String, entry: Option<usize> },
    #[error("item id `{id}` is registered twice")]
    DuplicateItem { id: String },
}

fn describe_entry(entry: &Option<usize>) -> String {
    match *entry {
        Some(index) => format!("reward entry {index}"),
        None => "bomb item".to_string(),
    }
}
