//! Backing-store strategy tokens.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Token for the contiguous growable-array store.
pub const STRATEGY_ARRAY: &str = "array";
/// Token for the doubly-linked store.
pub const STRATEGY_LINKED: &str = "linked";
/// Token for the lock-serialized array store.
pub const STRATEGY_VECTOR: &str = "vector";

const SUPPORTED_STRATEGY_STRINGS: &[&str] = &[STRATEGY_ARRAY, STRATEGY_LINKED, STRATEGY_VECTOR];

/// Closed set of repository backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageStrategy {
    /// `Vec`-backed, cheap random access.
    #[default]
    Array,
    /// `LinkedList`-backed, sequential access only.
    Linked,
    /// `Mutex<Vec>`-backed, every operation serialized.
    Vector,
}

impl StorageStrategy {
    /// Stable lowercase token for this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => STRATEGY_ARRAY,
            Self::Linked => STRATEGY_LINKED,
            Self::Vector => STRATEGY_VECTOR,
        }
    }

    /// Whether concurrent access is serialized internally.
    pub fn is_synchronized(self) -> bool {
        matches!(self, Self::Vector)
    }
}

impl Display for StorageStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageStrategy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_strategy(value)
    }
}

/// Returns supported strategy tokens.
pub fn supported_strategy_strings() -> &'static [&'static str] {
    SUPPORTED_STRATEGY_STRINGS
}

/// Parses a strategy token, ignoring case and surrounding whitespace.
pub fn parse_strategy(value: &str) -> Result<StorageStrategy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        STRATEGY_ARRAY => Ok(StorageStrategy::Array),
        STRATEGY_LINKED => Ok(StorageStrategy::Linked),
        STRATEGY_VECTOR => Ok(StorageStrategy::Vector),
        _ => Err(ConfigError::InvalidConfiguration(value.to_string())),
    }
}

/// Construction-time configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidConfiguration(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(value) => write!(
                f,
                "invalid repository strategy `{value}`; expected {}",
                SUPPORTED_STRATEGY_STRINGS.join("|")
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{parse_strategy, supported_strategy_strings, ConfigError, StorageStrategy};

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!(parse_strategy("ARRAY").unwrap(), StorageStrategy::Array);
        assert_eq!(parse_strategy("Linked").unwrap(), StorageStrategy::Linked);
        assert_eq!(parse_strategy(" vector ").unwrap(), StorageStrategy::Vector);
    }

    #[test]
    fn rejects_unknown_token_with_original_value() {
        let err = parse_strategy("Hash").expect_err("unknown strategy must fail");
        assert_eq!(err, ConfigError::InvalidConfiguration("Hash".to_string()));
        assert!(err.to_string().contains("array|linked|vector"));
    }

    #[test]
    fn rejects_empty_token() {
        assert!(parse_strategy("   ").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let strategy: StorageStrategy = "linked".parse().unwrap();
        assert_eq!(strategy, StorageStrategy::Linked);
    }

    #[test]
    fn tokens_round_trip_through_as_str() {
        for token in supported_strategy_strings() {
            let strategy = parse_strategy(token).unwrap();
            assert_eq!(strategy.as_str(), *token);
        }
    }

    #[test]
    fn only_vector_is_synchronized() {
        assert!(StorageStrategy::Vector.is_synchronized());
        assert!(!StorageStrategy::Array.is_synchronized());
        assert!(!StorageStrategy::Linked.is_synchronized());
    }
}
