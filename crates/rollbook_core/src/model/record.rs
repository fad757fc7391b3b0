//! Student record model.
//!
//! # Responsibility
//! - Define the record held by repositories and queues.
//! - Render the one-line console form `"<id> - <name> : <score>"`.
//!
//! # Invariants
//! - Identity (`id`, `name`) is immutable once constructed.
//! - Uniqueness of `id` is intended but never enforced here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Record identifier. Unique by convention only.
pub type RecordId = i32;

/// Canonical student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    name: String,
    score: f64,
}

impl Record {
    /// Creates a record with the given identity and starting score.
    pub fn new(id: RecordId, name: impl Into<String>, score: f64) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Replaces the score. Repositories call this from `update_score`.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} : {}", self.id, self.name, format_score(self.score))
    }
}

/// Formats a score the way the console listing expects.
///
/// Whole numbers keep one decimal place (`90.0`); everything else uses the
/// shortest round-trip form (`85.5`).
///
/// Magnitudes are always written positionally: `1e7` renders as
/// `10000000.0` and `1e-4` as `0.0001`, never in scientific notation.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 && score.abs() < 1e16 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
