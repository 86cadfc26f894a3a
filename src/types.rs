//! Score, rank and evaluation types shared by the evaluator and the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of strength predicates, and therefore the highest reachable score.
pub const MAX_SCORE: u8 = 4;

/// Count of satisfied strength predicates, always within `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score, clamping anything above `MAX_SCORE`.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PasswordScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_SCORE {
            return Err(format!("score {} exceeds maximum of {}", value, MAX_SCORE));
        }
        Ok(Self(value))
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Human readable strength label derived from a [`PasswordScore`].
///
/// Serialized as its label. Deserialization also accepts a bare score
/// (`0..=4`), which older history files stored under the `rank` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RankRepr")]
pub enum PasswordRank {
    Weak,
    Moderate,
    Good,
    Strong,
    Excellent,
}

impl PasswordRank {
    /// Ranks in score order; index with the score value.
    pub const ALL: [PasswordRank; 5] = [
        PasswordRank::Weak,
        PasswordRank::Moderate,
        PasswordRank::Good,
        PasswordRank::Strong,
        PasswordRank::Excellent,
    ];

    pub fn from_score(score: PasswordScore) -> Self {
        Self::ALL[usize::from(score.value().min(MAX_SCORE))]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordRank::Weak => "Weak",
            PasswordRank::Moderate => "Moderate",
            PasswordRank::Good => "Good",
            PasswordRank::Strong => "Strong",
            PasswordRank::Excellent => "Excellent",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }
}

impl fmt::Display for PasswordRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankRepr {
    Label(String),
    Score(u8),
}

impl TryFrom<RankRepr> for PasswordRank {
    type Error = String;

    fn try_from(repr: RankRepr) -> Result<Self, Self::Error> {
        match repr {
            RankRepr::Label(label) => {
                Self::from_label(&label).ok_or_else(|| format!("unknown rank label {:?}", label))
            }
            RankRepr::Score(value) => PasswordScore::try_from(value).map(Self::from_score),
        }
    }
}

/// Result of running every strength section against a password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// One message per failed section, in section order.
    pub feedback: Vec<String>,
}

impl PasswordEvaluation {
    pub fn rank(&self) -> PasswordRank {
        PasswordRank::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_on_new() {
        assert_eq!(PasswordScore::new(9).value(), MAX_SCORE);
        assert_eq!(PasswordScore::new(2).value(), 2);
    }

    #[test]
    fn test_rank_table_order() {
        let labels: Vec<_> = (0..=MAX_SCORE)
            .map(|s| PasswordRank::from_score(PasswordScore::new(s)).label())
            .collect();
        assert_eq!(labels, vec!["Weak", "Moderate", "Good", "Strong", "Excellent"]);
    }

    #[test]
    fn test_rank_serializes_as_label() {
        let json = serde_json::to_string(&PasswordRank::Strong).unwrap();
        assert_eq!(json, "\"Strong\"");
    }

    #[test]
    fn test_rank_deserializes_from_label_or_score() {
        let from_label: PasswordRank = serde_json::from_str("\"Good\"").unwrap();
        let from_score: PasswordRank = serde_json::from_str("4").unwrap();
        assert_eq!(from_label, PasswordRank::Good);
        assert_eq!(from_score, PasswordRank::Excellent);
    }

    #[test]
    fn test_rank_rejects_unknown_values() {
        assert!(serde_json::from_str::<PasswordRank>("\"Epic\"").is_err());
        assert!(serde_json::from_str::<PasswordRank>("7").is_err());
    }

    #[test]
    fn test_score_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<PasswordScore>("5").is_err());
        let score: PasswordScore = serde_json::from_str("3").unwrap();
        assert_eq!(score.value(), 3);
    }
}
