//! Presentation policy for a score: rating band, label, color and display casing.
//! None of this feeds back into scoring.

use serde::Serialize;

/// Message shown when a resume covers every keyword.
pub const ALL_KEYWORDS_MESSAGE: &str = "Great job! You hit multiple key terms.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRating {
    Excellent,
    Good,
    Average,
    Weak,
}

impl MatchRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchRating::Excellent,
            s if s >= 60 => MatchRating::Good,
            s if s >= 40 => MatchRating::Average,
            _ => MatchRating::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchRating::Excellent => "Excellent Match 🚀",
            MatchRating::Good => "Good Match 👍",
            MatchRating::Average => "Average Match 🤔",
            MatchRating::Weak => "Weak Match 😟",
        }
    }

    /// Hex color for the score ring. Good shares Excellent's green.
    pub fn color(self) -> &'static str {
        match self {
            MatchRating::Excellent | MatchRating::Good => "#10b981",
            MatchRating::Average => "#f59e0b",
            MatchRating::Weak => "#ef4444",
        }
    }
}

/// Capitalizes the first letter of each space-separated word:
/// "machine learning" → "Machine Learning".
pub fn display_keyword(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
