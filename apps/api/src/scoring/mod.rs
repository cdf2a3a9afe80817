// Resume scoring: keyword coverage (pure) and the presentation policy built on it.

pub mod keyword;
pub mod rating;

pub use keyword::{score_resume, ScoreResult};
pub use rating::{display_keyword, MatchRating, ALL_KEYWORDS_MESSAGE};
