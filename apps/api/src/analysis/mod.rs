//! Resolves a role, scores the resume, and decorates the result for display.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{CatalogError, RoleCatalog};
use crate::scoring::{display_keyword, score_resume, MatchRating, ALL_KEYWORDS_MESSAGE};

/// Full analysis returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub role_id: String,
    pub score: u32, // 0 – 100
    pub missing_keywords: Vec<String>,
    pub rating: MatchRating,
    pub rating_label: String,
    pub color: String,
    /// `missing_keywords` title-cased for tags.
    pub missing_display: Vec<String>,
    pub message: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Looks up `role_id` and scores `resume_text` against it.
/// An unknown role fails before any scoring happens.
pub fn analyze_resume(
    catalog: &RoleCatalog,
    role_id: &str,
    resume_text: &str,
) -> Result<AnalysisReport, CatalogError> {
    let role = catalog.get(role_id)?;
    let result = score_resume(&role.keywords, resume_text);

    let rating = MatchRating::from_score(result.score);
    let missing_display = result
        .missing_keywords
        .iter()
        .map(|k| display_keyword(k))
        .collect();
    let message = result
        .missing_keywords
        .is_empty()
        .then(|| ALL_KEYWORDS_MESSAGE.to_string());

    Ok(AnalysisReport {
        analysis_id: Uuid::new_v4(),
        role_id: role.id.clone(),
        score: result.score,
        missing_keywords: result.missing_keywords,
        rating,
        rating_label: rating.label().to_string(),
        color: rating.color().to_string(),
        missing_display,
        message,
        analyzed_at: Utc::now(),
    })
}
