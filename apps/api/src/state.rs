use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable after startup.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable document backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
