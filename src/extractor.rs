use std::path::Path;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::model::ExtractionResult;
use crate::parser;
use crate::reconcile::{normalize_fields, reconcile};
use crate::sources::{PrimaryExtractor, TextSource};

/// Full extraction: local heuristics, optional primary reconciliation, field
/// normalization. Holds no state between calls.
pub struct CourseExtractor {
    settings: Settings,
    primary: Option<Box<dyn PrimaryExtractor>>,
}

impl CourseExtractor {
    pub fn new(settings: Settings) -> Self {
        CourseExtractor {
            settings,
            primary: None,
        }
    }

    pub fn with_primary(mut self, primary: impl PrimaryExtractor + 'static) -> Self {
        self.primary = Some(Box::new(primary));
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fails only when `source` cannot produce text.
    pub fn extract_file(&self, source: &dyn TextSource, path: &Path) -> Result<ExtractionResult> {
        info!(file = %path.display(), "extracting courses");
        let raw = source.read_text(path)?;
        Ok(self.extract_text(&raw))
    }

    pub fn extract_text(&self, raw: &str) -> ExtractionResult {
        let local = parser::extract_local(raw, &self.settings);

        let mut result = match &self.primary {
            None => local,
            Some(primary) => {
                let primary = primary.extract(raw).unwrap_or_else(|e| {
                    warn!(error = %e, "primary extraction unavailable");
                    ExtractionResult::default()
                });
                reconcile(primary, local, self.settings.reconcile_threshold)
            }
        };

        normalize_fields(&mut result);
        result
    }
}

// ── Tests ──
