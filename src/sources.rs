//! Collaborators at the edge of the engine: where raw text comes from, the
//! higher-fidelity primary extraction, and the remote job contract.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::error::{ExtractError, Result};
use crate::model::ExtractionResult;
use crate::parser;

/// Document-to-text conversion.
pub trait TextSource: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Reads files that were already converted to text or markdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| ExtractError::UpstreamTextUnavailable(format!("{}: {}", path.display(), e)))
    }
}

/// An external extraction that is preferred over the local heuristics.
pub trait PrimaryExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<ExtractionResult>;
}

/// A primary result saved as JSON, e.g. a stored remote response.
#[derive(Debug, Clone)]
pub struct JsonPrimary {
    path: PathBuf,
}

impl JsonPrimary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonPrimary { path: path.into() }
    }
}

impl PrimaryExtractor for JsonPrimary {
    fn extract(&self, _text: &str) -> Result<ExtractionResult> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| ExtractError::Primary(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| ExtractError::Primary(format!("{}: {}", self.path.display(), e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub job_id: String,
    pub status: JobState,
    /// Present only once `status` is `completed`.
    pub result: Option<ExtractionResult>,
}

/// Create-job / poll-status contract of an asynchronous extraction service.
pub trait ExtractionJobs: Send + Sync {
    fn create(&self, text: &str) -> Result<String>;
    fn status(&self, job_id: &str) -> Result<JobStatus>;
}

/// In-process job store: runs the local pipeline at creation time. A job is
/// dropped from the store once a poll has returned its final status.
#[derive(Debug, Default)]
pub struct LocalJobs {
    settings: Settings,
    next_id: AtomicU64,
    jobs: Mutex<HashMap<String, JobStatus>>,
}

impl LocalJobs {
    pub fn new(settings: Settings) -> Self {
        LocalJobs {
            settings,
            ..Default::default()
        }
    }
}

impl ExtractionJobs for LocalJobs {
    fn create(&self, text: &str) -> Result<String> {
        let job_id = format!("job-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let result = parser::extract_local(text, &self.settings);
        debug!(%job_id, courses = result.total(), "job completed");

        let status = JobStatus {
            job_id: job_id.clone(),
            status: JobState::Completed,
            result: Some(result),
        };
        self.jobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(job_id.clone(), status);
        Ok(job_id)
    }

    fn status(&self, job_id: &str) -> Result<JobStatus> {
        let mut jobs = self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let state = jobs
            .get(job_id)
            .map(|job| job.status)
            .ok_or_else(|| ExtractError::UnknownJob(job_id.to_string()))?;
        let job = match state {
            JobState::Completed | JobState::Failed => jobs.remove(job_id),
            JobState::Pending | JobState::Processing => jobs.get(job_id).cloned(),
        };
        job.ok_or_else(|| ExtractError::UnknownJob(job_id.to_string()))
    }
}

// ── Tests ──
