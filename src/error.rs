use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document-to-text step failed before the engine saw any text.
    #[error("extraction failed: upstream text unavailable: {0}")]
    UpstreamTextUnavailable(String),

    #[error("primary extraction failed: {0}")]
    Primary(String),

    #[error("unknown extraction job: {0}")]
    UnknownJob(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Why a single candidate was dropped. Only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSkip {
    /// Units, season or year did not parse. The row patterns only admit
    /// parseable fields, so this stays a guard for the `build` step.
    Unparsable,
    NoSection,
    DuplicateTitle,
}
