//! Course-table extraction from linearized academic planning sheets.

pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod parser;
pub mod reconcile;
pub mod sources;

pub use config::Settings;
pub use error::{ExtractError, Result};
pub use extractor::CourseExtractor;
pub use model::{CourseRecord, ExtractionResult, SectionKind};
