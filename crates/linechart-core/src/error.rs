// File: crates/linechart-core/src/error.rs
// Summary: Typed errors for chart construction and layout.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A required collaborator was missing or an option was out of range at construction time.
    #[error("invalid chart configuration: {0}")]
    InvalidConfiguration(String),
    /// A layout pass was requested before any viewport was attached.
    #[error("no viewport attached; call attach_viewport before layout")]
    NoViewport,
}
