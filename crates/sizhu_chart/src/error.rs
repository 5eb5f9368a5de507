//! Error type for chart assembly.

use sizhu_time::TimeError;
use thiserror::Error;

/// Errors from building a chart report.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Date or clock values rejected.
    #[error("invalid birth moment: {0}")]
    Time(#[from] TimeError),
}
