//! Error types for chart calculations.

use thiserror::Error;

/// Errors from pillar and strength calculations.
///
/// Out-of-range cycle indices are not represented here; they are invariant
/// violations and panic.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Hand-built strength profile rejected.
    #[error("invalid strength profile: {0}")]
    InvalidProfile(&'static str),
    /// Name that matches no table entry.
    #[error("unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
