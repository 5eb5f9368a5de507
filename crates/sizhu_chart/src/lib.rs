//! One-shot Four Pillars chart computation.
//!
//! Wraps the pillar, strength, balance and recommendation stages of
//! `sizhu_base` into a single serializable [`ChartReport`], with optional
//! Ten Gods, season and hidden-stem sections selected by [`ChartConfig`].

pub mod chart;
pub mod chart_types;
pub mod error;

pub use chart::{chart_for_datetime, chart_for_moment, hidden_stems_for, season_for, ten_gods_for};
pub use chart_types::{ChartConfig, ChartReport, HiddenStemEntry, SeasonInfo, TenGodEntry};
pub use error::ChartError;
