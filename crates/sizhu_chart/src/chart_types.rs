//! Configuration and result types for one-shot chart computation.

use serde::{Deserialize, Serialize};
use sizhu_base::{
    BalanceResult, EarthlyBranch, Element, ElementStrengthProfile, FourPillars, HeavenlyStem,
    HiddenStemTier, PillarPosition, RecommendationSet, Season, TenGod,
};
use sizhu_time::BirthMoment;

/// Optional sections of a [`ChartReport`].
///
/// Pillars, strengths, balance and recommendations are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Include Ten Gods of the visible and hidden stems.
    pub include_ten_gods: bool,
    /// Include the season of the month branch.
    pub include_season: bool,
    /// Include the hidden stems of every branch.
    pub include_hidden_stems: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            include_ten_gods: true,
            include_season: true,
            include_hidden_stems: true,
        }
    }
}

impl ChartConfig {
    /// Only the mandatory sections.
    pub const fn minimal() -> Self {
        Self {
            include_ten_gods: false,
            include_season: false,
            include_hidden_stems: false,
        }
    }
}

/// Ten God of one stem relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodEntry {
    pub position: PillarPosition,
    pub stem: HeavenlyStem,
    pub ten_god: TenGod,
    /// `None` for the pillar's visible stem.
    pub hidden_tier: Option<HiddenStemTier>,
}

/// One hidden stem of a pillar's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStemEntry {
    pub position: PillarPosition,
    pub branch: EarthlyBranch,
    pub stem: HeavenlyStem,
    pub tier: HiddenStemTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonInfo {
    pub season: Season,
    pub element: Element,
    pub month_branch: EarthlyBranch,
}

/// One-shot chart result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub moment: BirthMoment,
    pub pillars: FourPillars,
    pub day_master: HeavenlyStem,
    pub strengths: ElementStrengthProfile,
    pub weakest: Element,
    pub strongest: Element,
    pub balance: BalanceResult,
    pub recommendations: RecommendationSet,
    /// Present when `ChartConfig::include_ten_gods` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ten_gods: Option<Vec<TenGodEntry>>,
    /// Present when `ChartConfig::include_season` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonInfo>,
    /// Present when `ChartConfig::include_hidden_stems` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_stems: Option<Vec<HiddenStemEntry>>,
}
