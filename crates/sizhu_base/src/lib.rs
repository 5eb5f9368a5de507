//! Four Pillars (BaZi 八字) chart arithmetic.
//!
//! This crate provides:
//! - Heavenly Stem, Earthly Branch, element, meridian and season tables
//! - Sexagenary cycle indices for year, month, day and hour
//! - Pillar assembly, weighted element strength and Day Master balance
//! - Meridian/point recommendations and Ten Gods
//!
//! Everything here is pure and synchronous. Chart inputs come in as a
//! validated [`sizhu_time::BirthMoment`].

pub mod balance;
pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod meridian;
pub mod pillar;
pub mod recommend;
pub mod season;
pub mod stem;
pub mod strength;
pub mod ten_gods;
pub mod util;

pub use balance::{
    BalanceResult, BalanceStatus, STRONG_THRESHOLD, WEAK_THRESHOLD, analyze_balance,
    classify_ratio,
};
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use cycle::{
    CycleIndex, DAY_EPOCH_JDN, PillarIndices, YEAR_EPOCH, cycle_indices, day_index,
    five_rats_base, five_tigers_base, hour_branch_offset, hour_index, month_index, year_index,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::BaziError;
pub use meridian::{ALL_MERIDIANS, Meridian, element_meridians, primary_meridian};
pub use pillar::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition, four_pillars};
pub use recommend::{Recommendation, RecommendationKind, RecommendationSet, recommendations};
pub use season::Season;
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use strength::{ElementStrengthProfile, HiddenStemTier, element_strengths};
pub use ten_gods::{ALL_TEN_GODS, TenGod, ten_god};
pub use util::wrap_index;
