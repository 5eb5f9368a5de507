//! Meridian and point recommendations from a classified chart.
//!
//! Order is fixed: Day Master support first, then at most one balancing
//! entry (sedation when strong, tonification when weak), then the
//! hour-opening entry of the Zi Wu Liu Zhu horary clock.

use serde::Serialize;
use tracing::debug;

use crate::balance::{BalanceResult, BalanceStatus};
use crate::meridian::{Meridian, primary_meridian};
use crate::pillar::FourPillars;
use crate::strength::ElementStrengthProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationKind {
    SupportDayMaster,
    Tonification,
    Sedation,
    HourOpening,
}

impl RecommendationKind {
    /// Point label suffix, e.g. "Source Point".
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupportDayMaster => "Source Point",
            Self::Tonification => "Tonification Point",
            Self::Sedation => "Sedation Point",
            Self::HourOpening => "Opening Point",
        }
    }

    /// Classical point code of `meridian` used for this kind.
    pub const fn acupoint(self, meridian: Meridian) -> &'static str {
        match self {
            Self::SupportDayMaster => meridian.source_point(),
            Self::Tonification => meridian.tonification_point(),
            Self::Sedation => meridian.sedation_point(),
            Self::HourOpening => meridian.horary_point(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub meridian: Meridian,
    /// Display label, e.g. "GB Source Point".
    pub point: String,
    /// Point code, e.g. "GB40".
    pub acupoint: &'static str,
    pub rationale: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, meridian: Meridian, rationale: String) -> Self {
        Self {
            kind,
            meridian,
            point: format!("{} {}", meridian.code(), kind.label()),
            acupoint: kind.acupoint(meridian),
            rationale,
        }
    }
}

/// Ordered, non-empty list of recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecommendationSet(Vec<Recommendation>);

impl RecommendationSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a set built by [`recommendations`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Recommendation] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build recommendations for a chart with its strength profile and balance.
pub fn recommendations(
    pillars: &FourPillars,
    profile: &ElementStrengthProfile,
    balance: &BalanceResult,
) -> RecommendationSet {
    let dm = pillars.day_master();
    let dm_element = dm.element();
    debug!(
        status = balance.status.name(),
        weakest = %profile.weakest(),
        strongest = %profile.strongest(),
        "recommending for {dm}"
    );

    let mut out = Vec::with_capacity(3);
    out.push(Recommendation::new(
        RecommendationKind::SupportDayMaster,
        dm.meridian(),
        format!("Support Day Master ({} - {})", dm.pinyin(), dm.english()),
    ));

    match balance.status {
        BalanceStatus::Weak => {
            let mother = dm_element.produced_by();
            out.push(Recommendation::new(
                RecommendationKind::Tonification,
                primary_meridian(mother),
                format!("Strengthen weak Day Master via {mother} element"),
            ));
        }
        BalanceStatus::Strong => {
            let child = dm_element.produces();
            out.push(Recommendation::new(
                RecommendationKind::Sedation,
                primary_meridian(child),
                format!("Drain excess via {child} element"),
            ));
        }
        BalanceStatus::Balanced => {}
    }

    let hour_branch = pillars.hour.branch;
    out.push(Recommendation::new(
        RecommendationKind::HourOpening,
        hour_branch.meridian(),
        format!(
            "Zi Wu Liu Zhu - optimal meridian for current hour ({})",
            hour_branch.window_label()
        ),
    ));

    RecommendationSet(out)
}
