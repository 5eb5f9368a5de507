//! Weighted element strength of a four-pillar chart.
//!
//! Each pillar adds 10 points to its stem's element and 10 to its branch's
//! element, and 7 / 3 / 1 points for the branch's primary, secondary and
//! tertiary hidden stems. All contributions scale with the pillar weight
//! (year 1.0, month 1.5, day 1.0, hour 0.5).

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::trace;

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::BaziError;
use crate::pillar::FourPillars;

/// Points for a pillar's visible stem and its branch.
pub const VISIBLE_POINTS: f64 = 10.0;

/// Rank of a hidden stem inside its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HiddenStemTier {
    Primary,
    Secondary,
    Tertiary,
}

impl HiddenStemTier {
    /// Tier of the hidden stem at `position` (0-based) in a branch's list.
    pub const fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Self::Primary),
            1 => Some(Self::Secondary),
            2 => Some(Self::Tertiary),
            _ => None,
        }
    }

    pub const fn points(self) -> f64 {
        match self {
            Self::Primary => 7.0,
            Self::Secondary => 3.0,
            Self::Tertiary => 1.0,
        }
    }
}

/// Non-negative score per element with a positive total. Serializes as a
/// map keyed by element name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStrengthProfile {
    scores: [f64; 5],
}

impl ElementStrengthProfile {
    /// All-zero accumulator; only valid once points have been added.
    const fn empty() -> Self {
        Self { scores: [0.0; 5] }
    }

    /// Build a profile from explicit scores in element order
    /// (Wood, Fire, Earth, Metal, Water).
    ///
    /// Scores must be finite and non-negative with a positive total.
    pub fn from_scores(scores: [f64; 5]) -> Result<Self, BaziError> {
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(BaziError::InvalidProfile("scores must be finite"));
        }
        if scores.iter().any(|s| *s < 0.0) {
            return Err(BaziError::InvalidProfile("scores must be non-negative"));
        }
        if scores.iter().sum::<f64>() <= 0.0 {
            return Err(BaziError::InvalidProfile("total strength must be positive"));
        }
        Ok(Self { scores })
    }

    pub fn get(&self, element: Element) -> f64 {
        self.scores[element.index() as usize]
    }

    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Share of the total held by `element`, in [0, 1].
    pub fn share(&self, element: Element) -> f64 {
        self.get(element) / self.total()
    }

    /// Elements ascending by score; equal scores keep element order.
    pub fn ranked(&self) -> [(Element, f64); 5] {
        let mut ranked = ALL_ELEMENTS.map(|e| (e, self.get(e)));
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    pub fn weakest(&self) -> Element {
        self.ranked()[0].0
    }

    pub fn strongest(&self) -> Element {
        self.ranked()[4].0
    }

    fn add(&mut self, element: Element, points: f64) {
        self.scores[element.index() as usize] += points;
    }
}

impl Serialize for ElementStrengthProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for e in ALL_ELEMENTS {
            map.serialize_entry(e.name(), &self.get(e))?;
        }
        map.end()
    }
}

/// Aggregate the weighted element strength of a chart.
pub fn element_strengths(pillars: &FourPillars) -> ElementStrengthProfile {
    let mut profile = ElementStrengthProfile::empty();
    for (position, pillar) in pillars.iter() {
        let w = position.weight();
        profile.add(pillar.stem.element(), VISIBLE_POINTS * w);
        profile.add(pillar.branch.element(), VISIBLE_POINTS * w);
        for (i, hidden) in pillar.branch.hidden_stems().iter().enumerate() {
            if let Some(tier) = HiddenStemTier::from_position(i) {
                profile.add(hidden.element(), tier.points() * w);
            }
        }
        trace!(position = position.name(), %pillar, ?profile, "pillar added");
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::EarthlyBranch;
    use crate::pillar::Pillar;
    use crate::stem::HeavenlyStem;

    fn uniform(stem: HeavenlyStem, branch: EarthlyBranch) -> FourPillars {
        let p = Pillar { stem, branch };
        FourPillars {
            year: p,
            month: p,
            day: p,
            hour: p,
        }
    }

    #[test]
    fn tier_points() {
        assert_eq!(HiddenStemTier::from_position(0), Some(HiddenStemTier::Primary));
        assert_eq!(HiddenStemTier::from_position(3), None);
        assert_eq!(HiddenStemTier::Primary.points(), 7.0);
        assert_eq!(HiddenStemTier::Secondary.points(), 3.0);
        assert_eq!(HiddenStemTier::Tertiary.points(), 1.0);
    }

    #[test]
    fn pure_wood_chart() {
        // 甲卯: stem Wood, branch Wood, hidden 乙 (Wood); per unit weight 27
        let profile = element_strengths(&uniform(HeavenlyStem::Jia, EarthlyBranch::Mao));
        assert!((profile.get(Element::Wood) - 27.0 * 4.0).abs() < 1e-9);
        assert_eq!(profile.get(Element::Fire), 0.0);
        assert_eq!(profile.strongest(), Element::Wood);
    }

    #[test]
    fn three_hidden_stems_weighted() {
        // 戊寅 in all four: stem Earth 10, branch Wood 10, 甲 7 Wood, 丙 3 Fire, 戊 1 Earth
        let profile = element_strengths(&uniform(HeavenlyStem::Wu, EarthlyBranch::Yin));
        assert!((profile.get(Element::Earth) - 11.0 * 4.0).abs() < 1e-9);
        assert!((profile.get(Element::Wood) - 17.0 * 4.0).abs() < 1e-9);
        assert!((profile.get(Element::Fire) - 3.0 * 4.0).abs() < 1e-9);
        assert!((profile.total() - 31.0 * 4.0).abs() < 1e-9);
    }

    #[test]
    fn month_weighs_most() {
        let mut chart = uniform(HeavenlyStem::Ren, EarthlyBranch::Zi);
        chart.month = Pillar {
            stem: HeavenlyStem::Bing,
            branch: EarthlyBranch::Wu,
        };
        let profile = element_strengths(&chart);
        // 丙午 ×1.5: Fire 10 + 10 + 丁 7, Earth 己 3
        assert!((profile.get(Element::Fire) - 27.0 * 1.5).abs() < 1e-9);
        assert!((profile.get(Element::Earth) - 3.0 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn ranked_stable_on_ties() {
        let profile = ElementStrengthProfile::from_scores([5.0, 1.0, 1.0, 9.0, 1.0]).unwrap();
        let order: Vec<Element> = profile.ranked().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            order,
            [Element::Fire, Element::Earth, Element::Water, Element::Wood, Element::Metal]
        );
        assert_eq!(profile.weakest(), Element::Fire);
        assert_eq!(profile.strongest(), Element::Metal);
    }

    #[test]
    fn from_scores_rejects_bad_input() {
        assert!(ElementStrengthProfile::from_scores([0.0; 5]).is_err());
        assert!(ElementStrengthProfile::from_scores([1.0, -1.0, 1.0, 1.0, 1.0]).is_err());
        assert!(ElementStrengthProfile::from_scores([f64::NAN, 1.0, 1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn zero_total_cannot_be_built() {
        let err = ElementStrengthProfile::from_scores([0.0; 5]).unwrap_err();
        assert_eq!(err, BaziError::InvalidProfile("total strength must be positive"));
        let tiny = ElementStrengthProfile::from_scores([0.0, 0.0, 0.0, 0.0, 1e-9]).unwrap();
        assert!(tiny.share(Element::Water).is_finite());
        assert_eq!(tiny.share(Element::Wood), 0.0);
    }

    #[test]
    fn every_chart_profile_has_finite_shares() {
        let profile = element_strengths(&uniform(HeavenlyStem::Gui, EarthlyBranch::Hai));
        assert!(profile.total() > 0.0);
        for e in ALL_ELEMENTS {
            assert!(profile.share(e).is_finite());
        }
    }

    #[test]
    fn share() {
        let profile = ElementStrengthProfile::from_scores([40.0, 15.0, 15.0, 15.0, 15.0]).unwrap();
        assert!((profile.share(Element::Wood) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_named_map() {
        let profile = ElementStrengthProfile::from_scores([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"Wood":1.0,"Fire":2.0,"Earth":3.0,"Metal":4.0,"Water":5.0}"#
        );
    }
}
