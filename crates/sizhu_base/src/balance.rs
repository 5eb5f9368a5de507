//! Day Master balance classification.
//!
//! The Day Master is strong when its element holds more than 35% of the
//! chart's total strength and weak below 15%. These bands are fixed
//! constants of the model.

use serde::Serialize;
use tracing::debug;

use crate::element::Element;
use crate::strength::ElementStrengthProfile;

pub const STRONG_THRESHOLD: f64 = 0.35;
pub const WEAK_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BalanceStatus {
    Strong,
    Weak,
    Balanced,
}

impl BalanceStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Strong => "Day Master is strong - may need to weaken or exhaust",
            Self::Weak => "Day Master is weak - may need to support or strengthen",
            Self::Balanced => "Chart is relatively balanced",
        }
    }
}

/// Outcome of balance analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceResult {
    pub status: BalanceStatus,
    /// Day Master element's share of total strength.
    pub ratio: f64,
    pub description: &'static str,
}

/// Classify a Day Master share.
pub fn classify_ratio(ratio: f64) -> BalanceStatus {
    if ratio > STRONG_THRESHOLD {
        BalanceStatus::Strong
    } else if ratio < WEAK_THRESHOLD {
        BalanceStatus::Weak
    } else {
        BalanceStatus::Balanced
    }
}

pub fn analyze_balance(profile: &ElementStrengthProfile, day_master: Element) -> BalanceResult {
    let ratio = profile.share(day_master);
    let status = classify_ratio(ratio);
    debug!(%day_master, ratio, status = status.name(), "balance");
    BalanceResult {
        status,
        ratio,
        description: status.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_wood_share(wood: f64) -> ElementStrengthProfile {
        let rest = (100.0 - wood) / 4.0;
        ElementStrengthProfile::from_scores([wood, rest, rest, rest, rest]).unwrap()
    }

    #[test]
    fn forty_percent_is_strong() {
        let r = analyze_balance(&profile_with_wood_share(40.0), Element::Wood);
        assert_eq!(r.status, BalanceStatus::Strong);
        assert!((r.ratio - 0.4).abs() < 1e-12);
    }

    #[test]
    fn ten_percent_is_weak() {
        let r = analyze_balance(&profile_with_wood_share(10.0), Element::Wood);
        assert_eq!(r.status, BalanceStatus::Weak);
    }

    #[test]
    fn twenty_five_percent_is_balanced() {
        let r = analyze_balance(&profile_with_wood_share(25.0), Element::Wood);
        assert_eq!(r.status, BalanceStatus::Balanced);
        assert_eq!(r.description, "Chart is relatively balanced");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify_ratio(STRONG_THRESHOLD), BalanceStatus::Balanced);
        assert_eq!(classify_ratio(WEAK_THRESHOLD), BalanceStatus::Balanced);
        assert_eq!(classify_ratio(0.0), BalanceStatus::Weak);
        assert_eq!(classify_ratio(1.0), BalanceStatus::Strong);
    }

    #[test]
    fn monotonic_in_ratio() {
        let rank = |s: BalanceStatus| match s {
            BalanceStatus::Weak => 0,
            BalanceStatus::Balanced => 1,
            BalanceStatus::Strong => 2,
        };
        let mut prev = 0;
        for i in 0..=100 {
            let r = rank(classify_ratio(f64::from(i) / 100.0));
            assert!(r >= prev, "ratio {i}%");
            prev = r;
        }
    }

    #[test]
    fn descriptions() {
        assert!(BalanceStatus::Strong.description().starts_with("Day Master is strong"));
        assert!(BalanceStatus::Weak.description().starts_with("Day Master is weak"));
    }
}
