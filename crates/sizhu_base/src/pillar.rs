//! Pillars and the four-pillar chart (四柱).

use std::fmt::{Display, Formatter};

use serde::Serialize;
use sizhu_time::BirthMoment;
use tracing::debug;

use crate::branch::EarthlyBranch;
use crate::cycle::{CycleIndex, PillarIndices, cycle_indices};
use crate::stem::HeavenlyStem;

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Strength weight. The month pillar carries the season and dominates.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Year => 1.0,
            Self::Month => 1.5,
            Self::Day => 1.0,
            Self::Hour => 0.5,
        }
    }
}

/// One stem over one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Resolve cycle ordinals against the stem and branch tables.
    ///
    /// # Panics
    /// Panics if either ordinal is outside its table; cycle arithmetic
    /// guarantees they are not.
    pub fn from_index(index: CycleIndex) -> Self {
        Self {
            stem: HeavenlyStem::at(index.stem),
            branch: EarthlyBranch::at(index.branch),
        }
    }

    pub fn index(self) -> CycleIndex {
        CycleIndex {
            stem: self.stem.ordinal(),
            branch: self.branch.ordinal(),
        }
    }

    /// Position in the 60-pair cycle, 1 (甲子) ..= 60 (癸亥).
    pub fn sexagenary_ordinal(self) -> u8 {
        self.index().sexagenary_ordinal()
    }

    /// Two-character name, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} ({} {})",
            self.stem.chinese(),
            self.branch.chinese(),
            self.stem.pinyin(),
            self.branch.pinyin()
        )
    }
}

/// Year, month, day and hour pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Assemble pillars from resolved cycle indices.
    pub fn from_indices(indices: &PillarIndices) -> Self {
        Self {
            year: Pillar::from_index(indices.year),
            month: Pillar::from_index(indices.month),
            day: Pillar::from_index(indices.day),
            hour: Pillar::from_index(indices.hour),
        }
    }

    /// The day stem, reference point of the chart.
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }

    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars paired with their positions, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.chinese(),
            self.month.chinese(),
            self.day.chinese(),
            self.hour.chinese()
        )
    }
}

/// Four pillars of a validated moment.
#[tracing::instrument(level = "debug", skip(moment), fields(moment = %moment))]
pub fn four_pillars(moment: &BirthMoment) -> FourPillars {
    let pillars = FourPillars::from_indices(&cycle_indices(moment));
    debug!(%pillars, day_master = %pillars.day_master(), "assembled");
    pillars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(y: i32, m: u32, d: u32, h: u32) -> BirthMoment {
        BirthMoment::new(y, m, d, h, 0).unwrap()
    }

    #[test]
    fn weights() {
        let total: f64 = ALL_POSITIONS.iter().map(|p| p.weight()).sum();
        assert!((total - 4.0).abs() < 1e-12);
        assert!(PillarPosition::Month.weight() > PillarPosition::Year.weight());
    }

    #[test]
    fn from_index_resolves_last_entries() {
        let p = Pillar::from_index(CycleIndex { stem: 10, branch: 12 });
        assert_eq!(p.stem, HeavenlyStem::Gui);
        assert_eq!(p.branch, EarthlyBranch::Hai);
        assert_eq!(p.chinese(), "癸亥");
    }

    #[test]
    #[should_panic(expected = "stem ordinal 0")]
    fn from_index_rejects_zero_stem() {
        Pillar::from_index(CycleIndex { stem: 0, branch: 1 });
    }

    #[test]
    fn index_roundtrip() {
        let idx = CycleIndex { stem: 7, branch: 9 };
        assert_eq!(Pillar::from_index(idx).index(), idx);
    }

    #[test]
    fn golden_chart_2024_new_year() {
        // 2024-01-01 12:00: 甲辰 year, 丙寅 month (calendar approximation),
        // 甲子 day, 庚午 hour
        let p = four_pillars(&moment(2024, 1, 1, 12));
        assert_eq!(p.year.chinese(), "甲辰");
        assert_eq!(p.month.chinese(), "丙寅");
        assert_eq!(p.day.chinese(), "甲子");
        assert_eq!(p.hour.chinese(), "庚午");
        assert_eq!(p.day_master(), HeavenlyStem::Jia);
    }

    #[test]
    fn late_zi_hour_stays_on_same_day() {
        let p = four_pillars(&moment(2024, 1, 1, 23));
        assert_eq!(p.day.chinese(), "甲子");
        assert_eq!(p.hour.chinese(), "甲子");
    }

    #[test]
    fn iter_in_chart_order() {
        let p = four_pillars(&moment(1984, 2, 2, 10));
        let positions: Vec<_> = p.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, ALL_POSITIONS);
        assert_eq!(p.iter().nth(2).map(|(_, pl)| pl), Some(p.day));
    }

    #[test]
    fn display() {
        let p = four_pillars(&moment(2024, 1, 1, 12));
        assert_eq!(p.to_string(), "甲辰 丙寅 甲子 庚午");
        assert_eq!(p.day.to_string(), "甲子 (Jia Zi)");
    }
}
