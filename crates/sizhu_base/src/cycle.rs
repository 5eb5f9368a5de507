//! Sexagenary cycle indices for the year, month, day and hour pillars.
//!
//! Every pillar is first expressed as a 0-based offset from a 甲子 anchor
//! and then resolved through [`wrap_index`] into 1-based ordinals. Anchors:
//! - year: CE 4 is 甲子
//! - day: 1900-02-20 (JDN 2415071) is 甲子
//! - month: the month stem follows the Five Tigers rule from the year stem,
//!   the month branch is the calendar month shifted so January is 寅
//! - hour: the hour stem follows the Five Rats rule from the day stem,
//!   the hour branch is the two-hour window, with 23:00 opening 子
//!
//! Month boundaries use calendar months, not solar terms. The 23:00 hour
//! is not rolled forward to the next day.

use serde::Serialize;
use sizhu_time::{BirthMoment, NaiveDate, julian_day_number};
use tracing::debug;

use crate::stem::HeavenlyStem;
use crate::util::wrap_index;

/// CE year whose year pillar is 甲子.
pub const YEAR_EPOCH: i32 = 4;

/// Julian Day Number of 1900-02-20, a 甲子 day.
pub const DAY_EPOCH_JDN: i64 = 2_415_071;

pub const STEM_CYCLE: u8 = 10;
pub const BRANCH_CYCLE: u8 = 12;

/// 1-based stem and branch ordinals of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleIndex {
    /// 1..=10
    pub stem: u8,
    /// 1..=12
    pub branch: u8,
}

impl CycleIndex {
    /// Resolve 0-based offsets from 甲子 into ordinals.
    pub fn from_offsets(stem_offset: i64, branch_offset: i64) -> Self {
        Self {
            stem: wrap_index(stem_offset + 1, STEM_CYCLE),
            branch: wrap_index(branch_offset + 1, BRANCH_CYCLE),
        }
    }

    /// Position in the 60-pair cycle, 1 (甲子) ..= 60 (癸亥).
    ///
    /// Stem and branch ordinals always share parity, which makes the pair
    /// unique within the 60 cycle.
    ///
    /// # Panics
    /// Panics if either ordinal is outside its cycle.
    pub fn sexagenary_ordinal(self) -> u8 {
        assert!(
            (1..=STEM_CYCLE).contains(&self.stem),
            "stem ordinal {} outside 1..={STEM_CYCLE}",
            self.stem
        );
        assert!(
            (1..=BRANCH_CYCLE).contains(&self.branch),
            "branch ordinal {} outside 1..={BRANCH_CYCLE}",
            self.branch
        );
        let s = i64::from(self.stem - 1);
        let b = i64::from(self.branch - 1);
        // n ≡ s (mod 10), n ≡ b (mod 12)
        let n = s + 10 * ((b - s).rem_euclid(12) / 2 * 5 % 6);
        wrap_index(n + 1, 60)
    }
}

/// Raw indices of all four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PillarIndices {
    pub year: CycleIndex,
    pub month: CycleIndex,
    pub day: CycleIndex,
    pub hour: CycleIndex,
}

/// Five Tigers (五虎遁): 0-based stem offset of the first (寅) month for a
/// year stem.
pub const fn five_tigers_base(year_stem: HeavenlyStem) -> u8 {
    match year_stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => 2,
        HeavenlyStem::Yi | HeavenlyStem::Geng => 4,
        HeavenlyStem::Bing | HeavenlyStem::Xin => 6,
        HeavenlyStem::Ding | HeavenlyStem::Ren => 8,
        HeavenlyStem::Wu | HeavenlyStem::Gui => 0,
    }
}

/// Five Rats (五鼠遁): 0-based stem offset of the 子 hour for a day stem.
pub const fn five_rats_base(day_stem: HeavenlyStem) -> u8 {
    match day_stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => 0,
        HeavenlyStem::Yi | HeavenlyStem::Geng => 2,
        HeavenlyStem::Bing | HeavenlyStem::Xin => 4,
        HeavenlyStem::Ding | HeavenlyStem::Ren => 6,
        HeavenlyStem::Wu | HeavenlyStem::Gui => 8,
    }
}

/// 0-based two-hour window containing `hour` (0 = 子, 23:00-01:00).
pub const fn hour_branch_offset(hour: u32) -> u8 {
    (((hour + 1) % 24) / 2) as u8
}

pub fn year_index(year: i32) -> CycleIndex {
    let offset = i64::from(year) - i64::from(YEAR_EPOCH);
    CycleIndex::from_offsets(offset, offset)
}

/// Month pillar for calendar month 1..=12 of a year with `year_stem`.
pub fn month_index(year_stem: HeavenlyStem, month: u32) -> CycleIndex {
    debug_assert!((1..=12).contains(&month), "month {month} outside 1..=12");
    let month = i64::from(month);
    CycleIndex::from_offsets(i64::from(five_tigers_base(year_stem)) + month - 1, month + 1)
}

/// Day pillar from whole calendar days elapsed since the 甲子 epoch.
pub fn day_index(date: NaiveDate) -> CycleIndex {
    let elapsed = julian_day_number(date) - DAY_EPOCH_JDN;
    CycleIndex::from_offsets(elapsed, elapsed)
}

/// Hour pillar for wall-clock hour 0..=23 of a day with `day_stem`.
pub fn hour_index(day_stem: HeavenlyStem, hour: u32) -> CycleIndex {
    debug_assert!(hour < 24, "hour {hour} outside 0..=23");
    let branch = i64::from(hour_branch_offset(hour));
    CycleIndex::from_offsets(i64::from(five_rats_base(day_stem)) + branch, branch)
}

/// Compute all four pillar indices for a validated moment.
pub fn cycle_indices(moment: &BirthMoment) -> PillarIndices {
    let year = year_index(moment.year());
    let month = month_index(HeavenlyStem::at(year.stem), moment.month());
    let day = day_index(moment.date());
    let hour = hour_index(HeavenlyStem::at(day.stem), moment.hour());
    debug!(?year, ?month, ?day, ?hour, "cycle indices for {moment}");
    PillarIndices {
        year,
        month,
        day,
        hour,
    }
}
