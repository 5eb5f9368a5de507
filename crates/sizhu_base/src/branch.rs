//! Earthly Branches (Di Zhi 地支).
//!
//! Twelve branches cycle in fixed order. Each branch governs a two-hour
//! window of the day, starting one hour before its nominal label: Zi covers
//! 23:00-01:00, Chou 01:00-03:00, and so on. Each branch also stores one to
//! three hidden stems, ordered primary → tertiary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::meridian::Meridian;
use crate::season::Season;
use crate::stem::HeavenlyStem;

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// 1-based position in the cycle (Zi = 1 .. Hai = 12).
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Zi => 1,
            Self::Chou => 2,
            Self::Yin => 3,
            Self::Mao => 4,
            Self::Chen => 5,
            Self::Si => 6,
            Self::Wu => 7,
            Self::Wei => 8,
            Self::Shen => 9,
            Self::You => 10,
            Self::Xu => 11,
            Self::Hai => 12,
        }
    }

    /// Branch at a 1-based ordinal. Returns None outside 1..=12.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=12 => Some(ALL_BRANCHES[ordinal as usize - 1]),
            _ => None,
        }
    }

    /// Branch at a 1-based ordinal that is known to be in range.
    ///
    /// # Panics
    /// Panics if `ordinal` is outside 1..=12.
    pub fn at(ordinal: u8) -> Self {
        Self::from_ordinal(ordinal)
            .unwrap_or_else(|| panic!("branch ordinal {ordinal} outside 1..=12"))
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Zi | Self::Hai => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Zi | Self::Yin | Self::Chen | Self::Wu | Self::Shen | Self::Xu => Polarity::Yang,
            Self::Chou | Self::Mao | Self::Si | Self::Wei | Self::You | Self::Hai => Polarity::Yin,
        }
    }

    /// Meridian at peak flow during this branch's window (horary clock,
    /// counted from Zi = Gall Bladder).
    pub const fn meridian(self) -> Meridian {
        match self {
            Self::Zi => Meridian::GallBladder,
            Self::Chou => Meridian::Liver,
            Self::Yin => Meridian::Lung,
            Self::Mao => Meridian::LargeIntestine,
            Self::Chen => Meridian::Stomach,
            Self::Si => Meridian::Spleen,
            Self::Wu => Meridian::Heart,
            Self::Wei => Meridian::SmallIntestine,
            Self::Shen => Meridian::Bladder,
            Self::You => Meridian::Kidney,
            Self::Xu => Meridian::Pericardium,
            Self::Hai => Meridian::TripleHeater,
        }
    }

    /// Hidden stems, primary first.
    pub const fn hidden_stems(self) -> &'static [HeavenlyStem] {
        use HeavenlyStem::*;
        match self {
            Self::Zi => &[Gui],
            Self::Chou => &[Ji, Gui, Xin],
            Self::Yin => &[Jia, Bing, Wu],
            Self::Mao => &[Yi],
            Self::Chen => &[Wu, Yi, Gui],
            Self::Si => &[Bing, Geng, Wu],
            Self::Wu => &[Ding, Ji],
            Self::Wei => &[Ji, Ding, Yi],
            Self::Shen => &[Geng, Ren, Wu],
            Self::You => &[Xin],
            Self::Xu => &[Wu, Xin, Ding],
            Self::Hai => &[Ren, Jia],
        }
    }

    /// Wall-clock hour at which the window opens (Zi → 23).
    pub const fn start_hour(self) -> u32 {
        (23 + 2 * (self.ordinal() as u32 - 1)) % 24
    }

    /// Display label of the two-hour window, e.g. "23:00-01:00".
    pub const fn window_label(self) -> &'static str {
        match self {
            Self::Zi => "23:00-01:00",
            Self::Chou => "01:00-03:00",
            Self::Yin => "03:00-05:00",
            Self::Mao => "05:00-07:00",
            Self::Chen => "07:00-09:00",
            Self::Si => "09:00-11:00",
            Self::Wu => "11:00-13:00",
            Self::Wei => "13:00-15:00",
            Self::Shen => "15:00-17:00",
            Self::You => "17:00-19:00",
            Self::Xu => "19:00-21:00",
            Self::Hai => "21:00-23:00",
        }
    }

    /// Whether a wall-clock hour (0..=23) falls inside this branch's window.
    pub const fn contains_hour(self, hour: u32) -> bool {
        let start = self.start_hour();
        hour == start || hour == (start + 1) % 24
    }

    /// Season of a month carrying this branch.
    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.chinese(), self.pinyin())
    }
}
