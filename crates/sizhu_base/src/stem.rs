//! Heavenly Stems (Tian Gan 天干).
//!
//! Ten stems cycle in fixed order; stems pair off by element with Yang
//! first, Yin second. Ordinals are 1-based (Jia = 1 .. Gui = 10).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::BaziError;
use crate::meridian::Meridian;

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// 1-based position in the cycle (Jia = 1 .. Gui = 10).
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Jia => 1,
            Self::Yi => 2,
            Self::Bing => 3,
            Self::Ding => 4,
            Self::Wu => 5,
            Self::Ji => 6,
            Self::Geng => 7,
            Self::Xin => 8,
            Self::Ren => 9,
            Self::Gui => 10,
        }
    }

    /// Stem at a 1-based ordinal. Returns None outside 1..=10.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=10 => Some(ALL_STEMS[ordinal as usize - 1]),
            _ => None,
        }
    }

    /// Stem at a 1-based ordinal that is known to be in range.
    ///
    /// # Panics
    /// Panics if `ordinal` is outside 1..=10; cycle arithmetic never
    /// produces such a value.
    pub fn at(ordinal: u8) -> Self {
        Self::from_ordinal(ordinal)
            .unwrap_or_else(|| panic!("stem ordinal {ordinal} outside 1..=10"))
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => Polarity::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => Polarity::Yin,
        }
    }

    /// Associated meridian. Yang stems map to the fu (hollow) organ,
    /// Yin stems to the zang (solid) organ of the same element.
    pub const fn meridian(self) -> Meridian {
        match self {
            Self::Jia => Meridian::GallBladder,
            Self::Yi => Meridian::Liver,
            Self::Bing => Meridian::SmallIntestine,
            Self::Ding => Meridian::Heart,
            Self::Wu => Meridian::Stomach,
            Self::Ji => Meridian::Spleen,
            Self::Geng => Meridian::LargeIntestine,
            Self::Xin => Meridian::Lung,
            Self::Ren => Meridian::Bladder,
            Self::Gui => Meridian::Kidney,
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Element-and-polarity label, e.g. "Wood Yang".
    pub const fn english(self) -> &'static str {
        match self {
            Self::Jia => "Wood Yang",
            Self::Yi => "Wood Yin",
            Self::Bing => "Fire Yang",
            Self::Ding => "Fire Yin",
            Self::Wu => "Earth Yang",
            Self::Ji => "Earth Yin",
            Self::Geng => "Metal Yang",
            Self::Xin => "Metal Yin",
            Self::Ren => "Water Yang",
            Self::Gui => "Water Yin",
        }
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.chinese(), self.pinyin())
    }
}

impl FromStr for HeavenlyStem {
    type Err = BaziError;

    /// Accepts pinyin (any case), the Chinese character, or the ordinal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(stem) = s.parse::<u8>().ok().and_then(Self::from_ordinal) {
            return Ok(stem);
        }
        ALL_STEMS
            .into_iter()
            .find(|st| st.pinyin().eq_ignore_ascii_case(s) || st.chinese() == s)
            .ok_or_else(|| BaziError::UnknownName {
                kind: "heavenly stem",
                name: s.to_string(),
            })
    }
}
