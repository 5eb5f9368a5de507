//! Ten Gods (十神): how any stem stands relative to the Day Master.
//!
//! The relation is fixed by the element relation between the two stems and
//! whether their polarities match.

use serde::Serialize;

use crate::element::ElementRelation;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Classify by element relation (from the Day Master's side) and
    /// whether the polarities agree.
    pub const fn from_relation(relation: ElementRelation, same_polarity: bool) -> Self {
        match (relation, same_polarity) {
            (ElementRelation::Same, true) => Self::Friend,
            (ElementRelation::Same, false) => Self::RobWealth,
            (ElementRelation::Produces, true) => Self::EatingGod,
            (ElementRelation::Produces, false) => Self::HurtingOfficer,
            (ElementRelation::Controls, true) => Self::IndirectWealth,
            (ElementRelation::Controls, false) => Self::DirectWealth,
            (ElementRelation::ControlledBy, true) => Self::SevenKillings,
            (ElementRelation::ControlledBy, false) => Self::DirectOfficer,
            (ElementRelation::ProducedBy, true) => Self::IndirectResource,
            (ElementRelation::ProducedBy, false) => Self::DirectResource,
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Friend => "Bi Jian",
            Self::RobWealth => "Jie Cai",
            Self::EatingGod => "Shi Shen",
            Self::HurtingOfficer => "Shang Guan",
            Self::IndirectWealth => "Pian Cai",
            Self::DirectWealth => "Zheng Cai",
            Self::SevenKillings => "Qi Sha",
            Self::DirectOfficer => "Zheng Guan",
            Self::IndirectResource => "Pian Yin",
            Self::DirectResource => "Zheng Yin",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Friend => "Same element, same polarity as Day Master",
            Self::RobWealth => "Same element, opposite polarity as Day Master",
            Self::EatingGod => "Element produced by Day Master, same polarity",
            Self::HurtingOfficer => "Element produced by Day Master, opposite polarity",
            Self::IndirectWealth => "Element controlled by Day Master, same polarity",
            Self::DirectWealth => "Element controlled by Day Master, opposite polarity",
            Self::SevenKillings => "Element that controls Day Master, same polarity",
            Self::DirectOfficer => "Element that controls Day Master, opposite polarity",
            Self::IndirectResource => "Element that produces Day Master, same polarity",
            Self::DirectResource => "Element that produces Day Master, opposite polarity",
        }
    }
}

/// Ten God of `other` seen from `day_master`.
pub fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let relation = day_master.element().relation_to(other.element());
    TenGod::from_relation(relation, day_master.polarity() == other.polarity())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_is_friend() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Friend);
        }
    }

    #[test]
    fn jia_day_master_table() {
        use HeavenlyStem::*;
        let expected = [
            (Jia, TenGod::Friend),
            (Yi, TenGod::RobWealth),
            (Bing, TenGod::EatingGod),
            (Ding, TenGod::HurtingOfficer),
            (Wu, TenGod::IndirectWealth),
            (Ji, TenGod::DirectWealth),
            (Geng, TenGod::SevenKillings),
            (Xin, TenGod::DirectOfficer),
            (Ren, TenGod::IndirectResource),
            (Gui, TenGod::DirectResource),
        ];
        for (other, god) in expected {
            assert_eq!(ten_god(Jia, other), god, "{}", other.pinyin());
        }
    }

    #[test]
    fn each_day_master_sees_all_ten() {
        for dm in ALL_STEMS {
            let seen: HashSet<TenGod> = ALL_STEMS.iter().map(|&o| ten_god(dm, o)).collect();
            assert_eq!(seen.len(), 10, "{}", dm.pinyin());
        }
    }

    #[test]
    fn names_from_table() {
        assert_eq!(TenGod::SevenKillings.chinese(), "七杀");
        assert_eq!(TenGod::DirectResource.pinyin(), "Zheng Yin");
        for g in ALL_TEN_GODS {
            assert!(!g.description().is_empty());
        }
    }
}
