//! Five elements (Wu Xing 五行), polarity, and the generating/controlling cycles.
//!
//! Generating (sheng) cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Controlling (ke) cycle: Wood → Earth → Water → Fire → Metal → Wood.
//!
//! Every relation is a total function over the closed element set, written
//! as an exhaustive match.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// The five elements, in canonical ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in canonical order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Yin/Yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// How a second element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// The reference element produces the other.
    Produces,
    /// The reference element controls the other.
    Controls,
    /// The other element produces the reference.
    ProducedBy,
    /// The other element controls the reference.
    ControlledBy,
}

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element this one generates.
    pub const fn produces(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// Element this one restrains.
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Element that generates this one (the "mother").
    pub const fn produced_by(self) -> Element {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// Element that restrains this one.
    pub const fn controlled_by(self) -> Element {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }

    /// Classify `other` relative to `self`.
    ///
    /// Any two distinct elements are linked by exactly one of the four
    /// directed relations, so this never falls through.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if other == self {
            ElementRelation::Same
        } else if other == self.produces() {
            ElementRelation::Produces
        } else if other == self.controls() {
            ElementRelation::Controls
        } else if other == self.produced_by() {
            ElementRelation::ProducedBy
        } else {
            ElementRelation::ControlledBy
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = BaziError;

    /// Accepts the English name (any case) or the Chinese character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s) || e.chinese() == s)
            .ok_or_else(|| BaziError::UnknownName {
                kind: "element",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes_after_five() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.produces();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn controlling_cycle_closes_after_five() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.controls();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn produced_by_inverts_produces() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.produced_by().produces(), e);
        }
    }

    #[test]
    fn controlled_by_inverts_controls() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.controls().controlled_by(), e);
            assert_eq!(e.controlled_by().controls(), e);
        }
    }

    #[test]
    fn relations_are_bijections() {
        // Each relation maps the 5 elements onto all 5 elements.
        let relations: [fn(Element) -> Element; 4] = [
            Element::produces,
            Element::controls,
            Element::produced_by,
            Element::controlled_by,
        ];
        for rel in relations {
            let mut seen = [false; 5];
            for e in ALL_ELEMENTS {
                let image = rel(e);
                assert_ne!(image, e, "no element relates to itself");
                seen[image.index() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn wood_relations() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Wood.produced_by(), Element::Water);
        assert_eq!(Element::Wood.controlled_by(), Element::Metal);
    }

    #[test]
    fn relation_to_covers_each_kind_once() {
        for e in ALL_ELEMENTS {
            let mut kinds: Vec<ElementRelation> =
                ALL_ELEMENTS.iter().map(|&o| e.relation_to(o)).collect();
            kinds.sort_by_key(|k| *k as u8);
            kinds.dedup();
            assert_eq!(kinds.len(), 5, "{e} must see five distinct relations");
        }
    }

    #[test]
    fn relation_to_examples() {
        assert_eq!(Element::Fire.relation_to(Element::Fire), ElementRelation::Same);
        assert_eq!(Element::Fire.relation_to(Element::Earth), ElementRelation::Produces);
        assert_eq!(Element::Fire.relation_to(Element::Metal), ElementRelation::Controls);
        assert_eq!(Element::Fire.relation_to(Element::Wood), ElementRelation::ProducedBy);
        assert_eq!(Element::Fire.relation_to(Element::Water), ElementRelation::ControlledBy);
    }

    #[test]
    fn parse_names() {
        assert_eq!("metal".parse::<Element>().unwrap(), Element::Metal);
        assert_eq!("WATER".parse::<Element>().unwrap(), Element::Water);
        assert_eq!("木".parse::<Element>().unwrap(), Element::Wood);
        assert!("Air".parse::<Element>().is_err());
    }
}
