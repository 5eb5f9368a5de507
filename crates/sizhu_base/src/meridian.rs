//! The twelve primary meridians, their elements, and command points.
//!
//! Point assignments follow the classical five-shu tables: the source (yuan)
//! point, the tonification ("mother") point, the sedation ("child") point and
//! the horary point sharing the meridian's own element.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The 12 primary meridians, serialized by their short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridian {
    #[serde(rename = "LU")]
    Lung,
    #[serde(rename = "LI")]
    LargeIntestine,
    #[serde(rename = "ST")]
    Stomach,
    #[serde(rename = "SP")]
    Spleen,
    #[serde(rename = "HT")]
    Heart,
    #[serde(rename = "SI")]
    SmallIntestine,
    #[serde(rename = "BL")]
    Bladder,
    #[serde(rename = "KI")]
    Kidney,
    #[serde(rename = "PC")]
    Pericardium,
    #[serde(rename = "TH")]
    TripleHeater,
    #[serde(rename = "GB")]
    GallBladder,
    #[serde(rename = "LIV")]
    Liver,
}

/// All 12 meridians in horary-clock order starting from Lung.
pub const ALL_MERIDIANS: [Meridian; 12] = [
    Meridian::Lung,
    Meridian::LargeIntestine,
    Meridian::Stomach,
    Meridian::Spleen,
    Meridian::Heart,
    Meridian::SmallIntestine,
    Meridian::Bladder,
    Meridian::Kidney,
    Meridian::Pericardium,
    Meridian::TripleHeater,
    Meridian::GallBladder,
    Meridian::Liver,
];

impl Meridian {
    /// Short clinical code ("LU", "LIV", ...).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Lung => "LU",
            Self::LargeIntestine => "LI",
            Self::Stomach => "ST",
            Self::Spleen => "SP",
            Self::Heart => "HT",
            Self::SmallIntestine => "SI",
            Self::Bladder => "BL",
            Self::Kidney => "KI",
            Self::Pericardium => "PC",
            Self::TripleHeater => "TH",
            Self::GallBladder => "GB",
            Self::Liver => "LIV",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lung => "Lung",
            Self::LargeIntestine => "Large Intestine",
            Self::Stomach => "Stomach",
            Self::Spleen => "Spleen",
            Self::Heart => "Heart",
            Self::SmallIntestine => "Small Intestine",
            Self::Bladder => "Bladder",
            Self::Kidney => "Kidney",
            Self::Pericardium => "Pericardium",
            Self::TripleHeater => "Triple Heater",
            Self::GallBladder => "Gall Bladder",
            Self::Liver => "Liver",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Lung | Self::LargeIntestine => Element::Metal,
            Self::Stomach | Self::Spleen => Element::Earth,
            Self::Heart | Self::SmallIntestine | Self::Pericardium | Self::TripleHeater => {
                Element::Fire
            }
            Self::Bladder | Self::Kidney => Element::Water,
            Self::GallBladder | Self::Liver => Element::Wood,
        }
    }

    /// Source (yuan) point.
    pub const fn source_point(self) -> &'static str {
        match self {
            Self::Lung => "LU9",
            Self::LargeIntestine => "LI4",
            Self::Stomach => "ST42",
            Self::Spleen => "SP3",
            Self::Heart => "HT7",
            Self::SmallIntestine => "SI4",
            Self::Bladder => "BL64",
            Self::Kidney => "KI3",
            Self::Pericardium => "PC7",
            Self::TripleHeater => "TH4",
            Self::GallBladder => "GB40",
            Self::Liver => "LIV3",
        }
    }

    /// Tonification point: the shu point of the mother element.
    pub const fn tonification_point(self) -> &'static str {
        match self {
            Self::Lung => "LU9",
            Self::LargeIntestine => "LI11",
            Self::Stomach => "ST41",
            Self::Spleen => "SP2",
            Self::Heart => "HT9",
            Self::SmallIntestine => "SI3",
            Self::Bladder => "BL67",
            Self::Kidney => "KI7",
            Self::Pericardium => "PC9",
            Self::TripleHeater => "TH3",
            Self::GallBladder => "GB43",
            Self::Liver => "LIV8",
        }
    }

    /// Sedation point: the shu point of the child element.
    pub const fn sedation_point(self) -> &'static str {
        match self {
            Self::Lung => "LU5",
            Self::LargeIntestine => "LI2",
            Self::Stomach => "ST45",
            Self::Spleen => "SP5",
            Self::Heart => "HT7",
            Self::SmallIntestine => "SI8",
            Self::Bladder => "BL65",
            Self::Kidney => "KI1",
            Self::Pericardium => "PC7",
            Self::TripleHeater => "TH10",
            Self::GallBladder => "GB38",
            Self::Liver => "LIV2",
        }
    }

    /// Horary point: the shu point sharing the meridian's own element.
    pub const fn horary_point(self) -> &'static str {
        match self {
            Self::Lung => "LU8",
            Self::LargeIntestine => "LI1",
            Self::Stomach => "ST36",
            Self::Spleen => "SP3",
            Self::Heart => "HT8",
            Self::SmallIntestine => "SI5",
            Self::Bladder => "BL66",
            Self::Kidney => "KI10",
            Self::Pericardium => "PC8",
            Self::TripleHeater => "TH6",
            Self::GallBladder => "GB41",
            Self::Liver => "LIV1",
        }
    }
}

/// Meridians belonging to an element; the first entry is the one used for
/// element-level point selection.
pub const fn element_meridians(element: Element) -> &'static [Meridian] {
    match element {
        Element::Wood => &[Meridian::Liver, Meridian::GallBladder],
        Element::Fire => &[
            Meridian::Heart,
            Meridian::SmallIntestine,
            Meridian::Pericardium,
            Meridian::TripleHeater,
        ],
        Element::Earth => &[Meridian::Spleen, Meridian::Stomach],
        Element::Metal => &[Meridian::Lung, Meridian::LargeIntestine],
        Element::Water => &[Meridian::Kidney, Meridian::Bladder],
    }
}

/// First meridian listed for an element.
pub const fn primary_meridian(element: Element) -> Meridian {
    element_meridians(element)[0]
}
