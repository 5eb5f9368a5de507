//! Golden charts: pillars, strengths, balance and recommendations.

use sizhu_base::{
    BalanceStatus, Element, Meridian, RecommendationKind, analyze_balance, element_strengths,
    four_pillars, recommendations,
};
use sizhu_time::BirthMoment;

fn moment(y: i32, m: u32, d: u32, h: u32) -> BirthMoment {
    BirthMoment::new(y, m, d, h, 0).unwrap()
}

fn names(m: &BirthMoment) -> [String; 4] {
    let p = four_pillars(m);
    [p.year.chinese(), p.month.chinese(), p.day.chinese(), p.hour.chinese()]
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

#[test]
fn pillars_1984_02_02() {
    assert_eq!(names(&moment(1984, 2, 2, 10)), ["甲子", "丁卯", "丙寅", "癸巳"]);
}

#[test]
fn pillars_1949_10_01() {
    assert_eq!(names(&moment(1949, 10, 1, 15)), ["己丑", "乙亥", "甲子", "壬申"]);
}

#[test]
fn pillars_2000_01_01_midnight() {
    assert_eq!(names(&moment(2000, 1, 1, 0)), ["庚辰", "戊寅", "戊午", "壬子"]);
}

#[test]
fn pillars_1900_01_01() {
    assert_eq!(names(&moment(1900, 1, 1, 12)), ["庚子", "戊寅", "甲戌", "庚午"]);
}

#[test]
fn pillars_before_day_epoch() {
    assert_eq!(names(&moment(1776, 7, 4, 14)), ["丙申", "丙申", "己丑", "辛未"]);
}

#[test]
fn minute_does_not_change_pillars() {
    let a = four_pillars(&BirthMoment::new(1990, 7, 15, 8, 0).unwrap());
    let b = four_pillars(&BirthMoment::new(1990, 7, 15, 8, 59).unwrap());
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn balanced_chart_1984() {
    let pillars = four_pillars(&moment(1984, 2, 2, 10));
    let profile = element_strengths(&pillars);
    assert_close(profile.get(Element::Wood), 52.5);
    assert_close(profile.get(Element::Fire), 36.5);
    assert_close(profile.get(Element::Earth), 1.5);
    assert_close(profile.get(Element::Metal), 1.5);
    assert_close(profile.get(Element::Water), 22.0);
    assert_eq!(profile.weakest(), Element::Earth);
    assert_eq!(profile.strongest(), Element::Wood);

    let balance = analyze_balance(&profile, pillars.day_master().element());
    assert_eq!(balance.status, BalanceStatus::Balanced);
    assert_close(balance.ratio, 36.5 / 114.0);

    let recs = recommendations(&pillars, &profile, &balance);
    assert_eq!(recs.len(), 2);
    let first = &recs.as_slice()[0];
    assert_eq!(first.point, "SI Source Point");
    assert_eq!(first.acupoint, "SI4");
    assert_eq!(first.rationale, "Support Day Master (Bing - Fire Yang)");
    let last = &recs.as_slice()[1];
    assert_eq!(last.point, "SP Opening Point");
    assert_eq!(last.acupoint, "SP3");
    assert_eq!(
        last.rationale,
        "Zi Wu Liu Zhu - optimal meridian for current hour (09:00-11:00)"
    );
}

#[test]
fn strong_chart_2000() {
    let pillars = four_pillars(&moment(2000, 1, 1, 0));
    let profile = element_strengths(&pillars);
    assert_close(profile.total(), 121.0);
    assert_close(profile.get(Element::Earth), 46.5);
    assert_eq!(profile.weakest(), Element::Metal);

    let balance = analyze_balance(&profile, pillars.day_master().element());
    assert_eq!(balance.status, BalanceStatus::Strong);

    let recs = recommendations(&pillars, &profile, &balance);
    let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        [
            RecommendationKind::SupportDayMaster,
            RecommendationKind::Sedation,
            RecommendationKind::HourOpening
        ]
    );
    assert_eq!(recs.as_slice()[1].meridian, Meridian::Lung);
    assert_eq!(recs.as_slice()[1].acupoint, "LU5");
    assert_eq!(recs.as_slice()[1].rationale, "Drain excess via Metal element");
    assert_eq!(recs.as_slice()[2].point, "GB Opening Point");
}

#[test]
fn weak_chart_1990() {
    let pillars = four_pillars(&moment(1990, 1, 8, 12));
    assert_eq!(pillars.to_string(), "庚午 戊寅 癸酉 戊午");
    let profile = element_strengths(&pillars);
    assert_close(profile.get(Element::Water), 10.0);
    assert_close(profile.total(), 118.5);

    let balance = analyze_balance(&profile, pillars.day_master().element());
    assert_eq!(balance.status, BalanceStatus::Weak);
    assert_eq!(
        balance.description,
        "Day Master is weak - may need to support or strengthen"
    );

    let recs = recommendations(&pillars, &profile, &balance);
    assert_eq!(recs.len(), 3);
    assert_eq!(recs.as_slice()[0].point, "KI Source Point");
    assert_eq!(recs.as_slice()[0].rationale, "Support Day Master (Gui - Water Yin)");
    assert_eq!(recs.as_slice()[1].point, "LU Tonification Point");
    assert_eq!(recs.as_slice()[1].acupoint, "LU9");
    assert_eq!(
        recs.as_slice()[1].rationale,
        "Strengthen weak Day Master via Metal element"
    );
    assert_eq!(recs.as_slice()[2].point, "HT Opening Point");
    assert_eq!(recs.as_slice()[2].acupoint, "HT8");
}
