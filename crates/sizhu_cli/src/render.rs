//! Plain-text rendering of chart results.

use std::fmt::Write;

use sizhu_base::{ALL_ELEMENTS, Element, FourPillars, element_meridians};
use sizhu_chart::ChartReport;

pub fn pillars_text(pillars: &FourPillars) -> String {
    let mut out = String::new();
    for (position, pillar) in pillars.iter() {
        let _ = writeln!(
            out,
            "{:<6} {}  {} / {} {}",
            position.name(),
            pillar,
            pillar.stem.english(),
            pillar.branch.element(),
            pillar.branch.animal()
        );
    }
    let dm = pillars.day_master();
    let _ = writeln!(out, "Day Master: {dm} ({})", dm.english());
    out
}

pub fn strengths_text(report: &ChartReport) -> String {
    let mut out = String::new();
    let total = report.strengths.total();
    for (element, score) in report.strengths.ranked().iter().rev() {
        let _ = writeln!(
            out,
            "{:<6} {:>6.1}  {:>5.1}%",
            element.name(),
            score,
            100.0 * score / total
        );
    }
    let _ = writeln!(
        out,
        "Strongest: {}  Weakest: {}",
        report.strongest, report.weakest
    );
    let _ = writeln!(
        out,
        "Balance: {} ({:.1}%) - {}",
        report.balance.status.name(),
        100.0 * report.balance.ratio,
        report.balance.description
    );
    out
}

pub fn chart_text(report: &ChartReport) -> String {
    let mut out = format!("Birth moment: {}\n\n", report.moment);
    out.push_str(&pillars_text(&report.pillars));
    out.push('\n');
    out.push_str(&strengths_text(report));

    if let Some(season) = &report.season {
        let _ = writeln!(
            out,
            "Season: {} ({}, month branch {})",
            season.season.name(),
            season.element,
            season.month_branch
        );
    }

    if let Some(hidden) = &report.hidden_stems {
        out.push_str("\nHidden stems:\n");
        for h in hidden {
            let _ = writeln!(
                out,
                "  {:<6} {} {:?}: {}",
                h.position.name(),
                h.branch.chinese(),
                h.tier,
                h.stem
            );
        }
    }

    if let Some(gods) = &report.ten_gods {
        out.push_str("\nTen Gods:\n");
        for g in gods {
            let source = if g.hidden_tier.is_some() { "hidden" } else { "stem" };
            let _ = writeln!(
                out,
                "  {:<6} {:<6} {}: {} {}",
                g.position.name(),
                source,
                g.stem,
                g.ten_god.chinese(),
                g.ten_god.english()
            );
        }
    }

    out.push_str("\nRecommendations:\n");
    for (i, r) in report.recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} [{}] - {}",
            i + 1,
            r.point,
            r.acupoint,
            r.rationale
        );
    }
    out
}

pub fn relations_text(element: Element) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", element, element.chinese());
    let _ = writeln!(out, "  produces:      {}", element.produces());
    let _ = writeln!(out, "  controls:      {}", element.controls());
    let _ = writeln!(out, "  produced by:   {}", element.produced_by());
    let _ = writeln!(out, "  controlled by: {}", element.controlled_by());
    let meridians: Vec<_> = element_meridians(element)
        .iter()
        .map(|m| m.code())
        .collect();
    let _ = writeln!(out, "  meridians:     {}", meridians.join(", "));
    let _ = writeln!(
        out,
        "  relation of each element: {}",
        ALL_ELEMENTS
            .iter()
            .map(|&e| format!("{e}={:?}", element.relation_to(e)))
            .collect::<Vec<_>>()
            .join(" ")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_chart::{ChartConfig, chart_for_datetime};

    #[test]
    fn chart_text_sections() {
        let report = chart_for_datetime(1984, 2, 2, 10, 30, &ChartConfig::default()).unwrap();
        let text = chart_text(&report);
        assert!(text.starts_with("Birth moment: 1984-02-02T10:30"));
        assert!(text.contains("Day Master: 丙 Bing (Fire Yang)"));
        assert!(text.contains("Balance: Balanced"));
        assert!(text.contains("Season: Spring"));
        assert!(text.contains("Ten Gods:"));
        assert!(text.contains("1. SI Source Point [SI4]"));
        assert!(text.contains("2. SP Opening Point [SP3]"));
    }

    #[test]
    fn minimal_chart_text_skips_sections() {
        let report = chart_for_datetime(1984, 2, 2, 10, 30, &ChartConfig::minimal()).unwrap();
        let text = chart_text(&report);
        assert!(!text.contains("Ten Gods:"));
        assert!(!text.contains("Hidden stems:"));
    }

    #[test]
    fn strengths_strongest_first() {
        let report = chart_for_datetime(1984, 2, 2, 10, 30, &ChartConfig::minimal()).unwrap();
        let text = strengths_text(&report);
        assert!(text.starts_with("Wood"));
    }

    #[test]
    fn relations_of_wood() {
        let text = relations_text(Element::Wood);
        assert!(text.contains("produces:      Fire"));
        assert!(text.contains("controlled by: Metal"));
        assert!(text.contains("meridians:     LIV, GB"));
    }
}
