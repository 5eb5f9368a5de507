//! One-shot chart pipeline: pillars → strengths → balance → recommendations.

use sizhu_base::{
    FourPillars, HiddenStemTier, PillarPosition, analyze_balance, element_strengths,
    four_pillars, recommendations, ten_god,
};
use sizhu_time::BirthMoment;
use tracing::{debug, info};

use crate::chart_types::{ChartConfig, ChartReport, HiddenStemEntry, SeasonInfo, TenGodEntry};
use crate::error::ChartError;

/// Compute a full chart for a validated moment.
#[tracing::instrument(level = "info", skip_all, fields(moment = %moment))]
pub fn chart_for_moment(moment: &BirthMoment, config: &ChartConfig) -> ChartReport {
    let pillars = four_pillars(moment);
    let strengths = element_strengths(&pillars);
    let day_master = pillars.day_master();
    let balance = analyze_balance(&strengths, day_master.element());
    let recommendations = recommendations(&pillars, &strengths, &balance);
    info!(
        %pillars,
        status = balance.status.name(),
        n_recommendations = recommendations.len(),
        "chart computed"
    );

    let ten_gods = config.include_ten_gods.then(|| ten_gods_for(&pillars));
    let season = config.include_season.then(|| season_for(&pillars));
    let hidden_stems = config.include_hidden_stems.then(|| hidden_stems_for(&pillars));
    debug!(?config, "optional sections");

    ChartReport {
        moment: *moment,
        pillars,
        day_master,
        weakest: strengths.weakest(),
        strongest: strengths.strongest(),
        strengths,
        balance,
        recommendations,
        ten_gods,
        season,
        hidden_stems,
    }
}

/// Validate raw wall-clock values and compute a full chart.
pub fn chart_for_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    config: &ChartConfig,
) -> Result<ChartReport, ChartError> {
    let moment = BirthMoment::new(year, month, day, hour, minute)?;
    Ok(chart_for_moment(&moment, config))
}

/// Ten Gods of the year, month and hour stems, then of every hidden stem.
///
/// The day stem is the Day Master itself and is not listed as a visible
/// entry; hidden stems of the day branch are.
pub fn ten_gods_for(pillars: &FourPillars) -> Vec<TenGodEntry> {
    let dm = pillars.day_master();
    let visible = pillars
        .iter()
        .filter(|(pos, _)| *pos != PillarPosition::Day)
        .map(|(position, pillar)| TenGodEntry {
            position,
            stem: pillar.stem,
            ten_god: ten_god(dm, pillar.stem),
            hidden_tier: None,
        });
    let hidden = hidden_stems_for(pillars).into_iter().map(|h| TenGodEntry {
        position: h.position,
        stem: h.stem,
        ten_god: ten_god(dm, h.stem),
        hidden_tier: Some(h.tier),
    });
    visible.chain(hidden).collect()
}

/// Hidden stems of all four branches in chart order, primary first.
pub fn hidden_stems_for(pillars: &FourPillars) -> Vec<HiddenStemEntry> {
    pillars
        .iter()
        .flat_map(|(position, pillar)| {
            pillar
                .branch
                .hidden_stems()
                .iter()
                .enumerate()
                .filter_map(move |(i, &stem)| {
                    HiddenStemTier::from_position(i).map(|tier| HiddenStemEntry {
                        position,
                        branch: pillar.branch,
                        stem,
                        tier,
                    })
                })
        })
        .collect()
}

/// Season carried by the month branch.
pub fn season_for(pillars: &FourPillars) -> SeasonInfo {
    let season = pillars.month.branch.season();
    SeasonInfo {
        season,
        element: season.element(),
        month_branch: pillars.month.branch,
    }
}
