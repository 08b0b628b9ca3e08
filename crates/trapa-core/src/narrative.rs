//! Educational narrative selection.
//!
//! The narrative is an ordered list of optional fragments, each selected by
//! its own predicate:
//!
//! 1. exactly one coverage band paragraph (low, moderate, or high);
//! 2. the fall die-off clause;
//! 3. the low-oxygen warning;
//! 4. the stratification warning.
//!
//! Clauses are independent, so any combination of 2-4 may follow the
//! coverage paragraph, always in this order.
//!
//! An interpretation section follows the conditions: the trophic state
//! implied by the nutrient level, the mixing regime implied by the water
//! movement level, and the phase of the current season. It is always
//! present and always in that order.

use trapa_model::{DIE_OFF_COVERAGE_PERCENT, HYPOXIA_THRESHOLD_MG_PER_L};
use trapa_types::{
    ControlParameters, CoverageBand, IndicatorVector, MixingRegime, Narrative, NarrativeClause,
    NarrativeFragment, Season, TrophicState,
};

/// Coverage (%) above which the moderate paragraph is used.
pub const MODERATE_COVERAGE_ABOVE: f64 = 30.0;

/// Coverage (%) above which the high coverage paragraph is used.
pub const HIGH_COVERAGE_ABOVE: f64 = 70.0;

/// Stratification risk (%) above which the warning is appended.
pub const STRATIFICATION_WARNING_ABOVE: f64 = 60.0;

/// Highest nutrient level still read as oligotrophic.
pub const OLIGOTROPHIC_UP_TO: u8 = 3;

/// Highest nutrient level still read as mesotrophic.
pub const MESOTROPHIC_UP_TO: u8 = 6;

/// Highest water movement level still read as calm.
pub const CALM_UP_TO: u8 = 3;

/// Highest water movement level still read as moderate.
pub const MODERATE_MIXING_UP_TO: u8 = 6;

/// Coverage band for a coverage percentage.
pub const fn coverage_band(coverage_percent: f64) -> CoverageBand {
    if coverage_percent > HIGH_COVERAGE_ABOVE {
        CoverageBand::High
    } else if coverage_percent > MODERATE_COVERAGE_ABOVE {
        CoverageBand::Moderate
    } else {
        CoverageBand::Low
    }
}

/// Trophic state for a nutrient level.
pub const fn trophic_state(nutrient_level: u8) -> TrophicState {
    if nutrient_level <= OLIGOTROPHIC_UP_TO {
        TrophicState::Oligotrophic
    } else if nutrient_level <= MESOTROPHIC_UP_TO {
        TrophicState::Mesotrophic
    } else {
        TrophicState::Eutrophic
    }
}

/// Mixing regime for a water movement level.
pub const fn mixing_regime(water_movement: u8) -> MixingRegime {
    if water_movement <= CALM_UP_TO {
        MixingRegime::Calm
    } else if water_movement <= MODERATE_MIXING_UP_TO {
        MixingRegime::Moderate
    } else {
        MixingRegime::Rapid
    }
}

/// Compose the narrative for the current parameters and indicators.
pub fn compose(params: &ControlParameters, indicators: &IndicatorVector) -> Narrative {
    let coverage = params.coverage_percent;
    let die_off = params.season == Season::Fall && coverage > DIE_OFF_COVERAGE_PERCENT;
    let hypoxic = indicators.dissolved_oxygen_mg_per_l < HYPOXIA_THRESHOLD_MG_PER_L;
    let stratified = indicators.stratification_risk_percent > STRATIFICATION_WARNING_ABOVE;

    let fragments = [
        Some(coverage_fragment(coverage, indicators)),
        die_off.then(|| die_off_fragment(indicators)),
        hypoxic.then(|| hypoxia_fragment(indicators)),
        stratified.then(stratification_fragment),
    ];

    Narrative {
        fragments: fragments.into_iter().flatten().collect(),
        interpretation: vec![
            trophic_fragment(params.nutrient_level),
            mixing_fragment(params.water_movement),
            seasonal_phase_fragment(params.season),
        ],
    }
}

fn coverage_fragment(coverage: f64, v: &IndicatorVector) -> NarrativeFragment {
    let band = coverage_band(coverage);
    let (heading, body) = match band {
        CoverageBand::High => (
            format!("High Water Chestnut Coverage ({coverage}%)"),
            format!(
                "The dense floating mat severely limits light penetration and gas exchange. \
                 Dissolved oxygen has dropped to {:.1} mg/L, creating stressful conditions \
                 for many aquatic organisms.",
                v.dissolved_oxygen_mg_per_l
            ),
        ),
        CoverageBand::Moderate => (
            format!("Moderate Water Chestnut Coverage ({coverage}%)"),
            format!(
                "The floating vegetation is beginning to impact water quality. Light \
                 penetration is reduced to {:.0}%, and dissolved oxygen levels are declining.",
                v.water_clarity_percent
            ),
        ),
        CoverageBand::Low => (
            format!("Low Water Chestnut Coverage ({coverage}%)"),
            format!(
                "With minimal surface coverage, the aquatic system maintains good water \
                 clarity ({:.0}%) and healthy dissolved oxygen levels ({:.1} mg/L).",
                v.water_clarity_percent, v.dissolved_oxygen_mg_per_l
            ),
        ),
    };
    NarrativeFragment {
        clause: NarrativeClause::Coverage(band),
        heading: Some(heading),
        body,
    }
}

fn die_off_fragment(v: &IndicatorVector) -> NarrativeFragment {
    NarrativeFragment {
        clause: NarrativeClause::FallDieOff,
        heading: Some(String::from("Fall Die-off")),
        body: format!(
            "As water chestnut plants decompose, nutrient availability has increased to \
             {:.1}, and decomposition rates are elevated at {:.1}.",
            v.nutrient_availability, v.decomposition_rate
        ),
    }
}

fn hypoxia_fragment(v: &IndicatorVector) -> NarrativeFragment {
    NarrativeFragment {
        clause: NarrativeClause::Hypoxia,
        heading: Some(String::from("Low Oxygen Warning")),
        body: format!(
            "Dissolved oxygen levels are critically low. Aerobic microbes are declining \
             while anaerobic microbes are increasing, reducing microbial diversity to {:.0}%.",
            v.microbial_diversity_percent
        ),
    }
}

fn stratification_fragment() -> NarrativeFragment {
    NarrativeFragment {
        clause: NarrativeClause::Stratification,
        heading: Some(String::from("High Stratification Risk")),
        body: String::from(
            "The water column is likely stratified, preventing mixing and oxygen exchange \
             between layers.",
        ),
    }
}

fn trophic_fragment(level: u8) -> NarrativeFragment {
    let state = trophic_state(level);
    let reading = match state {
        TrophicState::Oligotrophic => "oligotrophic conditions with limited productivity",
        TrophicState::Mesotrophic => "mesotrophic conditions with moderate productivity",
        TrophicState::Eutrophic => "eutrophic conditions with high productivity potential",
    };
    NarrativeFragment {
        clause: NarrativeClause::TrophicState(state),
        heading: Some(format!("Nutrient Level: {level}/10")),
        body: format!(
            "Nutrient concentration drives primary productivity and microbial activity. \
             A level of {level}/10 indicates {reading}, significantly influencing algal \
             growth and decomposition rates."
        ),
    }
}

fn mixing_fragment(level: u8) -> NarrativeFragment {
    let regime = mixing_regime(level);
    let reading = match regime {
        MixingRegime::Calm => "calm conditions with limited mixing and potential stratification",
        MixingRegime::Moderate => "moderate movement providing adequate oxygen exchange",
        MixingRegime::Rapid => "rapid movement enhancing mixing and oxygen distribution",
    };
    NarrativeFragment {
        clause: NarrativeClause::MixingRegime(regime),
        heading: Some(format!("Water Movement: {level}/10")),
        body: format!(
            "Water movement controls oxygen exchange and mixing dynamics. The current \
             {level}/10 level represents {reading}, directly affecting sediment oxygen \
             levels and nutrient transport."
        ),
    }
}

fn seasonal_phase_fragment(season: Season) -> NarrativeFragment {
    let (phase, description) = match season {
        Season::Spring => (
            "increasing productivity and growth initiation",
            "Spring awakening with early water chestnut growth.",
        ),
        Season::Summer => (
            "peak photosynthesis and high metabolic demand",
            "Summer peak growth with extensive water chestnut mats.",
        ),
        Season::Fall => (
            "senescence and decomposition dominance",
            "Fall senescence with seed production and decomposition.",
        ),
        Season::Winter => (
            "dormancy and reduced activity",
            "Winter dormancy with reduced metabolic activity.",
        ),
    };
    NarrativeFragment {
        clause: NarrativeClause::SeasonalPhase(season),
        heading: Some(format!("Season: {season}")),
        body: format!(
            "Seasonal cycles drive biological activity and ecosystem processes. {season} \
             conditions dictate metabolic rates, growth patterns, and community structure, \
             with {phase} characterizing the current ecosystem state. {description}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrate(params: ControlParameters) -> Narrative {
        compose(&params, &trapa_model::compute(&params))
    }

    fn with(coverage_percent: f64, water_movement: u8, season: Season) -> ControlParameters {
        ControlParameters {
            coverage_percent,
            water_movement,
            season,
            ..ControlParameters::default()
        }
    }

    #[test]
    fn coverage_bands_split_at_thirty_and_seventy() {
        assert_eq!(coverage_band(0.0), CoverageBand::Low);
        assert_eq!(coverage_band(30.0), CoverageBand::Low);
        assert_eq!(coverage_band(30.5), CoverageBand::Moderate);
        assert_eq!(coverage_band(70.0), CoverageBand::Moderate);
        assert_eq!(coverage_band(70.1), CoverageBand::High);
        assert_eq!(coverage_band(100.0), CoverageBand::High);
    }

    #[test]
    fn default_view_has_only_the_low_coverage_paragraph() {
        let narrative = narrate(ControlParameters::default());
        assert_eq!(
            narrative.clauses(),
            vec![NarrativeClause::Coverage(CoverageBand::Low)]
        );
        let text = narrative.to_string();
        assert!(text.contains("Low Water Chestnut Coverage (0%)"), "{text}");
        assert!(text.contains("good water clarity (80%)"), "{text}");
        assert!(text.contains("(8.5 mg/L)"), "{text}");
    }

    #[test]
    fn moderate_paragraph_reports_clarity() {
        let narrative = narrate(with(50.0, 5, Season::Summer));
        assert_eq!(
            narrative.clauses(),
            vec![NarrativeClause::Coverage(CoverageBand::Moderate)]
        );
        // 80 - 30 = 50
        assert!(narrative.to_string().contains("reduced to 50%"));
    }

    #[test]
    fn hypoxic_summer_mat_adds_low_oxygen_warning() {
        let narrative = narrate(with(100.0, 1, Season::Summer));
        assert_eq!(
            narrative.clauses(),
            vec![
                NarrativeClause::Coverage(CoverageBand::High),
                NarrativeClause::Hypoxia,
            ]
        );
        let text = narrative.to_string();
        assert!(text.contains("dropped to 2.7 mg/L"), "{text}");
        assert!(text.contains("Low Oxygen Warning: Dissolved oxygen"), "{text}");
    }

    #[test]
    fn fall_die_off_clause_appears_exactly_once() {
        let narrative = narrate(with(80.0, 5, Season::Fall));
        let die_offs = narrative
            .clauses()
            .into_iter()
            .filter(|c| *c == NarrativeClause::FallDieOff)
            .count();
        assert_eq!(die_offs, 1);
        assert_eq!(
            narrative.clauses().first().copied(),
            Some(NarrativeClause::Coverage(CoverageBand::High))
        );
        assert!(narrative.to_string().contains("elevated at 8.5"));
    }

    #[test]
    fn no_die_off_clause_outside_fall() {
        let narrative = narrate(with(80.0, 5, Season::Winter));
        assert!(!narrative.contains(NarrativeClause::FallDieOff));
    }

    #[test]
    fn all_clauses_co_occur_in_order() {
        let params = ControlParameters {
            water_depth_m: 5.0,
            coverage_percent: 100.0,
            nutrient_level: 5,
            water_movement: 1,
            season: Season::Fall,
        };
        let indicators = trapa_model::compute(&params);
        assert!(indicators.dissolved_oxygen_mg_per_l < 5.0);
        assert!(indicators.stratification_risk_percent > 60.0);

        let narrative = compose(&params, &indicators);
        assert_eq!(
            narrative.clauses(),
            vec![
                NarrativeClause::Coverage(CoverageBand::High),
                NarrativeClause::FallDieOff,
                NarrativeClause::Hypoxia,
                NarrativeClause::Stratification,
            ]
        );
    }

    #[test]
    fn trophic_state_splits_at_three_and_six() {
        assert_eq!(trophic_state(1), TrophicState::Oligotrophic);
        assert_eq!(trophic_state(3), TrophicState::Oligotrophic);
        assert_eq!(trophic_state(4), TrophicState::Mesotrophic);
        assert_eq!(trophic_state(6), TrophicState::Mesotrophic);
        assert_eq!(trophic_state(7), TrophicState::Eutrophic);
        assert_eq!(trophic_state(10), TrophicState::Eutrophic);
    }

    #[test]
    fn mixing_regime_splits_at_three_and_six() {
        assert_eq!(mixing_regime(1), MixingRegime::Calm);
        assert_eq!(mixing_regime(3), MixingRegime::Calm);
        assert_eq!(mixing_regime(4), MixingRegime::Moderate);
        assert_eq!(mixing_regime(6), MixingRegime::Moderate);
        assert_eq!(mixing_regime(7), MixingRegime::Rapid);
        assert_eq!(mixing_regime(10), MixingRegime::Rapid);
    }

    #[test]
    fn interpretation_follows_conditions_in_fixed_order() {
        let narrative = narrate(ControlParameters::default());
        assert_eq!(
            narrative.interpretation_clauses(),
            vec![
                NarrativeClause::TrophicState(TrophicState::Mesotrophic),
                NarrativeClause::MixingRegime(MixingRegime::Moderate),
                NarrativeClause::SeasonalPhase(Season::Summer),
            ]
        );
        let text = narrative.to_string();
        let coverage = text.find("Low Water Chestnut Coverage");
        let nutrients = text.find("Nutrient Level: 5/10");
        let movement = text.find("Water Movement: 5/10");
        let season = text.find("Season: summer");
        assert!(coverage.is_some() && nutrients.is_some(), "{text}");
        assert!(coverage < nutrients && nutrients < movement && movement < season, "{text}");
        assert!(text.contains("mesotrophic conditions with moderate productivity"));
        assert!(text.contains("peak photosynthesis and high metabolic demand"));
    }

    #[test]
    fn interpretation_tracks_extreme_controls() {
        let params = ControlParameters {
            nutrient_level: 9,
            water_movement: 2,
            season: Season::Winter,
            ..ControlParameters::default()
        };
        let narrative = narrate(params);
        assert_eq!(
            narrative.interpretation_clauses(),
            vec![
                NarrativeClause::TrophicState(TrophicState::Eutrophic),
                NarrativeClause::MixingRegime(MixingRegime::Calm),
                NarrativeClause::SeasonalPhase(Season::Winter),
            ]
        );
        let text = narrative.to_string();
        assert!(text.contains("A level of 9/10 indicates eutrophic"), "{text}");
        assert!(text.contains("calm conditions with limited mixing"), "{text}");
        assert!(text.contains("Winter dormancy with reduced metabolic activity."), "{text}");
    }

    #[test]
    fn interpretation_does_not_change_condition_clauses() {
        let narrative = narrate(with(100.0, 1, Season::Summer));
        assert_eq!(narrative.clauses().len(), 2);
        assert_eq!(narrative.interpretation.len(), 3);
    }

    #[test]
    fn stratification_warning_without_other_clauses() {
        // Light coverage never reaches the threshold through the model.
        let params = ControlParameters::default();
        let mut indicators = trapa_model::compute(&params);
        indicators.stratification_risk_percent = 61.0;
        let narrative = compose(&params, &indicators);
        assert_eq!(
            narrative.clauses(),
            vec![
                NarrativeClause::Coverage(CoverageBand::Low),
                NarrativeClause::Stratification,
            ]
        );
    }
}
