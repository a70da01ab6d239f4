//! EPC certificate analyser.
//!
//! Reads the fields a landlord copies off an existing certificate and
//! explains the score: how it compares with similar homes, which elements
//! drag it down, where the assessor probably guessed, and what to do next.

mod assumptions;
mod domain;
mod factors;
mod parser;
mod tables;

pub use domain::{
    AssessorAssumption, Comparison, ConstructionAge, EpcAnalyserInputs, EpcAnalysisResults,
    FactorAnalysis, FactorCategory, FloorInsulationNoted, GlazingNoted, HeatingControls,
    HotWaterSystem, ImpactLevel, ListedRecommendation, QuickWin, RecommendationAnalysis,
    RoofInsulationNoted, ScoreComparison, WallInsulationNoted, WallTypeNoted,
};
pub use parser::{parse_certificate_text, EpcParseResult, ParseConfidence, ParsedCertificate};
pub use tables::{
    recommendation_details, typical_score, RecommendationDetails, TypicalScore,
    DEFAULT_TYPICAL_SCORE,
};

use tracing::debug;

/// Points either side of the typical score still counted as average.
pub const AVERAGE_SCORE_TOLERANCE: u32 = 5;

pub fn score_comparison(inputs: &EpcAnalyserInputs) -> ScoreComparison {
    let typical = typical_score(inputs.property_type, inputs.construction_age);
    let user = inputs.current_score;
    let expected = typical.score;

    let (comparison, explanation) = if user > expected + AVERAGE_SCORE_TOLERANCE {
        (
            Comparison::Above,
            format!(
                "Your score of {user} is {} points above the typical score of {expected} for this type of property. This suggests your property has some beneficial features already.",
                user - expected
            ),
        )
    } else if user + AVERAGE_SCORE_TOLERANCE < expected {
        (
            Comparison::Below,
            format!(
                "Your score of {user} is {} points below the typical score of {expected} for this type of property. There may be specific issues dragging your score down.",
                expected - user
            ),
        )
    } else {
        (
            Comparison::Average,
            format!(
                "Your score of {user} is typical for this type of property (average: {expected}). Common improvements for this property type should help improve your rating."
            ),
        )
    };

    ScoreComparison {
        user_score: user,
        typical_score: expected,
        typical_rating: typical.rating,
        comparison,
        explanation,
    }
}

/// Listed recommendations with cost and guidance, most urgent first.
///
/// Lines we hold no details for are dropped. Equal priorities keep the
/// certificate's order.
pub fn recommendation_analysis(inputs: &EpcAnalyserInputs) -> Vec<RecommendationAnalysis> {
    let mut analysed: Vec<RecommendationAnalysis> = inputs
        .recommendations
        .iter()
        .filter_map(|&id| {
            recommendation_details(id).map(|details| RecommendationAnalysis {
                id,
                name: details.name,
                estimated_cost_low: details.cost_low,
                estimated_cost_high: details.cost_high,
                estimated_points: details.points,
                priority: details.priority,
                content_link: details.link,
                notes: details.notes,
            })
        })
        .collect();
    analysed.sort_by_key(|entry| entry.priority);
    analysed
}

pub fn assessor_assumptions(inputs: &EpcAnalyserInputs) -> Vec<AssessorAssumption> {
    assumptions::assessor_assumptions(inputs)
}

pub fn quick_wins(inputs: &EpcAnalyserInputs) -> Vec<QuickWin> {
    assumptions::quick_wins(inputs)
}

pub fn analyse_factors(inputs: &EpcAnalyserInputs) -> Vec<FactorAnalysis> {
    factors::analyse_factors(inputs)
}

pub fn analyse_epc(inputs: &EpcAnalyserInputs) -> EpcAnalysisResults {
    let results = EpcAnalysisResults {
        score_comparison: score_comparison(inputs),
        factors: analyse_factors(inputs),
        assessor_assumptions: assessor_assumptions(inputs),
        quick_wins: quick_wins(inputs),
        recommendation_analysis: recommendation_analysis(inputs),
        property_guide_url: inputs.property_type.guide_url(),
    };
    debug!(
        property_type = inputs.property_type.slug(),
        score = inputs.current_score,
        comparison = ?results.score_comparison.comparison,
        assumptions = results.assessor_assumptions.len(),
        "epc analysed"
    );
    results
}
