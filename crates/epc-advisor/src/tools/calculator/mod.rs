//! EPC upgrade cost calculator.
//!
//! Prices the catalog measures that suit a property, ranks them by EPC
//! points per pound and estimates where the rating lands afterwards.

mod applicability;
mod catalog;
mod engine;
mod factors;

pub use applicability::{
    applicable_improvements, excluded_improvements, is_applicable, ExcludedImprovement,
};
pub use catalog::{
    improvement_details, DisruptionLevel, Exclusions, ImprovementCategory, ImprovementData,
    Prerequisites, IMPROVEMENTS,
};
pub use engine::{
    adjusted_cost, calculate_upgrade_costs, check_cost_cap_exemption, estimate_final_rating,
    filter_by_category, generate_recommendations, high_impact, improvements_to_reach_target,
    property_guide_url, quick_wins, top_recommendations, total_costs, CalculatorResults,
    CostCapCheck, CostRange, ImprovementRecommendation, TargetPlan,
};
pub use factors::{
    property_type_factor, size_factor, COST_CAP_THRESHOLD, HIGH_IMPACT_THRESHOLD,
    QUICK_WIN_THRESHOLD, TARGET_C_SCORE,
};

use crate::property::{
    deserialize_reported_rating, lenient, EpcRating, GlazingType, HeatingSystem, LoftInsulation,
    PropertyType, Region, WallConstruction,
};
use serde::{Deserialize, Serialize};

/// Answers collected by the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInputs {
    #[serde(deserialize_with = "deserialize_reported_rating")]
    pub current_rating: Option<EpcRating>,
    #[serde(deserialize_with = "lenient")]
    pub property_type: PropertyType,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "lenient")]
    pub wall_construction: WallConstruction,
    #[serde(deserialize_with = "lenient")]
    pub heating_system: HeatingSystem,
    #[serde(deserialize_with = "lenient")]
    pub loft_insulation: LoftInsulation,
    #[serde(deserialize_with = "lenient")]
    pub glazing_type: GlazingType,
    #[serde(deserialize_with = "lenient")]
    pub region: Region,
}
