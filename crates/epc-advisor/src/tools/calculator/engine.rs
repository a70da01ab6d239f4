use super::applicability::applicable_improvements;
use super::catalog::{ImprovementCategory, ImprovementData};
use super::factors::{
    property_type_factor, size_factor, COST_CAP_THRESHOLD, HIGH_IMPACT_THRESHOLD,
    QUICK_WIN_THRESHOLD, TARGET_C_SCORE,
};
use super::CalculatorInputs;
use crate::property::{starting_score, EpcRating, PropertyType};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Low, midpoint and high estimate in whole pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostRange {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
}

impl CostRange {
    fn from_bounds(low: u32, high: u32) -> Self {
        Self {
            low,
            mid: ((f64::from(low) + f64::from(high)) / 2.0).round() as u32,
            high,
        }
    }
}

/// A priced, ranked measure for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRecommendation {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ImprovementCategory,
    pub estimated_cost_low: u32,
    pub estimated_cost_high: u32,
    #[serde(rename = "estimatedEPCPoints")]
    pub estimated_epc_points: u32,
    pub cost_per_point: u32,
    pub priority: usize,
    pub applicable_to: Vec<PropertyType>,
}

impl ImprovementRecommendation {
    pub fn cost(&self) -> CostRange {
        CostRange::from_bounds(self.estimated_cost_low, self.estimated_cost_high)
    }

    /// Unrounded midpoint, used where sums must not accumulate rounding.
    fn exact_mid(&self) -> f64 {
        (f64::from(self.estimated_cost_low) + f64::from(self.estimated_cost_high)) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCapCheck {
    pub likely: bool,
    #[serde(rename = "totalCostToC")]
    pub total_cost_to_c: u32,
    pub would_reach_c: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPlan {
    pub target: EpcRating,
    pub improvements: Vec<ImprovementRecommendation>,
    pub total_cost: CostRange,
    pub can_reach_target: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResults {
    pub total_cost_low: u32,
    pub total_cost_mid: u32,
    pub total_cost_high: u32,
    pub recommendations: Vec<ImprovementRecommendation>,
    pub estimated_final_rating: EpcRating,
    pub cost_cap_exemption_likely: bool,
    pub cost_cap: CostCapCheck,
    pub property_type_guide_url: String,
}

/// Scale a measure's national cost to this property.
///
/// Size only scales insulation and glazing; heating, controls and renewables
/// are priced per installation.
pub fn adjusted_cost(improvement: &ImprovementData, inputs: &CalculatorInputs) -> CostRange {
    let mut multiplier =
        inputs.region.cost_multiplier() * property_type_factor(inputs.property_type);
    if improvement.category.scales_with_size() {
        multiplier *= size_factor(inputs.bedrooms);
    }

    let low = (f64::from(improvement.base_cost_low) * multiplier).round() as u32;
    let high = (f64::from(improvement.base_cost_high) * multiplier).round() as u32;
    CostRange::from_bounds(low, high)
}

fn cost_per_point(mid: u32, points: u32) -> u32 {
    if points == 0 {
        return u32::MAX;
    }
    (f64::from(mid) / f64::from(points)).round() as u32
}

/// Higher points per pound first; ties go to the cheaper measure.
fn by_cost_effectiveness(a: &ImprovementRecommendation, b: &ImprovementRecommendation) -> Ordering {
    let (a_mid, b_mid) = (u64::from(a.cost().mid), u64::from(b.cost().mid));
    let a_ratio = u64::from(a.estimated_epc_points) * b_mid;
    let b_ratio = u64::from(b.estimated_epc_points) * a_mid;
    b_ratio.cmp(&a_ratio).then(a_mid.cmp(&b_mid))
}

fn ranked(mut recommendations: Vec<ImprovementRecommendation>) -> Vec<ImprovementRecommendation> {
    recommendations.sort_by(by_cost_effectiveness);
    for (index, recommendation) in recommendations.iter_mut().enumerate() {
        recommendation.priority = index + 1;
    }
    recommendations
}

/// Price every applicable measure and rank by cost-effectiveness.
pub fn generate_recommendations(inputs: &CalculatorInputs) -> Vec<ImprovementRecommendation> {
    let priced = applicable_improvements(inputs)
        .into_iter()
        .map(|improvement| {
            let cost = adjusted_cost(improvement, inputs);
            ImprovementRecommendation {
                id: improvement.id,
                name: improvement.name,
                description: improvement.description,
                category: improvement.category,
                estimated_cost_low: cost.low,
                estimated_cost_high: cost.high,
                estimated_epc_points: improvement.typical_epc_points,
                cost_per_point: cost_per_point(cost.mid, improvement.typical_epc_points),
                priority: 0,
                applicable_to: improvement
                    .applicable_property_types
                    .map(<[PropertyType]>::to_vec)
                    .unwrap_or_default(),
            }
        })
        .collect();

    ranked(priced)
}

pub fn total_costs(recommendations: &[ImprovementRecommendation]) -> CostRange {
    let low = recommendations.iter().map(|rec| rec.estimated_cost_low).sum();
    let high = recommendations.iter().map(|rec| rec.estimated_cost_high).sum();
    CostRange::from_bounds(low, high)
}

fn total_points(recommendations: &[ImprovementRecommendation]) -> u32 {
    recommendations.iter().map(|rec| rec.estimated_epc_points).sum()
}

/// Points add up without any cap or diminishing returns.
pub fn estimate_final_rating(
    current: Option<EpcRating>,
    recommendations: &[ImprovementRecommendation],
) -> EpcRating {
    EpcRating::from_score(starting_score(current) + total_points(recommendations))
}

/// Walk the ranked measures until C is reached and test the spend against the cap.
pub fn check_cost_cap_exemption(
    inputs: &CalculatorInputs,
    recommendations: &[ImprovementRecommendation],
) -> CostCapCheck {
    let start = starting_score(inputs.current_rating);
    if start >= TARGET_C_SCORE {
        return CostCapCheck {
            likely: false,
            total_cost_to_c: 0,
            would_reach_c: true,
        };
    }

    let mut ordered: Vec<&ImprovementRecommendation> = recommendations.iter().collect();
    ordered.sort_by(|a, b| by_cost_effectiveness(a, b));

    let mut score = start;
    let mut spend = 0.0;
    for recommendation in ordered {
        if score >= TARGET_C_SCORE {
            break;
        }
        spend += recommendation.exact_mid();
        score += recommendation.estimated_epc_points;
    }

    let would_reach_c = score >= TARGET_C_SCORE;
    CostCapCheck {
        likely: spend > f64::from(COST_CAP_THRESHOLD) && !would_reach_c,
        total_cost_to_c: spend.round() as u32,
        would_reach_c,
    }
}

/// Cheapest-per-point measures needed to lift the property into `target`.
pub fn improvements_to_reach_target(inputs: &CalculatorInputs, target: EpcRating) -> TargetPlan {
    let target_score = u32::from(target.band().min);
    let mut score = starting_score(inputs.current_rating);
    if score >= target_score {
        return TargetPlan {
            target,
            improvements: Vec::new(),
            total_cost: CostRange::default(),
            can_reach_target: true,
        };
    }

    let mut selected = Vec::new();
    for recommendation in generate_recommendations(inputs) {
        if score >= target_score {
            break;
        }
        score += recommendation.estimated_epc_points;
        selected.push(recommendation);
    }

    TargetPlan {
        target,
        total_cost: total_costs(&selected),
        improvements: selected,
        can_reach_target: score >= target_score,
    }
}

pub fn top_recommendations(
    recommendations: &[ImprovementRecommendation],
    count: usize,
) -> Vec<ImprovementRecommendation> {
    recommendations.iter().take(count).cloned().collect()
}

/// Measures with a midpoint cost of £500 or less.
pub fn quick_wins(recommendations: &[ImprovementRecommendation]) -> Vec<ImprovementRecommendation> {
    recommendations
        .iter()
        .filter(|rec| rec.exact_mid() <= f64::from(QUICK_WIN_THRESHOLD))
        .cloned()
        .collect()
}

/// Measures worth six or more points, biggest first.
pub fn high_impact(recommendations: &[ImprovementRecommendation]) -> Vec<ImprovementRecommendation> {
    let mut selected: Vec<_> = recommendations
        .iter()
        .filter(|rec| rec.estimated_epc_points >= HIGH_IMPACT_THRESHOLD)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.estimated_epc_points.cmp(&a.estimated_epc_points));
    selected
}

pub fn filter_by_category(
    recommendations: &[ImprovementRecommendation],
    category: ImprovementCategory,
) -> Vec<ImprovementRecommendation> {
    recommendations
        .iter()
        .filter(|rec| rec.category == category)
        .cloned()
        .collect()
}

pub fn property_guide_url(property_type: PropertyType) -> String {
    property_type.guide_url()
}

pub fn calculate_upgrade_costs(inputs: &CalculatorInputs) -> CalculatorResults {
    let recommendations = generate_recommendations(inputs);
    let totals = total_costs(&recommendations);
    let estimated_final_rating = estimate_final_rating(inputs.current_rating, &recommendations);
    let cost_cap = check_cost_cap_exemption(inputs, &recommendations);

    debug!(
        property_type = inputs.property_type.slug(),
        measures = recommendations.len(),
        total_mid = totals.mid,
        final_rating = %estimated_final_rating,
        "upgrade costs calculated"
    );

    CalculatorResults {
        total_cost_low: totals.low,
        total_cost_mid: totals.mid,
        total_cost_high: totals.high,
        recommendations,
        estimated_final_rating,
        cost_cap_exemption_likely: cost_cap.likely,
        cost_cap,
        property_type_guide_url: property_guide_url(inputs.property_type),
    }
}
