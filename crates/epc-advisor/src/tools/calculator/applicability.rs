use super::catalog::{ImprovementData, IMPROVEMENTS};
use super::CalculatorInputs;
use crate::property::{HeatingSystem, WallConstruction};
use serde::Serialize;

/// A catalog measure ruled out for this property, with the first failing rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedImprovement {
    pub improvement: &'static ImprovementData,
    pub reason: String,
}

fn spaced(slug: &str) -> String {
    slug.replace('-', " ")
}

fn joined<T: Copy>(values: &[T], slug: fn(T) -> &'static str) -> String {
    values.iter().map(|value| slug(*value)).collect::<Vec<_>>().join(" or ")
}

/// First rule that rules the measure out, checked in a fixed order.
pub(crate) fn exclusion_reason(
    improvement: &ImprovementData,
    inputs: &CalculatorInputs,
) -> Option<String> {
    let prerequisites = &improvement.prerequisites;
    let exclusions = &improvement.exclusions;

    if exclusions.property_types.contains(&inputs.property_type) {
        return Some(format!(
            "Not suitable for {} properties",
            spaced(inputs.property_type.slug())
        ));
    }

    if let Some(walls) = prerequisites.wall_construction {
        if !walls.contains(&inputs.wall_construction) {
            return Some(format!(
                "Requires {} wall construction",
                joined(walls, WallConstruction::slug)
            ));
        }
    }

    if exclusions.wall_construction.contains(&inputs.wall_construction) {
        return Some(format!(
            "Not suitable for {} wall construction",
            inputs.wall_construction.slug()
        ));
    }

    if let Some(systems) = prerequisites.heating_system {
        if !systems.contains(&inputs.heating_system) {
            return Some(format!(
                "Requires {} heating system",
                joined(systems, HeatingSystem::slug)
            ));
        }
    }

    if exclusions.heating_system.contains(&inputs.heating_system) {
        return Some(format!(
            "Not applicable with {} heating",
            spaced(inputs.heating_system.slug())
        ));
    }

    if let Some(lofts) = prerequisites.loft_insulation {
        if !lofts.contains(&inputs.loft_insulation) {
            return Some("Loft insulation already at recommended level or not applicable".into());
        }
    }

    if exclusions.loft_insulation.contains(&inputs.loft_insulation) {
        return Some("Loft insulation already adequate or property has no loft".into());
    }

    if let Some(glazing) = prerequisites.glazing_type {
        if !glazing.contains(&inputs.glazing_type) {
            return Some("Current glazing meets or exceeds this upgrade".into());
        }
    }

    if exclusions.glazing_type.contains(&inputs.glazing_type) {
        return Some("Already has adequate glazing".into());
    }

    if let Some(types) = improvement.applicable_property_types {
        if !types.contains(&inputs.property_type) {
            return Some(format!(
                "Not typically applicable to {} properties",
                spaced(inputs.property_type.slug())
            ));
        }
    }

    None
}

pub fn is_applicable(improvement: &ImprovementData, inputs: &CalculatorInputs) -> bool {
    exclusion_reason(improvement, inputs).is_none()
}

/// Catalog measures suited to the property, in catalog order.
pub fn applicable_improvements(inputs: &CalculatorInputs) -> Vec<&'static ImprovementData> {
    IMPROVEMENTS
        .iter()
        .filter(|improvement| is_applicable(improvement, inputs))
        .collect()
}

/// Catalog measures ruled out for the property, each with its reason.
pub fn excluded_improvements(inputs: &CalculatorInputs) -> Vec<ExcludedImprovement> {
    IMPROVEMENTS
        .iter()
        .filter_map(|improvement| {
            exclusion_reason(improvement, inputs).map(|reason| ExcludedImprovement {
                improvement,
                reason,
            })
        })
        .collect()
}
