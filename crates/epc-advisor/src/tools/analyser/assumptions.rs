use super::domain::{
    AssessorAssumption, ConstructionAge, EpcAnalyserInputs, HotWaterSystem, ImpactLevel,
    ListedRecommendation, QuickWin, RoofInsulationNoted, WallInsulationNoted, WallTypeNoted,
};

/// Certificate entries that look like defaults rather than observations.
///
/// Each rule is independent; a property can trip several at once.
pub(crate) fn assessor_assumptions(inputs: &EpcAnalyserInputs) -> Vec<AssessorAssumption> {
    let mut found = Vec::new();
    let age = inputs.construction_age;
    let roof_thin = matches!(
        inputs.roof_insulation,
        RoofInsulationNoted::Uninsulated | RoofInsulationNoted::Under100mm
    );

    let cavity = match inputs.wall_type {
        WallTypeNoted::CavityFilled => Some("filled cavity"),
        WallTypeNoted::CavityUnfilled => Some("unfilled cavity"),
        _ => None,
    };
    if let (true, Some(cavity)) = (age.is_pre_war(), cavity) {
        found.push(AssessorAssumption {
            id: "cavity-wall-pre-1930",
            title: "Cavity walls recorded for older property",
            description: format!(
                "Your EPC says your property has {cavity} walls, but properties built before 1930 typically have solid walls. Cavity wall construction became standard in the 1930s."
            ),
            check_with: "Request a surveyor to confirm wall construction type",
            severity: ImpactLevel::High,
        });
    }

    if age.is_post_1980()
        && inputs.roof_insulation == RoofInsulationNoted::Uninsulated
        && !inputs.property_type.is_flat()
    {
        found.push(AssessorAssumption {
            id: "no-insulation-modern",
            title: "No loft insulation recorded for modern property",
            description: "Your EPC shows no loft insulation, but properties built after 1980 were generally required to have some insulation. The assessor may not have been able to access the loft.".to_string(),
            check_with: "Check your loft space if accessible, or request a reassessment with loft access",
            severity: ImpactLevel::Medium,
        });
    }

    if age == ConstructionAge::Pre1919
        && inputs.wall_insulation == WallInsulationNoted::Full
        && inputs.wall_type != WallTypeNoted::Solid
    {
        found.push(AssessorAssumption {
            id: "full-insulation-victorian",
            title: "Full wall insulation recorded for Victorian property",
            description: "Victorian properties with solid walls are rarely fully insulated throughout. This may be an assessor assumption rather than a verified finding.".to_string(),
            check_with: "Check if you have documentation confirming wall insulation installation",
            severity: ImpactLevel::Medium,
        });
    }

    if inputs.wall_type == WallTypeNoted::Unknown {
        found.push(AssessorAssumption {
            id: "unknown-wall-default",
            title: "Wall type marked as unknown",
            description: "When assessors cannot determine wall type, they often assume the worst case (solid uninsulated). This may be hurting your score unnecessarily.".to_string(),
            check_with: "A survey or bore test can confirm wall construction type",
            severity: ImpactLevel::Medium,
        });
    }

    if age.predates_1965() && roof_thin {
        found.push(AssessorAssumption {
            id: "room-in-roof",
            title: "Room-in-roof insulation may be missed",
            description: "If your property has converted loft rooms, insulation in the roof slope may not have been properly recorded. This is a common oversight.".to_string(),
            check_with: "Confirm with assessor that any room-in-roof insulation was recorded",
            severity: ImpactLevel::Low,
        });
    }

    found
}

/// Cheap measures worth doing regardless of what the certificate lists.
pub(crate) fn quick_wins(inputs: &EpcAnalyserInputs) -> Vec<QuickWin> {
    let mut wins = Vec::new();
    let listed = |recommendation| inputs.recommendations.contains(&recommendation);

    if !listed(ListedRecommendation::LowEnergyLighting) {
        wins.push(QuickWin {
            id: "led-lighting",
            title: "Switch to LED bulbs throughout",
            description: "Even if not on your EPC recommendations, replacing all bulbs with LED can add 1-2 points and reduce energy bills immediately.",
            estimated_cost: "50-150",
            potential_benefit: "1-2 EPC points",
        });
    }

    if !listed(ListedRecommendation::DraughtProofing) {
        wins.push(QuickWin {
            id: "draught-proofing",
            title: "Draught proofing doors and windows",
            description: "Sealing gaps around doors and windows is low-cost and can improve both comfort and energy efficiency.",
            estimated_cost: "100-300",
            potential_benefit: "1-2 EPC points",
        });
    }

    if inputs.heating_controls.is_basic() {
        wins.push(QuickWin {
            id: "trv-installation",
            title: "Add thermostatic radiator valves (TRVs)",
            description: "TRVs on all radiators allow room-by-room temperature control and are relatively inexpensive to fit.",
            estimated_cost: "150-400",
            potential_benefit: "2-3 EPC points",
        });
    }

    if matches!(
        inputs.roof_insulation,
        RoofInsulationNoted::Under100mm | RoofInsulationNoted::Between100And199mm
    ) {
        wins.push(QuickWin {
            id: "loft-topup",
            title: "Top up loft insulation to 270mm+",
            description: "Adding extra insulation on top of existing is straightforward and cost-effective.",
            estimated_cost: "200-400",
            potential_benefit: "2-4 EPC points",
        });
    }

    if matches!(
        inputs.hot_water,
        HotWaterSystem::FromBoiler | HotWaterSystem::ElectricImmersion
    ) {
        wins.push(QuickWin {
            id: "cylinder-jacket",
            title: "Insulate hot water cylinder",
            description: "If you have a hot water cylinder without a factory-fitted foam jacket, adding one is very cheap and effective.",
            estimated_cost: "15-25",
            potential_benefit: "1 EPC point",
        });
    }

    wins.push(QuickWin {
        id: "pipe-lagging",
        title: "Insulate hot water pipes",
        description: "Lagging exposed hot water pipes in lofts and under floors reduces heat loss.",
        estimated_cost: "20-50",
        potential_benefit: "Minor improvement",
    });

    wins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyType;
    use crate::tools::analyser::domain::HeatingControls;

    fn ids(assumptions: &[AssessorAssumption]) -> Vec<&'static str> {
        assumptions.iter().map(|assumption| assumption.id).collect()
    }

    #[test]
    fn victorian_with_cavity_and_bare_loft_trips_two_rules() {
        let inputs = EpcAnalyserInputs {
            construction_age: ConstructionAge::Pre1919,
            wall_type: WallTypeNoted::CavityUnfilled,
            wall_insulation: WallInsulationNoted::Uninsulated,
            roof_insulation: RoofInsulationNoted::Uninsulated,
            ..EpcAnalyserInputs::default()
        };
        let found = assessor_assumptions(&inputs);
        assert_eq!(ids(&found), vec!["cavity-wall-pre-1930", "room-in-roof"]);
        assert!(found[0].description.contains("unfilled cavity walls"));
    }

    #[test]
    fn modern_flats_are_not_flagged_for_missing_loft_insulation() {
        let mut inputs = EpcAnalyserInputs {
            construction_age: ConstructionAge::Nineties,
            wall_type: WallTypeNoted::CavityFilled,
            roof_insulation: RoofInsulationNoted::Uninsulated,
            property_type: PropertyType::PurposeBuiltFlat,
            ..EpcAnalyserInputs::default()
        };
        assert!(assessor_assumptions(&inputs).is_empty());

        inputs.property_type = PropertyType::Recent1990sLater;
        assert_eq!(ids(&assessor_assumptions(&inputs)), vec!["no-insulation-modern"]);
    }

    #[test]
    fn unknown_wall_type_is_flagged() {
        let found = assessor_assumptions(&EpcAnalyserInputs::default());
        assert_eq!(ids(&found), vec!["unknown-wall-default"]);
    }

    #[test]
    fn listed_recommendations_suppress_matching_quick_wins() {
        let inputs = EpcAnalyserInputs {
            recommendations: vec![
                ListedRecommendation::LowEnergyLighting,
                ListedRecommendation::DraughtProofing,
            ],
            heating_controls: HeatingControls::Smart,
            ..EpcAnalyserInputs::default()
        };
        let wins: Vec<_> = quick_wins(&inputs).into_iter().map(|win| win.id).collect();
        assert_eq!(wins, vec!["pipe-lagging"]);
    }
}
