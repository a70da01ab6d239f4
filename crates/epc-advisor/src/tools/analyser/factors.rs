use super::domain::{
    ConstructionAge, EpcAnalyserInputs, FactorAnalysis, FactorCategory, FloorInsulationNoted,
    GlazingNoted, HeatingControls, HotWaterSystem, ImpactLevel, RoofInsulationNoted,
    WallInsulationNoted, WallTypeNoted,
};
use crate::property::HeatingSystem;

pub(crate) fn analyse_factors(inputs: &EpcAnalyserInputs) -> Vec<FactorAnalysis> {
    vec![
        walls(inputs),
        roof(inputs.roof_insulation),
        floor(inputs.floor_insulation),
        windows(inputs.glazing_type),
        heating(inputs.heating_system, inputs.heating_controls),
        hot_water(inputs.hot_water),
    ]
}

fn walls(inputs: &EpcAnalyserInputs) -> FactorAnalysis {
    let (wall, insulation) = (inputs.wall_type, inputs.wall_insulation);
    let uninsulated_solid =
        wall == WallTypeNoted::Solid && insulation == WallInsulationNoted::Uninsulated;

    let type_text = match wall {
        WallTypeNoted::Solid => "Solid walls",
        WallTypeNoted::CavityUnfilled => "Unfilled cavity walls",
        WallTypeNoted::CavityFilled => "Filled cavity walls",
        WallTypeNoted::Unknown => "Wall type unknown",
    };
    let insulation_text = match insulation {
        WallInsulationNoted::Uninsulated => "no insulation",
        WallInsulationNoted::Partial => "partial insulation",
        WallInsulationNoted::Full => "full insulation",
        WallInsulationNoted::Unknown => "insulation unknown",
    };

    let impact = if uninsulated_solid || wall == WallTypeNoted::CavityUnfilled {
        ImpactLevel::High
    } else if matches!(
        insulation,
        WallInsulationNoted::Uninsulated | WallInsulationNoted::Partial
    ) {
        ImpactLevel::Medium
    } else {
        ImpactLevel::Low
    };

    let potential_points = if uninsulated_solid {
        12
    } else if wall == WallTypeNoted::CavityUnfilled {
        8
    } else {
        2
    };

    let explanation = if uninsulated_solid {
        "Uninsulated solid walls are one of the biggest drags on EPC scores. Internal or external wall insulation can add 10-15 points but is a significant investment."
    } else if wall == WallTypeNoted::CavityUnfilled {
        "Unfilled cavity walls represent a good opportunity - cavity wall insulation is relatively affordable and can add 6-10 points."
    } else if wall == WallTypeNoted::CavityFilled && insulation == WallInsulationNoted::Full {
        "Your walls are well insulated, which is positive for your EPC score."
    } else {
        "Wall insulation is typically one of the most impactful factors for EPC scores."
    };

    FactorAnalysis {
        id: "walls",
        name: "Wall Construction & Insulation",
        category: FactorCategory::Walls,
        current_status: format!("{type_text} with {insulation_text}"),
        impact,
        typical_for_property: typical_wall_for_age(inputs.construction_age),
        potential_points,
        explanation,
    }
}

fn typical_wall_for_age(age: ConstructionAge) -> &'static str {
    match age {
        ConstructionAge::Pre1919 | ConstructionAge::Interwar => {
            "Typically solid walls (9-inch brick or stone)"
        }
        ConstructionAge::PostWar | ConstructionAge::Sixties => {
            "Usually cavity walls, often unfilled"
        }
        _ => "Cavity walls with some insulation",
    }
}

fn roof(insulation: RoofInsulationNoted) -> FactorAnalysis {
    use RoofInsulationNoted::*;

    let (status, impact, points, explanation) = match insulation {
        Uninsulated => (
            "No loft insulation",
            ImpactLevel::High,
            5,
            "Topping up loft insulation to 270mm+ is one of the most cost-effective improvements you can make.",
        ),
        Under100mm => (
            "Less than 100mm loft insulation",
            ImpactLevel::Medium,
            4,
            "Topping up loft insulation to 270mm+ is one of the most cost-effective improvements you can make.",
        ),
        Between100And199mm => (
            "100-199mm loft insulation",
            ImpactLevel::Low,
            2,
            "Your loft has some insulation but is below the recommended 270mm. Topping up is straightforward and inexpensive.",
        ),
        Between200And270mm => (
            "200-270mm loft insulation",
            ImpactLevel::Low,
            0,
            "Loft insulation is typically a quick win for improving EPC scores.",
        ),
        Over270mm => (
            "270mm+ loft insulation (recommended level)",
            ImpactLevel::Low,
            0,
            "Your loft insulation meets the current recommended standard.",
        ),
        Unknown => (
            "Loft insulation depth unknown",
            ImpactLevel::Low,
            0,
            "Loft insulation is typically a quick win for improving EPC scores.",
        ),
    };

    FactorAnalysis {
        id: "roof",
        name: "Roof Insulation",
        category: FactorCategory::Roof,
        current_status: status.to_string(),
        impact,
        typical_for_property: "Modern standard is 270mm+",
        potential_points: points,
        explanation,
    }
}

fn floor(insulation: FloorInsulationNoted) -> FactorAnalysis {
    let status = match insulation {
        FloorInsulationNoted::Uninsulated => "No floor insulation",
        FloorInsulationNoted::Insulated => "Floor insulated",
        FloorInsulationNoted::Suspended => "Suspended floor (may be insulated)",
        FloorInsulationNoted::Unknown => "Floor insulation status unknown",
    };
    let uninsulated = insulation == FloorInsulationNoted::Uninsulated;

    FactorAnalysis {
        id: "floor",
        name: "Floor Insulation",
        category: FactorCategory::Floor,
        current_status: status.to_string(),
        impact: if uninsulated {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        },
        typical_for_property: "Often uninsulated in older properties",
        potential_points: if uninsulated { 3 } else { 0 },
        explanation: "Floor insulation has a moderate impact on EPC score. Suspended timber floors are easier to insulate.",
    }
}

fn windows(glazing: GlazingNoted) -> FactorAnalysis {
    let (status, impact, points, explanation) = match glazing {
        GlazingNoted::Single => (
            "Single glazed windows",
            ImpactLevel::High,
            6,
            "Single glazing significantly impacts your EPC score. Consider secondary glazing as a lower-cost alternative to full replacement.",
        ),
        GlazingNoted::Mixed => (
            "Mixed glazing (some single, some double)",
            ImpactLevel::Medium,
            3,
            "Upgrading remaining single-glazed windows would improve your score.",
        ),
        GlazingNoted::DoublePre2002 => (
            "Double glazing installed before 2002",
            ImpactLevel::Medium,
            2,
            "Older double glazing is less efficient than modern units. Replacement may be worthwhile if other issues are addressed.",
        ),
        GlazingNoted::DoublePost2002 => (
            "Double glazing installed after 2002",
            ImpactLevel::Low,
            0,
            "Your windows are performing well for EPC purposes.",
        ),
        GlazingNoted::Triple => (
            "Triple glazed windows",
            ImpactLevel::Low,
            0,
            "Your windows are performing well for EPC purposes.",
        ),
        GlazingNoted::Unknown => (
            "Glazing type unknown",
            ImpactLevel::Low,
            0,
            "Check the windows line of your certificate to see how the assessor recorded your glazing.",
        ),
    };

    FactorAnalysis {
        id: "windows",
        name: "Windows & Glazing",
        category: FactorCategory::Windows,
        current_status: status.to_string(),
        impact,
        typical_for_property: "Most properties now have double glazing",
        potential_points: points,
        explanation,
    }
}

fn heating(system: HeatingSystem, controls: HeatingControls) -> FactorAnalysis {
    let system_text = match system {
        HeatingSystem::GasBoiler => "Gas boiler",
        HeatingSystem::OilBoiler => "Oil boiler",
        HeatingSystem::Electric => "Electric heating",
        HeatingSystem::HeatPump => "Heat pump",
        HeatingSystem::Lpg => "LPG boiler",
        HeatingSystem::Other => "Other heating system",
        HeatingSystem::Unknown => "Heating system unknown",
    };
    let controls_text = match controls {
        HeatingControls::NoControls => "no controls",
        HeatingControls::Programmer => "programmer only",
        HeatingControls::ProgrammerThermostat => "programmer and room thermostat",
        HeatingControls::ProgrammerTrvs => "programmer, thermostat and TRVs",
        HeatingControls::Smart => "smart controls",
        HeatingControls::Unknown => "controls unknown",
    };

    let impact = match system {
        HeatingSystem::Electric => ImpactLevel::High,
        HeatingSystem::OilBoiler => ImpactLevel::Medium,
        _ if controls.is_basic() => ImpactLevel::Medium,
        _ => ImpactLevel::Low,
    };

    let system_points = match system {
        HeatingSystem::Electric => 8,
        HeatingSystem::OilBoiler => 4,
        _ => 0,
    };
    let controls_points = match controls {
        HeatingControls::NoControls => 4,
        HeatingControls::Programmer => 3,
        _ => 0,
    };

    let explanation = if system == HeatingSystem::Electric {
        "Electric heating scores poorly on EPCs due to higher carbon emissions. A heat pump or gas boiler would significantly improve your rating."
    } else if controls.is_basic() {
        "Adding thermostatic radiator valves (TRVs) and a room thermostat is an affordable way to improve your score."
    } else if system == HeatingSystem::HeatPump {
        "Heat pumps score very well on EPCs due to their high efficiency."
    } else {
        "Your heating system and controls are contributing positively to your EPC score."
    };

    FactorAnalysis {
        id: "heating",
        name: "Heating System & Controls",
        category: FactorCategory::Heating,
        current_status: format!("{system_text} with {controls_text}"),
        impact,
        typical_for_property: "Modern condensing gas boiler with full controls",
        potential_points: system_points + controls_points,
        explanation,
    }
}

fn hot_water(system: HotWaterSystem) -> FactorAnalysis {
    let status = match system {
        HotWaterSystem::FromBoiler => "Hot water from main boiler",
        HotWaterSystem::ElectricImmersion => "Electric immersion heater",
        HotWaterSystem::HeatPump => "Hot water from heat pump",
        HotWaterSystem::Unknown => "Hot water system unknown",
    };
    let immersion = system == HotWaterSystem::ElectricImmersion;

    FactorAnalysis {
        id: "hot-water",
        name: "Hot Water System",
        category: FactorCategory::HotWater,
        current_status: status.to_string(),
        impact: if immersion {
            ImpactLevel::High
        } else {
            ImpactLevel::Low
        },
        typical_for_property: "Typically from main heating system",
        potential_points: if immersion { 5 } else { 0 },
        explanation: if immersion {
            "Electric immersion heaters are inefficient and score poorly on EPCs."
        } else {
            "Hot water from the boiler or heat pump is typically efficient."
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninsulated_solid_walls_carry_the_most_points() {
        let inputs = EpcAnalyserInputs {
            wall_type: WallTypeNoted::Solid,
            wall_insulation: WallInsulationNoted::Uninsulated,
            construction_age: ConstructionAge::Pre1919,
            ..EpcAnalyserInputs::default()
        };
        let factor = walls(&inputs);
        assert_eq!(factor.impact, ImpactLevel::High);
        assert_eq!(factor.potential_points, 12);
        assert_eq!(factor.current_status, "Solid walls with no insulation");
        assert_eq!(
            factor.typical_for_property,
            "Typically solid walls (9-inch brick or stone)"
        );
    }

    #[test]
    fn heating_points_combine_system_and_controls() {
        let factor = heating(HeatingSystem::Electric, HeatingControls::NoControls);
        assert_eq!(factor.potential_points, 12);
        assert_eq!(factor.impact, ImpactLevel::High);

        let factor = heating(HeatingSystem::GasBoiler, HeatingControls::Programmer);
        assert_eq!(factor.potential_points, 3);
        assert_eq!(factor.impact, ImpactLevel::Medium);
        assert_eq!(
            factor.current_status,
            "Gas boiler with programmer only"
        );
    }

    #[test]
    fn six_factors_in_fixed_order() {
        let ids: Vec<_> = analyse_factors(&EpcAnalyserInputs::default())
            .into_iter()
            .map(|factor| factor.id)
            .collect();
        assert_eq!(
            ids,
            vec!["walls", "roof", "floor", "windows", "heating", "hot-water"]
        );
    }
}
