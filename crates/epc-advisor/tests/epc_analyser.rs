use epc_advisor::property::{EpcRating, HeatingSystem, PropertyType};
use epc_advisor::tools::analyser::{
    analyse_epc, Comparison, ConstructionAge, EpcAnalyserInputs, FactorCategory,
    FloorInsulationNoted, GlazingNoted, HeatingControls, HotWaterSystem, ListedRecommendation,
    RoofInsulationNoted, WallInsulationNoted, WallTypeNoted,
};

fn victorian_terrace() -> EpcAnalyserInputs {
    EpcAnalyserInputs {
        current_rating: Some(EpcRating::E),
        current_score: 45,
        property_type: PropertyType::VictorianTerrace,
        construction_age: ConstructionAge::Pre1919,
        wall_type: WallTypeNoted::CavityUnfilled,
        wall_insulation: WallInsulationNoted::Uninsulated,
        roof_insulation: RoofInsulationNoted::Under100mm,
        floor_insulation: FloorInsulationNoted::Suspended,
        glazing_type: GlazingNoted::Single,
        heating_system: HeatingSystem::GasBoiler,
        heating_controls: HeatingControls::Programmer,
        hot_water: HotWaterSystem::FromBoiler,
        recommendations: vec![
            ListedRecommendation::SolidWallInsulation,
            ListedRecommendation::LoftInsulation,
            ListedRecommendation::NewBoiler,
        ],
    }
}

#[test]
fn victorian_terrace_report_covers_every_section() {
    let results = analyse_epc(&victorian_terrace());

    assert_eq!(results.score_comparison.typical_score, 38);
    assert_eq!(results.score_comparison.comparison, Comparison::Above);

    let categories: Vec<_> = results.factors.iter().map(|factor| factor.category).collect();
    assert_eq!(
        categories,
        vec![
            FactorCategory::Walls,
            FactorCategory::Roof,
            FactorCategory::Floor,
            FactorCategory::Windows,
            FactorCategory::Heating,
            FactorCategory::HotWater,
        ]
    );

    let assumption_ids: Vec<_> = results
        .assessor_assumptions
        .iter()
        .map(|assumption| assumption.id)
        .collect();
    assert_eq!(assumption_ids, vec!["cavity-wall-pre-1930", "room-in-roof"]);

    let win_ids: Vec<_> = results.quick_wins.iter().map(|win| win.id).collect();
    assert_eq!(
        win_ids,
        vec![
            "led-lighting",
            "draught-proofing",
            "trv-installation",
            "loft-topup",
            "cylinder-jacket",
            "pipe-lagging",
        ]
    );

    let priorities: Vec<_> = results
        .recommendation_analysis
        .iter()
        .map(|rec| rec.priority)
        .collect();
    assert_eq!(priorities, vec![1, 2, 4]);
    assert_eq!(results.property_guide_url, "/property-types/victorian-terrace");
}

#[test]
fn unlisted_archetype_falls_back_to_national_typical_score() {
    let inputs = EpcAnalyserInputs {
        current_score: 52,
        ..EpcAnalyserInputs::default()
    };
    let comparison = analyse_epc(&inputs).score_comparison;
    assert_eq!(comparison.typical_score, 52);
    assert_eq!(comparison.typical_rating, EpcRating::D);
    assert_eq!(comparison.comparison, Comparison::Average);
}

#[test]
fn certificate_payload_deserializes_leniently() {
    let inputs: EpcAnalyserInputs = serde_json::from_str(
        r#"{
            "currentRating": "unknown",
            "currentScore": 61,
            "propertyType": "purpose-built-flat",
            "constructionAge": "1980-1991",
            "roofInsulation": "270mm-plus",
            "heatingControls": "programmer-trvs",
            "recommendations": ["low-energy-lighting", "heat-pump-conversion"]
        }"#,
    )
    .expect("payload deserializes");

    assert_eq!(inputs.current_rating, None);
    assert_eq!(inputs.construction_age, ConstructionAge::Eighties);
    assert_eq!(
        inputs.recommendations,
        vec![ListedRecommendation::LowEnergyLighting, ListedRecommendation::Unknown]
    );
    let results = analyse_epc(&inputs);
    assert_eq!(results.recommendation_analysis.len(), 1);
    assert_eq!(results.score_comparison.typical_score, 65);
}
