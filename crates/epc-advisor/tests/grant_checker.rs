use epc_advisor::property::{EpcRating, HeatingSystem};
use epc_advisor::tools::grants::{
    check_grant_eligibility, grant_check_report, Answer, Confidence, CouncilTaxBand,
    GrantCheckerInputs, GrantEligibilityResult, PortfolioSize, PropertyCategory, SchemeId,
    TenantIncome, Tenure, GRANT_SCHEMES,
};

fn d_rated_house_on_benefits() -> GrantCheckerInputs {
    GrantCheckerInputs {
        postcode_area: "LS6".to_string(),
        property_type: PropertyCategory::House,
        current_epc_rating: Some(EpcRating::D),
        tenure: Tenure::Freehold,
        council_tax_band: CouncilTaxBand::B,
        current_heating: HeatingSystem::GasBoiler,
        boiler_age: None,
        considering_heating_replacement: Answer::No,
        tenant_on_benefits: Answer::Yes,
        tenant_income: TenantIncome::Below36k,
        number_of_properties: PortfolioSize::Single,
    }
}

fn result_for(results: &[GrantEligibilityResult], id: SchemeId) -> &GrantEligibilityResult {
    results
        .iter()
        .find(|result| result.scheme.id == id)
        .expect("every scheme has a result")
}

fn input_grid() -> Vec<GrantCheckerInputs> {
    let mut grid = Vec::new();
    for rating in [None, Some(EpcRating::B), Some(EpcRating::D), Some(EpcRating::G)] {
        for benefits in [Answer::Yes, Answer::No, Answer::Unknown] {
            for income in [TenantIncome::Below36k, TenantIncome::Above36k, TenantIncome::Unknown] {
                for heating in [HeatingSystem::GasBoiler, HeatingSystem::HeatPump, HeatingSystem::Unknown] {
                    grid.push(GrantCheckerInputs {
                        current_epc_rating: rating,
                        tenant_on_benefits: benefits,
                        tenant_income: income,
                        current_heating: heating,
                        council_tax_band: CouncilTaxBand::F,
                        tenure: Tenure::Leasehold,
                        number_of_properties: PortfolioSize::Small,
                        ..GrantCheckerInputs::default()
                    });
                }
            }
        }
    }
    grid
}

#[test]
fn benefits_household_in_d_rated_house_gets_eco4_but_not_bus() {
    let results = check_grant_eligibility(&d_rated_house_on_benefits());

    let eco4 = result_for(&results, SchemeId::Eco4);
    assert_eq!(eco4.confidence, Confidence::Definite);
    assert_eq!(eco4.max_potential_grant, 10_000);

    let bus = result_for(&results, SchemeId::BoilerUpgradeScheme);
    assert_eq!(bus.confidence, Confidence::NotEligible);
    assert_eq!(bus.max_potential_grant, 0);

    let warm_homes = result_for(&results, SchemeId::WarmHomesLocalGrant);
    assert_eq!(warm_homes.confidence, Confidence::Definite);
    assert_eq!(warm_homes.max_potential_grant, 30_000);
}

#[test]
fn unknown_rating_and_benefits_cap_eco4_at_possible() {
    let inputs = GrantCheckerInputs {
        current_epc_rating: None,
        tenant_on_benefits: Answer::Unknown,
        ..d_rated_house_on_benefits()
    };
    let results = check_grant_eligibility(&inputs);
    let eco4 = result_for(&results, SchemeId::Eco4);
    assert!(eco4.confidence >= Confidence::Possible);
    assert!(eco4.reasons.iter().any(|reason| reason.contains("LA Flex")));
}

#[test]
fn every_input_yields_one_sorted_result_per_scheme() {
    for inputs in input_grid() {
        let results = check_grant_eligibility(&inputs);
        assert_eq!(results.len(), GRANT_SCHEMES.len());
        for scheme in &GRANT_SCHEMES {
            assert_eq!(
                results.iter().filter(|result| result.scheme.id == scheme.id).count(),
                1
            );
        }
        assert!(
            results.windows(2).all(|pair| pair[0].confidence <= pair[1].confidence),
            "results out of order for {inputs:?}"
        );
        for result in &results {
            if result.confidence == Confidence::NotEligible {
                assert_eq!(result.max_potential_grant, 0);
            }
        }
    }
}

#[test]
fn c_rated_home_without_low_income_is_ruled_out_of_fabric_schemes() {
    let inputs = GrantCheckerInputs {
        current_epc_rating: Some(EpcRating::C),
        tenant_on_benefits: Answer::No,
        tenant_income: TenantIncome::Above36k,
        considering_heating_replacement: Answer::Unknown,
        ..d_rated_house_on_benefits()
    };
    let report = grant_check_report(&inputs);

    for id in [
        SchemeId::Eco4,
        SchemeId::WarmHomesLocalGrant,
        SchemeId::GreatBritishInsulationScheme,
    ] {
        assert_eq!(
            result_for(&report.results, id).confidence,
            Confidence::NotEligible,
            "{id:?}"
        );
    }
    let bus = result_for(&report.results, SchemeId::BoilerUpgradeScheme);
    assert_eq!(bus.confidence, Confidence::Possible);
    assert_eq!(report.total_potential_funding, 7_500);
    assert_eq!(report.results[0].scheme.id, SchemeId::BoilerUpgradeScheme);
}

#[test]
fn report_totals_only_eligible_schemes() {
    let report = grant_check_report(&d_rated_house_on_benefits());
    assert_eq!(report.total_potential_funding, 10_000 + 30_000 + 5_000);
    assert!(report
        .next_steps
        .iter()
        .any(|step| step.contains("ECO4 installers")));
}
