//! Per-scheme rule lists. Each list runs top to bottom through
//! [`evaluate_scheme`](super::evaluator::evaluate_scheme).

use super::catalog::SchemeId;
use super::evaluator::{Check, CheckOutcome, Confidence};
use super::inputs::{Answer, CouncilTaxBand, GrantCheckerInputs, PortfolioSize, TenantIncome, Tenure};
use crate::property::HeatingSystem;

const WARM_HOMES_SINGLE_PROPERTY_GRANT: u32 = 30_000;
const WARM_HOMES_PORTFOLIO_GRANT: u32 = 15_000;
const BUS_GRANT: u32 = 7_500;

pub(crate) fn checks_for(id: SchemeId) -> &'static [Check] {
    match id {
        SchemeId::Eco4 => &ECO4_CHECKS,
        SchemeId::BoilerUpgradeScheme => &BUS_CHECKS,
        SchemeId::WarmHomesLocalGrant => &WARM_HOMES_CHECKS,
        SchemeId::GreatBritishInsulationScheme => &GBIS_CHECKS,
    }
}

static ECO4_CHECKS: [Check; 3] = [eco4_rating, eco4_benefits, eco4_la_flex];

static BUS_CHECKS: [Check; 6] = [
    bus_existing_heat_pump,
    bus_replacement_declined,
    bus_certificate,
    bus_heating_type,
    bus_tenure,
    bus_replacement_intent,
];

static WARM_HOMES_CHECKS: [Check; 4] = [
    warm_homes_rating,
    warm_homes_income,
    warm_homes_portfolio,
    warm_homes_delivery,
];

static GBIS_CHECKS: [Check; 4] = [
    gbis_rating,
    gbis_council_tax,
    gbis_benefits_pathway,
    gbis_scope,
];

fn eco4_rating(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.current_epc_rating {
        None => CheckOutcome::degrade(
            "EPC rating unknown - scheme requires rating D-G",
            Confidence::Possible,
        ),
        Some(rating) if rating.below_c() => {
            CheckOutcome::note(format!("EPC rating {rating} qualifies (D-G required)"))
        }
        Some(rating) => CheckOutcome::disqualify(format!(
            "Your EPC rating ({rating}) is too high - ECO4 requires D-G"
        )),
    }
}

fn eco4_benefits(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.tenant_on_benefits {
        Answer::Yes => {
            CheckOutcome::note("Tenant on qualifying benefits - strong eligibility indicator")
        }
        Answer::No => CheckOutcome::degrade(
            "Tenant not on benefits - may still qualify via LA Flex pathway",
            Confidence::Likely,
        ),
        Answer::Unknown => CheckOutcome::degrade(
            "Tenant benefit status unknown - recommend checking qualifying benefits",
            Confidence::Likely,
        ),
    }
}

fn eco4_la_flex(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.tenant_income == TenantIncome::Below36k && inputs.tenant_on_benefits != Answer::Yes {
        CheckOutcome::note("Tenant income below £36,000 - may qualify via LA Flex")
    } else {
        CheckOutcome::skip()
    }
}

fn bus_existing_heat_pump(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.current_heating == HeatingSystem::HeatPump {
        CheckOutcome::disqualify(
            "Property already has a heat pump - BUS is for replacing fossil fuel heating",
        )
    } else {
        CheckOutcome::skip().with_grant(BUS_GRANT)
    }
}

fn bus_replacement_declined(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.considering_heating_replacement == Answer::No {
        CheckOutcome::disqualify(
            "Not currently considering heating replacement - BUS requires installing a heat pump",
        )
    } else {
        CheckOutcome::skip()
    }
}

fn bus_certificate(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.current_epc_rating {
        None => CheckOutcome::degrade(
            "Valid EPC certificate required - check or commission an EPC assessment",
            Confidence::Likely,
        ),
        Some(_) => CheckOutcome::note("Has EPC rating - certificate requirement can be met"),
    }
}

fn bus_heating_type(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.current_heating {
        heating if heating.is_fossil_fuel() => {
            CheckOutcome::note("Current fossil fuel heating qualifies for replacement")
        }
        HeatingSystem::Electric => {
            CheckOutcome::note("Electric heating can qualify if primary heating system")
        }
        _ => CheckOutcome::degrade(
            "Heating system type may qualify - verify with installer",
            Confidence::Likely,
        ),
    }
}

fn bus_tenure(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.tenure == Tenure::Leasehold {
        CheckOutcome::degrade(
            "Leasehold property - may need freeholder/management company consent",
            Confidence::Likely,
        )
    } else {
        CheckOutcome::skip()
    }
}

fn bus_replacement_intent(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.considering_heating_replacement == Answer::Yes {
        CheckOutcome::note("Interested in replacing heating - good candidate for heat pump")
    } else {
        CheckOutcome::degrade_if_certain(
            "Consider whether heat pump installation aligns with your plans",
            Confidence::Possible,
        )
    }
}

fn warm_homes_rating(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.current_epc_rating {
        None => CheckOutcome::degrade(
            "EPC rating unknown - scheme requires rating D-G",
            Confidence::Possible,
        ),
        Some(rating) if rating.below_c() => {
            CheckOutcome::note(format!("EPC rating {rating} qualifies (D-G required)"))
        }
        Some(rating) => CheckOutcome::disqualify(format!(
            "Your EPC rating ({rating}) is too high - requires D-G"
        )),
    }
}

fn warm_homes_income(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match (inputs.tenant_on_benefits, inputs.tenant_income) {
        (Answer::Yes, _) => {
            CheckOutcome::note("Tenant on qualifying benefits - meets income criteria")
        }
        (_, TenantIncome::Below36k) => {
            CheckOutcome::note("Tenant household income below £36,000 - meets income criteria")
        }
        (Answer::No, TenantIncome::Above36k) => CheckOutcome::disqualify(
            "Tenant income above £36,000 and not on benefits - may not qualify",
        ),
        _ => CheckOutcome::degrade(
            "Tenant income/benefit status unknown - recommend verifying with tenant",
            Confidence::Likely,
        ),
    }
}

fn warm_homes_portfolio(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.number_of_properties == PortfolioSize::Single {
        CheckOutcome::note("Single property - may qualify for full funding (up to £30,000)")
            .with_grant(WARM_HOMES_SINGLE_PROPERTY_GRANT)
    } else {
        CheckOutcome::degrade(
            "Multiple properties - 50% landlord contribution required for additional properties",
            Confidence::Likely,
        )
        .with_grant(WARM_HOMES_PORTFOLIO_GRANT)
    }
}

fn warm_homes_delivery(_: &GrantCheckerInputs) -> CheckOutcome {
    CheckOutcome::note("Scheme delivered through local authorities - availability varies by area")
}

fn gbis_rating(inputs: &GrantCheckerInputs) -> CheckOutcome {
    match inputs.current_epc_rating {
        None => CheckOutcome::degrade(
            "EPC rating unknown - scheme typically requires D or below",
            Confidence::Possible,
        ),
        Some(rating) if rating.below_c() => {
            CheckOutcome::note(format!("EPC rating {rating} qualifies (D or below required)"))
        }
        Some(rating) if inputs.low_income_signal() => CheckOutcome::degrade(
            format!("EPC {rating} is above threshold, but may qualify via low-income pathway"),
            Confidence::Possible,
        ),
        Some(rating) => CheckOutcome::disqualify(format!(
            "EPC rating {rating} is above threshold (D or below required for general eligibility)"
        )),
    }
}

fn gbis_council_tax(inputs: &GrantCheckerInputs) -> CheckOutcome {
    let band = inputs.council_tax_band;
    match band {
        CouncilTaxBand::Unknown => CheckOutcome::degrade(
            "Council Tax band unknown - bands A-D qualify for general eligibility",
            Confidence::Likely,
        ),
        band if band.within_gbis_general_group() => CheckOutcome::note(format!(
            "Council Tax band {} qualifies (A-D eligible)",
            band.letter()
        )),
        band if inputs.tenant_on_benefits == Answer::Yes => CheckOutcome::degrade(
            format!(
                "Council Tax band {} is above threshold, but tenant on benefits may qualify",
                band.letter()
            ),
            Confidence::Likely,
        ),
        band => CheckOutcome::disqualify(format!(
            "Council Tax band {} does not qualify (A-D required, unless on benefits)",
            band.letter()
        )),
    }
}

fn gbis_benefits_pathway(inputs: &GrantCheckerInputs) -> CheckOutcome {
    if inputs.tenant_on_benefits == Answer::Yes {
        CheckOutcome::note("Tenant on benefits provides alternative eligibility pathway")
    } else {
        CheckOutcome::skip()
    }
}

fn gbis_scope(_: &GrantCheckerInputs) -> CheckOutcome {
    CheckOutcome::note("GBIS covers insulation measures only (cavity wall, loft, etc.) - not heating")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::EpcRating;
    use crate::tools::grants::catalog::scheme;
    use crate::tools::grants::evaluator::{evaluate_scheme, Effect};

    fn inputs() -> GrantCheckerInputs {
        GrantCheckerInputs {
            current_epc_rating: Some(EpcRating::E),
            tenure: Tenure::Freehold,
            council_tax_band: CouncilTaxBand::B,
            current_heating: HeatingSystem::GasBoiler,
            considering_heating_replacement: Answer::Yes,
            tenant_on_benefits: Answer::Yes,
            number_of_properties: PortfolioSize::Single,
            ..GrantCheckerInputs::default()
        }
    }

    fn run(id: SchemeId, inputs: &GrantCheckerInputs) -> (Confidence, u32) {
        let result = evaluate_scheme(scheme(id), checks_for(id), inputs);
        (result.confidence, result.max_potential_grant)
    }

    #[test]
    fn eco4_rejects_ratings_above_d() {
        let mut inputs = inputs();
        inputs.current_epc_rating = Some(EpcRating::B);
        let outcome = eco4_rating(&inputs);
        assert_eq!(outcome.effect, Effect::Disqualify);
        assert_eq!(
            outcome.reason.as_deref(),
            Some("Your EPC rating (B) is too high - ECO4 requires D-G")
        );
    }

    #[test]
    fn la_flex_note_only_without_benefits() {
        let mut inputs = inputs();
        inputs.tenant_income = TenantIncome::Below36k;
        assert!(eco4_la_flex(&inputs).reason.is_none());

        inputs.tenant_on_benefits = Answer::No;
        assert!(eco4_la_flex(&inputs).reason.is_some());
    }

    #[test]
    fn bus_with_unknown_intent_drops_definite_to_possible() {
        let mut inputs = inputs();
        inputs.considering_heating_replacement = Answer::Unknown;
        assert_eq!(
            run(SchemeId::BoilerUpgradeScheme, &inputs),
            (Confidence::Possible, 7_500)
        );
    }

    #[test]
    fn bus_unknown_intent_leaves_likely_alone() {
        let mut inputs = inputs();
        inputs.considering_heating_replacement = Answer::Unknown;
        inputs.tenure = Tenure::Leasehold;
        assert_eq!(
            run(SchemeId::BoilerUpgradeScheme, &inputs),
            (Confidence::Likely, 7_500)
        );
    }

    #[test]
    fn warm_homes_portfolio_halves_the_grant() {
        let mut inputs = inputs();
        inputs.number_of_properties = PortfolioSize::Small;
        assert_eq!(
            run(SchemeId::WarmHomesLocalGrant, &inputs),
            (Confidence::Likely, 15_000)
        );
    }

    #[test]
    fn warm_homes_rejects_high_income_without_benefits() {
        let mut inputs = inputs();
        inputs.tenant_on_benefits = Answer::No;
        inputs.tenant_income = TenantIncome::Above36k;
        assert_eq!(
            run(SchemeId::WarmHomesLocalGrant, &inputs),
            (Confidence::NotEligible, 0)
        );
    }

    #[test]
    fn gbis_low_income_pathway_for_c_rated_homes() {
        let mut inputs = inputs();
        inputs.current_epc_rating = Some(EpcRating::C);
        assert_eq!(
            run(SchemeId::GreatBritishInsulationScheme, &inputs),
            (Confidence::Possible, 5_000)
        );

        inputs.tenant_on_benefits = Answer::No;
        assert_eq!(
            run(SchemeId::GreatBritishInsulationScheme, &inputs),
            (Confidence::NotEligible, 0)
        );
    }

    #[test]
    fn gbis_high_council_tax_band_needs_benefits() {
        let mut inputs = inputs();
        inputs.council_tax_band = CouncilTaxBand::F;
        assert_eq!(
            run(SchemeId::GreatBritishInsulationScheme, &inputs),
            (Confidence::Likely, 5_000)
        );

        inputs.tenant_on_benefits = Answer::Unknown;
        let outcome = gbis_council_tax(&inputs);
        assert_eq!(outcome.effect, Effect::Disqualify);
        assert_eq!(
            outcome.reason.as_deref(),
            Some("Council Tax band F does not qualify (A-D required, unless on benefits)")
        );
    }
}
