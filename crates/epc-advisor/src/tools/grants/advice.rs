use super::catalog::{SchemeId, QUALIFYING_BENEFITS};
use super::evaluator::GrantEligibilityResult;
use super::inputs::{Answer, GrantCheckerInputs};

pub fn qualifying_benefits() -> &'static [&'static str] {
    &QUALIFYING_BENEFITS
}

/// Sum of grant ceilings across every scheme still in play.
///
/// Schemes can overlap, so this is an upper bound rather than a promise.
pub fn total_potential_funding(results: &[GrantEligibilityResult]) -> u32 {
    results
        .iter()
        .filter(|result| result.is_eligible())
        .map(|result| result.max_potential_grant)
        .sum()
}

fn eligible(results: &[GrantEligibilityResult], id: SchemeId) -> bool {
    results
        .iter()
        .any(|result| result.scheme.id == id && result.is_eligible())
}

/// Ordered follow-up actions for the landlord.
pub fn next_steps(results: &[GrantEligibilityResult], inputs: &GrantCheckerInputs) -> Vec<String> {
    if !results.iter().any(GrantEligibilityResult::is_eligible) {
        return vec![
            "Consider getting a professional EPC assessment to explore improvement options"
                .to_string(),
            "Contact your local authority about any local grant schemes".to_string(),
        ];
    }

    let mut steps = Vec::new();

    if inputs.current_epc_rating.is_none() {
        steps.push(
            "Get an EPC assessment to confirm your property rating and unlock grant eligibility",
        );
    }

    if eligible(results, SchemeId::Eco4) {
        steps.push("Contact ECO4 installers in your area for a free eligibility assessment");
        if inputs.tenant_on_benefits == Answer::Unknown {
            steps.push("Check with your tenant about qualifying benefits status for ECO4");
        }
    }

    if eligible(results, SchemeId::BoilerUpgradeScheme)
        && inputs.considering_heating_replacement == Answer::Yes
    {
        steps.push("Get quotes from MCS-certified heat pump installers who can apply for BUS");
    }

    if eligible(results, SchemeId::WarmHomesLocalGrant) {
        steps.push(
            "Contact your local authority to check Warm Homes: Local Grant availability in your area",
        );
    }

    if eligible(results, SchemeId::GreatBritishInsulationScheme) {
        steps.push("Contact energy suppliers or search for GBIS installers for insulation measures");
    }

    steps.push("Keep records of any quotes received for cost cap exemption purposes");
    steps.push("Consider combining multiple schemes to maximise funding (where allowed)");

    steps.into_iter().map(str::to_string).collect()
}
