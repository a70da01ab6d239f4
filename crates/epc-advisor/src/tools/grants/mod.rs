//! Grant eligibility checker covering ECO4, the Boiler Upgrade Scheme,
//! Warm Homes: Local Grant and the Great British Insulation Scheme, plus
//! a postcode-driven finder that adds council programmes.

mod advice;
mod catalog;
mod checks;
mod evaluator;
mod inputs;
mod local;

pub use advice::{next_steps, qualifying_benefits, total_potential_funding};
pub use catalog::{
    scheme, schemes_needing_refresh, GrantScheme, SchemeEligibility, SchemeId, SchemeKind,
    GBIS_ELIGIBLE_COUNCIL_TAX_BANDS, GRANT_SCHEMES, INCOME_THRESHOLD,
    LOCAL_VERIFICATION_INTERVAL_DAYS, NATIONAL_VERIFICATION_INTERVAL_DAYS,
};
pub use evaluator::{
    check_grant_eligibility, evaluate_scheme, fold_outcomes, Check, CheckOutcome, Confidence,
    Effect, GrantEligibilityResult, Verdict,
};
pub use inputs::{
    Answer, BoilerAge, CouncilTaxBand, GrantCheckerInputs, PortfolioSize, PropertyCategory,
    Tenure, TenantIncome,
};
pub use local::{
    area_grant_report, estimated_contribution, evaluate_funding_scheme, find_grants,
    funding_scheme, funding_schemes_needing_refresh, is_valid_uk_postcode, local_authorities_in,
    local_authority, local_authority_for_postcode, national_funding_schemes, outward_code,
    postcode_area, region_for_area, region_for_postcode, schemes_for_authority,
    schemes_in_category, validate_area_inputs, Administrator, AreaGrantInputs, AreaGrantReport,
    Coverage, FundingCategory, FundingCriteria, FundingMatch, FundingScheme, LocalAuthority,
    FUNDING_SCHEMES, GRANT_FINDER_DISCLAIMER, LOCAL_AUTHORITIES,
};

use serde::Serialize;

/// Everything the grant checker shows after the final step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantCheckReport {
    pub results: Vec<GrantEligibilityResult>,
    pub total_potential_funding: u32,
    pub next_steps: Vec<String>,
}

pub fn grant_check_report(inputs: &GrantCheckerInputs) -> GrantCheckReport {
    let results = check_grant_eligibility(inputs);
    GrantCheckReport {
        total_potential_funding: total_potential_funding(&results),
        next_steps: next_steps(&results, inputs),
        results,
    }
}
