//! Postcode-driven grant finder.
//!
//! Places a property by postcode, then runs every active national scheme
//! and council programme through the shared check fold. Council schemes
//! only match when the postcode falls inside one of their districts.

mod catalog;
mod postcode;

pub use catalog::{
    funding_scheme, funding_schemes_needing_refresh, local_authorities_in, local_authority,
    national_funding_schemes, schemes_for_authority, schemes_in_category, Administrator,
    Coverage, FundingCategory, FundingCriteria, FundingScheme, LocalAuthority, FUNDING_SCHEMES,
    LOCAL_AUTHORITIES,
};
pub use postcode::{
    is_valid_uk_postcode, local_authority_for_postcode, outward_code, postcode_area,
    region_for_area, region_for_postcode,
};

use super::evaluator::{fold_outcomes, CheckOutcome, Confidence};
use super::inputs::{Answer, TenantIncome, Tenure};
use crate::input::{FieldProblem, InputError};
use crate::property::{
    deserialize_reported_rating, lenient, pounds, EpcRating, HeatingSystem, PropertyType, Region,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const GRANT_FINDER_DISCLAIMER: &str = "This tool provides indicative eligibility information based on the criteria you have provided. Grant scheme eligibility is determined by scheme administrators and may involve additional criteria not captured here. Scheme terms, funding availability, and eligibility requirements can change without notice. Always verify eligibility directly with scheme administrators before making decisions. Last updated: January 2026.";

const NO_MATCHES: &str = "Based on the information provided, we could not identify any grant schemes you are currently eligible for. This may be because your property's EPC rating is too high, or tenant eligibility criteria are not met. Consider checking back as new schemes are regularly announced.";

/// Answers collected by the grant finder form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaGrantInputs {
    #[serde(deserialize_with = "lenient")]
    pub postcode: String,
    #[serde(deserialize_with = "lenient")]
    pub property_type: PropertyType,
    #[serde(deserialize_with = "deserialize_reported_rating")]
    pub current_epc_rating: Option<EpcRating>,
    #[serde(deserialize_with = "lenient")]
    pub tenure: Tenure,
    #[serde(deserialize_with = "lenient")]
    pub heating_system: HeatingSystem,
    #[serde(deserialize_with = "lenient")]
    pub tenant_benefit_status: Answer,
    #[serde(deserialize_with = "lenient")]
    pub tenant_income_status: TenantIncome,
}

/// One scheme's verdict for the grant finder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingMatch {
    pub scheme: &'static FundingScheme,
    pub confidence: Confidence,
    pub potential_value: u32,
    pub eligibility_reasons: Vec<String>,
    pub caveats: Vec<String>,
    pub next_steps: Vec<String>,
    pub requires_contribution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_contribution: Option<u32>,
}

impl FundingMatch {
    pub fn is_eligible(&self) -> bool {
        self.confidence != Confidence::NotEligible
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGrantReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_authority: Option<&'static LocalAuthority>,
    pub eligible: Vec<FundingMatch>,
    pub ineligible: Vec<FundingMatch>,
    pub total_potential_value: u32,
    pub summary: String,
    pub disclaimer: &'static str,
}

struct AreaContext<'a> {
    scheme: &'static FundingScheme,
    inputs: &'a AreaGrantInputs,
    region: Option<Region>,
    authority: Option<&'static LocalAuthority>,
}

type AreaCheck = fn(&AreaContext<'_>) -> CheckOutcome;

static AREA_CHECKS: [AreaCheck; 8] = [
    covered_area,
    rentals_allowed,
    rating_band,
    heating_type,
    property_type,
    tenure,
    tenant_benefits,
    tenant_income,
];

fn covered_area(cx: &AreaContext<'_>) -> CheckOutcome {
    let criteria = &cx.scheme.eligibility;
    let covered = if criteria.local_authority_ids.is_empty() {
        criteria.coverage.includes(cx.region)
    } else {
        cx.authority
            .is_some_and(|authority| criteria.local_authority_ids.contains(&authority.id))
    };
    if covered {
        CheckOutcome::note("Property location covered by scheme")
    } else {
        CheckOutcome::disqualify(format!(
            "Scheme not available in your area ({})",
            cx.region.map_or("location unknown", Region::label)
        ))
    }
}

fn rentals_allowed(cx: &AreaContext<'_>) -> CheckOutcome {
    if cx.scheme.eligibility.allows_rental_properties {
        CheckOutcome::note("Rental properties eligible")
    } else {
        CheckOutcome::disqualify("Scheme only available for owner-occupied properties")
    }
}

fn rating_band(cx: &AreaContext<'_>) -> CheckOutcome {
    let Some(ratings) = cx.scheme.eligibility.epc_ratings else {
        return CheckOutcome::note("EPC rating meets scheme requirements");
    };
    match cx.inputs.current_epc_rating {
        None => CheckOutcome::degrade(
            "EPC rating unknown - eligibility depends on actual rating",
            Confidence::Possible,
        ),
        Some(rating) if ratings.contains(&rating) => {
            CheckOutcome::note("EPC rating meets scheme requirements")
        }
        Some(rating) => {
            let needed: Vec<&str> = ratings.iter().map(|band| band.letter()).collect();
            CheckOutcome::disqualify(format!(
                "Property EPC rating {rating} does not meet requirement (needs {})",
                needed.join(" or ")
            ))
        }
    }
}

fn heating_type(cx: &AreaContext<'_>) -> CheckOutcome {
    let criteria = &cx.scheme.eligibility;
    let heating = cx.inputs.heating_system;
    if criteria
        .heating_excluded
        .is_some_and(|excluded| excluded.contains(&heating))
    {
        return CheckOutcome::disqualify(format!(
            "Heating system type ({}) is not eligible for this scheme",
            heating.label()
        ));
    }
    match criteria.heating_eligible {
        Some(eligible) if !eligible.contains(&heating) => {
            if heating == HeatingSystem::Unknown {
                CheckOutcome::degrade(
                    "Heating system unknown - eligibility depends on current system",
                    Confidence::Possible,
                )
            } else {
                CheckOutcome::disqualify(format!(
                    "Current heating system ({}) does not meet scheme requirements",
                    heating.label()
                ))
            }
        }
        _ => CheckOutcome::note("Heating system eligible for improvements"),
    }
}

fn property_type(cx: &AreaContext<'_>) -> CheckOutcome {
    let property_type = cx.inputs.property_type;
    match cx.scheme.eligibility.property_types {
        Some(types) if !types.contains(&property_type) => CheckOutcome::disqualify(format!(
            "Property type ({}) not eligible",
            property_type.label()
        )),
        _ => CheckOutcome::skip(),
    }
}

fn tenure(cx: &AreaContext<'_>) -> CheckOutcome {
    let tenures = cx.scheme.eligibility.tenures;
    let tenure = cx.inputs.tenure;
    if tenures.is_empty() || tenures.contains(&tenure) {
        CheckOutcome::skip()
    } else if tenure == Tenure::Unknown {
        CheckOutcome::degrade(
            "Tenure unknown - eligibility depends on freehold or leasehold status",
            Confidence::Possible,
        )
    } else {
        CheckOutcome::disqualify(format!("Tenure type ({}) not eligible", tenure.label()))
    }
}

fn tenant_benefits(cx: &AreaContext<'_>) -> CheckOutcome {
    if cx.scheme.eligibility.requires_tenant_benefits != Some(true) {
        return CheckOutcome::skip();
    }
    match cx.inputs.tenant_benefit_status {
        Answer::Yes => CheckOutcome::skip(),
        Answer::No => {
            CheckOutcome::disqualify("Tenant must receive qualifying benefits for this scheme")
        }
        Answer::Unknown => CheckOutcome::degrade(
            "Eligibility depends on tenant receiving qualifying benefits",
            Confidence::Possible,
        ),
    }
}

/// Benefits or income below the threshold both qualify where the scheme
/// does not insist on benefits. Anything short of a clear answer stays
/// possible.
fn tenant_income(cx: &AreaContext<'_>) -> CheckOutcome {
    let criteria = &cx.scheme.eligibility;
    let Some(threshold) = criteria.tenant_income_threshold else {
        return CheckOutcome::skip();
    };
    if criteria.requires_tenant_benefits == Some(false) {
        match (cx.inputs.tenant_benefit_status, cx.inputs.tenant_income_status) {
            (Answer::Yes, _) | (_, TenantIncome::Below36k) => return CheckOutcome::skip(),
            (Answer::No, TenantIncome::Above36k) => {
                return CheckOutcome::disqualify(format!(
                    "Tenant income exceeds threshold ({}) and not on qualifying benefits",
                    pounds(threshold)
                ))
            }
            _ => {}
        }
    }
    CheckOutcome::degrade(
        format!(
            "Eligibility depends on tenant income (below {}) or benefit status",
            pounds(threshold)
        ),
        Confidence::Possible,
    )
}

/// Landlord share implied by the scheme's contribution percentage,
/// assuming the grant is paid in full.
pub fn estimated_contribution(scheme: &FundingScheme) -> Option<u32> {
    let criteria = &scheme.eligibility;
    match criteria.landlord_contribution_percent {
        Some(percent) if criteria.requires_landlord_contribution && percent > 0 && percent < 100 => {
            let share = f64::from(scheme.max_grant) * f64::from(percent) / f64::from(100 - percent);
            Some(share.round() as u32)
        }
        _ => None,
    }
}

fn funding_next_steps(
    scheme: &FundingScheme,
    inputs: &AreaGrantInputs,
    confidence: Confidence,
) -> Vec<String> {
    let mut steps = Vec::new();
    if confidence == Confidence::Possible {
        if inputs.current_epc_rating.is_none() {
            steps.push("Get a valid EPC assessment for your property".to_string());
        }
        if inputs.tenant_benefit_status == Answer::Unknown {
            steps.push("Confirm whether your tenant receives qualifying benefits".to_string());
        }
        if inputs.tenant_income_status == TenantIncome::Unknown {
            steps.push("Confirm tenant household income status".to_string());
        }
    }

    if !scheme.apply_steps.is_empty() {
        steps.extend(scheme.apply_steps.iter().map(|step| step.to_string()));
    } else if !scheme.eligibility.local_authority_ids.is_empty() {
        steps.push(format!(
            "Contact {} for application details",
            scheme.administrator_name
        ));
    }
    steps.push(format!("Visit {} to apply", scheme.application_host()));
    steps
}

/// Runs one scheme's checks. Inactive schemes produce no match at all.
pub fn evaluate_funding_scheme(
    scheme: &'static FundingScheme,
    inputs: &AreaGrantInputs,
    region: Option<Region>,
    authority: Option<&'static LocalAuthority>,
) -> Option<FundingMatch> {
    if !scheme.is_active {
        return None;
    }

    let context = AreaContext {
        scheme,
        inputs,
        region,
        authority,
    };
    let verdict = fold_outcomes(AREA_CHECKS.iter().map(|check| check(&context)));
    let eligibility_reasons = verdict.met();
    let caveats = verdict.caveats();

    if verdict.disqualified {
        return Some(FundingMatch {
            scheme,
            confidence: Confidence::NotEligible,
            potential_value: 0,
            eligibility_reasons,
            caveats,
            next_steps: Vec::new(),
            requires_contribution: false,
            estimated_contribution: None,
        });
    }

    Some(FundingMatch {
        scheme,
        confidence: verdict.confidence,
        potential_value: scheme.max_grant,
        eligibility_reasons,
        caveats,
        next_steps: funding_next_steps(scheme, inputs, verdict.confidence),
        requires_contribution: scheme.eligibility.requires_landlord_contribution,
        estimated_contribution: estimated_contribution(scheme),
    })
}

fn summary_message(eligible: &[FundingMatch]) -> String {
    if eligible.is_empty() {
        return NO_MATCHES.to_string();
    }

    let plural = |count: usize| if count > 1 { "s" } else { "" };
    let count = |level: Confidence| eligible.iter().filter(|m| m.confidence == level).count();
    let total: u32 = eligible.iter().map(|m| m.potential_value).sum();

    let mut message = format!(
        "Good news! We found {} grant scheme{} you may be eligible for, with combined potential funding of up to {}.",
        eligible.len(),
        plural(eligible.len()),
        pounds(total)
    );
    let definite = count(Confidence::Definite);
    if definite > 0 {
        message.push_str(&format!(
            " You appear to definitely qualify for {definite} scheme{}.",
            plural(definite)
        ));
    }
    let likely = count(Confidence::Likely);
    if likely > 0 {
        let verb = if likely > 1 { "s are" } else { " is" };
        message.push_str(&format!(" {likely} scheme{verb} likely to be available."));
    }
    let possible = count(Confidence::Possible);
    if possible > 0 {
        message.push_str(&format!(
            " {possible} scheme{} may be possible pending confirmation of tenant eligibility.",
            plural(possible)
        ));
    }
    message
}

/// Every answer the finder needs before it can place and grade a property.
pub fn validate_area_inputs(inputs: &AreaGrantInputs) -> Vec<FieldProblem> {
    [
        (
            !is_valid_uk_postcode(&inputs.postcode),
            "postcode",
            "Please enter a valid UK postcode",
        ),
        (
            inputs.property_type == PropertyType::Unknown,
            "propertyType",
            "Please select a property type",
        ),
        (
            inputs.tenure == Tenure::Unknown,
            "tenure",
            "Please select property tenure (freehold or leasehold)",
        ),
        (
            inputs.heating_system == HeatingSystem::Unknown,
            "heatingSystem",
            "Please select your current heating system",
        ),
    ]
    .into_iter()
    .filter(|(failed, _, _)| *failed)
    .map(|(_, field, message)| FieldProblem { field, message })
    .collect()
}

/// Grades every scheme without validating the answers first.
///
/// Eligible matches come best confidence first, then highest value.
/// Ineligible ones follow display priority.
pub fn area_grant_report(inputs: &AreaGrantInputs) -> AreaGrantReport {
    let region = region_for_postcode(&inputs.postcode);
    let authority = local_authority_for_postcode(&inputs.postcode);

    let (mut eligible, mut ineligible): (Vec<_>, Vec<_>) = FUNDING_SCHEMES
        .iter()
        .filter_map(|scheme| evaluate_funding_scheme(scheme, inputs, region, authority))
        .partition(FundingMatch::is_eligible);

    eligible.sort_by(|a, b| {
        a.confidence
            .cmp(&b.confidence)
            .then(b.potential_value.cmp(&a.potential_value))
    });
    ineligible.sort_by_key(|m| m.scheme.display_priority);

    let total_potential_value = eligible.iter().map(|m| m.potential_value).sum();
    debug!(
        outward = %outward_code(&inputs.postcode),
        authority = authority.map_or("none", |la| la.id),
        eligible = eligible.len(),
        total = total_potential_value,
        "area grants evaluated"
    );

    AreaGrantReport {
        region,
        local_authority: authority,
        summary: summary_message(&eligible),
        eligible,
        ineligible,
        total_potential_value,
        disclaimer: GRANT_FINDER_DISCLAIMER,
    }
}

/// Validates the answers, then builds the report.
pub fn find_grants(inputs: &AreaGrantInputs) -> Result<AreaGrantReport, InputError> {
    let problems = validate_area_inputs(inputs);
    if !problems.is_empty() {
        return Err(InputError::Invalid { problems });
    }
    Ok(area_grant_report(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manchester_gas() -> AreaGrantInputs {
        AreaGrantInputs {
            postcode: "M14 5TP".to_string(),
            property_type: PropertyType::VictorianTerrace,
            current_epc_rating: Some(EpcRating::D),
            tenure: Tenure::Freehold,
            heating_system: HeatingSystem::GasBoiler,
            tenant_benefit_status: Answer::Yes,
            tenant_income_status: TenantIncome::Below36k,
        }
    }

    fn ids(matches: &[FundingMatch]) -> Vec<&'static str> {
        matches.iter().map(|m| m.scheme.id).collect()
    }

    #[test]
    fn manchester_landlord_sees_national_and_council_schemes() {
        let report = find_grants(&manchester_gas()).expect("valid inputs");

        assert_eq!(report.region, Some(Region::NorthWest));
        assert_eq!(report.local_authority.map(|la| la.id), Some("manchester"));
        assert_eq!(
            ids(&report.eligible),
            vec![
                "warm-homes-local",
                "eco4",
                "manchester-retrofit-accelerator",
                "great-british-insulation-scheme",
                "boiler-upgrade-scheme",
            ]
        );
        assert!(report
            .eligible
            .iter()
            .all(|m| m.confidence == Confidence::Definite));
        assert_eq!(report.total_potential_value, 70_500);
        assert_eq!(report.ineligible.len(), 9);
        assert_eq!(report.ineligible[0].scheme.id, "birmingham-warm-homes");
        assert_eq!(
            report.summary,
            "Good news! We found 5 grant schemes you may be eligible for, with combined potential funding of up to £70,500. You appear to definitely qualify for 5 schemes."
        );
    }

    #[test]
    fn council_scheme_prices_the_landlord_share() {
        let report = area_grant_report(&manchester_gas());
        let council = report
            .eligible
            .iter()
            .find(|m| m.scheme.id == "manchester-retrofit-accelerator")
            .expect("council scheme eligible");
        assert!(council.requires_contribution);
        assert_eq!(council.estimated_contribution, Some(3_333));
        assert_eq!(
            council.next_steps,
            vec![
                "Contact Manchester City Council for application details",
                "Visit www.manchester.gov.uk to apply",
            ]
        );

        let eco4 = funding_scheme("eco4").expect("eco4 in catalog");
        assert_eq!(estimated_contribution(eco4), None);
        let leicester = funding_scheme("leicester-affordable-warmth").expect("in catalog");
        assert_eq!(estimated_contribution(leicester), Some(6_000));
    }

    #[test]
    fn other_councils_report_the_area() {
        let report = area_grant_report(&manchester_gas());
        let leeds = report
            .ineligible
            .iter()
            .find(|m| m.scheme.id == "leeds-home-energy-efficiency")
            .expect("leeds listed as ineligible");
        assert_eq!(leeds.potential_value, 0);
        assert_eq!(
            leeds.caveats,
            vec!["Scheme not available in your area (North West England)"]
        );
        assert!(leeds.next_steps.is_empty());
    }

    #[test]
    fn heat_pump_in_scotland_is_ruled_out_of_bus_and_eco4() {
        let inputs = AreaGrantInputs {
            postcode: "EH1 1YZ".to_string(),
            heating_system: HeatingSystem::HeatPump,
            ..manchester_gas()
        };
        let report = area_grant_report(&inputs);
        let reason = |id: &str| {
            report
                .ineligible
                .iter()
                .find(|m| m.scheme.id == id)
                .and_then(|m| m.caveats.last().cloned())
        };
        assert_eq!(
            reason("boiler-upgrade-scheme").as_deref(),
            Some("Scheme not available in your area (Scotland)")
        );
        assert_eq!(
            reason("eco4").as_deref(),
            Some("Current heating system (heat pump) does not meet scheme requirements")
        );
        assert_eq!(
            ids(&report.eligible),
            vec!["great-british-insulation-scheme"]
        );
    }

    #[test]
    fn unknown_answers_leave_schemes_possible_with_follow_ups() {
        let inputs = AreaGrantInputs {
            postcode: "LS6 2AA".to_string(),
            current_epc_rating: None,
            tenant_benefit_status: Answer::Unknown,
            tenant_income_status: TenantIncome::Unknown,
            ..manchester_gas()
        };
        let report = area_grant_report(&inputs);
        let eco4 = report
            .eligible
            .iter()
            .find(|m| m.scheme.id == "eco4")
            .expect("eco4 still possible");
        assert_eq!(eco4.confidence, Confidence::Possible);
        assert_eq!(
            eco4.next_steps[..3],
            [
                "Get a valid EPC assessment for your property",
                "Confirm whether your tenant receives qualifying benefits",
                "Confirm tenant household income status",
            ]
        );
        assert!(eco4
            .caveats
            .contains(&"Eligibility depends on tenant receiving qualifying benefits".to_string()));
        assert!(report.summary.ends_with(
            "may be possible pending confirmation of tenant eligibility."
        ));
    }

    #[test]
    fn high_income_without_benefits_fails_warm_homes() {
        let inputs = AreaGrantInputs {
            tenant_benefit_status: Answer::No,
            tenant_income_status: TenantIncome::Above36k,
            ..manchester_gas()
        };
        let report = area_grant_report(&inputs);
        let warm_homes = report
            .ineligible
            .iter()
            .find(|m| m.scheme.id == "warm-homes-local")
            .expect("warm homes ruled out");
        assert_eq!(
            warm_homes.caveats,
            vec!["Tenant income exceeds threshold (£36,000) and not on qualifying benefits"]
        );
        // met reasons gathered before the failure are kept
        assert_eq!(warm_homes.eligibility_reasons.len(), 4);
    }

    #[test]
    fn rating_outside_band_names_the_required_letters() {
        let inputs = AreaGrantInputs {
            postcode: "S10 2TN".to_string(),
            current_epc_rating: Some(EpcRating::D),
            ..manchester_gas()
        };
        let report = area_grant_report(&inputs);
        let sheffield = report
            .ineligible
            .iter()
            .find(|m| m.scheme.id == "sheffield-warm-homes")
            .expect("sheffield needs E-G");
        assert_eq!(
            sheffield.caveats,
            vec!["Property EPC rating D does not meet requirement (needs E or F or G)"]
        );
    }

    #[test]
    fn inactive_schemes_are_skipped() {
        let retired: &'static FundingScheme = Box::leak(Box::new(FundingScheme {
            id: "retired",
            name: "Retired scheme",
            description: "",
            administrator: Administrator::Government,
            administrator_name: "DESNZ",
            max_grant: 1_000,
            min_grant: 0,
            categories: &[],
            eligibility: FundingCriteria {
                epc_ratings: None,
                property_types: None,
                tenures: &[],
                heating_eligible: None,
                heating_excluded: None,
                coverage: Coverage::UkWide,
                local_authority_ids: &[],
                tenant_income_threshold: None,
                requires_tenant_benefits: None,
                allows_rental_properties: true,
                requires_landlord_contribution: false,
                landlord_contribution_percent: None,
                notes: &[],
            },
            apply_steps: &[],
            application_url: "https://www.gov.uk/retired",
            info_url: "https://www.gov.uk/retired",
            start_date: "2020-01-01",
            end_date: Some("2021-01-01"),
            is_active: false,
            last_verified: "2021-01-01",
            display_priority: 99,
        }));
        assert!(evaluate_funding_scheme(retired, &manchester_gas(), None, None).is_none());
    }

    #[test]
    fn validation_lists_each_missing_answer() {
        let problems = validate_area_inputs(&AreaGrantInputs::default());
        let fields: Vec<_> = problems.iter().map(|problem| problem.field).collect();
        assert_eq!(fields, vec!["postcode", "propertyType", "tenure", "heatingSystem"]);

        match find_grants(&AreaGrantInputs::default()) {
            Err(InputError::Invalid { problems }) => assert_eq!(problems.len(), 4),
            other => panic!("expected invalid input, got {other:?}"),
        }
        assert!(validate_area_inputs(&manchester_gas()).is_empty());
    }

    #[test]
    fn no_matches_uses_the_fallback_summary() {
        assert_eq!(summary_message(&[]), NO_MATCHES);
    }
}
