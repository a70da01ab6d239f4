//! PRS exemption checker.
//!
//! Maps the landlord's stated reason onto an exemption category on the
//! PRS Exemptions Register, grades the case and lists the evidence a
//! registration would need.

mod assessment;
mod domain;

pub use assessment::{assess_eligibility, evidence_checklist, evidence_requirements};
pub use domain::{
    EligibilityAssessment, EligibilityLevel, EvidenceDocument, EvidenceItem, EvidenceRequirement,
    ExemptionAssessment, ExemptionInputs, ExemptionReason, ExemptionType, ImprovementMade,
    SpendToDate,
};

use tracing::debug;

pub const EXEMPTIONS_REGISTER_URL: &str =
    "https://www.gov.uk/government/publications/private-rented-sector-exemptions-register";

pub const REGISTRATION_STEPS: [&str; 4] = [
    "Gather all evidence documents. Ensure quotes are dated and from registered installers.",
    "Create an account on the PRS Exemptions Register.",
    "Submit your exemption application with evidence, selecting the appropriate exemption category.",
    "Receive confirmation of your exemption registration and keep it for your records.",
];

pub fn check_exemption(inputs: &ExemptionInputs) -> ExemptionAssessment {
    let exemption_type = ExemptionType::from(inputs.exemption_reason);
    let eligibility = assess_eligibility(inputs);
    let evidence = evidence_checklist(inputs);
    let missing_required = evidence
        .iter()
        .filter(|item| item.required && !item.available)
        .map(|item| item.label)
        .collect();
    let rating = inputs
        .current_rating
        .map_or("unknown", |rating| rating.letter());

    debug!(
        exemption = ?exemption_type,
        level = ?eligibility.level,
        "exemption assessed"
    );

    ExemptionAssessment {
        exemption_type,
        name: exemption_type.name(),
        description: exemption_type.description(),
        valid_for_years: ExemptionType::VALID_FOR_YEARS,
        summary: format!(
            "Based on your {} with current EPC rating {rating}",
            inputs.property_type.label().to_lowercase()
        ),
        eligibility,
        evidence,
        missing_required,
        registration_steps: REGISTRATION_STEPS.to_vec(),
        register_url: EXEMPTIONS_REGISTER_URL,
        property_guide_url: inputs.property_type.guide_url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{EpcRating, PropertyType};

    #[test]
    fn consent_claim_lists_missing_refusal() {
        let inputs = ExemptionInputs {
            current_rating: Some(EpcRating::E),
            property_type: PropertyType::ConvertedFlat,
            exemption_reason: ExemptionReason::ThirdPartyConsent,
            evidence_available: vec![EvidenceDocument::CurrentEpc],
            ..ExemptionInputs::default()
        };
        let assessment = check_exemption(&inputs);

        assert_eq!(assessment.exemption_type, ExemptionType::Consent);
        assert_eq!(assessment.valid_for_years, 5);
        assert_eq!(assessment.eligibility.level, EligibilityLevel::Amber);
        assert_eq!(assessment.missing_required, vec!["Written refusal from freeholder"]);
        assert_eq!(
            assessment.summary,
            "Based on your converted flat with current EPC rating E"
        );
    }
}
