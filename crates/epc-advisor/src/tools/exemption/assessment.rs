use super::domain::{
    EligibilityAssessment, EligibilityLevel, EvidenceDocument, EvidenceItem, EvidenceRequirement,
    ExemptionInputs, ExemptionType, SpendToDate,
};

const fn requirement(
    document: EvidenceDocument,
    label: &'static str,
    required: bool,
) -> EvidenceRequirement {
    EvidenceRequirement {
        document,
        label,
        required,
    }
}

const COST_CAP_EVIDENCE: &[EvidenceRequirement] = &[
    requirement(EvidenceDocument::CurrentEpc, "Current EPC certificate", true),
    requirement(
        EvidenceDocument::InstallerQuotes,
        "Minimum 3 quotes from installers",
        true,
    ),
    requirement(
        EvidenceDocument::StructuralReport,
        "Structural engineer report (if relevant)",
        false,
    ),
    requirement(
        EvidenceDocument::DampAssessment,
        "Damp/condensation risk assessment",
        false,
    ),
];

const CONSENT_EVIDENCE: &[EvidenceRequirement] = &[
    requirement(EvidenceDocument::CurrentEpc, "Current EPC certificate", true),
    requirement(
        EvidenceDocument::FreeholderRefusal,
        "Written refusal from freeholder",
        true,
    ),
    requirement(
        EvidenceDocument::PlanningRefusal,
        "Planning refusal letter (if applicable)",
        false,
    ),
    requirement(
        EvidenceDocument::InstallerQuotes,
        "Quotes showing what works were proposed",
        false,
    ),
];

const DEVALUATION_EVIDENCE: &[EvidenceRequirement] = &[
    requirement(EvidenceDocument::CurrentEpc, "Current EPC certificate", true),
    requirement(
        EvidenceDocument::ValuationReport,
        "Independent property valuation report",
        true,
    ),
    requirement(
        EvidenceDocument::InstallerQuotes,
        "Quotes for proposed improvements",
        true,
    ),
];

const HERITAGE_EVIDENCE: &[EvidenceRequirement] = &[
    requirement(EvidenceDocument::CurrentEpc, "Current EPC certificate", true),
    requirement(
        EvidenceDocument::ListedOfficerAdvice,
        "Listed building officer advice",
        true,
    ),
    requirement(
        EvidenceDocument::ConservationOfficerAdvice,
        "Conservation officer advice",
        false,
    ),
    requirement(
        EvidenceDocument::PlanningRefusal,
        "Planning refusal (if applied)",
        false,
    ),
];

pub fn evidence_requirements(exemption_type: ExemptionType) -> &'static [EvidenceRequirement] {
    match exemption_type {
        ExemptionType::CostCap => COST_CAP_EVIDENCE,
        ExemptionType::Consent => CONSENT_EVIDENCE,
        ExemptionType::Devaluation => DEVALUATION_EVIDENCE,
        ExemptionType::Heritage => HERITAGE_EVIDENCE,
    }
}

/// Required documents first, then recommended ones, each marked held or not.
pub fn evidence_checklist(inputs: &ExemptionInputs) -> Vec<EvidenceItem> {
    let requirements = evidence_requirements(inputs.exemption_reason.into());
    let (required, optional): (Vec<&EvidenceRequirement>, Vec<_>) =
        requirements.iter().partition(|requirement| requirement.required);
    required
        .into_iter()
        .chain(optional)
        .map(|requirement| EvidenceItem {
            document: requirement.document,
            label: requirement.label,
            required: requirement.required,
            available: inputs.has(requirement.document),
        })
        .collect()
}

const STRONG_CASE: &str = "Likely eligible - strong case";
const NEEDS_EVIDENCE: &str = "Possibly eligible - additional evidence may be needed";
const UNLIKELY: &str = "Unlikely eligible - does not meet criteria";

const fn green(description: &'static str) -> EligibilityAssessment {
    EligibilityAssessment {
        level: EligibilityLevel::Green,
        title: STRONG_CASE,
        description,
    }
}

const fn amber(description: &'static str) -> EligibilityAssessment {
    EligibilityAssessment {
        level: EligibilityLevel::Amber,
        title: NEEDS_EVIDENCE,
        description,
    }
}

const fn red(description: &'static str) -> EligibilityAssessment {
    EligibilityAssessment {
        level: EligibilityLevel::Red,
        title: UNLIKELY,
        description,
    }
}

/// Traffic-light view of how an application would fare.
///
/// Consent, devaluation and heritage claims always resolve in their own
/// branch. A cost cap claim that matches none of its spend rules falls
/// through to the generic evidence check.
pub fn assess_eligibility(inputs: &ExemptionInputs) -> EligibilityAssessment {
    let exemption_type = ExemptionType::from(inputs.exemption_reason);
    let has_all_required = evidence_requirements(exemption_type)
        .iter()
        .filter(|requirement| requirement.required)
        .all(|requirement| inputs.has(requirement.document));

    match exemption_type {
        ExemptionType::CostCap => match inputs.spend_to_date {
            SpendToDate::Over10000 if has_all_required => {
                return green("You have spent over £10,000 and have the required documentation.");
            }
            SpendToDate::Between5000And10000 if inputs.has(EvidenceDocument::CurrentEpc) => {
                return amber("You are approaching the cost cap. Obtain more quotes to demonstrate you cannot reach EPC C within £10,000.");
            }
            SpendToDate::Under5000 | SpendToDate::Nothing => {
                return red("Cost cap exemption requires demonstrating that EPC C cannot be achieved for £10,000 or less.");
            }
            _ => {}
        },
        ExemptionType::Heritage => {
            let officer_advice = inputs.has(EvidenceDocument::ListedOfficerAdvice)
                || inputs.has(EvidenceDocument::ConservationOfficerAdvice);
            return match (inputs.heritage_protected(), officer_advice) {
                (true, true) => green("Your property has heritage protections and you have supporting documentation from the relevant authority."),
                (true, false) => amber("You need written advice from the listed building or conservation officer confirming works are not permitted."),
                (false, _) => red("Heritage exemption requires the property to be listed or in a conservation area."),
            };
        }
        ExemptionType::Consent => {
            return if inputs.has(EvidenceDocument::FreeholderRefusal)
                || inputs.has(EvidenceDocument::PlanningRefusal)
            {
                green("You have written evidence of consent being refused.")
            } else {
                amber("You need written evidence that consent has been formally refused.")
            };
        }
        ExemptionType::Devaluation => {
            return if inputs.has(EvidenceDocument::ValuationReport)
                && inputs.has(EvidenceDocument::InstallerQuotes)
            {
                green("You have a valuation report and quotes demonstrating devaluation.")
            } else {
                amber("You need an independent valuation report showing the improvement cost exceeds the resulting devaluation.")
            };
        }
    }

    if has_all_required {
        green("You have the key documentation needed for your exemption application.")
    } else {
        amber("Review the checklist below to ensure you have all required documentation.")
    }
}
