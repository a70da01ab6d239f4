use crate::property::{deserialize_reported_rating, lenient, lenient_list, EpcRating, PropertyType};
use serde::{Deserialize, Serialize};

/// Works the landlord has already paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImprovementMade {
    LoftInsulation,
    CavityWall,
    InternalSolidWall,
    ExternalSolidWall,
    DoubleGlazing,
    NewBoiler,
    SmartControls,
    LedLighting,
    FloorInsulation,
    DraughtProofing,
    #[serde(other)]
    Unknown,
}

impl ImprovementMade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoftInsulation => "Loft insulation to 270mm+",
            Self::CavityWall => "Cavity wall insulation",
            Self::InternalSolidWall => "Internal solid wall insulation",
            Self::ExternalSolidWall => "External solid wall insulation",
            Self::DoubleGlazing => "Double or secondary glazing",
            Self::NewBoiler => "New condensing boiler",
            Self::SmartControls => "Smart heating controls",
            Self::LedLighting => "LED lighting throughout",
            Self::FloorInsulation => "Floor insulation",
            Self::DraughtProofing => "Draught proofing",
            Self::Unknown => "Other improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendToDate {
    #[serde(rename = "none")]
    Nothing,
    #[serde(rename = "under-5000")]
    Under5000,
    #[serde(rename = "5000-10000")]
    Between5000And10000,
    #[serde(rename = "over-10000")]
    Over10000,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Why the landlord believes further works are not possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExemptionReason {
    CostCap,
    ThirdPartyConsent,
    Devaluation,
    WallUnsuitable,
    ListedBuilding,
    ConservationArea,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceDocument {
    InstallerQuotes,
    CurrentEpc,
    FreeholderRefusal,
    PlanningRefusal,
    ListedOfficerAdvice,
    ConservationOfficerAdvice,
    StructuralReport,
    DampAssessment,
    ValuationReport,
    #[serde(other)]
    Unknown,
}

/// Answers collected by the four-step exemption checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExemptionInputs {
    #[serde(deserialize_with = "deserialize_reported_rating")]
    pub current_rating: Option<EpcRating>,
    #[serde(deserialize_with = "lenient")]
    pub property_type: PropertyType,
    #[serde(deserialize_with = "lenient")]
    pub is_listed: bool,
    #[serde(deserialize_with = "lenient")]
    pub in_conservation_area: bool,
    #[serde(deserialize_with = "lenient_list")]
    pub improvements_made: Vec<ImprovementMade>,
    #[serde(deserialize_with = "lenient")]
    pub spend_to_date: SpendToDate,
    #[serde(deserialize_with = "lenient")]
    pub exemption_reason: ExemptionReason,
    #[serde(deserialize_with = "lenient_list")]
    pub evidence_available: Vec<EvidenceDocument>,
}

impl ExemptionInputs {
    pub fn has(&self, document: EvidenceDocument) -> bool {
        self.evidence_available.contains(&document)
    }

    pub fn heritage_protected(&self) -> bool {
        self.is_listed || self.in_conservation_area
    }
}

/// Exemption categories on the PRS Exemptions Register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExemptionType {
    CostCap,
    Consent,
    Devaluation,
    Heritage,
}

impl ExemptionType {
    pub const VALID_FOR_YEARS: u32 = 5;

    pub const fn name(self) -> &'static str {
        match self {
            Self::CostCap => "Cost Cap Exemption",
            Self::Consent => "Third Party Consent Exemption",
            Self::Devaluation => "Devaluation Exemption",
            Self::Heritage => "Listed Building / Conservation Exemption",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::CostCap => {
                "You have spent the maximum £10,000 on improvements without reaching EPC C."
            }
            Self::Consent => {
                "A third party (freeholder, planning authority, etc.) has refused consent for necessary works."
            }
            Self::Devaluation => {
                "Improvements would reduce the property value by more than the cost of the improvements."
            }
            Self::Heritage => {
                "Heritage protections prevent energy efficiency works that would harm the building's character."
            }
        }
    }
}

impl From<ExemptionReason> for ExemptionType {
    fn from(reason: ExemptionReason) -> Self {
        match reason {
            ExemptionReason::ThirdPartyConsent => Self::Consent,
            ExemptionReason::Devaluation => Self::Devaluation,
            ExemptionReason::ListedBuilding | ExemptionReason::ConservationArea => Self::Heritage,
            // unsuitable walls are argued on cost
            ExemptionReason::CostCap | ExemptionReason::WallUnsuitable | ExemptionReason::Unknown => {
                Self::CostCap
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRequirement {
    pub document: EvidenceDocument,
    pub label: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityLevel {
    Green,
    Amber,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityAssessment {
    pub level: EligibilityLevel,
    pub title: &'static str,
    pub description: &'static str,
}

/// One checklist line: a requirement and whether the landlord holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub document: EvidenceDocument,
    pub label: &'static str,
    pub required: bool,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemptionAssessment {
    pub exemption_type: ExemptionType,
    pub name: &'static str,
    pub description: &'static str,
    pub valid_for_years: u32,
    pub summary: String,
    pub eligibility: EligibilityAssessment,
    pub evidence: Vec<EvidenceItem>,
    pub missing_required: Vec<&'static str>,
    pub registration_steps: Vec<&'static str>,
    pub register_url: &'static str,
    pub property_guide_url: String,
}
