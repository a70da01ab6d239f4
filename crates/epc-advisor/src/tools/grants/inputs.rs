use crate::property::{deserialize_reported_rating, lenient, EpcRating, HeatingSystem};
use serde::{Deserialize, Serialize};

/// Broad dwelling category asked by the grant checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCategory {
    House,
    Flat,
    Bungalow,
    Maisonette,
    Hmo,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tenure {
    Freehold,
    Leasehold,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Tenure {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freehold => "freehold",
            Self::Leasehold => "leasehold",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CouncilTaxBand {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl CouncilTaxBand {
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::Unknown => "unknown",
        }
    }

    /// Bands A to D meet GBIS general eligibility.
    pub const fn within_gbis_general_group(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C | Self::D)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoilerAge {
    #[serde(rename = "under-10")]
    Under10,
    #[serde(rename = "10-15")]
    Between10And15,
    #[serde(rename = "over-15")]
    Over15,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Yes / no / don't know form answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantIncome {
    #[serde(rename = "below-36000")]
    Below36k,
    #[serde(rename = "above-36000")]
    Above36k,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioSize {
    #[serde(rename = "1")]
    Single,
    #[serde(rename = "2-4")]
    Small,
    #[serde(rename = "5+")]
    Large,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Answers collected by the three-step grant checker form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantCheckerInputs {
    #[serde(deserialize_with = "lenient")]
    pub postcode_area: String,
    #[serde(deserialize_with = "lenient")]
    pub property_type: PropertyCategory,
    #[serde(deserialize_with = "deserialize_reported_rating")]
    pub current_epc_rating: Option<EpcRating>,
    #[serde(deserialize_with = "lenient")]
    pub tenure: Tenure,
    #[serde(deserialize_with = "lenient")]
    pub council_tax_band: CouncilTaxBand,
    #[serde(deserialize_with = "lenient")]
    pub current_heating: HeatingSystem,
    #[serde(deserialize_with = "lenient")]
    pub boiler_age: Option<BoilerAge>,
    #[serde(deserialize_with = "lenient")]
    pub considering_heating_replacement: Answer,
    #[serde(deserialize_with = "lenient")]
    pub tenant_on_benefits: Answer,
    #[serde(deserialize_with = "lenient")]
    pub tenant_income: TenantIncome,
    #[serde(deserialize_with = "lenient")]
    pub number_of_properties: PortfolioSize,
}

impl GrantCheckerInputs {
    /// Benefits or a sub-threshold household income.
    pub fn low_income_signal(&self) -> bool {
        self.tenant_on_benefits == Answer::Yes || self.tenant_income == TenantIncome::Below36k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_payload_deserializes_with_unknowns() {
        let inputs: GrantCheckerInputs = serde_json::from_str(
            r#"{
                "postcodeArea": "M1",
                "propertyType": "house",
                "currentEpcRating": "unknown",
                "councilTaxBand": "Z",
                "currentHeating": "gas-boiler",
                "tenantOnBenefits": "maybe",
                "tenantIncome": "below-36000",
                "numberOfProperties": "5+"
            }"#,
        )
        .expect("inputs deserialize");

        assert_eq!(inputs.current_epc_rating, None);
        assert_eq!(inputs.council_tax_band, CouncilTaxBand::Unknown);
        assert_eq!(inputs.tenant_on_benefits, Answer::Unknown);
        assert_eq!(inputs.tenure, Tenure::Unknown);
        assert_eq!(inputs.number_of_properties, PortfolioSize::Large);
        assert!(inputs.low_income_signal());
    }

    #[test]
    fn nulls_and_numbers_become_unknown() {
        let inputs: GrantCheckerInputs = serde_json::from_str(
            r#"{
                "postcodeArea": null,
                "currentEpcRating": "D",
                "tenantOnBenefits": null,
                "numberOfProperties": 1,
                "boilerAge": 12,
                "tenure": false
            }"#,
        )
        .expect("inputs deserialize");

        assert_eq!(inputs.postcode_area, "");
        assert_eq!(inputs.current_epc_rating, Some(EpcRating::D));
        assert_eq!(inputs.tenant_on_benefits, Answer::Unknown);
        assert_eq!(inputs.number_of_properties, PortfolioSize::Unknown);
        assert_eq!(inputs.boiler_age, None);
        assert_eq!(inputs.tenure, Tenure::Unknown);
    }
}
