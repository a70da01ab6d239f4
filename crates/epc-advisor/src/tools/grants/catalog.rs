use crate::property::{EpcRating, HeatingSystem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Household income ceiling used by the Warm Homes and LA Flex routes.
pub const INCOME_THRESHOLD: u32 = 36_000;

/// Council Tax bands covered by GBIS general eligibility.
pub const GBIS_ELIGIBLE_COUNCIL_TAX_BANDS: [&str; 4] = ["A", "B", "C", "D"];

/// Benefits that satisfy the ECO4 and Warm Homes low-income tests.
pub const QUALIFYING_BENEFITS: [&str; 9] = [
    "Universal Credit",
    "Pension Credit (Guarantee Credit)",
    "Income-based Jobseekers Allowance (JSA)",
    "Income-related Employment and Support Allowance (ESA)",
    "Income Support",
    "Housing Benefit",
    "Child Tax Credit (income under £18,500)",
    "Working Tax Credit (income under £18,500)",
    "Warm Home Discount (Core Group)",
];

/// Days between data checks for national and local schemes.
pub const NATIONAL_VERIFICATION_INTERVAL_DAYS: i64 = 7;
pub const LOCAL_VERIFICATION_INTERVAL_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeId {
    Eco4,
    BoilerUpgradeScheme,
    WarmHomesLocalGrant,
    GreatBritishInsulationScheme,
}

impl SchemeId {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Eco4 => "eco4",
            Self::BoilerUpgradeScheme => "boiler-upgrade-scheme",
            Self::WarmHomesLocalGrant => "warm-homes-local-grant",
            Self::GreatBritishInsulationScheme => "great-british-insulation-scheme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    National,
    Local,
}

/// Headline eligibility predicates published for a scheme.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeEligibility {
    pub epc_ratings: &'static [EpcRating],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_benefits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_income_below: Option<u32>,
    pub property_types: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_systems: Option<&'static [HeatingSystem]>,
}

/// Catalog entry for a grant or funding scheme.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantScheme {
    pub id: SchemeId,
    pub name: &'static str,
    pub kind: SchemeKind,
    pub administrator: &'static str,
    pub max_grant: u32,
    pub description: &'static str,
    pub what_it_covers: &'static [&'static str],
    pub eligibility: SchemeEligibility,
    pub landlord_contribution: &'static str,
    pub deadline: &'static str,
    pub application_url: &'static str,
    pub last_verified: &'static str,
}

impl GrantScheme {
    pub fn last_verified_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_verified, "%Y-%m-%d").ok()
    }

    pub const fn verification_interval_days(&self) -> i64 {
        match self.kind {
            SchemeKind::National => NATIONAL_VERIFICATION_INTERVAL_DAYS,
            SchemeKind::Local => LOCAL_VERIFICATION_INTERVAL_DAYS,
        }
    }

    /// A scheme whose verification date cannot be read is always stale.
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        match self.last_verified_on() {
            Some(verified) => (today - verified).num_days() > self.verification_interval_days(),
            None => true,
        }
    }
}

const BELOW_C: &[EpcRating] = &[EpcRating::D, EpcRating::E, EpcRating::F, EpcRating::G];
const ANY_RATING: &[EpcRating] = &[
    EpcRating::A,
    EpcRating::B,
    EpcRating::C,
    EpcRating::D,
    EpcRating::E,
    EpcRating::F,
    EpcRating::G,
];
const ALL_PROPERTIES: &[&str] = &["all"];

pub static GRANT_SCHEMES: [GrantScheme; 4] = [
    GrantScheme {
        id: SchemeId::Eco4,
        name: "ECO4 (Energy Company Obligation)",
        kind: SchemeKind::National,
        administrator: "Obligated energy suppliers via Ofgem",
        max_grant: 10_000,
        description: "ECO4 is a government scheme where energy suppliers fund energy efficiency improvements in fuel-poor and low-income households. Landlords can access this funding when their tenants meet eligibility criteria.",
        what_it_covers: &[
            "Loft insulation",
            "Cavity wall insulation",
            "Solid wall insulation (internal and external)",
            "Underfloor insulation",
            "Heating system upgrades and repairs",
            "Heat pumps (air source and ground source)",
            "Solar PV panels",
            "First-time central heating",
        ],
        eligibility: SchemeEligibility {
            epc_ratings: BELOW_C,
            tenant_benefits: Some(true),
            tenant_income_below: None,
            property_types: ALL_PROPERTIES,
            heating_systems: Some(&[
                HeatingSystem::GasBoiler,
                HeatingSystem::Electric,
                HeatingSystem::OilBoiler,
                HeatingSystem::Other,
            ]),
        },
        landlord_contribution: "Usually none - full cost covered if tenant qualifies. Some installers may require contribution for complex work.",
        deadline: "March 2026 (scheme expected to be extended or replaced)",
        application_url: "https://www.ofgem.gov.uk/environmental-and-social-schemes/energy-company-obligation-eco",
        last_verified: "2026-01-15",
    },
    GrantScheme {
        id: SchemeId::BoilerUpgradeScheme,
        name: "Boiler Upgrade Scheme (BUS)",
        kind: SchemeKind::National,
        administrator: "Ofgem",
        max_grant: 7_500,
        description: "The Boiler Upgrade Scheme provides upfront grants to property owners to cover part of the cost of replacing fossil fuel heating systems with low-carbon alternatives like heat pumps.",
        what_it_covers: &[
            "Air source heat pump installation (up to £7,500)",
            "Ground source heat pump installation (up to £7,500)",
            "Biomass boiler installation (up to £5,000)",
        ],
        eligibility: SchemeEligibility {
            epc_ratings: ANY_RATING,
            tenant_benefits: None,
            tenant_income_below: None,
            property_types: ALL_PROPERTIES,
            heating_systems: Some(&[
                HeatingSystem::GasBoiler,
                HeatingSystem::OilBoiler,
                HeatingSystem::Electric,
                HeatingSystem::Other,
            ]),
        },
        landlord_contribution: "You pay the difference between the grant and total installation cost. Typical heat pump costs £10,000-£18,000, so expect to pay £2,500-£10,500 after grant.",
        deadline: "Extended to March 2030",
        application_url: "https://www.gov.uk/apply-boiler-upgrade-scheme",
        last_verified: "2026-01-20",
    },
    GrantScheme {
        id: SchemeId::WarmHomesLocalGrant,
        name: "Warm Homes: Local Grant",
        kind: SchemeKind::Local,
        administrator: "Local authorities (via central government funding)",
        max_grant: 30_000,
        description: "The Warm Homes: Local Grant is a flagship scheme providing significant funding for energy efficiency improvements and low-carbon heating in private rented properties with low-income tenants.",
        what_it_covers: &[
            "Insulation measures (up to £15,000)",
            "Low-carbon heating systems (up to £15,000)",
            "Loft insulation",
            "Cavity wall insulation",
            "Solid wall insulation",
            "Underfloor insulation",
            "Air source heat pumps",
            "Ground source heat pumps",
        ],
        eligibility: SchemeEligibility {
            epc_ratings: BELOW_C,
            tenant_benefits: Some(true),
            tenant_income_below: Some(INCOME_THRESHOLD),
            property_types: ALL_PROPERTIES,
            heating_systems: None,
        },
        landlord_contribution: "First property: potentially full funding. Additional properties: 50% landlord contribution required.",
        deadline: "March 2028",
        application_url: "https://www.gov.uk/apply-warm-homes-local-grant",
        last_verified: "2026-01-21",
    },
    GrantScheme {
        id: SchemeId::GreatBritishInsulationScheme,
        name: "Great British Insulation Scheme (GBIS)",
        kind: SchemeKind::National,
        administrator: "Energy suppliers",
        max_grant: 5_000,
        description: "The Great British Insulation Scheme helps households in Council Tax bands A-D (or on low income) to access insulation measures at low or no cost through energy supplier funding.",
        what_it_covers: &[
            "Cavity wall insulation",
            "Loft insulation",
            "Flat roof insulation",
            "Solid wall insulation (limited availability)",
            "Underfloor insulation",
            "Room-in-roof insulation",
        ],
        eligibility: SchemeEligibility {
            epc_ratings: BELOW_C,
            tenant_benefits: None,
            tenant_income_below: None,
            property_types: ALL_PROPERTIES,
            heating_systems: None,
        },
        landlord_contribution: "Usually none for qualifying properties. Some measures may require small contribution.",
        deadline: "March 2026 (expected to be extended)",
        application_url: "https://www.gov.uk/apply-great-british-insulation-scheme",
        last_verified: "2026-01-18",
    },
];

pub fn scheme(id: SchemeId) -> &'static GrantScheme {
    match id {
        SchemeId::Eco4 => &GRANT_SCHEMES[0],
        SchemeId::BoilerUpgradeScheme => &GRANT_SCHEMES[1],
        SchemeId::WarmHomesLocalGrant => &GRANT_SCHEMES[2],
        SchemeId::GreatBritishInsulationScheme => &GRANT_SCHEMES[3],
    }
}

/// Schemes whose published terms are due for a re-check.
pub fn schemes_needing_refresh(today: NaiveDate) -> Vec<&'static GrantScheme> {
    GRANT_SCHEMES
        .iter()
        .filter(|scheme| scheme.needs_refresh(today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_lookup_matches_catalog_ids() {
        for entry in &GRANT_SCHEMES {
            assert_eq!(scheme(entry.id).id, entry.id);
            assert!(entry.last_verified_on().is_some());
        }
    }

    #[test]
    fn local_schemes_get_a_longer_verification_window() {
        let warm_homes = scheme(SchemeId::WarmHomesLocalGrant);
        let eco4 = scheme(SchemeId::Eco4);
        // Both verified mid-January 2026; ten days after Warm Homes' check.
        let today = NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date");

        assert!(!warm_homes.needs_refresh(today));
        assert!(eco4.needs_refresh(today));
    }

    #[test]
    fn refresh_list_is_empty_on_verification_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date");
        assert!(schemes_needing_refresh(today).is_empty());
    }
}
