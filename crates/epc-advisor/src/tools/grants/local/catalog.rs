use crate::property::{EpcRating, HeatingSystem, PropertyType, Region};
use crate::tools::grants::catalog::{
    SchemeKind, LOCAL_VERIFICATION_INTERVAL_DAYS, NATIONAL_VERIFICATION_INTERVAL_DAYS,
};
use crate::tools::grants::inputs::Tenure;
use chrono::NaiveDate;
use serde::Serialize;

/// Councils running their own landlord programmes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAuthority {
    pub id: &'static str,
    pub name: &'static str,
    pub region: Region,
    /// Outward-code prefixes, matched in catalog order.
    pub postcode_districts: &'static [&'static str],
    pub website_url: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
}

pub static LOCAL_AUTHORITIES: [LocalAuthority; 10] = [
    LocalAuthority {
        id: "manchester",
        name: "Manchester City Council",
        region: Region::NorthWest,
        postcode_districts: &[
            "M1", "M2", "M3", "M4", "M8", "M9", "M11", "M12", "M13", "M14", "M15", "M16", "M18",
            "M19", "M20", "M21", "M22", "M23", "M40",
        ],
        website_url: "https://www.manchester.gov.uk/info/500002/housing/8305/energy_efficiency_and_fuel_poverty",
        contact_email: "housing@manchester.gov.uk",
        contact_phone: "0161 234 5000",
    },
    LocalAuthority {
        id: "liverpool",
        name: "Liverpool City Council",
        region: Region::NorthWest,
        postcode_districts: &[
            "L1", "L2", "L3", "L4", "L5", "L6", "L7", "L8", "L9", "L10", "L11", "L12", "L13",
            "L14", "L15", "L16", "L17", "L18", "L19", "L24", "L25", "L27",
        ],
        website_url: "https://liverpool.gov.uk/housing/home-improvements/energy-grants/",
        contact_email: "energyteam@liverpool.gov.uk",
        contact_phone: "0151 233 3000",
    },
    LocalAuthority {
        id: "birmingham",
        name: "Birmingham City Council",
        region: Region::WestMidlands,
        postcode_districts: &[
            "B1", "B2", "B3", "B4", "B5", "B6", "B7", "B8", "B9", "B10", "B11", "B12", "B13",
            "B14", "B15", "B16", "B17", "B18", "B19", "B20", "B21", "B23", "B24", "B25", "B26",
            "B27", "B28", "B29", "B30", "B31", "B32", "B33", "B34", "B35", "B36", "B37", "B38",
            "B42", "B43", "B44", "B45", "B46", "B47",
        ],
        website_url: "https://www.birmingham.gov.uk/info/20015/housing_options_and_advice/1732/energy_efficiency_and_fuel_poverty",
        contact_email: "energy.advice@birmingham.gov.uk",
        contact_phone: "0121 303 1111",
    },
    LocalAuthority {
        id: "leeds",
        name: "Leeds City Council",
        region: Region::Yorkshire,
        postcode_districts: &[
            "LS1", "LS2", "LS3", "LS4", "LS5", "LS6", "LS7", "LS8", "LS9", "LS10", "LS11", "LS12",
            "LS13", "LS14", "LS15", "LS16", "LS17", "LS18", "LS19", "LS20", "LS25", "LS26",
            "LS27",
        ],
        website_url: "https://www.leeds.gov.uk/housing/home-energy-and-improvements",
        contact_email: "energyadvice@leeds.gov.uk",
        contact_phone: "0113 222 4407",
    },
    LocalAuthority {
        id: "sheffield",
        name: "Sheffield City Council",
        region: Region::Yorkshire,
        postcode_districts: &[
            "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10", "S11", "S12", "S13",
            "S14", "S17", "S20", "S35", "S36",
        ],
        website_url: "https://www.sheffield.gov.uk/home/housing/energy-grants-loans",
        contact_email: "energyadvice@sheffield.gov.uk",
        contact_phone: "0114 273 4567",
    },
    LocalAuthority {
        id: "bristol",
        name: "Bristol City Council",
        region: Region::SouthWest,
        postcode_districts: &[
            "BS1", "BS2", "BS3", "BS4", "BS5", "BS6", "BS7", "BS8", "BS9", "BS10", "BS11", "BS13",
            "BS14", "BS15", "BS16",
        ],
        website_url: "https://www.bristol.gov.uk/residents/housing/energy-efficiency-in-the-home",
        contact_email: "warm.homes@bristol.gov.uk",
        contact_phone: "0117 922 2000",
    },
    LocalAuthority {
        id: "newcastle",
        name: "Newcastle City Council",
        region: Region::NorthEast,
        postcode_districts: &[
            "NE1", "NE2", "NE3", "NE4", "NE5", "NE6", "NE7", "NE12", "NE13", "NE15",
        ],
        website_url: "https://www.newcastle.gov.uk/services/housing/energy-efficiency-grants",
        contact_email: "energyteam@newcastle.gov.uk",
        contact_phone: "0191 278 7878",
    },
    LocalAuthority {
        id: "nottingham",
        name: "Nottingham City Council",
        region: Region::EastMidlands,
        postcode_districts: &[
            "NG1", "NG2", "NG3", "NG4", "NG5", "NG6", "NG7", "NG8", "NG9", "NG11",
        ],
        website_url: "https://www.nottinghamcity.gov.uk/housing/energy-advice/",
        contact_email: "energy.services@nottinghamcity.gov.uk",
        contact_phone: "0115 915 5555",
    },
    LocalAuthority {
        id: "leicester",
        name: "Leicester City Council",
        region: Region::EastMidlands,
        postcode_districts: &["LE1", "LE2", "LE3", "LE4", "LE5"],
        website_url: "https://www.leicester.gov.uk/your-community/housing-and-regeneration/home-energy/",
        contact_email: "energyadvice@leicester.gov.uk",
        contact_phone: "0116 454 1000",
    },
    LocalAuthority {
        id: "camden",
        name: "London Borough of Camden",
        region: Region::London,
        postcode_districts: &[
            "NW1", "NW3", "NW5", "NW6", "WC1", "WC2", "N1C", "N6", "N7", "N19",
        ],
        website_url: "https://www.camden.gov.uk/energy-efficiency-and-fuel-poverty",
        contact_email: "sustainability@camden.gov.uk",
        contact_phone: "020 7974 4444",
    },
];

pub fn local_authority(id: &str) -> Option<&'static LocalAuthority> {
    LOCAL_AUTHORITIES.iter().find(|authority| authority.id == id)
}

pub fn local_authorities_in(region: Region) -> Vec<&'static LocalAuthority> {
    LOCAL_AUTHORITIES
        .iter()
        .filter(|authority| authority.region == region)
        .collect()
}

/// Nations a scheme is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    UkWide,
    GreatBritain,
    EnglandAndWales,
    England,
    Wales,
    Scotland,
    NorthernIreland,
}

impl Coverage {
    /// An unplaced postcode is only ruled out of single-nation schemes
    /// outside England.
    pub fn includes(self, region: Option<Region>) -> bool {
        let outside = |excluded: &[Region]| region.map_or(true, |r| !excluded.contains(&r));
        match self {
            Self::UkWide => true,
            Self::GreatBritain => outside(&[Region::NorthernIreland]),
            Self::EnglandAndWales => outside(&[Region::Scotland, Region::NorthernIreland]),
            Self::England => outside(&[Region::Scotland, Region::Wales, Region::NorthernIreland]),
            Self::Wales => region == Some(Region::Wales),
            Self::Scotland => region == Some(Region::Scotland),
            Self::NorthernIreland => region == Some(Region::NorthernIreland),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Administrator {
    Government,
    EnergySupplier,
    LocalAuthority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingCategory {
    Insulation,
    Heating,
    Renewable,
    Glazing,
    Ventilation,
    Multiple,
}

/// Published eligibility rules for a funding scheme.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epc_ratings: Option<&'static [EpcRating]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<&'static [PropertyType]>,
    pub tenures: &'static [Tenure],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_eligible: Option<&'static [HeatingSystem]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_excluded: Option<&'static [HeatingSystem]>,
    pub coverage: Coverage,
    /// Councils the scheme is limited to. Empty for national schemes.
    pub local_authority_ids: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_income_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_tenant_benefits: Option<bool>,
    pub allows_rental_properties: bool,
    pub requires_landlord_contribution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord_contribution_percent: Option<u32>,
    pub notes: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub administrator: Administrator,
    pub administrator_name: &'static str,
    pub max_grant: u32,
    pub min_grant: u32,
    pub categories: &'static [FundingCategory],
    pub eligibility: FundingCriteria,
    /// Scheme-specific steps shown once a landlord looks eligible.
    pub apply_steps: &'static [&'static str],
    pub application_url: &'static str,
    pub info_url: &'static str,
    pub start_date: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<&'static str>,
    pub is_active: bool,
    pub last_verified: &'static str,
    pub display_priority: u32,
}

impl FundingScheme {
    pub fn kind(&self) -> SchemeKind {
        if self.eligibility.local_authority_ids.is_empty() {
            SchemeKind::National
        } else {
            SchemeKind::Local
        }
    }

    /// Host part of the application URL, e.g. `www.gov.uk`.
    pub fn application_host(&self) -> &'static str {
        let url = self.application_url;
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }

    /// A scheme whose verification date cannot be read is always stale.
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        let interval = match self.kind() {
            SchemeKind::National => NATIONAL_VERIFICATION_INTERVAL_DAYS,
            SchemeKind::Local => LOCAL_VERIFICATION_INTERVAL_DAYS,
        };
        match NaiveDate::parse_from_str(self.last_verified, "%Y-%m-%d") {
            Ok(verified) => (today - verified).num_days() > interval,
            Err(_) => true,
        }
    }
}

const D_TO_G: &[EpcRating] = &[EpcRating::D, EpcRating::E, EpcRating::F, EpcRating::G];
const E_TO_G: &[EpcRating] = &[EpcRating::E, EpcRating::F, EpcRating::G];
const ANY_TENURE: &[Tenure] = &[Tenure::Freehold, Tenure::Leasehold];
const NON_HEAT_PUMP: &[HeatingSystem] = &[
    HeatingSystem::GasBoiler,
    HeatingSystem::Electric,
    HeatingSystem::OilBoiler,
    HeatingSystem::Lpg,
    HeatingSystem::Other,
];
const HEAT_PUMP: &[HeatingSystem] = &[HeatingSystem::HeatPump];

/// Council scheme open to freehold and leasehold rentals in England.
const fn council_criteria(
    authority: &'static [&'static str],
    epc_ratings: &'static [EpcRating],
    landlord_contribution_percent: u32,
    notes: &'static [&'static str],
) -> FundingCriteria {
    FundingCriteria {
        epc_ratings: Some(epc_ratings),
        property_types: None,
        tenures: ANY_TENURE,
        heating_eligible: None,
        heating_excluded: None,
        coverage: Coverage::England,
        local_authority_ids: authority,
        tenant_income_threshold: None,
        requires_tenant_benefits: None,
        allows_rental_properties: true,
        requires_landlord_contribution: true,
        landlord_contribution_percent: Some(landlord_contribution_percent),
        notes,
    }
}

pub static FUNDING_SCHEMES: [FundingScheme; 14] = [
    FundingScheme {
        id: "eco4",
        name: "ECO4 (Energy Company Obligation)",
        description: "Funding from major energy suppliers for insulation and heating improvements in fuel-poor households.",
        administrator: Administrator::EnergySupplier,
        administrator_name: "Obligated Energy Suppliers (via Ofgem)",
        max_grant: 15_000,
        min_grant: 1_000,
        categories: &[FundingCategory::Insulation, FundingCategory::Heating],
        eligibility: FundingCriteria {
            epc_ratings: Some(D_TO_G),
            property_types: None,
            tenures: ANY_TENURE,
            heating_eligible: Some(NON_HEAT_PUMP),
            heating_excluded: None,
            coverage: Coverage::GreatBritain,
            local_authority_ids: &[],
            tenant_income_threshold: None,
            requires_tenant_benefits: Some(true),
            allows_rental_properties: true,
            requires_landlord_contribution: false,
            landlord_contribution_percent: None,
            notes: &[
                "Tenant must receive qualifying benefits (e.g., Universal Credit, Pension Credit, Income Support, ESA, JSA, Child Tax Credit, Working Tax Credit, Housing Benefit)",
                "Improvements must be recommended on the EPC certificate or by a retrofit assessor",
                "No cost to landlord for qualifying properties",
            ],
        },
        apply_steps: &[
            "Contact an ECO4 approved installer or energy supplier",
            "Gather tenant benefit documentation",
        ],
        application_url: "https://www.simpleenergyadvice.org.uk/grants",
        info_url: "https://www.ofgem.gov.uk/environmental-and-social-schemes/energy-company-obligation-eco",
        start_date: "2022-04-01",
        end_date: Some("2026-03-31"),
        is_active: true,
        last_verified: "2026-01-28",
        display_priority: 1,
    },
    FundingScheme {
        id: "boiler-upgrade-scheme",
        name: "Boiler Upgrade Scheme (BUS)",
        description: "Government grants for heat pump and biomass boiler installation to replace fossil fuel heating.",
        administrator: Administrator::Government,
        administrator_name: "Department for Energy Security and Net Zero (DESNZ)",
        max_grant: 7_500,
        min_grant: 5_000,
        categories: &[FundingCategory::Heating, FundingCategory::Renewable],
        eligibility: FundingCriteria {
            epc_ratings: None,
            property_types: None,
            tenures: ANY_TENURE,
            heating_eligible: Some(NON_HEAT_PUMP),
            heating_excluded: Some(HEAT_PUMP),
            coverage: Coverage::EnglandAndWales,
            local_authority_ids: &[],
            tenant_income_threshold: None,
            requires_tenant_benefits: None,
            allows_rental_properties: true,
            requires_landlord_contribution: true,
            landlord_contribution_percent: None,
            notes: &[
                "Property must have a valid EPC (less than 10 years old)",
                "Must replace fossil fuel heating (gas, oil, LPG) or direct electric heating",
                "Installer must be MCS certified",
                "Grant paid directly to installer",
            ],
        },
        apply_steps: &[
            "Find an MCS-certified heat pump installer",
            "Ensure property has valid EPC (less than 10 years old)",
        ],
        application_url: "https://www.gov.uk/apply-boiler-upgrade-scheme",
        info_url: "https://www.gov.uk/guidance/apply-for-the-boiler-upgrade-scheme",
        start_date: "2022-04-01",
        end_date: Some("2028-03-31"),
        is_active: true,
        last_verified: "2026-01-28",
        display_priority: 2,
    },
    FundingScheme {
        id: "warm-homes-local",
        name: "Warm Homes: Local Grant",
        description: "New government scheme providing up to £30,000 for comprehensive energy efficiency improvements.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Local Authorities (on behalf of DESNZ)",
        max_grant: 30_000,
        min_grant: 5_000,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Glazing,
            FundingCategory::Ventilation,
            FundingCategory::Multiple,
        ],
        eligibility: FundingCriteria {
            epc_ratings: Some(D_TO_G),
            property_types: None,
            tenures: ANY_TENURE,
            heating_eligible: None,
            heating_excluded: None,
            coverage: Coverage::England,
            local_authority_ids: &[],
            tenant_income_threshold: Some(36_000),
            requires_tenant_benefits: Some(false),
            allows_rental_properties: true,
            // only additional properties pay the 50% share
            requires_landlord_contribution: false,
            landlord_contribution_percent: Some(50),
            notes: &[
                "Tenant must have household income below £36,000 OR receive qualifying benefits",
                "First eligible property: up to £30,000 with no landlord contribution",
                "Additional properties: landlord must contribute 50% of costs",
                "Delivered through local authorities - check local availability",
            ],
        },
        apply_steps: &[
            "Contact your local authority energy team",
            "Gather tenant income/benefit documentation",
        ],
        application_url: "https://www.gov.uk/apply-warm-homes-local-grant",
        info_url: "https://www.gov.uk/government/publications/warm-homes-local-grant",
        start_date: "2025-04-01",
        end_date: None,
        is_active: true,
        last_verified: "2026-01-28",
        display_priority: 3,
    },
    FundingScheme {
        id: "great-british-insulation-scheme",
        name: "Great British Insulation Scheme (GBIS)",
        description: "Energy supplier-funded insulation scheme for properties in lower council tax bands.",
        administrator: Administrator::EnergySupplier,
        administrator_name: "Obligated Energy Suppliers (via Ofgem)",
        max_grant: 8_000,
        min_grant: 500,
        categories: &[FundingCategory::Insulation],
        eligibility: FundingCriteria {
            epc_ratings: Some(D_TO_G),
            property_types: None,
            tenures: ANY_TENURE,
            heating_eligible: None,
            heating_excluded: None,
            coverage: Coverage::GreatBritain,
            local_authority_ids: &[],
            tenant_income_threshold: None,
            requires_tenant_benefits: None,
            allows_rental_properties: true,
            requires_landlord_contribution: true,
            landlord_contribution_percent: None,
            notes: &[
                "Property must be in council tax bands A-D (England) or A-E (Scotland/Wales)",
                "No benefit requirements - based on property council tax band",
                "Combines with ECO4 for comprehensive improvements",
            ],
        },
        apply_steps: &[],
        application_url: "https://www.simpleenergyadvice.org.uk/grants",
        info_url: "https://www.gov.uk/apply-great-british-insulation-scheme",
        start_date: "2023-04-01",
        end_date: Some("2026-03-31"),
        is_active: true,
        last_verified: "2026-01-28",
        display_priority: 4,
    },
    FundingScheme {
        id: "manchester-retrofit-accelerator",
        name: "Manchester Retrofit Accelerator",
        description: "Manchester City Council scheme providing grants and loans for comprehensive retrofitting.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Manchester City Council",
        max_grant: 10_000,
        min_grant: 2_000,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Multiple,
        ],
        eligibility: council_criteria(
            &["manchester"],
            D_TO_G,
            25,
            &[
                "Interest-free loan available for remaining costs",
                "Must commit to keeping property in rental sector for minimum 5 years",
            ],
        ),
        apply_steps: &[],
        application_url: "https://www.manchester.gov.uk/info/500002/housing/8305/retrofit_accelerator",
        info_url: "https://www.manchester.gov.uk/info/500002/housing/8305/energy_efficiency_and_fuel_poverty",
        start_date: "2024-04-01",
        end_date: Some("2027-03-31"),
        is_active: true,
        last_verified: "2026-01-25",
        display_priority: 10,
    },
    FundingScheme {
        id: "birmingham-warm-homes",
        name: "Birmingham Warm Homes",
        description: "Birmingham City Council energy efficiency programme for private landlords.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Birmingham City Council",
        max_grant: 8_000,
        min_grant: 1_500,
        categories: &[FundingCategory::Insulation, FundingCategory::Heating],
        eligibility: FundingCriteria {
            heating_eligible: Some(NON_HEAT_PUMP),
            requires_tenant_benefits: Some(false),
            ..council_criteria(
                &["birmingham"],
                E_TO_G,
                35,
                &[
                    "Priority given to EPC F and G properties",
                    "Annual budget limited - apply early",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.birmingham.gov.uk/warmhomes/apply",
        info_url: "https://www.birmingham.gov.uk/info/20015/housing_options_and_advice/1732/energy_efficiency_and_fuel_poverty",
        start_date: "2023-10-01",
        end_date: Some("2026-09-30"),
        is_active: true,
        last_verified: "2026-01-22",
        display_priority: 11,
    },
    FundingScheme {
        id: "leeds-home-energy-efficiency",
        name: "Leeds Home Energy Efficiency Scheme",
        description: "Leeds City Council programme supporting landlords with energy improvements.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Leeds City Council",
        max_grant: 12_000,
        min_grant: 2_500,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Renewable,
        ],
        eligibility: FundingCriteria {
            tenant_income_threshold: Some(36_000),
            ..council_criteria(
                &["leeds"],
                D_TO_G,
                33,
                &[
                    "Tenant household income must be below £36,000 or on qualifying benefits",
                    "Solid wall insulation given priority",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.leeds.gov.uk/housing/home-energy-and-improvements/apply",
        info_url: "https://www.leeds.gov.uk/housing/home-energy-and-improvements",
        start_date: "2024-01-01",
        end_date: Some("2027-03-31"),
        is_active: true,
        last_verified: "2026-01-24",
        display_priority: 12,
    },
    FundingScheme {
        id: "liverpool-warmer-homes",
        name: "Liverpool Warmer Homes",
        description: "Liverpool City Council grant scheme for landlords improving energy efficiency.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Liverpool City Council",
        max_grant: 15_000,
        min_grant: 3_000,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Multiple,
        ],
        eligibility: council_criteria(
            &["liverpool"],
            D_TO_G,
            25,
            &[
                "Higher grants available for solid wall properties",
                "Can combine with ECO4 for eligible households",
            ],
        ),
        apply_steps: &[],
        application_url: "https://liverpool.gov.uk/housing/home-improvements/energy-grants/apply",
        info_url: "https://liverpool.gov.uk/housing/home-improvements/energy-grants/",
        start_date: "2024-04-01",
        end_date: Some("2027-03-31"),
        is_active: true,
        last_verified: "2026-01-20",
        display_priority: 13,
    },
    FundingScheme {
        id: "bristol-city-leap",
        name: "Bristol City Leap - Landlord Support",
        description: "Bristol City Council partnership offering grants for landlord energy improvements.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Bristol City Council / City Leap Partnership",
        max_grant: 10_000,
        min_grant: 2_000,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Renewable,
        ],
        eligibility: FundingCriteria {
            heating_eligible: Some(NON_HEAT_PUMP),
            heating_excluded: Some(HEAT_PUMP),
            ..council_criteria(
                &["bristol"],
                D_TO_G,
                30,
                &[
                    "Higher grants for heat pump installation",
                    "Interest-free loan available for contribution",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.bristolcityleap.co.uk/landlords/apply",
        info_url: "https://www.bristol.gov.uk/residents/housing/energy-efficiency-in-the-home",
        start_date: "2024-06-01",
        end_date: Some("2028-03-31"),
        is_active: true,
        last_verified: "2026-01-23",
        display_priority: 14,
    },
    FundingScheme {
        id: "sheffield-warm-homes",
        name: "Sheffield Warm Homes Grant",
        description: "Sheffield City Council energy efficiency scheme for private landlords.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Sheffield City Council",
        max_grant: 9_000,
        min_grant: 2_000,
        categories: &[FundingCategory::Insulation, FundingCategory::Heating],
        eligibility: FundingCriteria {
            heating_eligible: Some(NON_HEAT_PUMP),
            ..council_criteria(
                &["sheffield"],
                E_TO_G,
                40,
                &[
                    "Solid wall insulation given priority",
                    "Annual fund limited - applications assessed monthly",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.sheffield.gov.uk/home/housing/energy-grants-loans/apply",
        info_url: "https://www.sheffield.gov.uk/home/housing/energy-grants-loans",
        start_date: "2024-04-01",
        end_date: Some("2027-03-31"),
        is_active: true,
        last_verified: "2026-01-21",
        display_priority: 15,
    },
    FundingScheme {
        id: "newcastle-warmzone",
        name: "Newcastle Warmzone",
        description: "Newcastle City Council programme for landlord energy efficiency improvements.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Newcastle City Council",
        max_grant: 8_000,
        min_grant: 1_500,
        categories: &[FundingCategory::Insulation, FundingCategory::Heating],
        eligibility: council_criteria(
            &["newcastle"],
            D_TO_G,
            30,
            &[
                "Higher grants in designated fuel poverty areas",
                "Can combine with ECO4 funding",
            ],
        ),
        apply_steps: &[],
        application_url: "https://www.newcastle.gov.uk/services/housing/energy-efficiency-grants/apply",
        info_url: "https://www.newcastle.gov.uk/services/housing/energy-efficiency-grants",
        start_date: "2024-04-01",
        end_date: Some("2027-03-31"),
        is_active: true,
        last_verified: "2026-01-19",
        display_priority: 16,
    },
    FundingScheme {
        id: "nottingham-green-landlord",
        name: "Nottingham Green Landlord Scheme",
        description: "Nottingham City Council grant programme for private landlords.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Nottingham City Council",
        max_grant: 7_500,
        min_grant: 1_500,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Glazing,
        ],
        eligibility: council_criteria(
            &["nottingham"],
            D_TO_G,
            25,
            &[
                "Higher grants for accredited landlords",
                "Interest-free loan available for landlord contribution",
            ],
        ),
        apply_steps: &[],
        application_url: "https://www.nottinghamcity.gov.uk/housing/energy-advice/green-landlord/apply",
        info_url: "https://www.nottinghamcity.gov.uk/housing/energy-advice/",
        start_date: "2024-01-01",
        end_date: Some("2026-12-31"),
        is_active: true,
        last_verified: "2026-01-18",
        display_priority: 17,
    },
    FundingScheme {
        id: "leicester-affordable-warmth",
        name: "Leicester Affordable Warmth",
        description: "Leicester City Council energy efficiency programme for landlords.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "Leicester City Council",
        max_grant: 6_000,
        min_grant: 1_000,
        categories: &[FundingCategory::Insulation, FundingCategory::Heating],
        eligibility: FundingCriteria {
            requires_tenant_benefits: Some(true),
            ..council_criteria(
                &["leicester"],
                E_TO_G,
                50,
                &[
                    "Tenant must be on qualifying benefits",
                    "Limited annual budget - early application advised",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.leicester.gov.uk/your-community/housing-and-regeneration/home-energy/apply",
        info_url: "https://www.leicester.gov.uk/your-community/housing-and-regeneration/home-energy/",
        start_date: "2024-04-01",
        end_date: Some("2026-03-31"),
        is_active: true,
        last_verified: "2026-01-17",
        display_priority: 18,
    },
    FundingScheme {
        id: "camden-green-homes",
        name: "Camden Green Homes Grant",
        description: "Camden Council grant programme for private landlords in the borough.",
        administrator: Administrator::LocalAuthority,
        administrator_name: "London Borough of Camden",
        max_grant: 12_000,
        min_grant: 3_000,
        categories: &[
            FundingCategory::Insulation,
            FundingCategory::Heating,
            FundingCategory::Renewable,
        ],
        eligibility: FundingCriteria {
            heating_eligible: Some(NON_HEAT_PUMP),
            ..council_criteria(
                &["camden"],
                D_TO_G,
                40,
                &[
                    "Additional support for listed buildings and conservation areas",
                    "Focus on meeting upcoming MEES requirements",
                ],
            )
        },
        apply_steps: &[],
        application_url: "https://www.camden.gov.uk/green-homes-grant/apply",
        info_url: "https://www.camden.gov.uk/energy-efficiency-and-fuel-poverty",
        start_date: "2024-04-01",
        end_date: Some("2028-03-31"),
        is_active: true,
        last_verified: "2026-01-26",
        display_priority: 19,
    },
];

pub fn funding_scheme(id: &str) -> Option<&'static FundingScheme> {
    FUNDING_SCHEMES.iter().find(|scheme| scheme.id == id)
}

pub fn national_funding_schemes() -> Vec<&'static FundingScheme> {
    FUNDING_SCHEMES
        .iter()
        .filter(|scheme| scheme.kind() == SchemeKind::National)
        .collect()
}

pub fn schemes_for_authority(authority_id: &str) -> Vec<&'static FundingScheme> {
    FUNDING_SCHEMES
        .iter()
        .filter(|scheme| scheme.eligibility.local_authority_ids.contains(&authority_id))
        .collect()
}

pub fn schemes_in_category(category: FundingCategory) -> Vec<&'static FundingScheme> {
    FUNDING_SCHEMES
        .iter()
        .filter(|scheme| scheme.categories.contains(&category))
        .collect()
}

pub fn funding_schemes_needing_refresh(today: NaiveDate) -> Vec<&'static FundingScheme> {
    FUNDING_SCHEMES
        .iter()
        .filter(|scheme| scheme.needs_refresh(today))
        .collect()
}
