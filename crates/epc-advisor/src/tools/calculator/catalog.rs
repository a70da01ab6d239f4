//! Improvement measures priced at national average 2025-2026 rates.

use crate::property::{GlazingType, HeatingSystem, LoftInsulation, PropertyType, WallConstruction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImprovementCategory {
    Insulation,
    Heating,
    Glazing,
    Controls,
    Renewable,
    Other,
}

impl ImprovementCategory {
    /// Categories whose cost grows with floor area.
    pub const fn scales_with_size(self) -> bool {
        matches!(self, Self::Insulation | Self::Glazing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisruptionLevel {
    Low,
    Medium,
    High,
}

/// Property states that must hold before a measure makes sense.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisites {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_construction: Option<&'static [WallConstruction]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_system: Option<&'static [HeatingSystem]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loft_insulation: Option<&'static [LoftInsulation]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glazing_type: Option<&'static [GlazingType]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<&'static str>,
}

/// Property states that rule a measure out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusions {
    pub wall_construction: &'static [WallConstruction],
    pub heating_system: &'static [HeatingSystem],
    pub loft_insulation: &'static [LoftInsulation],
    pub glazing_type: &'static [GlazingType],
    pub property_types: &'static [PropertyType],
}

const NO_PREREQUISITES: Prerequisites = Prerequisites {
    wall_construction: None,
    heating_system: None,
    loft_insulation: None,
    glazing_type: None,
    other: None,
};

const NO_EXCLUSIONS: Exclusions = Exclusions {
    wall_construction: &[],
    heating_system: &[],
    loft_insulation: &[],
    glazing_type: &[],
    property_types: &[],
};

const FLATS: &[PropertyType] = &[PropertyType::PurposeBuiltFlat, PropertyType::ConvertedFlat];
const SOLID_OR_MIXED: &[WallConstruction] = &[WallConstruction::Solid, WallConstruction::Mixed];
const WET_HEATING: &[HeatingSystem] = &[
    HeatingSystem::GasBoiler,
    HeatingSystem::OilBoiler,
    HeatingSystem::HeatPump,
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementData {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ImprovementCategory,
    pub base_cost_low: u32,
    pub base_cost_high: u32,
    #[serde(rename = "typicalEPCPoints")]
    pub typical_epc_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_property_types: Option<&'static [PropertyType]>,
    pub prerequisites: Prerequisites,
    pub exclusions: Exclusions,
    pub typical_install_days: &'static str,
    pub disruption_level: DisruptionLevel,
    pub commonly_recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
    pub data_source: &'static str,
}

pub static IMPROVEMENTS: [ImprovementData; 23] = [
    ImprovementData {
        id: "loft-insulation-topup",
        name: "Loft Insulation Top-Up",
        description: "Top up existing loft insulation to the recommended 300mm depth with mineral wool or similar material. One of the most cost-effective energy efficiency improvements.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 400,
        base_cost_high: 600,
        typical_epc_points: 4,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            loft_insulation: Some(&[
                LoftInsulation::Uninsulated,
                LoftInsulation::Under100mm,
                LoftInsulation::Between100And270mm,
            ]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            loft_insulation: &[LoftInsulation::Over270mm, LoftInsulation::NoLoft],
            property_types: &[PropertyType::PurposeBuiltFlat],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("DIY possible for competent householders. Professional install recommended for full coverage."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "loft-insulation-full",
        name: "Full Loft Insulation",
        description: "Complete loft insulation installation from scratch to 300mm depth. Includes laying 270mm between joists plus 100mm cross-layer.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 600,
        base_cost_high: 1_000,
        typical_epc_points: 8,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            loft_insulation: Some(&[LoftInsulation::Uninsulated]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            loft_insulation: &[
                LoftInsulation::Under100mm,
                LoftInsulation::Between100And270mm,
                LoftInsulation::Over270mm,
                LoftInsulation::NoLoft,
            ],
            property_types: &[PropertyType::PurposeBuiltFlat],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-4 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: None,
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "cavity-wall-insulation",
        name: "Cavity Wall Insulation",
        description: "Fill the cavity between inner and outer walls with insulation material (typically mineral wool, EPS beads, or foam). Reduces heat loss through walls by up to 35%.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 800,
        base_cost_high: 1_500,
        typical_epc_points: 10,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            wall_construction: Some(&[WallConstruction::Cavity]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            wall_construction: SOLID_OR_MIXED,
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-3 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("Not suitable for all cavity walls. Survey required to check suitability. Properties in exposed locations may need alternative approaches."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "internal-wall-insulation",
        name: "Internal Solid Wall Insulation",
        description: "Insulation boards or stud walls with insulation fitted to inside of external walls. Suitable for solid wall properties. Reduces room size slightly.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 8_000,
        base_cost_high: 14_000,
        typical_epc_points: 14,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            wall_construction: Some(SOLID_OR_MIXED),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            wall_construction: &[WallConstruction::Cavity],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 weeks",
        disruption_level: DisruptionLevel::High,
        commonly_recommended: true,
        notes: Some("Requires redecoration. May need skirting boards, coving, and electrical fittings to be moved. Less disruptive than external insulation to streetscape."),
        data_source: "Energy Saving Trust 2025, BEIS estimates",
    },
    ImprovementData {
        id: "external-wall-insulation",
        name: "External Solid Wall Insulation",
        description: "Insulation boards fixed to outside walls and covered with render or cladding. Maintains internal room sizes and reduces thermal bridging.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 10_000,
        base_cost_high: 20_000,
        typical_epc_points: 16,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            wall_construction: Some(SOLID_OR_MIXED),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            wall_construction: &[WallConstruction::Cavity],
            property_types: FLATS,
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-4 weeks",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: true,
        notes: Some("May require planning permission, especially in conservation areas. Changes external appearance. Often best combined with other external works."),
        data_source: "Energy Saving Trust 2025, BEIS estimates",
    },
    ImprovementData {
        id: "floor-insulation-suspended",
        name: "Suspended Floor Insulation",
        description: "Insulation fitted between floor joists from below (if accessible) or from above. Suitable for properties with suspended timber floors and accessible void.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 800,
        base_cost_high: 1_500,
        typical_epc_points: 4,
        applicable_property_types: Some(&[
            PropertyType::VictorianTerrace,
            PropertyType::Edwardian1920s,
            PropertyType::Semi1930s,
            PropertyType::PostWar1950s1960s,
        ]),
        prerequisites: Prerequisites {
            other: Some("Suspended timber floor with accessible void"),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            property_types: &[PropertyType::PurposeBuiltFlat],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 days",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("Access from below preferred to avoid disrupting floor finishes. May require ventilation adjustments."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "floor-insulation-solid",
        name: "Solid Floor Insulation",
        description: "Insulation added above solid concrete floors during renovation. Requires lifting and relaying floor finishes or screeding over insulation.",
        category: ImprovementCategory::Insulation,
        base_cost_low: 2_000,
        base_cost_high: 5_000,
        typical_epc_points: 3,
        applicable_property_types: Some(&[
            PropertyType::PostWar1950s1960s,
            PropertyType::Modern1970s1980s,
            PropertyType::Recent1990sLater,
            PropertyType::PurposeBuiltFlat,
        ]),
        prerequisites: Prerequisites {
            other: Some("Solid concrete floor, major renovation planned"),
            ..NO_PREREQUISITES
        },
        exclusions: NO_EXCLUSIONS,
        typical_install_days: "3-7 days",
        disruption_level: DisruptionLevel::High,
        commonly_recommended: false,
        notes: Some("Only practical during major renovation. Consider when replacing floor finishes anyway."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "double-glazing",
        name: "Double Glazing Installation",
        description: "Replace single glazed windows with A-rated double glazing throughout the property. Modern units have low-e coatings and argon fill for best performance.",
        category: ImprovementCategory::Glazing,
        base_cost_low: 4_000,
        base_cost_high: 8_000,
        typical_epc_points: 6,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            glazing_type: Some(&[GlazingType::Single, GlazingType::Mixed]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            glazing_type: &[GlazingType::Double, GlazingType::Triple],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-3 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: true,
        notes: Some("Listed buildings and conservation areas may have restrictions. Secondary glazing may be an alternative."),
        data_source: "Energy Saving Trust 2025, glazing industry estimates",
    },
    ImprovementData {
        id: "triple-glazing",
        name: "Triple Glazing Installation",
        description: "Premium triple glazed windows for maximum thermal performance. Best suited to new builds or major renovations in colder regions.",
        category: ImprovementCategory::Glazing,
        base_cost_low: 6_000,
        base_cost_high: 12_000,
        typical_epc_points: 8,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            glazing_type: Some(&[GlazingType::Single, GlazingType::Mixed, GlazingType::Double]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            glazing_type: &[GlazingType::Triple],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-3 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: false,
        notes: Some("Marginal benefit over double glazing in most cases. Consider only for very cold regions or where noise reduction also needed."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "secondary-glazing",
        name: "Secondary Glazing",
        description: "Additional internal window fitted inside existing single glazed windows. Good option for listed buildings and conservation areas.",
        category: ImprovementCategory::Glazing,
        base_cost_low: 1_500,
        base_cost_high: 3_500,
        typical_epc_points: 3,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            glazing_type: Some(&[GlazingType::Single]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            glazing_type: &[GlazingType::Double, GlazingType::Triple],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 days",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: false,
        notes: Some("Preserves original windows. Good for heritage properties. Less effective than replacement double glazing."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "draught-proofing",
        name: "Draught Proofing",
        description: "Seal gaps around windows, doors, letterboxes, and other openings. Low-cost measure with immediate comfort and efficiency benefits.",
        category: ImprovementCategory::Other,
        base_cost_low: 200,
        base_cost_high: 400,
        typical_epc_points: 2,
        applicable_property_types: None,
        prerequisites: NO_PREREQUISITES,
        exclusions: NO_EXCLUSIONS,
        typical_install_days: "2-4 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("DIY possible for many applications. Professional install for comprehensive treatment."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "new-gas-boiler",
        name: "New A-Rated Gas Boiler",
        description: "Replace old inefficient boiler with modern A-rated condensing gas boiler. Modern boilers are 90%+ efficient vs 60-70% for older models.",
        category: ImprovementCategory::Heating,
        base_cost_low: 2_500,
        base_cost_high: 4_000,
        typical_epc_points: 8,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            heating_system: Some(&[HeatingSystem::GasBoiler]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::HeatPump, HeatingSystem::Electric],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: true,
        notes: Some("Gas boiler replacements may become more restricted as UK moves toward net zero. Consider future-proofing with heat pump."),
        data_source: "Energy Saving Trust 2025, Boiler Guide surveys",
    },
    ImprovementData {
        id: "air-source-heat-pump",
        name: "Air Source Heat Pump",
        description: "Low-carbon heating system that extracts heat from outside air. Eligible for Boiler Upgrade Scheme grants (up to £7,500). Running costs depend on electricity prices.",
        category: ImprovementCategory::Heating,
        base_cost_low: 10_000,
        base_cost_high: 15_000,
        typical_epc_points: 12,
        applicable_property_types: None,
        prerequisites: NO_PREREQUISITES,
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::HeatPump],
            property_types: FLATS,
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-5 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: true,
        notes: Some("Works best with good insulation and larger radiators or underfloor heating. May require planning permission for outdoor unit. BUS grant can reduce cost significantly."),
        data_source: "Energy Saving Trust 2025, Heat Pump Association",
    },
    ImprovementData {
        id: "ground-source-heat-pump",
        name: "Ground Source Heat Pump",
        description: "Premium heat pump system using ground loops or boreholes. Higher efficiency than air source but requires garden space and higher install cost.",
        category: ImprovementCategory::Heating,
        base_cost_low: 18_000,
        base_cost_high: 35_000,
        typical_epc_points: 14,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            other: Some("Adequate garden/land for ground loop installation"),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::HeatPump],
            property_types: &[
                PropertyType::PurposeBuiltFlat,
                PropertyType::ConvertedFlat,
                PropertyType::VictorianTerrace,
            ],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "3-7 days",
        disruption_level: DisruptionLevel::High,
        commonly_recommended: false,
        notes: Some("Higher upfront cost but lower running costs than ASHP. BUS grant up to £7,500 available."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "oil-to-heat-pump",
        name: "Oil to Heat Pump Conversion",
        description: "Replace oil boiler with air source heat pump. Particularly beneficial given oil price volatility and carbon emissions from oil heating.",
        category: ImprovementCategory::Heating,
        base_cost_low: 11_000,
        base_cost_high: 16_000,
        typical_epc_points: 14,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            heating_system: Some(&[HeatingSystem::OilBoiler]),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[
                HeatingSystem::GasBoiler,
                HeatingSystem::HeatPump,
                HeatingSystem::Electric,
            ],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-5 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: true,
        notes: Some("Oil tank can be removed. BUS grant available. May require radiator upgrades."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "smart-heating-controls",
        name: "Smart Heating Controls",
        description: "Smart thermostat with app control, learning features, and room-by-room temperature management. Optimises heating based on occupancy and preferences.",
        category: ImprovementCategory::Controls,
        base_cost_low: 200,
        base_cost_high: 400,
        typical_epc_points: 2,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            heating_system: Some(WET_HEATING),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::Electric],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-4 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("Requires WiFi. Many options available (Hive, Nest, tado, etc.). DIY install possible for some models."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "heating-zone-controls",
        name: "Heating Zone Controls",
        description: "Divide property into heating zones with independent thermostats and motorised valves. Heat only occupied areas.",
        category: ImprovementCategory::Controls,
        base_cost_low: 400,
        base_cost_high: 800,
        typical_epc_points: 3,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            heating_system: Some(WET_HEATING),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::Electric],
            property_types: &[PropertyType::PurposeBuiltFlat],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1 day",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: false,
        notes: Some("Most beneficial for larger properties. Requires 2-port valves on each zone."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "trv-upgrade",
        name: "Thermostatic Radiator Valves",
        description: "Fit TRVs to all radiators to allow individual room temperature control. Prevents overheating and saves energy.",
        category: ImprovementCategory::Controls,
        base_cost_low: 150,
        base_cost_high: 300,
        typical_epc_points: 1,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            heating_system: Some(WET_HEATING),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            heating_system: &[HeatingSystem::Electric],
            ..NO_EXCLUSIONS
        },
        typical_install_days: "2-4 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("Do not fit TRV to radiator in same room as main thermostat. Smart TRVs available at higher cost."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "hot-water-cylinder-insulation",
        name: "Hot Water Cylinder Insulation",
        description: "Add or upgrade insulation jacket on hot water cylinder. Very cost-effective if cylinder has no or thin existing jacket.",
        category: ImprovementCategory::Other,
        base_cost_low: 30,
        base_cost_high: 80,
        typical_epc_points: 1,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            other: Some("Property has hot water cylinder (not combi boiler)"),
            ..NO_PREREQUISITES
        },
        exclusions: NO_EXCLUSIONS,
        typical_install_days: "30 minutes",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("DIY task. Ensure jacket is at least 80mm thick. Factory-insulated cylinders may not need additional jacket."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "pipe-insulation",
        name: "Hot Water Pipe Insulation",
        description: "Insulate hot water pipes, particularly in unheated areas like lofts and garages. Reduces heat loss from pipework.",
        category: ImprovementCategory::Other,
        base_cost_low: 50,
        base_cost_high: 150,
        typical_epc_points: 1,
        applicable_property_types: None,
        prerequisites: NO_PREREQUISITES,
        exclusions: NO_EXCLUSIONS,
        typical_install_days: "1-2 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("DIY task. Focus on pipes in unheated spaces first."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "led-lighting",
        name: "LED Lighting Upgrade",
        description: "Replace all halogen and incandescent bulbs with LED equivalents. LEDs use 75-90% less energy and last much longer.",
        category: ImprovementCategory::Other,
        base_cost_low: 100,
        base_cost_high: 300,
        typical_epc_points: 2,
        applicable_property_types: None,
        prerequisites: NO_PREREQUISITES,
        exclusions: NO_EXCLUSIONS,
        typical_install_days: "1-2 hours",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("DIY task for most fittings. Some specialist fittings may need electrician. Check dimmer compatibility."),
        data_source: "Energy Saving Trust 2025",
    },
    ImprovementData {
        id: "solar-pv",
        name: "Solar PV Panels",
        description: "Rooftop solar photovoltaic panels to generate electricity. Typical 3-4kW system suits most homes. Excess can be exported to grid.",
        category: ImprovementCategory::Renewable,
        base_cost_low: 5_000,
        base_cost_high: 8_000,
        typical_epc_points: 8,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            other: Some("Suitable roof orientation (ideally south-facing) and structural capacity"),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            property_types: FLATS,
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 days",
        disruption_level: DisruptionLevel::Low,
        commonly_recommended: true,
        notes: Some("Planning permission usually not required. Listed buildings and conservation areas may have restrictions. Battery storage adds £2,000-4,000."),
        data_source: "Energy Saving Trust 2025, MCS installer data",
    },
    ImprovementData {
        id: "solar-thermal",
        name: "Solar Water Heating",
        description: "Solar thermal panels to heat hot water. Best combined with a hot water cylinder system. Provides 50-70% of hot water needs in summer.",
        category: ImprovementCategory::Renewable,
        base_cost_low: 3_000,
        base_cost_high: 5_000,
        typical_epc_points: 4,
        applicable_property_types: None,
        prerequisites: Prerequisites {
            other: Some("Compatible hot water cylinder and suitable roof space"),
            ..NO_PREREQUISITES
        },
        exclusions: Exclusions {
            property_types: FLATS,
            ..NO_EXCLUSIONS
        },
        typical_install_days: "1-2 days",
        disruption_level: DisruptionLevel::Medium,
        commonly_recommended: false,
        notes: Some("Solar PV generally offers better value now. Consider if PV not suitable."),
        data_source: "Energy Saving Trust 2025",
    },
];

pub fn improvement_details(id: &str) -> Option<&'static ImprovementData> {
    IMPROVEMENTS.iter().find(|improvement| improvement.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_holds_twenty_three_unique_measures() {
        let ids: HashSet<_> = IMPROVEMENTS.iter().map(|improvement| improvement.id).collect();
        assert_eq!(IMPROVEMENTS.len(), 23);
        assert_eq!(ids.len(), 23);
        assert!(ids.contains("loft-insulation-topup"));
        assert!(ids.contains("solar-thermal"));
    }

    #[test]
    fn cost_ranges_are_ordered() {
        for improvement in &IMPROVEMENTS {
            assert!(
                improvement.base_cost_low <= improvement.base_cost_high,
                "{} has inverted costs",
                improvement.id
            );
        }
    }

    #[test]
    fn details_lookup_by_id() {
        let cavity = improvement_details("cavity-wall-insulation").expect("known id");
        assert_eq!(cavity.typical_epc_points, 10);
        assert!(improvement_details("heat-recovery-ventilation").is_none());
    }
}
