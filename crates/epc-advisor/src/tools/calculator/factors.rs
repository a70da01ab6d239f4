use crate::property::PropertyType;

/// Improvements past this cost to reach C may qualify for the cost cap exemption.
pub const COST_CAP_THRESHOLD: u32 = 10_000;

/// Minimum SAP score for a C rating.
pub const TARGET_C_SCORE: u32 = 69;

/// Midpoint cost at or below which a measure counts as a quick win.
pub const QUICK_WIN_THRESHOLD: u32 = 500;

/// Minimum EPC points for a high impact measure.
pub const HIGH_IMPACT_THRESHOLD: u32 = 6;

/// Construction complexity multiplier, relative to a 1950s-1960s house.
pub const fn property_type_factor(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::VictorianTerrace => 1.30,
        PropertyType::Edwardian1920s => 1.25,
        PropertyType::Semi1930s => 1.10,
        PropertyType::PostWar1950s1960s => 1.00,
        PropertyType::Modern1970s1980s => 0.95,
        PropertyType::Recent1990sLater => 0.90,
        PropertyType::PurposeBuiltFlat => 0.85,
        PropertyType::ConvertedFlat => 1.15,
        PropertyType::Hmo => 1.20,
        PropertyType::Unknown => 1.00,
    }
}

/// Floor area proxy keyed on bedroom count. Zero is read as one.
pub const fn size_factor(bedrooms: u32) -> f64 {
    match bedrooms {
        0 | 1 => 0.70,
        2 => 0.85,
        3 => 1.00,
        4 => 1.20,
        5 => 1.40,
        _ => 1.60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_factor_saturates_at_six_bedrooms() {
        assert_eq!(size_factor(0), size_factor(1));
        assert_eq!(size_factor(6), 1.60);
        assert_eq!(size_factor(11), 1.60);
    }

    #[test]
    fn period_homes_cost_more_to_treat() {
        assert!(
            property_type_factor(PropertyType::VictorianTerrace)
                > property_type_factor(PropertyType::Recent1990sLater)
        );
        assert_eq!(property_type_factor(PropertyType::Unknown), 1.00);
    }
}
