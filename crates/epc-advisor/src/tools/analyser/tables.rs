use super::domain::{ConstructionAge, ListedRecommendation};
use crate::property::{EpcRating, PropertyType};
use ConstructionAge::{Eighties, Interwar, Nineties, PostWar, Pre1919, Recent, Sixties};
use EpcRating::{C, D, E, F};

/// Typical SAP score and band for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypicalScore {
    pub score: u32,
    pub rating: EpcRating,
}

const fn typical(score: u32, rating: EpcRating) -> TypicalScore {
    TypicalScore { score, rating }
}

pub const DEFAULT_TYPICAL_SCORE: TypicalScore = typical(52, EpcRating::D);

type AgeBands = &'static [(ConstructionAge, TypicalScore)];

const VICTORIAN_TERRACE: AgeBands = &[(Pre1919, typical(38, F)), (Interwar, typical(42, E))];
const EDWARDIAN: AgeBands = &[(Pre1919, typical(40, E)), (Interwar, typical(45, E))];
const SEMI_1930S: AgeBands = &[(Interwar, typical(48, E)), (PostWar, typical(52, D))];
const POST_WAR: AgeBands = &[(PostWar, typical(55, D)), (Sixties, typical(58, D))];
const MODERN: AgeBands = &[(Sixties, typical(58, D)), (Eighties, typical(62, D))];
const RECENT: AgeBands = &[(Nineties, typical(68, D)), (Recent, typical(78, C))];
const PURPOSE_BUILT_FLAT: AgeBands = &[
    (PostWar, typical(52, D)),
    (Sixties, typical(58, D)),
    (Eighties, typical(65, D)),
    (Nineties, typical(72, C)),
    (Recent, typical(80, C)),
];
const CONVERTED_FLAT: AgeBands = &[
    (Pre1919, typical(42, E)),
    (Interwar, typical(48, E)),
    (PostWar, typical(52, D)),
];
const HMO: AgeBands = &[
    (Pre1919, typical(35, F)),
    (Interwar, typical(42, E)),
    (PostWar, typical(50, E)),
    (Sixties, typical(55, D)),
];

/// Age bands recorded for each archetype, earliest first.
fn typical_scores(property_type: PropertyType) -> AgeBands {
    match property_type {
        PropertyType::VictorianTerrace => VICTORIAN_TERRACE,
        PropertyType::Edwardian1920s => EDWARDIAN,
        PropertyType::Semi1930s => SEMI_1930S,
        PropertyType::PostWar1950s1960s => POST_WAR,
        PropertyType::Modern1970s1980s => MODERN,
        PropertyType::Recent1990sLater => RECENT,
        PropertyType::PurposeBuiltFlat => PURPOSE_BUILT_FLAT,
        PropertyType::ConvertedFlat => CONVERTED_FLAT,
        PropertyType::Hmo => HMO,
        PropertyType::Unknown => &[],
    }
}

/// Exact age band when recorded, else the archetype's first band, else 52/D.
pub fn typical_score(property_type: PropertyType, age: ConstructionAge) -> TypicalScore {
    let bands = typical_scores(property_type);
    bands
        .iter()
        .find(|(band, _)| *band == age)
        .or_else(|| bands.first())
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_TYPICAL_SCORE)
}

/// Cost, impact and guidance for a recommendation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationDetails {
    pub name: &'static str,
    pub cost_low: u32,
    pub cost_high: u32,
    pub points: u32,
    pub priority: u8,
    pub link: &'static str,
    pub notes: &'static str,
}

pub fn recommendation_details(recommendation: ListedRecommendation) -> Option<RecommendationDetails> {
    let details = match recommendation {
        ListedRecommendation::LoftInsulation => RecommendationDetails {
            name: "Increase loft insulation",
            cost_low: 300,
            cost_high: 600,
            points: 4,
            priority: 1,
            link: "/improvements/loft-insulation",
            notes: "One of the most cost-effective improvements. Target 270mm+ depth.",
        },
        ListedRecommendation::CavityWallInsulation => RecommendationDetails {
            name: "Cavity wall insulation",
            cost_low: 500,
            cost_high: 1_500,
            points: 8,
            priority: 2,
            link: "/improvements/cavity-wall-insulation",
            notes: "Only applicable if walls are cavity construction and currently unfilled.",
        },
        ListedRecommendation::SolidWallInsulation => RecommendationDetails {
            name: "Solid wall insulation",
            cost_low: 8_000,
            cost_high: 22_000,
            points: 12,
            priority: 4,
            link: "/improvements/solid-wall-insulation",
            notes: "Major investment. Can be internal or external. Often required for older properties.",
        },
        ListedRecommendation::FloorInsulation => RecommendationDetails {
            name: "Floor insulation",
            cost_low: 800,
            cost_high: 2_500,
            points: 3,
            priority: 3,
            link: "/improvements/floor-insulation",
            notes: "Easier to install with suspended timber floors. Less impactful than walls.",
        },
        ListedRecommendation::Glazing => RecommendationDetails {
            name: "Double or triple glazing",
            cost_low: 4_000,
            cost_high: 10_000,
            points: 6,
            priority: 4,
            link: "/improvements/glazing",
            notes: "High upfront cost but long lifespan. Consider secondary glazing as alternative.",
        },
        ListedRecommendation::NewBoiler => RecommendationDetails {
            name: "New condensing boiler",
            cost_low: 2_500,
            cost_high: 4_500,
            points: 8,
            priority: 2,
            link: "/improvements/boiler-upgrade",
            notes: "If boiler is over 15 years old, replacement typically worthwhile.",
        },
        ListedRecommendation::HeatingControls => RecommendationDetails {
            name: "Improved heating controls",
            cost_low: 150,
            cost_high: 500,
            points: 3,
            priority: 1,
            link: "/improvements/heating-controls",
            notes: "Low cost, good impact. TRVs on all radiators plus programmer/thermostat.",
        },
        ListedRecommendation::SolarPanels => RecommendationDetails {
            name: "Solar photovoltaic panels",
            cost_low: 5_000,
            cost_high: 10_000,
            points: 10,
            priority: 5,
            link: "/improvements/solar-panels",
            notes: "Significant upfront cost but ongoing savings. Check roof orientation.",
        },
        ListedRecommendation::LowEnergyLighting => RecommendationDetails {
            name: "Low energy lighting",
            cost_low: 50,
            cost_high: 200,
            points: 2,
            priority: 1,
            link: "/improvements/lighting",
            notes: "Quick win. Replace all bulbs with LED. Low cost, easy DIY.",
        },
        ListedRecommendation::HotWaterCylinderInsulation => RecommendationDetails {
            name: "Hot water cylinder insulation",
            cost_low: 20,
            cost_high: 50,
            points: 1,
            priority: 1,
            link: "/improvements/hot-water-insulation",
            notes: "Very low cost DIY improvement. Often overlooked.",
        },
        ListedRecommendation::DraughtProofing => RecommendationDetails {
            name: "Draught proofing",
            cost_low: 100,
            cost_high: 350,
            points: 2,
            priority: 1,
            link: "/improvements/draught-proofing",
            notes: "Low cost with noticeable comfort improvement. DIY-friendly.",
        },
        ListedRecommendation::Unknown => return None,
    };
    Some(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_age_band_wins() {
        assert_eq!(
            typical_score(PropertyType::Hmo, ConstructionAge::Sixties),
            typical(55, EpcRating::D)
        );
    }

    #[test]
    fn missing_band_falls_back_to_first_for_type() {
        assert_eq!(
            typical_score(PropertyType::VictorianTerrace, ConstructionAge::Recent),
            typical(38, EpcRating::F)
        );
        assert_eq!(
            typical_score(PropertyType::Unknown, ConstructionAge::Pre1919),
            DEFAULT_TYPICAL_SCORE
        );
    }

    #[test]
    fn unknown_recommendation_has_no_details() {
        assert!(recommendation_details(ListedRecommendation::Unknown).is_none());
        assert_eq!(
            recommendation_details(ListedRecommendation::SolarPanels).map(|details| details.priority),
            Some(5)
        );
    }
}
