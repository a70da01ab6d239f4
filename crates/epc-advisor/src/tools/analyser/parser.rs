//! Pulls analyser fields out of the text of a UK EPC certificate.
//!
//! Certificates share a standard layout, so each field is found by
//! locating its section heading (`Walls:`, `Roof:`, ...) and reading the
//! phrase up to the next full stop. Anything not found is left empty and
//! reported as a warning for the landlord to fill in by hand.

use super::domain::{
    ConstructionAge, EpcAnalyserInputs, FloorInsulationNoted, GlazingNoted, HeatingControls,
    HotWaterSystem, ListedRecommendation, RoofInsulationNoted, WallInsulationNoted, WallTypeNoted,
};
use crate::property::{EpcRating, HeatingSystem, PropertyType};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseConfidence {
    High,
    Medium,
    Low,
}

impl ParseConfidence {
    /// Grades by how many of the nine certificate sections were read.
    pub const fn from_sections_found(found: usize) -> Self {
        match found {
            8.. => Self::High,
            5..=7 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Fields recovered from a certificate. `None` means not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rating: Option<EpcRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_age: Option<ConstructionAge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_type: Option<WallTypeNoted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_insulation: Option<WallInsulationNoted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roof_insulation: Option<RoofInsulationNoted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_insulation: Option<FloorInsulationNoted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glazing_type: Option<GlazingNoted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_system: Option<HeatingSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_controls: Option<HeatingControls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_water: Option<HotWaterSystem>,
    pub recommendations: Vec<ListedRecommendation>,
}

impl ParsedCertificate {
    /// Analyser inputs with every missing field left at its unknown value.
    pub fn into_inputs(self) -> EpcAnalyserInputs {
        EpcAnalyserInputs {
            current_rating: self.current_rating,
            current_score: self.current_score.unwrap_or_default(),
            property_type: self.property_type.unwrap_or_default(),
            construction_age: self.construction_age.unwrap_or_default(),
            wall_type: self.wall_type.unwrap_or_default(),
            wall_insulation: self.wall_insulation.unwrap_or_default(),
            roof_insulation: self.roof_insulation.unwrap_or_default(),
            floor_insulation: self.floor_insulation.unwrap_or_default(),
            glazing_type: self.glazing_type.unwrap_or_default(),
            heating_system: self.heating_system.unwrap_or_default(),
            heating_controls: self.heating_controls.unwrap_or_default(),
            hot_water: self.hot_water.unwrap_or_default(),
            recommendations: self.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpcParseResult {
    pub data: ParsedCertificate,
    pub confidence: ParseConfidence,
    pub warnings: Vec<&'static str>,
}

type Pattern = OnceLock<Option<Regex>>;
type PatternTable<T> = OnceLock<Vec<(Regex, T)>>;

fn pattern(cell: &'static Pattern, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

fn pattern_table<T: Copy>(
    cell: &'static PatternTable<T>,
    sources: &[(&str, T)],
) -> &'static [(Regex, T)] {
    cell.get_or_init(|| {
        sources
            .iter()
            .filter_map(|&(source, value)| Regex::new(source).ok().map(|regex| (regex, value)))
            .collect()
    })
}

/// Phrase following a section heading, or the whole text when the heading
/// is missing.
fn section<'t>(lower: &'t str, heading: Option<&Regex>) -> &'t str {
    heading
        .and_then(|regex| regex.captures(lower))
        .and_then(|captures| captures.get(1))
        .map_or(lower, |capture| capture.as_str())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn parse_rating(text: &str) -> Option<(EpcRating, u32)> {
    static CURRENT: Pattern = OnceLock::new();
    static LABELLED: Pattern = OnceLock::new();
    static BAND_DIAGRAM: Pattern = OnceLock::new();

    let candidates = [
        (
            pattern(
                &CURRENT,
                r"(?i)current\s+energy\s+(?:efficiency\s+)?rating[:\s]+([A-G])\s*\(?([0-9]{1,3})\)?",
            ),
            1,
            2,
        ),
        (
            pattern(
                &LABELLED,
                r"(?i)rating[:\s]+([A-G])\s*\(?\s*([0-9]{1,3})\s*\)?",
            ),
            1,
            2,
        ),
        (
            pattern(&BAND_DIAGRAM, r"(?i)([0-9]{1,3})\s*\|\s*([A-G])"),
            2,
            1,
        ),
    ];

    candidates
        .into_iter()
        .find_map(|(regex, letter, score)| {
            let captures = regex?.captures(text)?;
            let rating = EpcRating::parse(captures.get(letter)?.as_str())?;
            let score = captures.get(score)?.as_str().parse().ok()?;
            Some((rating, score))
        })
}

const AGE_PATTERNS: [(&str, ConstructionAge); 7] = [
    (
        r"(?i)(?:built|constructed|date)\s*:?\s*(?:before\s+)?1919|victorian|edwardian",
        ConstructionAge::Pre1919,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*19(?:19|[23][0-9]|4[0-4])|1920s|1930s|inter\s*-?\s*war",
        ConstructionAge::Interwar,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*19(?:4[5-9]|5[0-9]|6[0-4])|1940s|1950s|post\s*-?\s*war",
        ConstructionAge::PostWar,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*19(?:6[5-9]|7[0-9])|1960s|1970s",
        ConstructionAge::Sixties,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*19(?:8[0-9]|9[01])|1980s",
        ConstructionAge::Eighties,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*19(?:9[2-9])|200[0-6]|1990s|2000s",
        ConstructionAge::Nineties,
    ),
    (
        r"(?i)(?:built|constructed)\s*:?\s*20(?:0[7-9]|[12][0-9])|2007|2010s|2020s",
        ConstructionAge::Recent,
    ),
];

fn parse_construction_age(text: &str, lower: &str) -> Option<ConstructionAge> {
    static AGES: PatternTable<ConstructionAge> = OnceLock::new();

    pattern_table(&AGES, &AGE_PATTERNS)
        .iter()
        .find(|(regex, _)| regex.is_match(text))
        .map(|&(_, age)| age)
        .or_else(|| {
            contains_any(lower, &["england and wales before 1900", "pre-1919"])
                .then_some(ConstructionAge::Pre1919)
        })
}

/// Built-form wording mapped onto the nearest archetype we price.
fn parse_property_type(lower: &str) -> Option<PropertyType> {
    let has = |needles: &[&str]| contains_any(lower, needles);

    if has(&["mid-terrace", "mid terrace"]) && has(&["victorian", "pre-1919"]) {
        return Some(PropertyType::VictorianTerrace);
    }
    if has(&["end-terrace", "end terrace"]) {
        return Some(PropertyType::VictorianTerrace);
    }
    if has(&["semi-detached", "semi detached"]) {
        return Some(PropertyType::Semi1930s);
    }
    if has(&["purpose-built flat", "purpose built flat"]) {
        return Some(PropertyType::PurposeBuiltFlat);
    }
    if has(&["converted flat"]) {
        return Some(PropertyType::ConvertedFlat);
    }
    if has(&["flat", "apartment", "maisonette"]) {
        return Some(PropertyType::PurposeBuiltFlat);
    }
    if has(&["detached"]) {
        return Some(PropertyType::Semi1930s);
    }
    if has(&["terrace"]) {
        return Some(PropertyType::VictorianTerrace);
    }
    if has(&["house"]) {
        if has(&["1960", "1970"]) {
            return Some(PropertyType::PostWar1950s1960s);
        }
        if has(&["1980", "1990"]) {
            return Some(PropertyType::Modern1970s1980s);
        }
    }
    None
}

fn parse_walls(lower: &str) -> Option<(WallTypeNoted, WallInsulationNoted)> {
    static WALLS: Pattern = OnceLock::new();
    let walls = section(lower, pattern(&WALLS, r"walls?\s*:?\s*([^.]+)"));

    let wall_type = if walls.contains("solid") && !walls.contains("cavity") {
        WallTypeNoted::Solid
    } else if walls.contains("cavity") {
        // "unfilled" and "uninsulated" contain the filled wording
        if contains_any(walls, &["unfilled", "no insulation", "uninsulated"]) {
            WallTypeNoted::CavityUnfilled
        } else if contains_any(walls, &["filled", "insulated"]) {
            WallTypeNoted::CavityFilled
        } else {
            WallTypeNoted::CavityUnfilled
        }
    } else {
        WallTypeNoted::Unknown
    };

    let insulation = if contains_any(walls, &["no insulation", "uninsulated", "unfilled"]) {
        WallInsulationNoted::Uninsulated
    } else if contains_any(walls, &["partial", "some insulation"]) {
        WallInsulationNoted::Partial
    } else if contains_any(walls, &["insulated", "with insulation", "filled"]) {
        WallInsulationNoted::Full
    } else {
        WallInsulationNoted::Unknown
    };

    if wall_type == WallTypeNoted::Unknown && insulation == WallInsulationNoted::Unknown {
        return None;
    }
    Some((wall_type, insulation))
}

fn parse_roof(lower: &str) -> Option<RoofInsulationNoted> {
    static ROOF: Pattern = OnceLock::new();
    static DEPTH: Pattern = OnceLock::new();
    let roof = section(
        lower,
        pattern(&ROOF, r"(?:loft|roof)\s*(?:insulation)?\s*:?\s*([^.]+)"),
    );

    let depth = pattern(&DEPTH, r"([0-9]+)\s*mm")
        .and_then(|regex| regex.captures(roof))
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX));
    if let Some(depth) = depth {
        return Some(match depth {
            270.. => RoofInsulationNoted::Over270mm,
            200..=269 => RoofInsulationNoted::Between200And270mm,
            100..=199 => RoofInsulationNoted::Between100And199mm,
            _ => RoofInsulationNoted::Under100mm,
        });
    }

    if contains_any(roof, &["no insulation", "none"]) {
        Some(RoofInsulationNoted::Uninsulated)
    } else if contains_any(roof, &["270", "300", "adequate"]) {
        Some(RoofInsulationNoted::Over270mm)
    } else if contains_any(roof, &["limited", "less than 100"]) {
        Some(RoofInsulationNoted::Under100mm)
    } else {
        None
    }
}

fn parse_floor(lower: &str) -> Option<FloorInsulationNoted> {
    static FLOOR: Pattern = OnceLock::new();
    let floor = section(lower, pattern(&FLOOR, r"floor\s*:?\s*([^.]+)"));

    if contains_any(floor, &["suspended", "timber"]) {
        Some(FloorInsulationNoted::Suspended)
    } else if contains_any(floor, &["insulated", "with insulation"]) {
        Some(FloorInsulationNoted::Insulated)
    } else if contains_any(floor, &["no insulation", "uninsulated", "solid"]) {
        Some(FloorInsulationNoted::Uninsulated)
    } else {
        None
    }
}

fn parse_glazing(lower: &str) -> Option<GlazingNoted> {
    static WINDOWS: Pattern = OnceLock::new();
    let windows = section(lower, pattern(&WINDOWS, r"(?:window|glazing)\s*:?\s*([^.]+)"));

    if windows.contains("triple") {
        return Some(GlazingNoted::Triple);
    }
    if windows.contains("single") {
        return Some(if contains_any(windows, &["double", "mixed"]) {
            GlazingNoted::Mixed
        } else {
            GlazingNoted::Single
        });
    }
    if windows.contains("double") {
        let recent = contains_any(windows, &["2002", "2003", "2004", "recent", "new", "modern"]);
        let dated = contains_any(windows, &["old", "original", "1990", "1980"]);
        return Some(if dated && !recent {
            GlazingNoted::DoublePre2002
        } else {
            GlazingNoted::DoublePost2002
        });
    }
    None
}

/// Always yields a system and controls, falling back to the most common
/// pairing of a gas boiler with programmer and room thermostat.
fn parse_heating(lower: &str) -> (HeatingSystem, HeatingControls) {
    static HEATING: Pattern = OnceLock::new();
    static CONTROLS: Pattern = OnceLock::new();
    let heating = section(lower, pattern(&HEATING, r"(?:main\s+)?heating\s*:?\s*([^.]+)"));

    // gas is checked before oil: "boiler" contains "oil"
    let system = if contains_any(heating, &["heat pump", "ashp", "gshp"]) {
        HeatingSystem::HeatPump
    } else if contains_any(heating, &["electric", "storage heater"]) {
        HeatingSystem::Electric
    } else if contains_any(heating, &["gas", "combi"]) {
        HeatingSystem::GasBoiler
    } else if heating.replace("boiler", "").contains("oil") {
        HeatingSystem::OilBoiler
    } else {
        HeatingSystem::GasBoiler
    };

    let controls = section(
        lower,
        pattern(&CONTROLS, r"(?:heating\s+)?controls?\s*:?\s*([^.]+)"),
    );
    let controls = if contains_any(controls, &["smart", "nest", "hive"]) {
        HeatingControls::Smart
    } else if contains_any(controls, &["trv", "thermostatic radiator"]) {
        HeatingControls::ProgrammerTrvs
    } else if contains_any(controls, &["thermostat", "room stat"]) {
        HeatingControls::ProgrammerThermostat
    } else if contains_any(controls, &["programmer", "timer"]) {
        HeatingControls::Programmer
    } else if contains_any(controls, &["no control", "none"]) {
        HeatingControls::NoControls
    } else {
        HeatingControls::ProgrammerThermostat
    };

    (system, controls)
}

fn parse_hot_water(lower: &str) -> Option<HotWaterSystem> {
    static HOT_WATER: Pattern = OnceLock::new();
    let hot_water = section(lower, pattern(&HOT_WATER, r"hot\s+water\s*:?\s*([^.]+)"));

    if hot_water.contains("heat pump") {
        Some(HotWaterSystem::HeatPump)
    } else if contains_any(hot_water, &["immersion", "electric"]) {
        Some(HotWaterSystem::ElectricImmersion)
    } else if contains_any(hot_water, &["boiler", "from main", "combi"]) {
        Some(HotWaterSystem::FromBoiler)
    } else {
        None
    }
}

const RECOMMENDATION_PATTERNS: [(&str, ListedRecommendation); 14] = [
    (
        r"(?i)(?:increase|add|top.up)\s+loft\s+insulation",
        ListedRecommendation::LoftInsulation,
    ),
    (r"(?i)loft\s+insulation", ListedRecommendation::LoftInsulation),
    (
        r"(?i)cavity\s+wall\s+insulation",
        ListedRecommendation::CavityWallInsulation,
    ),
    (
        r"(?i)(?:solid|external|internal)\s+wall\s+insulation",
        ListedRecommendation::SolidWallInsulation,
    ),
    (r"(?i)floor\s+insulation", ListedRecommendation::FloorInsulation),
    (
        r"(?i)(?:double|triple|secondary)\s+glaz",
        ListedRecommendation::Glazing,
    ),
    (
        r"(?i)(?:new|replace|upgrade)\s+(?:the\s+)?boiler",
        ListedRecommendation::NewBoiler,
    ),
    (r"(?i)condensing\s+boiler", ListedRecommendation::NewBoiler),
    (
        r"(?i)(?:heating|boiler)\s+control",
        ListedRecommendation::HeatingControls,
    ),
    (
        r"(?i)(?:trv|thermostatic\s+radiator)",
        ListedRecommendation::HeatingControls,
    ),
    (
        r"(?i)solar\s+(?:pv|panel|photovoltaic)",
        ListedRecommendation::SolarPanels,
    ),
    (
        r"(?i)(?:low.energy|led)\s+light",
        ListedRecommendation::LowEnergyLighting,
    ),
    (
        r"(?i)(?:hot\s+water|cylinder)\s+(?:jacket|insulation)",
        ListedRecommendation::HotWaterCylinderInsulation,
    ),
    (r"(?i)draught.?proof", ListedRecommendation::DraughtProofing),
];

/// Recommendation lines in table order, each listed once.
fn parse_recommendations(lower: &str) -> Vec<ListedRecommendation> {
    static RECOMMENDATIONS: PatternTable<ListedRecommendation> = OnceLock::new();

    let mut found = Vec::new();
    for (regex, recommendation) in pattern_table(&RECOMMENDATIONS, &RECOMMENDATION_PATTERNS) {
        if !found.contains(recommendation) && regex.is_match(lower) {
            found.push(*recommendation);
        }
    }
    found
}

/// Reads whatever it can from certificate text. Never fails: missing
/// sections become warnings and lower the confidence.
pub fn parse_certificate_text(text: &str) -> EpcParseResult {
    let lower = text.to_lowercase();
    let mut data = ParsedCertificate::default();
    let mut warnings = Vec::new();
    let mut found = 0;

    let mut record = |present: bool, warning: &'static str| {
        if present {
            found += 1;
        } else {
            warnings.push(warning);
        }
    };

    let rating = parse_rating(text);
    record(
        rating.is_some(),
        "Could not extract EPC rating - please enter manually",
    );
    if let Some((rating, score)) = rating {
        data.current_rating = Some(rating);
        data.current_score = Some(score);
    }

    data.construction_age = parse_construction_age(text, &lower);
    record(
        data.construction_age.is_some(),
        "Could not determine construction age - please select manually",
    );

    data.property_type = parse_property_type(&lower);
    record(
        data.property_type.is_some(),
        "Could not determine property type - please select manually",
    );

    let walls = parse_walls(&lower);
    record(
        walls.is_some(),
        "Could not extract wall details - please enter manually",
    );
    if let Some((wall_type, insulation)) = walls {
        data.wall_type = Some(wall_type);
        data.wall_insulation = Some(insulation);
    }

    data.roof_insulation = parse_roof(&lower);
    record(
        data.roof_insulation.is_some(),
        "Could not extract roof insulation depth - please select manually",
    );

    data.floor_insulation = parse_floor(&lower);
    record(
        data.floor_insulation.is_some(),
        "Could not extract floor insulation status - please select manually",
    );

    data.glazing_type = parse_glazing(&lower);
    record(
        data.glazing_type.is_some(),
        "Could not extract glazing type - please select manually",
    );

    let (system, controls) = parse_heating(&lower);
    data.heating_system = Some(system);
    data.heating_controls = Some(controls);
    record(true, "Could not extract heating details - please enter manually");

    data.hot_water = parse_hot_water(&lower);
    record(
        data.hot_water.is_some(),
        "Could not extract hot water system - please select manually",
    );

    data.recommendations = parse_recommendations(&lower);
    if data.recommendations.is_empty() {
        warnings.push("No recommendations found - please select from the list");
    }

    let confidence = ParseConfidence::from_sections_found(found);
    debug!(
        sections = found,
        recommendations = data.recommendations.len(),
        confidence = ?confidence,
        "certificate text parsed"
    );

    EpcParseResult {
        data,
        confidence,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERTIFICATE: &str = "Energy Performance Certificate.
Semi-detached house.
Current energy efficiency rating D (61).
Built: 1935.
Walls: Cavity wall, as built, no insulation (assumed).
Roof: Pitched, 150 mm loft insulation.
Floor: Solid, no insulation (assumed).
Windows: Fully double glazed.
Main heating: Boiler and radiators, mains gas.
Main heating controls: Programmer, room thermostat and TRVs.
Hot water: From main system.
Recommended measures: Cavity wall insulation. Increase loft insulation to 270 mm. Solar photovoltaic panels.";

    #[test]
    fn full_certificate_reads_every_section() {
        let result = parse_certificate_text(CERTIFICATE);
        let data = &result.data;

        assert_eq!(result.confidence, ParseConfidence::High);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(data.current_rating, Some(EpcRating::D));
        assert_eq!(data.current_score, Some(61));
        assert_eq!(data.construction_age, Some(ConstructionAge::Interwar));
        assert_eq!(data.property_type, Some(PropertyType::Semi1930s));
        assert_eq!(data.wall_type, Some(WallTypeNoted::CavityUnfilled));
        assert_eq!(data.wall_insulation, Some(WallInsulationNoted::Uninsulated));
        assert_eq!(
            data.roof_insulation,
            Some(RoofInsulationNoted::Between100And199mm)
        );
        assert_eq!(data.floor_insulation, Some(FloorInsulationNoted::Uninsulated));
        assert_eq!(data.glazing_type, Some(GlazingNoted::DoublePost2002));
        assert_eq!(data.heating_system, Some(HeatingSystem::GasBoiler));
        assert_eq!(data.heating_controls, Some(HeatingControls::ProgrammerTrvs));
        assert_eq!(data.hot_water, Some(HotWaterSystem::FromBoiler));
        assert_eq!(
            data.recommendations,
            vec![
                ListedRecommendation::LoftInsulation,
                ListedRecommendation::CavityWallInsulation,
                ListedRecommendation::Glazing,
                ListedRecommendation::HeatingControls,
                ListedRecommendation::SolarPanels,
            ]
        );
    }

    #[test]
    fn rating_falls_back_through_label_and_band_diagram() {
        assert_eq!(
            parse_rating("Current energy rating: e 48"),
            Some((EpcRating::E, 48))
        );
        assert_eq!(parse_rating("Rating: C (72)"), Some((EpcRating::C, 72)));
        assert_eq!(parse_rating("55 | D"), Some((EpcRating::D, 55)));
        assert_eq!(parse_rating("no band shown"), None);
    }

    #[test]
    fn construction_age_reads_years_and_eras() {
        let age = |text: &str| parse_construction_age(text, &text.to_lowercase());
        assert_eq!(age("A fine Edwardian villa"), Some(ConstructionAge::Pre1919));
        assert_eq!(age("Built: 1925"), Some(ConstructionAge::Interwar));
        assert_eq!(age("Built 1942"), Some(ConstructionAge::Interwar));
        assert_eq!(age("post-war estate"), Some(ConstructionAge::PostWar));
        assert_eq!(age("constructed 1972"), Some(ConstructionAge::Sixties));
        assert_eq!(age("Built: 1985"), Some(ConstructionAge::Eighties));
        assert_eq!(age("Built: 1998"), Some(ConstructionAge::Nineties));
        assert_eq!(age("Constructed: 2015"), Some(ConstructionAge::Recent));
        assert_eq!(
            age("Age band: England and Wales before 1900"),
            Some(ConstructionAge::Pre1919)
        );
        assert_eq!(age("no date given"), None);
    }

    #[test]
    fn built_form_maps_to_nearest_archetype() {
        let kind = |text: &str| parse_property_type(&text.to_lowercase());
        assert_eq!(
            kind("Mid-terrace house, Victorian"),
            Some(PropertyType::VictorianTerrace)
        );
        assert_eq!(kind("End-terrace house"), Some(PropertyType::VictorianTerrace));
        assert_eq!(kind("Semi-detached house"), Some(PropertyType::Semi1930s));
        assert_eq!(kind("Converted flat"), Some(PropertyType::ConvertedFlat));
        assert_eq!(kind("Top-floor maisonette"), Some(PropertyType::PurposeBuiltFlat));
        assert_eq!(kind("Detached house"), Some(PropertyType::Semi1930s));
        assert_eq!(kind("House, 1980s build"), Some(PropertyType::Modern1970s1980s));
        assert_eq!(kind("Bungalow"), None);
    }

    #[test]
    fn wall_section_reads_type_and_insulation() {
        let walls = |text: &str| parse_walls(&text.to_lowercase());
        assert_eq!(
            walls("Walls: Solid brick, as built, no insulation."),
            Some((WallTypeNoted::Solid, WallInsulationNoted::Uninsulated))
        );
        assert_eq!(
            walls("Walls: Cavity wall, filled cavity."),
            Some((WallTypeNoted::CavityFilled, WallInsulationNoted::Full))
        );
        assert_eq!(
            walls("Walls: Cavity wall, unfilled."),
            Some((WallTypeNoted::CavityUnfilled, WallInsulationNoted::Uninsulated))
        );
        assert_eq!(
            walls("Walls: Timber frame, partial insulation."),
            Some((WallTypeNoted::Unknown, WallInsulationNoted::Partial))
        );
        assert_eq!(walls("Walls: Timber frame."), None);
    }

    #[test]
    fn roof_depth_bands_and_wording() {
        let roof = |text: &str| parse_roof(&text.to_lowercase());
        assert_eq!(
            roof("Roof: Pitched, 300 mm loft insulation."),
            Some(RoofInsulationNoted::Over270mm)
        );
        assert_eq!(
            roof("Roof: Pitched, 200mm loft insulation."),
            Some(RoofInsulationNoted::Between200And270mm)
        );
        assert_eq!(
            roof("Roof: Pitched, 50 mm loft insulation."),
            Some(RoofInsulationNoted::Under100mm)
        );
        assert_eq!(
            roof("Roof: Pitched, no insulation (assumed)."),
            Some(RoofInsulationNoted::Uninsulated)
        );
        assert_eq!(
            roof("Roof: Pitched, limited insulation."),
            Some(RoofInsulationNoted::Under100mm)
        );
        assert_eq!(roof("Roof: Flat."), None);
    }

    #[test]
    fn floor_and_glazing_sections() {
        let floor = |text: &str| parse_floor(&text.to_lowercase());
        assert_eq!(
            floor("Floor: Suspended, no insulation."),
            Some(FloorInsulationNoted::Suspended)
        );
        assert_eq!(
            floor("Floor: Solid, insulated."),
            Some(FloorInsulationNoted::Insulated)
        );
        assert_eq!(floor("Floor: To unheated space."), None);

        let glazing = |text: &str| parse_glazing(&text.to_lowercase());
        assert_eq!(glazing("Windows: Triple glazing."), Some(GlazingNoted::Triple));
        assert_eq!(glazing("Windows: Single glazed."), Some(GlazingNoted::Single));
        assert_eq!(
            glazing("Windows: Partial double glazing, some single."),
            Some(GlazingNoted::Mixed)
        );
        assert_eq!(
            glazing("Windows: Original double glazing."),
            Some(GlazingNoted::DoublePre2002)
        );
        assert_eq!(glazing("Windows: Unknown."), None);
    }

    #[test]
    fn heating_and_hot_water_sections() {
        let heating = |text: &str| parse_heating(&text.to_lowercase());
        assert_eq!(
            heating("Main heating: Air source heat pump. Controls: Smart thermostat."),
            (HeatingSystem::HeatPump, HeatingControls::Smart)
        );
        assert_eq!(
            heating("Main heating: Electric storage heaters. Controls: Manual charge control."),
            (HeatingSystem::Electric, HeatingControls::ProgrammerThermostat)
        );
        assert_eq!(
            heating("Main heating: Boiler and radiators, oil. Controls: Programmer, no room thermostat."),
            (HeatingSystem::OilBoiler, HeatingControls::ProgrammerThermostat)
        );
        assert_eq!(
            heating("Main heating: Boiler and radiators. Controls: Timer."),
            (HeatingSystem::GasBoiler, HeatingControls::Programmer)
        );

        let hot_water = |text: &str| parse_hot_water(&text.to_lowercase());
        assert_eq!(
            hot_water("Hot water: Electric immersion, off-peak."),
            Some(HotWaterSystem::ElectricImmersion)
        );
        assert_eq!(
            hot_water("Hot water: From heat pump."),
            Some(HotWaterSystem::HeatPump)
        );
        assert_eq!(hot_water("Hot water: Solar."), None);
    }

    #[test]
    fn recommendations_are_listed_once_in_table_order() {
        let found = parse_recommendations(
            &"Draught proofing. Low energy lighting. Loft insulation. Increase loft insulation. Replace boiler with a condensing boiler. Hot water cylinder jacket."
                .to_lowercase(),
        );
        assert_eq!(
            found,
            vec![
                ListedRecommendation::LoftInsulation,
                ListedRecommendation::NewBoiler,
                ListedRecommendation::LowEnergyLighting,
                ListedRecommendation::HotWaterCylinderInsulation,
                ListedRecommendation::DraughtProofing,
            ]
        );
    }

    #[test]
    fn unreadable_text_warns_for_every_gap() {
        let result = parse_certificate_text("Nothing useful here");
        assert_eq!(result.confidence, ParseConfidence::Low);
        assert_eq!(result.warnings.len(), 9);
        assert_eq!(
            result.warnings[0],
            "Could not extract EPC rating - please enter manually"
        );
        assert_eq!(
            result.warnings.last().copied(),
            Some("No recommendations found - please select from the list")
        );
        assert_eq!(result.data.heating_system, Some(HeatingSystem::GasBoiler));

        let inputs = result.data.into_inputs();
        assert_eq!(inputs.current_score, 0);
        assert_eq!(inputs.wall_type, WallTypeNoted::Unknown);
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(ParseConfidence::from_sections_found(9), ParseConfidence::High);
        assert_eq!(ParseConfidence::from_sections_found(8), ParseConfidence::High);
        assert_eq!(ParseConfidence::from_sections_found(5), ParseConfidence::Medium);
        assert_eq!(ParseConfidence::from_sections_found(4), ParseConfidence::Low);
    }
}
