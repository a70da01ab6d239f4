//! Property vocabulary shared by every calculator.
//!
//! Form answers arrive as kebab-case strings. Anything outside a field's
//! declared domain deserializes to that field's `Unknown` variant so the
//! evaluators stay total over their input space. Input structs route their
//! fields through [`lenient`] so nulls, numbers and booleans land there too.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Energy Performance Certificate band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EpcRating {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// SAP score range covered by a rating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub min: u8,
    pub max: u8,
    pub midpoint: u8,
}

/// Band assumed when the landlord does not know their rating (an E).
pub const UNKNOWN_RATING_BAND: ScoreBand = ScoreBand {
    min: 39,
    max: 54,
    midpoint: 47,
};

impl EpcRating {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::A,
            Self::B,
            Self::C,
            Self::D,
            Self::E,
            Self::F,
            Self::G,
        ]
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }

    pub const fn band(self) -> ScoreBand {
        let (min, max, midpoint) = match self {
            Self::A => (92, 100, 96),
            Self::B => (81, 91, 86),
            Self::C => (69, 80, 75),
            Self::D => (55, 68, 62),
            Self::E => (39, 54, 47),
            Self::F => (21, 38, 30),
            Self::G => (1, 20, 11),
        };
        ScoreBand { min, max, midpoint }
    }

    /// Map a SAP score onto its band. Scores above 100 stay an A.
    pub fn from_score(score: u32) -> Self {
        match score {
            92..=u32::MAX => Self::A,
            81..=91 => Self::B,
            69..=80 => Self::C,
            55..=68 => Self::D,
            39..=54 => Self::E,
            21..=38 => Self::F,
            _ => Self::G,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            "F" => Some(Self::F),
            "G" => Some(Self::G),
            _ => None,
        }
    }

    /// Ratings that fall short of the 2030 minimum standard of C.
    pub fn below_c(self) -> bool {
        self > Self::C
    }
}

impl fmt::Display for EpcRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Midpoint score used as the starting point for an optional rating.
pub fn starting_score(rating: Option<EpcRating>) -> u32 {
    rating
        .map(|rating| rating.band().midpoint)
        .unwrap_or(UNKNOWN_RATING_BAND.midpoint) as u32
}

/// Accepts `"A"`..`"G"`; `"unknown"`, null, and anything else become `None`.
pub(crate) fn deserialize_reported_rating<'de, D>(
    deserializer: D,
) -> Result<Option<EpcRating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| raw.as_str().and_then(EpcRating::parse)))
}

/// `12345` as `£12,345`.
pub fn pounds(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("£{grouped}")
}

/// Decodes a form field, falling back to its default when the value is
/// null or of the wrong JSON type.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|raw| serde_json::from_value(raw).ok())
        .unwrap_or_default())
}

/// Decodes a multi-select answer. A non-array becomes empty and entries
/// that do not decode are dropped.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(entries)) => entries,
        _ => Vec::new(),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// Construction archetypes used by the cost calculator and EPC analyser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    VictorianTerrace,
    #[serde(rename = "edwardian-1920s")]
    Edwardian1920s,
    #[serde(rename = "1930s-semi")]
    Semi1930s,
    #[serde(rename = "1950s-1960s")]
    PostWar1950s1960s,
    #[serde(rename = "1970s-1980s")]
    Modern1970s1980s,
    #[serde(rename = "1990s-later")]
    Recent1990sLater,
    PurposeBuiltFlat,
    ConvertedFlat,
    Hmo,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PropertyType {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::VictorianTerrace => "victorian-terrace",
            Self::Edwardian1920s => "edwardian-1920s",
            Self::Semi1930s => "1930s-semi",
            Self::PostWar1950s1960s => "1950s-1960s",
            Self::Modern1970s1980s => "1970s-1980s",
            Self::Recent1990sLater => "1990s-later",
            Self::PurposeBuiltFlat => "purpose-built-flat",
            Self::ConvertedFlat => "converted-flat",
            Self::Hmo => "hmo",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VictorianTerrace => "Victorian terrace",
            Self::Edwardian1920s => "Edwardian / 1920s",
            Self::Semi1930s => "1930s semi",
            Self::PostWar1950s1960s => "1950s-1960s house",
            Self::Modern1970s1980s => "1970s-1980s house",
            Self::Recent1990sLater => "1990s or later",
            Self::PurposeBuiltFlat => "purpose-built flat",
            Self::ConvertedFlat => "converted flat",
            Self::Hmo => "HMO",
            Self::Unknown => "unknown property type",
        }
    }

    pub const fn is_flat(self) -> bool {
        matches!(self, Self::PurposeBuiltFlat | Self::ConvertedFlat)
    }

    /// Path of the site guide for this archetype.
    pub fn guide_url(self) -> String {
        match self {
            Self::Unknown => "/property-types".to_string(),
            other => format!("/property-types/{}", other.slug()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallConstruction {
    Solid,
    Cavity,
    Mixed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WallConstruction {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Cavity => "cavity",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingSystem {
    GasBoiler,
    OilBoiler,
    Electric,
    HeatPump,
    Lpg,
    Other,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HeatingSystem {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::GasBoiler => "gas-boiler",
            Self::OilBoiler => "oil-boiler",
            Self::Electric => "electric",
            Self::HeatPump => "heat-pump",
            Self::Lpg => "lpg",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GasBoiler => "gas boiler",
            Self::OilBoiler => "oil boiler",
            Self::Electric => "electric",
            Self::HeatPump => "heat pump",
            Self::Lpg => "LPG boiler",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_fossil_fuel(self) -> bool {
        matches!(self, Self::GasBoiler | Self::OilBoiler | Self::Lpg)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoftInsulation {
    #[serde(rename = "none")]
    Uninsulated,
    #[serde(rename = "under-100mm")]
    Under100mm,
    #[serde(rename = "100-270mm")]
    Between100And270mm,
    #[serde(rename = "over-270mm")]
    Over270mm,
    NoLoft,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlazingType {
    Single,
    Double,
    Triple,
    Mixed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// UK cost regions. `Unknown` is priced at the national baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    London,
    SouthEast,
    SouthWest,
    EastAnglia,
    EastMidlands,
    WestMidlands,
    NorthWest,
    NorthEast,
    Yorkshire,
    Wales,
    Scotland,
    NorthernIreland,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::London => "London",
            Self::SouthEast => "South East England",
            Self::SouthWest => "South West England",
            Self::EastAnglia => "East Anglia",
            Self::EastMidlands => "East Midlands",
            Self::WestMidlands => "West Midlands",
            Self::NorthWest => "North West England",
            Self::NorthEast => "North East England",
            Self::Yorkshire => "Yorkshire and the Humber",
            Self::Wales => "Wales",
            Self::Scotland => "Scotland",
            Self::NorthernIreland => "Northern Ireland",
            Self::Unknown => "UK average",
        }
    }

    /// Labour-rate multiplier applied to national average costs.
    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::London => 1.25,
            Self::SouthEast => 1.15,
            Self::SouthWest => 1.05,
            Self::EastAnglia => 1.02,
            Self::EastMidlands => 0.95,
            Self::WestMidlands => 0.98,
            Self::NorthWest => 0.95,
            Self::NorthEast => 0.90,
            Self::Yorkshire => 0.93,
            Self::Wales => 0.92,
            Self::Scotland => 0.98,
            Self::NorthernIreland => 0.88,
            Self::Unknown => 1.00,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct RatingDocument {
        #[serde(default, deserialize_with = "deserialize_reported_rating")]
        rating: Option<EpcRating>,
    }

    fn reported(json: &str) -> Option<EpcRating> {
        serde_json::from_str::<RatingDocument>(json)
            .expect("document deserializes")
            .rating
    }

    #[test]
    fn pounds_group_thousands() {
        assert_eq!(pounds(0), "£0");
        assert_eq!(pounds(660), "£660");
        assert_eq!(pounds(7_500), "£7,500");
        assert_eq!(pounds(1_234_567), "£1,234,567");
    }

    #[test]
    fn from_score_respects_band_edges() {
        assert_eq!(EpcRating::from_score(92), EpcRating::A);
        assert_eq!(EpcRating::from_score(91), EpcRating::B);
        assert_eq!(EpcRating::from_score(69), EpcRating::C);
        assert_eq!(EpcRating::from_score(68), EpcRating::D);
        assert_eq!(EpcRating::from_score(39), EpcRating::E);
        assert_eq!(EpcRating::from_score(20), EpcRating::G);
        assert_eq!(EpcRating::from_score(140), EpcRating::A);
    }

    #[test]
    fn reported_rating_is_lenient() {
        assert_eq!(reported(r#"{"rating":"d"}"#), Some(EpcRating::D));
        assert_eq!(reported(r#"{"rating":"unknown"}"#), None);
        assert_eq!(reported(r#"{"rating":"Z"}"#), None);
        assert_eq!(reported(r#"{"rating":7}"#), None);
        assert_eq!(reported(r#"{}"#), None);
    }

    #[derive(Deserialize)]
    struct FormFields {
        #[serde(default, deserialize_with = "lenient")]
        region: Region,
        #[serde(default, deserialize_with = "lenient")]
        bedrooms: u32,
        #[serde(default, deserialize_with = "lenient_list")]
        heating: Vec<HeatingSystem>,
    }

    #[test]
    fn wrong_json_types_fall_back_to_defaults() {
        let fields: FormFields =
            serde_json::from_str(r#"{"region":null,"bedrooms":"three","heating":[7,"lpg",null,"wood"]}"#)
                .expect("fields deserialize");
        assert_eq!(fields.region, Region::Unknown);
        assert_eq!(fields.bedrooms, 0);
        assert_eq!(fields.heating, vec![HeatingSystem::Lpg, HeatingSystem::Unknown]);

        let fields: FormFields =
            serde_json::from_str(r#"{"region":12,"bedrooms":3,"heating":"gas-boiler"}"#)
                .expect("fields deserialize");
        assert_eq!(fields.region, Region::Unknown);
        assert_eq!(fields.bedrooms, 3);
        assert!(fields.heating.is_empty());

        let fields: FormFields =
            serde_json::from_str(r#"{"region":true}"#).expect("fields deserialize");
        assert_eq!(fields.region, Region::Unknown);
    }

    #[test]
    fn out_of_domain_strings_become_unknown() {
        let wall: WallConstruction = serde_json::from_str(r#""timber-frame""#).expect("parses");
        assert_eq!(wall, WallConstruction::Unknown);
        let semi: PropertyType = serde_json::from_str(r#""1930s-semi""#).expect("parses");
        assert_eq!(semi, PropertyType::Semi1930s);
        let region: Region = serde_json::from_str(r#""atlantis""#).expect("parses");
        assert_eq!(region.cost_multiplier(), 1.00);
    }

    #[test]
    fn unknown_rating_starts_at_e_midpoint() {
        assert_eq!(starting_score(None), 47);
        assert_eq!(starting_score(Some(EpcRating::D)), 62);
        assert!(EpcRating::D.below_c());
        assert!(!EpcRating::C.below_c());
    }
}
