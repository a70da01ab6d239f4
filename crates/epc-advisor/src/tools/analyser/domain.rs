use crate::property::{
    deserialize_reported_rating, lenient, lenient_list, EpcRating, HeatingSystem, PropertyType,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionAge {
    #[serde(rename = "pre-1919")]
    Pre1919,
    #[serde(rename = "1919-1944")]
    Interwar,
    #[serde(rename = "1945-1964")]
    PostWar,
    #[serde(rename = "1965-1979")]
    Sixties,
    #[serde(rename = "1980-1991")]
    Eighties,
    #[serde(rename = "1992-2006")]
    Nineties,
    #[serde(rename = "2007-present")]
    Recent,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl ConstructionAge {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pre1919 => "pre-1919",
            Self::Interwar => "1919-1944",
            Self::PostWar => "1945-1964",
            Self::Sixties => "1965-1979",
            Self::Eighties => "1980-1991",
            Self::Nineties => "1992-2006",
            Self::Recent => "2007-present",
            Self::Unknown => "unknown",
        }
    }

    /// Built before 1945, when solid walls were the norm.
    pub const fn is_pre_war(self) -> bool {
        matches!(self, Self::Pre1919 | Self::Interwar)
    }

    /// Built before 1965.
    pub const fn predates_1965(self) -> bool {
        matches!(self, Self::Pre1919 | Self::Interwar | Self::PostWar)
    }

    /// Built from 1980, under building regulations requiring loft insulation.
    pub const fn is_post_1980(self) -> bool {
        matches!(self, Self::Eighties | Self::Nineties | Self::Recent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallTypeNoted {
    Solid,
    CavityUnfilled,
    CavityFilled,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallInsulationNoted {
    #[serde(rename = "none")]
    Uninsulated,
    Partial,
    Full,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoofInsulationNoted {
    #[serde(rename = "none")]
    Uninsulated,
    #[serde(rename = "under-100mm")]
    Under100mm,
    #[serde(rename = "100-199mm")]
    Between100And199mm,
    #[serde(rename = "200-270mm")]
    Between200And270mm,
    #[serde(rename = "270mm-plus")]
    Over270mm,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorInsulationNoted {
    #[serde(rename = "none")]
    Uninsulated,
    Insulated,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlazingNoted {
    Single,
    #[serde(rename = "double-pre-2002")]
    DoublePre2002,
    #[serde(rename = "double-post-2002")]
    DoublePost2002,
    Triple,
    Mixed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingControls {
    #[serde(rename = "none")]
    NoControls,
    Programmer,
    ProgrammerThermostat,
    ProgrammerTrvs,
    Smart,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HeatingControls {
    /// Programmer only, or nothing at all.
    pub const fn is_basic(self) -> bool {
        matches!(self, Self::NoControls | Self::Programmer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotWaterSystem {
    FromBoiler,
    ElectricImmersion,
    HeatPump,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Recommendation lines printed on the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListedRecommendation {
    LoftInsulation,
    CavityWallInsulation,
    SolidWallInsulation,
    FloorInsulation,
    Glazing,
    NewBoiler,
    HeatingControls,
    SolarPanels,
    LowEnergyLighting,
    HotWaterCylinderInsulation,
    DraughtProofing,
    #[serde(other)]
    Unknown,
}

/// What the landlord copied off their existing certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpcAnalyserInputs {
    #[serde(deserialize_with = "deserialize_reported_rating")]
    pub current_rating: Option<EpcRating>,
    #[serde(deserialize_with = "lenient")]
    pub current_score: u32,
    #[serde(deserialize_with = "lenient")]
    pub property_type: PropertyType,
    #[serde(deserialize_with = "lenient")]
    pub construction_age: ConstructionAge,
    #[serde(deserialize_with = "lenient")]
    pub wall_type: WallTypeNoted,
    #[serde(deserialize_with = "lenient")]
    pub wall_insulation: WallInsulationNoted,
    #[serde(deserialize_with = "lenient")]
    pub roof_insulation: RoofInsulationNoted,
    #[serde(deserialize_with = "lenient")]
    pub floor_insulation: FloorInsulationNoted,
    #[serde(deserialize_with = "lenient")]
    pub glazing_type: GlazingNoted,
    #[serde(deserialize_with = "lenient")]
    pub heating_system: HeatingSystem,
    #[serde(deserialize_with = "lenient")]
    pub heating_controls: HeatingControls,
    #[serde(deserialize_with = "lenient")]
    pub hot_water: HotWaterSystem,
    #[serde(deserialize_with = "lenient_list")]
    pub recommendations: Vec<ListedRecommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorCategory {
    Walls,
    Roof,
    Floor,
    Windows,
    Heating,
    HotWater,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorAnalysis {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FactorCategory,
    pub current_status: String,
    pub impact: ImpactLevel,
    pub typical_for_property: &'static str,
    pub potential_points: u32,
    pub explanation: &'static str,
}

/// Something the assessor may have assumed rather than observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessorAssumption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub check_with: &'static str,
    pub severity: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWin {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_cost: &'static str,
    pub potential_benefit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationAnalysis {
    pub id: ListedRecommendation,
    pub name: &'static str,
    pub estimated_cost_low: u32,
    pub estimated_cost_high: u32,
    pub estimated_points: u32,
    pub priority: u8,
    pub content_link: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    Above,
    Below,
    Average,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComparison {
    pub user_score: u32,
    pub typical_score: u32,
    pub typical_rating: EpcRating,
    pub comparison: Comparison,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpcAnalysisResults {
    pub score_comparison: ScoreComparison,
    pub factors: Vec<FactorAnalysis>,
    pub assessor_assumptions: Vec<AssessorAssumption>,
    pub quick_wins: Vec<QuickWin>,
    pub recommendation_analysis: Vec<RecommendationAnalysis>,
    pub property_guide_url: String,
}
