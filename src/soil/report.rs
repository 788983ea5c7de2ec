//! Analysis report returned to callers.

use serde::Serialize;

use super::advisory::FieldAdvisory;
use super::classify::{Assessment, OrganicMatterStatus, PhStatus, SalinityStatus, TraceNutrient};
use super::fertilizer::{FertilizerPlan, NutrientStatus};
use super::models::{AreaUnit, Drainage, SoilTexture};
use super::scoring::CropSuitability;
use crate::reference::RequirementSource;

/// Measured values echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measured {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_matter: f64,
    pub electrical_conductivity: f64,
    pub zinc: f64,
    pub iron: f64,
    pub manganese: f64,
    pub copper: f64,
    pub boron: f64,
    pub calcium: f64,
    pub magnesium: f64,
    pub sulfur: f64,
}

/// Targets from the resolved requirement row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Required {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub min_ph: f64,
    pub max_ph: f64,
    pub organic_matter: f64,
    pub ec: f64,
    pub zinc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deficiencies {
    /// kg/ha
    pub nitrogen: f64,
    /// kg/ha
    pub phosphorus: f64,
    /// kg/ha
    pub potassium: f64,
    pub micronutrients: Vec<TraceNutrient>,
    pub secondary_nutrients: Vec<TraceNutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilHealth {
    pub score: i32,
    pub issues: Vec<&'static str>,
    pub texture: SoilTexture,
    pub drainage: Drainage,
    pub slope: f64,
    pub depth: f64,
    pub bulk_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotAreaEcho {
    pub value: f64,
    pub unit: AreaUnit,
    pub hectares: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientStatuses {
    pub nitrogen: NutrientStatus,
    pub phosphorus: NutrientStatus,
    pub potassium: NutrientStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropInfo {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionInfo {
    pub state_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<&'static str>,
    pub district: String,
}

/// Complete result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub engine: &'static str,
    pub engine_version: &'static str,
    /// SHA256 of the validated input
    pub input_hash: String,

    pub crop: CropInfo,
    pub region: RegionInfo,
    pub requirement_source: RequirementSource,

    pub measured: Measured,
    pub required: Required,
    pub deficiencies: Deficiencies,
    pub fertilizers: FertilizerPlan,

    pub ph: Assessment<PhStatus>,
    pub organic_matter: Assessment<OrganicMatterStatus>,
    pub electrical_conductivity: Assessment<SalinityStatus>,

    pub soil_health: SoilHealth,
    pub crop_suitability: CropSuitability,
    pub plot_area: PlotAreaEcho,
    pub nutrient_status: NutrientStatuses,

    pub advisory: FieldAdvisory,
}
