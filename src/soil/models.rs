//! Input types for soil analysis.

use serde::{Deserialize, Serialize};

/// Hectares per acre.
pub const ACRE_TO_HECTARE: f64 = 0.404686;

/// Soil texture class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoilTexture {
    Clay,
    Silt,
    Sandy,
    #[default]
    Loamy,
    ClayLoam,
    SiltLoam,
}

/// Drainage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Drainage {
    Poor,
    #[default]
    Moderate,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationType {
    Rainfed,
    #[default]
    Surface,
    Drip,
    Sprinkler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TillagePractice {
    #[default]
    Conventional,
    Minimum,
    NoTill,
}

/// Unit the plot area was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Hectare,
    Acre,
}

/// Raw analysis request as submitted by a form or API client.
///
/// NPK, pH, plot area and the selection keys are optional so that a missing
/// value can be reported as a validation error rather than a parse error.
/// The remaining measurements default to the values the sampling form starts
/// with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisRequest {
    /// kg/ha
    pub nitrogen: Option<f64>,
    /// kg/ha
    pub phosphorus: Option<f64>,
    /// kg/ha
    pub potassium: Option<f64>,
    pub ph: Option<f64>,

    /// Percent
    #[serde(default = "default_organic_matter")]
    pub organic_matter: f64,
    /// dS/m
    #[serde(default = "default_ec")]
    pub electrical_conductivity: f64,

    // Secondary nutrients and micronutrients, mg/kg
    #[serde(default = "default_calcium")]
    pub calcium: f64,
    #[serde(default = "default_magnesium")]
    pub magnesium: f64,
    #[serde(default = "default_sulfur")]
    pub sulfur: f64,
    #[serde(default = "default_zinc")]
    pub zinc: f64,
    #[serde(default = "default_iron")]
    pub iron: f64,
    #[serde(default = "default_manganese")]
    pub manganese: f64,
    #[serde(default = "default_copper")]
    pub copper: f64,
    #[serde(default = "default_boron")]
    pub boron: f64,

    #[serde(default)]
    pub soil_texture: SoilTexture,
    /// g/cm³
    #[serde(default = "default_bulk_density")]
    pub bulk_density: f64,
    /// cm
    #[serde(default = "default_soil_depth")]
    pub soil_depth: f64,
    #[serde(default)]
    pub drainage: Drainage,
    /// Percent
    #[serde(default = "default_slope")]
    pub slope: f64,

    /// mm/year
    #[serde(default = "default_rainfall")]
    pub rainfall: f64,
    #[serde(default)]
    pub irrigation_type: IrrigationType,
    #[serde(default)]
    pub tillage_practice: TillagePractice,

    /// Percent
    #[serde(default = "default_moisture")]
    pub moisture: f64,
    /// °C
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// meq/100g
    #[serde(default = "default_cec")]
    pub cation_exchange_capacity: f64,
    #[serde(default)]
    pub previous_crop: String,

    pub plot_area: Option<f64>,
    #[serde(default)]
    pub area_unit: AreaUnit,

    pub crop_id: Option<u32>,
    pub state_id: Option<u32>,
    pub district: Option<String>,
}

fn default_organic_matter() -> f64 {
    1.5
}

fn default_ec() -> f64 {
    0.8
}

fn default_calcium() -> f64 {
    200.0
}

fn default_magnesium() -> f64 {
    50.0
}

fn default_sulfur() -> f64 {
    15.0
}

fn default_zinc() -> f64 {
    0.8
}

fn default_iron() -> f64 {
    10.0
}

fn default_manganese() -> f64 {
    5.0
}

fn default_copper() -> f64 {
    1.2
}

fn default_boron() -> f64 {
    0.5
}

fn default_bulk_density() -> f64 {
    1.4
}

fn default_soil_depth() -> f64 {
    30.0
}

fn default_slope() -> f64 {
    2.0
}

fn default_rainfall() -> f64 {
    1200.0
}

fn default_moisture() -> f64 {
    60.0
}

fn default_temperature() -> f64 {
    25.0
}

fn default_cec() -> f64 {
    15.0
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            nitrogen: None,
            phosphorus: None,
            potassium: None,
            ph: None,
            organic_matter: default_organic_matter(),
            electrical_conductivity: default_ec(),
            calcium: default_calcium(),
            magnesium: default_magnesium(),
            sulfur: default_sulfur(),
            zinc: default_zinc(),
            iron: default_iron(),
            manganese: default_manganese(),
            copper: default_copper(),
            boron: default_boron(),
            soil_texture: SoilTexture::default(),
            bulk_density: default_bulk_density(),
            soil_depth: default_soil_depth(),
            drainage: Drainage::default(),
            slope: default_slope(),
            rainfall: default_rainfall(),
            irrigation_type: IrrigationType::default(),
            tillage_practice: TillagePractice::default(),
            moisture: default_moisture(),
            temperature: default_temperature(),
            cation_exchange_capacity: default_cec(),
            previous_crop: String::new(),
            plot_area: None,
            area_unit: AreaUnit::default(),
            crop_id: None,
            state_id: None,
            district: None,
        }
    }
}

/// A validated soil sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_matter: f64,
    pub electrical_conductivity: f64,
    pub calcium: f64,
    pub magnesium: f64,
    pub sulfur: f64,
    pub zinc: f64,
    pub iron: f64,
    pub manganese: f64,
    pub copper: f64,
    pub boron: f64,
    pub soil_texture: SoilTexture,
    pub bulk_density: f64,
    pub soil_depth: f64,
    pub drainage: Drainage,
    pub slope: f64,
    pub rainfall: f64,
    pub irrigation_type: IrrigationType,
    pub tillage_practice: TillagePractice,
    pub moisture: f64,
    pub temperature: f64,
    pub cation_exchange_capacity: f64,
    pub previous_crop: String,
}

/// Crop and region the sample is analysed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub crop_id: u32,
    pub state_id: u32,
    pub district: String,
}

/// Plot size as entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub value: f64,
    pub unit: AreaUnit,
}

impl PlotArea {
    pub fn hectares(&self) -> f64 {
        match self.unit {
            AreaUnit::Hectare => self.value,
            AreaUnit::Acre => self.value * ACRE_TO_HECTARE,
        }
    }
}

/// Everything the engine needs, after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedInput {
    pub sample: SoilSample,
    pub selection: Selection,
    pub plot: PlotArea,
}
