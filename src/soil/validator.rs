//! Fail-fast validation of analysis requests.

use super::models::{AnalysisRequest, PlotArea, Selection, SoilSample, ValidatedInput};

/// Largest plot accepted, in the request's own unit.
pub const MAX_PLOT_AREA: f64 = 1_000_000.0;

/// Reasons a request is rejected before any computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {0} value")]
    InvalidNutrient(&'static str),
    #[error("invalid pH value: must be between 0 and 14")]
    InvalidPh,
    #[error("invalid plot area: must be greater than 0")]
    InvalidPlotArea,
    #[error("invalid plot area: must not exceed 1000000")]
    PlotAreaTooLarge,
    #[error("invalid {0} value: must be a non-negative number")]
    InvalidMeasurement(&'static str),
    #[error("please select state, district, and crop")]
    MissingSelection,
}

fn required_amount(value: Option<f64>, name: &'static str) -> Result<f64, ValidationError> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ValidationError::InvalidNutrient(name)),
    }
}

fn measurement(value: f64, name: &'static str) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidMeasurement(name))
    }
}

/// Validate a raw request, returning the first problem found.
pub fn validate(request: &AnalysisRequest) -> Result<ValidatedInput, ValidationError> {
    let nitrogen = required_amount(request.nitrogen, "nitrogen")?;
    let phosphorus = required_amount(request.phosphorus, "phosphorus")?;
    let potassium = required_amount(request.potassium, "potassium")?;

    let ph = match request.ph {
        Some(v) if v.is_finite() && (0.0..=14.0).contains(&v) => v,
        _ => return Err(ValidationError::InvalidPh),
    };

    let plot_area = match request.plot_area {
        Some(v) if v.is_finite() && v > MAX_PLOT_AREA => {
            return Err(ValidationError::PlotAreaTooLarge)
        }
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => return Err(ValidationError::InvalidPlotArea),
    };

    let district = request
        .district
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let (crop_id, state_id, district) = match (request.crop_id, request.state_id, district) {
        (Some(crop), Some(state), Some(district)) => (crop, state, district.to_string()),
        _ => return Err(ValidationError::MissingSelection),
    };

    let sample = SoilSample {
        nitrogen,
        phosphorus,
        potassium,
        ph,
        organic_matter: measurement(request.organic_matter, "organic matter")?,
        electrical_conductivity: measurement(
            request.electrical_conductivity,
            "electrical conductivity",
        )?,
        calcium: measurement(request.calcium, "calcium")?,
        magnesium: measurement(request.magnesium, "magnesium")?,
        sulfur: measurement(request.sulfur, "sulfur")?,
        zinc: measurement(request.zinc, "zinc")?,
        iron: measurement(request.iron, "iron")?,
        manganese: measurement(request.manganese, "manganese")?,
        copper: measurement(request.copper, "copper")?,
        boron: measurement(request.boron, "boron")?,
        soil_texture: request.soil_texture,
        bulk_density: measurement(request.bulk_density, "bulk density")?,
        soil_depth: measurement(request.soil_depth, "soil depth")?,
        drainage: request.drainage,
        slope: measurement(request.slope, "slope")?,
        rainfall: measurement(request.rainfall, "rainfall")?,
        irrigation_type: request.irrigation_type,
        tillage_practice: request.tillage_practice,
        moisture: measurement(request.moisture, "moisture")?,
        // Temperature may legitimately be below zero.
        temperature: if request.temperature.is_finite() {
            request.temperature
        } else {
            return Err(ValidationError::InvalidMeasurement("temperature"));
        },
        cation_exchange_capacity: measurement(
            request.cation_exchange_capacity,
            "cation exchange capacity",
        )?,
        previous_crop: request.previous_crop.trim().to_string(),
    };

    Ok(ValidatedInput {
        sample,
        selection: Selection {
            crop_id,
            state_id,
            district,
        },
        plot: PlotArea {
            value: plot_area,
            unit: request.area_unit,
        },
    })
}
