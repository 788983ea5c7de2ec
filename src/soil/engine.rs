//! Fertilizer and soil recommendation engine.
//!
//! `analyze` is a pure function of the validated input and the requirement
//! table: no I/O, no shared mutable state, identical input gives an
//! identical report.

use sha2::{Digest, Sha256};

use super::advisory::field_advisory;
use super::classify::{
    classify_organic_matter, classify_ph, classify_salinity, deficient_in, MICRONUTRIENTS,
    SECONDARY_NUTRIENTS,
};
use super::fertilizer::{deficiency, DosingError, FertilizerPlan, NutrientStatus};
use super::models::ValidatedInput;
use super::report::{
    AnalysisReport, CropInfo, Deficiencies, Measured, NutrientStatuses, PlotAreaEcho,
    RegionInfo, Required, SoilHealth,
};
use super::scoring::{crop_suitability, soil_health};
use crate::reference::{catalog, RequirementTable};

pub const ENGINE: &str = "krishi-soil-engine";
pub const ENGINE_VERSION: &str = "1.0.0";

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Fingerprint of a validated input, used as the report identity.
pub fn input_hash(input: &ValidatedInput) -> String {
    let input_json = serde_json::to_string(input).unwrap_or_default();
    sha256_hex(&input_json)
}

/// Analyse a validated sample against the requirement for its selection.
///
/// Fails only when a fertilizer dose is too large to price.
pub fn analyze(
    input: &ValidatedInput,
    table: &RequirementTable,
) -> Result<AnalysisReport, DosingError> {
    let sample = &input.sample;
    let selection = &input.selection;

    let resolved = table.resolve(selection.crop_id, selection.state_id, &selection.district);
    let req = &resolved.requirement;

    let hectares = input.plot.hectares();

    let n_deficiency = deficiency(req.required_n, sample.nitrogen);
    let p_deficiency = deficiency(req.required_p, sample.phosphorus);
    let k_deficiency = deficiency(req.required_k, sample.potassium);

    let fertilizers = FertilizerPlan::new(n_deficiency, p_deficiency, k_deficiency, hectares)?;

    let health = soil_health(sample);

    Ok(AnalysisReport {
        engine: ENGINE,
        engine_version: ENGINE_VERSION,
        input_hash: input_hash(input),
        crop: CropInfo {
            id: selection.crop_id,
            name: catalog::crop(selection.crop_id).map(|c| c.name),
        },
        region: RegionInfo {
            state_id: selection.state_id,
            state_name: catalog::state(selection.state_id).map(|s| s.name),
            district: selection.district.clone(),
        },
        requirement_source: resolved.source,
        measured: Measured {
            nitrogen: sample.nitrogen,
            phosphorus: sample.phosphorus,
            potassium: sample.potassium,
            ph: sample.ph,
            organic_matter: sample.organic_matter,
            electrical_conductivity: sample.electrical_conductivity,
            zinc: sample.zinc,
            iron: sample.iron,
            manganese: sample.manganese,
            copper: sample.copper,
            boron: sample.boron,
            calcium: sample.calcium,
            magnesium: sample.magnesium,
            sulfur: sample.sulfur,
        },
        required: Required {
            nitrogen: req.required_n,
            phosphorus: req.required_p,
            potassium: req.required_k,
            min_ph: req.min_ph,
            max_ph: req.max_ph,
            organic_matter: req.organic_matter,
            ec: req.ec,
            zinc: req.zinc,
        },
        deficiencies: Deficiencies {
            nitrogen: n_deficiency,
            phosphorus: p_deficiency,
            potassium: k_deficiency,
            micronutrients: deficient_in(sample, &MICRONUTRIENTS),
            secondary_nutrients: deficient_in(sample, &SECONDARY_NUTRIENTS),
        },
        fertilizers,
        ph: classify_ph(sample.ph, req),
        organic_matter: classify_organic_matter(sample.organic_matter),
        electrical_conductivity: classify_salinity(sample.electrical_conductivity),
        soil_health: SoilHealth {
            score: health.score,
            issues: health.issues,
            texture: sample.soil_texture,
            drainage: sample.drainage,
            slope: sample.slope,
            depth: sample.soil_depth,
            bulk_density: sample.bulk_density,
        },
        crop_suitability: crop_suitability(sample, req),
        plot_area: PlotAreaEcho {
            value: input.plot.value,
            unit: input.plot.unit,
            hectares,
        },
        nutrient_status: NutrientStatuses {
            nitrogen: NutrientStatus::classify(sample.nitrogen, req.required_n),
            phosphorus: NutrientStatus::classify(sample.phosphorus, req.required_p),
            potassium: NutrientStatus::classify(sample.potassium, req.required_k),
        },
        advisory: field_advisory(sample),
    })
}
