//! Crop nutrient requirement table with regional fallback.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per (crop, state, district) agronomic targets.
///
/// NPK in kg/ha, organic matter in percent, EC in dS/m, zinc in mg/kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRequirement {
    pub crop_id: u32,
    pub state_id: u32,
    pub district: String,
    pub required_n: f64,
    pub required_p: f64,
    pub required_k: f64,
    pub min_ph: f64,
    pub max_ph: f64,
    pub organic_matter: f64,
    pub ec: f64,
    pub zinc: f64,
}

/// Which tier of the lookup produced a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementSource {
    /// Matched crop, state and district.
    Exact,
    /// Matched crop and state; district differs.
    Regional,
    /// No row for the crop in this state.
    Default,
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRequirement {
    pub requirement: CropRequirement,
    pub source: RequirementSource,
}

/// Rejected requirement rows.
#[derive(Debug, thiserror::Error)]
pub enum RequirementError {
    #[error("requirement row {index} ({crop_id}/{state_id}/{district}): {reason}")]
    InvalidRow {
        index: usize,
        crop_id: u32,
        state_id: u32,
        district: String,
        reason: &'static str,
    },
}

/// Requirement used when neither the district nor the state has a row.
pub fn default_requirement(crop_id: u32, state_id: u32, district: &str) -> CropRequirement {
    CropRequirement {
        crop_id,
        state_id,
        district: district.to_string(),
        required_n: 120.0,
        required_p: 60.0,
        required_k: 40.0,
        min_ph: 6.0,
        max_ph: 7.5,
        organic_matter: 1.5,
        ec: 0.8,
        zinc: 1.0,
    }
}

/// Immutable requirement table indexed for exact and regional lookup.
///
/// The regional index keeps the first row seen for a (crop, state) pair,
/// so table order decides which district stands in for the state.
#[derive(Debug, Clone)]
pub struct RequirementTable {
    rows: Vec<CropRequirement>,
    exact: HashMap<(u32, u32, String), usize>,
    regional: HashMap<(u32, u32), usize>,
}

impl RequirementTable {
    /// Build a table from rows, rejecting rows the engine cannot divide by.
    pub fn from_rows(rows: Vec<CropRequirement>) -> Result<Self, RequirementError> {
        let mut exact = HashMap::with_capacity(rows.len());
        let mut regional = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            check_row(index, row)?;
            exact
                .entry((row.crop_id, row.state_id, row.district.clone()))
                .or_insert(index);
            regional.entry((row.crop_id, row.state_id)).or_insert(index);
        }

        Ok(Self {
            rows,
            exact,
            regional,
        })
    }

    /// The rows compiled into the service.
    pub fn builtin() -> Self {
        let rows = BUILTIN_ROWS
            .iter()
            .map(
                |&(crop_id, state_id, district, n, p, k, min_ph, max_ph, om, ec, zinc)| {
                    CropRequirement {
                        crop_id,
                        state_id,
                        district: district.to_string(),
                        required_n: n,
                        required_p: p,
                        required_k: k,
                        min_ph,
                        max_ph,
                        organic_matter: om,
                        ec,
                        zinc,
                    }
                },
            )
            .collect();

        Self::from_rows(rows).expect("built-in requirement rows are valid")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve the requirement for a selection. Never fails.
    pub fn resolve(&self, crop_id: u32, state_id: u32, district: &str) -> ResolvedRequirement {
        if let Some(&i) = self.exact.get(&(crop_id, state_id, district.to_string())) {
            return ResolvedRequirement {
                requirement: self.rows[i].clone(),
                source: RequirementSource::Exact,
            };
        }

        if let Some(&i) = self.regional.get(&(crop_id, state_id)) {
            return ResolvedRequirement {
                requirement: self.rows[i].clone(),
                source: RequirementSource::Regional,
            };
        }

        ResolvedRequirement {
            requirement: default_requirement(crop_id, state_id, district),
            source: RequirementSource::Default,
        }
    }
}

/// Upper bound on a required nutrient, in kg/ha.
pub const MAX_REQUIRED_KG_HA: f64 = 10_000.0;

fn check_row(index: usize, row: &CropRequirement) -> Result<(), RequirementError> {
    let invalid = |reason| RequirementError::InvalidRow {
        index,
        crop_id: row.crop_id,
        state_id: row.state_id,
        district: row.district.clone(),
        reason,
    };

    let values = [
        row.required_n,
        row.required_p,
        row.required_k,
        row.min_ph,
        row.max_ph,
        row.organic_matter,
        row.ec,
        row.zinc,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(invalid("values must be finite"));
    }
    if row.required_n <= 0.0 || row.required_p <= 0.0 || row.required_k <= 0.0 {
        return Err(invalid("required NPK must be positive"));
    }
    if [row.required_n, row.required_p, row.required_k]
        .iter()
        .any(|&v| v > MAX_REQUIRED_KG_HA)
    {
        return Err(invalid("required NPK must not exceed 10000 kg/ha"));
    }
    if row.min_ph > row.max_ph {
        return Err(invalid("min_ph exceeds max_ph"));
    }
    if row.organic_matter < 0.0 || row.ec < 0.0 || row.zinc < 0.0 {
        return Err(invalid("targets must not be negative"));
    }
    Ok(())
}

// (crop, state, district, N, P, K, min pH, max pH, organic matter %, EC, zinc)
type Row = (u32, u32, &'static str, f64, f64, f64, f64, f64, f64, f64, f64);

const BUILTIN_ROWS: &[Row] = &[
    // Rice
    (2, 4, "Gaya", 120.0, 60.0, 40.0, 6.0, 7.5, 1.5, 1.0, 1.0),
    (2, 4, "Patna", 130.0, 65.0, 45.0, 6.0, 7.5, 1.8, 0.8, 1.2),
    (2, 11, "Mysuru", 110.0, 55.0, 35.0, 5.5, 7.0, 2.0, 0.6, 0.8),
    // Wheat
    (1, 4, "Nalanda", 150.0, 75.0, 50.0, 6.0, 7.5, 1.2, 0.8, 1.5),
    (1, 20, "Ludhiana", 160.0, 80.0, 60.0, 6.5, 8.0, 1.0, 1.2, 1.8),
    (1, 14, "Pune", 140.0, 70.0, 45.0, 6.0, 7.5, 1.5, 0.7, 1.2),
    // Maize
    (3, 4, "Patna", 100.0, 50.0, 40.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    (3, 20, "Amritsar", 120.0, 60.0, 50.0, 6.5, 8.0, 1.2, 1.0, 1.5),
    // Cotton
    (4, 7, "Ahmedabad", 80.0, 40.0, 30.0, 6.5, 8.5, 1.0, 1.5, 0.8),
    (4, 14, "Nagpur", 90.0, 45.0, 35.0, 6.0, 8.0, 1.2, 1.2, 1.0),
    // Sugarcane
    (5, 14, "Pune", 200.0, 100.0, 80.0, 6.5, 8.0, 2.0, 1.0, 1.5),
    (5, 26, "Lucknow", 220.0, 110.0, 90.0, 6.0, 7.5, 1.8, 0.8, 1.2),
    // Soybean
    (6, 14, "Nagpur", 60.0, 30.0, 25.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    (6, 13, "Indore", 65.0, 35.0, 30.0, 6.5, 8.0, 1.2, 1.0, 1.2),
    // Groundnut
    (7, 7, "Rajkot", 40.0, 20.0, 15.0, 6.5, 8.0, 1.0, 1.2, 0.8),
    (7, 14, "Solapur", 45.0, 25.0, 20.0, 6.0, 7.5, 1.3, 0.9, 1.0),
    // Potato
    (8, 4, "Patna", 120.0, 60.0, 50.0, 5.5, 7.0, 2.0, 0.8, 1.5),
    (8, 20, "Jalandhar", 130.0, 65.0, 55.0, 6.0, 7.5, 1.8, 1.0, 1.8),
    // Tomato
    (9, 14, "Pune", 80.0, 40.0, 30.0, 6.0, 7.5, 2.0, 0.8, 1.2),
    (9, 23, "Coimbatore", 85.0, 45.0, 35.0, 6.5, 8.0, 1.8, 1.0, 1.5),
    // Onion
    (10, 14, "Nashik", 60.0, 30.0, 25.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    (10, 20, "Amritsar", 65.0, 35.0, 30.0, 6.5, 8.0, 1.2, 1.0, 1.2),
    // Bajra (Pearl Millet)
    (11, 20, "Ludhiana", 80.0, 40.0, 30.0, 6.5, 8.5, 1.0, 1.2, 0.8),
    (11, 7, "Ahmedabad", 75.0, 35.0, 25.0, 6.0, 8.0, 1.2, 1.0, 1.0),
    // Barley
    (12, 20, "Amritsar", 100.0, 50.0, 40.0, 6.5, 8.0, 1.2, 1.0, 1.5),
    (12, 4, "Gaya", 90.0, 45.0, 35.0, 6.0, 7.5, 1.5, 0.8, 1.2),
    // Mustard
    (13, 20, "Ludhiana", 60.0, 30.0, 25.0, 6.5, 8.0, 1.0, 1.0, 1.0),
    (13, 4, "Patna", 55.0, 25.0, 20.0, 6.0, 7.5, 1.3, 0.8, 0.8),
    // Chickpea (Gram)
    (14, 14, "Pune", 40.0, 20.0, 15.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    (14, 13, "Indore", 45.0, 25.0, 20.0, 6.5, 8.0, 1.2, 1.0, 1.2),
    // Lentil (Masoor)
    (15, 4, "Nalanda", 35.0, 15.0, 10.0, 6.0, 7.5, 1.3, 0.8, 0.8),
    (15, 14, "Nagpur", 40.0, 20.0, 15.0, 6.5, 8.0, 1.0, 1.0, 1.0),
    // Pea
    (16, 20, "Jalandhar", 50.0, 25.0, 20.0, 6.0, 7.5, 1.8, 0.8, 1.2),
    (16, 14, "Pune", 55.0, 30.0, 25.0, 6.5, 8.0, 1.5, 1.0, 1.5),
    // Sugar beet
    (17, 20, "Amritsar", 120.0, 60.0, 50.0, 6.5, 8.0, 1.5, 1.0, 1.2),
    (17, 4, "Patna", 110.0, 55.0, 45.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Sunflower
    (18, 14, "Solapur", 70.0, 35.0, 30.0, 6.5, 8.0, 1.2, 1.0, 1.0),
    (18, 20, "Ludhiana", 75.0, 40.0, 35.0, 6.0, 7.5, 1.0, 1.2, 1.2),
    // Jute
    (19, 28, "Kolkata", 60.0, 30.0, 25.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    (19, 28, "Hooghly", 65.0, 35.0, 30.0, 6.5, 8.0, 1.5, 1.0, 1.2),
    // Sesame (Til)
    (20, 7, "Rajkot", 40.0, 20.0, 15.0, 6.5, 8.0, 1.0, 1.2, 0.8),
    (20, 14, "Solapur", 45.0, 25.0, 20.0, 6.0, 7.5, 1.3, 0.9, 1.0),
    // Sorghum (Jowar)
    (21, 14, "Pune", 80.0, 40.0, 30.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    (21, 13, "Indore", 85.0, 45.0, 35.0, 6.5, 8.0, 1.2, 1.0, 1.2),
    // Pigeon Pea (Arhar/Tur)
    (22, 14, "Nagpur", 30.0, 15.0, 10.0, 6.0, 7.5, 1.3, 0.8, 0.8),
    (22, 13, "Indore", 35.0, 20.0, 15.0, 6.5, 8.0, 1.0, 1.0, 1.0),
    // Black Gram (Urad)
    (23, 14, "Pune", 35.0, 15.0, 10.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    (23, 13, "Indore", 40.0, 20.0, 15.0, 6.5, 8.0, 1.2, 1.0, 1.2),
    // Green Gram (Moong)
    (24, 14, "Nagpur", 30.0, 15.0, 10.0, 6.0, 7.5, 1.3, 0.8, 0.8),
    (24, 13, "Indore", 35.0, 20.0, 15.0, 6.5, 8.0, 1.0, 1.0, 1.0),
    // Cabbage
    (25, 14, "Pune", 60.0, 30.0, 25.0, 6.0, 7.5, 2.0, 0.8, 1.2),
    // Cauliflower
    (26, 14, "Pune", 65.0, 35.0, 30.0, 6.0, 7.5, 2.0, 0.8, 1.5),
    // Brinjal (Eggplant)
    (27, 14, "Pune", 55.0, 25.0, 20.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Okra (Lady Finger)
    (28, 14, "Pune", 50.0, 25.0, 20.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    // Carrot
    (29, 14, "Pune", 45.0, 20.0, 15.0, 6.0, 7.5, 1.8, 0.8, 1.2),
    // Spinach
    (30, 14, "Pune", 40.0, 20.0, 15.0, 6.0, 7.5, 2.0, 0.8, 1.0),
    // Pumpkin
    (31, 14, "Pune", 50.0, 25.0, 20.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Chili Pepper
    (32, 14, "Pune", 45.0, 20.0, 15.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    // Garlic
    (33, 14, "Pune", 40.0, 20.0, 15.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Ginger
    (34, 14, "Pune", 50.0, 25.0, 20.0, 6.0, 7.5, 2.0, 0.8, 1.2),
    // Turmeric
    (35, 14, "Pune", 55.0, 30.0, 25.0, 6.0, 7.5, 2.0, 0.8, 1.5),
    // Sweet Potato
    (36, 14, "Pune", 60.0, 30.0, 25.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Radish
    (37, 14, "Pune", 35.0, 15.0, 10.0, 6.0, 7.5, 1.5, 0.8, 0.8),
    // Turnip
    (38, 14, "Pune", 40.0, 20.0, 15.0, 6.0, 7.5, 1.5, 0.8, 1.0),
    // Cucumber
    (39, 14, "Pune", 45.0, 20.0, 15.0, 6.0, 7.5, 1.8, 0.8, 1.0),
    // Bottle Gourd
    (40, 14, "Pune", 50.0, 25.0, 20.0, 6.0, 7.5, 1.8, 0.8, 1.0),
];
