//! Soil-health and crop-suitability scores.
//!
//! Both start at 100 and lose fixed penalties. Scores are not clamped and
//! can go below zero.

use serde::Serialize;

use super::fertilizer::OPTIMAL_RATIO_LOW;
use super::models::{Drainage, SoilSample};
use crate::reference::CropRequirement;

/// Running score with the issues that reduced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub score: i32,
    pub issues: Vec<&'static str>,
}

impl Score {
    fn new() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
        }
    }

    fn penalize(&mut self, condition: bool, points: i32, issue: &'static str) {
        if condition {
            self.score -= points;
            self.issues.push(issue);
        }
    }
}

pub fn soil_health(sample: &SoilSample) -> Score {
    let mut score = Score::new();
    score.penalize(sample.organic_matter < 1.0, 20, "Low organic matter");
    score.penalize(sample.electrical_conductivity > 2.0, 15, "High salinity");
    score.penalize(sample.drainage == Drainage::Poor, 10, "Poor drainage");
    score.penalize(sample.slope > 5.0, 5, "Steep slope");
    score.penalize(sample.soil_depth < 20.0, 10, "Shallow soil");
    score.penalize(sample.bulk_density > 1.6, 10, "High bulk density");
    score
}

/// Qualitative band of a crop-suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuitabilityBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SuitabilityBand {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Self::Excellent,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSuitability {
    pub score: i32,
    pub status: SuitabilityBand,
    pub issues: Vec<&'static str>,
}

pub fn crop_suitability(sample: &SoilSample, req: &CropRequirement) -> CropSuitability {
    let mut score = Score::new();
    score.penalize(
        sample.ph < req.min_ph || sample.ph > req.max_ph,
        20,
        "pH not optimal for selected crop",
    );
    score.penalize(
        sample.nitrogen / req.required_n < OPTIMAL_RATIO_LOW,
        15,
        "Nitrogen deficiency",
    );
    score.penalize(
        sample.phosphorus / req.required_p < OPTIMAL_RATIO_LOW,
        15,
        "Phosphorus deficiency",
    );
    score.penalize(
        sample.potassium / req.required_k < OPTIMAL_RATIO_LOW,
        15,
        "Potassium deficiency",
    );
    score.penalize(
        sample.organic_matter < req.organic_matter * 0.8,
        10,
        "Low organic matter for crop requirement",
    );
    score.penalize(
        sample.electrical_conductivity > req.ec * 1.5,
        10,
        "High salinity for crop tolerance",
    );

    CropSuitability {
        score: score.score,
        status: SuitabilityBand::from_score(score.score),
        issues: score.issues,
    }
}
