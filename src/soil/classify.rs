//! pH, organic matter and salinity status, and trace nutrient flags.
//!
//! Organic matter and EC bands are fixed and do not depend on the crop;
//! only the pH band comes from the crop requirement.

use serde::Serialize;

use super::models::SoilSample;
use crate::reference::CropRequirement;

pub const LOW_ORGANIC_MATTER_PCT: f64 = 1.0;
pub const HIGH_ORGANIC_MATTER_PCT: f64 = 3.0;
pub const HIGH_EC_DS_M: f64 = 2.0;
pub const LOW_EC_DS_M: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhStatus {
    Acidic,
    Optimal,
    Alkaline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrganicMatterStatus {
    Low,
    Optimal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalinityStatus {
    Low,
    Normal,
    High,
}

/// A status with the action it calls for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment<S> {
    pub status: S,
    pub recommendation: &'static str,
}

pub fn classify_ph(ph: f64, requirement: &CropRequirement) -> Assessment<PhStatus> {
    if ph < requirement.min_ph {
        Assessment {
            status: PhStatus::Acidic,
            recommendation: "Apply agricultural lime to increase soil pH.",
        }
    } else if ph > requirement.max_ph {
        Assessment {
            status: PhStatus::Alkaline,
            recommendation: "Apply agricultural sulfur or gypsum to decrease soil pH.",
        }
    } else {
        Assessment {
            status: PhStatus::Optimal,
            recommendation: "pH is in optimal range. No adjustment needed.",
        }
    }
}

pub fn classify_organic_matter(organic_matter: f64) -> Assessment<OrganicMatterStatus> {
    if organic_matter < LOW_ORGANIC_MATTER_PCT {
        Assessment {
            status: OrganicMatterStatus::Low,
            recommendation:
                "Apply green manure, compost, or farmyard manure to increase organic matter.",
        }
    } else if organic_matter > HIGH_ORGANIC_MATTER_PCT {
        Assessment {
            status: OrganicMatterStatus::High,
            recommendation: "Organic matter is high. Reduce nitrogen fertilizer application.",
        }
    } else {
        Assessment {
            status: OrganicMatterStatus::Optimal,
            recommendation: "Organic matter content is adequate.",
        }
    }
}

pub fn classify_salinity(ec: f64) -> Assessment<SalinityStatus> {
    if ec > HIGH_EC_DS_M {
        Assessment {
            status: SalinityStatus::High,
            recommendation: "High soil salinity. Improve drainage and apply gypsum.",
        }
    } else if ec < LOW_EC_DS_M {
        Assessment {
            status: SalinityStatus::Low,
            recommendation: "Low soil salinity. Consider micronutrient application.",
        }
    } else {
        Assessment {
            status: SalinityStatus::Normal,
            recommendation: "Soil salinity is within normal range.",
        }
    }
}

/// Micronutrients and secondary nutrients with a deficiency flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceNutrient {
    Zinc,
    Iron,
    Manganese,
    Copper,
    Boron,
    Calcium,
    Magnesium,
    Sulfur,
}

impl TraceNutrient {
    /// Level below which the nutrient is deficient, mg/kg.
    pub fn threshold(self) -> f64 {
        match self {
            Self::Zinc => 0.5,
            Self::Iron => 5.0,
            Self::Manganese => 3.0,
            Self::Copper => 0.8,
            Self::Boron => 0.3,
            Self::Calcium => 150.0,
            Self::Magnesium => 30.0,
            Self::Sulfur => 10.0,
        }
    }

    fn measured(self, sample: &SoilSample) -> f64 {
        match self {
            Self::Zinc => sample.zinc,
            Self::Iron => sample.iron,
            Self::Manganese => sample.manganese,
            Self::Copper => sample.copper,
            Self::Boron => sample.boron,
            Self::Calcium => sample.calcium,
            Self::Magnesium => sample.magnesium,
            Self::Sulfur => sample.sulfur,
        }
    }

    pub fn is_deficient(self, sample: &SoilSample) -> bool {
        self.measured(sample) < self.threshold()
    }
}

pub const MICRONUTRIENTS: [TraceNutrient; 5] = [
    TraceNutrient::Zinc,
    TraceNutrient::Iron,
    TraceNutrient::Manganese,
    TraceNutrient::Copper,
    TraceNutrient::Boron,
];

pub const SECONDARY_NUTRIENTS: [TraceNutrient; 3] = [
    TraceNutrient::Calcium,
    TraceNutrient::Magnesium,
    TraceNutrient::Sulfur,
];

pub fn deficient_in(sample: &SoilSample, nutrients: &[TraceNutrient]) -> Vec<TraceNutrient> {
    nutrients
        .iter()
        .copied()
        .filter(|n| n.is_deficient(sample))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reference::default_requirement;
    use crate::soil::models::{Drainage, IrrigationType, SoilTexture, TillagePractice};

    /// Sample with every value inside its healthy band.
    pub(crate) fn healthy_sample() -> SoilSample {
        SoilSample {
            nitrogen: 120.0,
            phosphorus: 60.0,
            potassium: 40.0,
            ph: 7.0,
            organic_matter: 1.5,
            electrical_conductivity: 0.8,
            calcium: 200.0,
            magnesium: 50.0,
            sulfur: 15.0,
            zinc: 0.8,
            iron: 10.0,
            manganese: 5.0,
            copper: 1.2,
            boron: 0.5,
            soil_texture: SoilTexture::Loamy,
            bulk_density: 1.4,
            soil_depth: 30.0,
            drainage: Drainage::Moderate,
            slope: 2.0,
            rainfall: 1200.0,
            irrigation_type: IrrigationType::Surface,
            tillage_practice: TillagePractice::Conventional,
            moisture: 60.0,
            temperature: 25.0,
            cation_exchange_capacity: 15.0,
            previous_crop: String::new(),
        }
    }

    #[test]
    fn test_ph_against_crop_range() {
        let req = default_requirement(1, 1, "X");

        let acidic = classify_ph(5.0, &req);
        assert_eq!(acidic.status, PhStatus::Acidic);
        assert!(acidic.recommendation.contains("lime"));

        let alkaline = classify_ph(8.2, &req);
        assert_eq!(alkaline.status, PhStatus::Alkaline);
        assert!(alkaline.recommendation.contains("gypsum"));

        assert_eq!(classify_ph(6.0, &req).status, PhStatus::Optimal);
        assert_eq!(classify_ph(7.5, &req).status, PhStatus::Optimal);
    }

    #[test]
    fn test_organic_matter_bands() {
        assert_eq!(classify_organic_matter(0.9).status, OrganicMatterStatus::Low);
        assert_eq!(classify_organic_matter(1.0).status, OrganicMatterStatus::Optimal);
        assert_eq!(classify_organic_matter(3.0).status, OrganicMatterStatus::Optimal);
        assert_eq!(classify_organic_matter(3.1).status, OrganicMatterStatus::High);
    }

    #[test]
    fn test_salinity_bands() {
        assert_eq!(classify_salinity(2.1).status, SalinityStatus::High);
        assert_eq!(classify_salinity(2.0).status, SalinityStatus::Normal);
        assert_eq!(classify_salinity(0.3).status, SalinityStatus::Normal);
        assert_eq!(classify_salinity(0.29).status, SalinityStatus::Low);
    }

    #[test]
    fn test_healthy_sample_has_no_trace_deficiencies() {
        let sample = healthy_sample();
        assert!(deficient_in(&sample, &MICRONUTRIENTS).is_empty());
        assert!(deficient_in(&sample, &SECONDARY_NUTRIENTS).is_empty());
    }

    #[test]
    fn test_trace_deficiencies_keep_order() {
        let sample = SoilSample {
            boron: 0.1,
            zinc: 0.4,
            copper: 0.8,
            sulfur: 9.9,
            calcium: 100.0,
            ..healthy_sample()
        };

        assert_eq!(
            deficient_in(&sample, &MICRONUTRIENTS),
            vec![TraceNutrient::Zinc, TraceNutrient::Boron]
        );
        assert_eq!(
            deficient_in(&sample, &SECONDARY_NUTRIENTS),
            vec![TraceNutrient::Calcium, TraceNutrient::Sulfur]
        );
    }
}
