//! Quick crop-independent field advisory.
//!
//! Uses absolute thresholds on the raw sample, unlike the requirement-based
//! analysis. Shown next to the detailed report as a first read for farmers.

use serde::Serialize;

use super::models::{Drainage, IrrigationType, SoilSample, SoilTexture, TillagePractice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryCheck {
    pub level: AdvisoryLevel,
    pub message: &'static str,
}

impl AdvisoryCheck {
    fn good(message: &'static str) -> Self {
        Self {
            level: AdvisoryLevel::Good,
            message,
        }
    }

    fn warning(message: &'static str) -> Self {
        Self {
            level: AdvisoryLevel::Warning,
            message,
        }
    }

    fn critical(message: &'static str) -> Self {
        Self {
            level: AdvisoryLevel::Critical,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAdvisory {
    pub ph: AdvisoryCheck,
    pub moisture: AdvisoryCheck,
    pub nitrogen: AdvisoryCheck,
    pub phosphorus: AdvisoryCheck,
    pub potassium: AdvisoryCheck,
    pub recommended_crops: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

const GENERAL_PRACTICES: [&str; 4] = [
    "Get the soil tested regularly.",
    "Increase the use of organic manure.",
    "Follow crop rotation.",
    "Build up organic matter in the soil.",
];

pub fn field_advisory(sample: &SoilSample) -> FieldAdvisory {
    let ph = if sample.ph < 6.0 {
        AdvisoryCheck::critical("Soil is acidic. Applying lime is recommended.")
    } else if sample.ph > 8.0 {
        AdvisoryCheck::warning("Soil is alkaline. Apply sulfur or gypsum.")
    } else {
        AdvisoryCheck::good("Soil pH is ideal.")
    };

    let moisture = if sample.moisture < 30.0 {
        AdvisoryCheck::critical("Soil moisture is low. Irrigation is needed.")
    } else if sample.moisture > 80.0 {
        AdvisoryCheck::warning("Soil moisture is high. Improve drainage.")
    } else {
        AdvisoryCheck::good("Soil moisture is adequate.")
    };

    let nitrogen = if sample.nitrogen < 30.0 {
        AdvisoryCheck::critical("Nitrogen is deficient. Apply urea.")
    } else if sample.nitrogen > 80.0 {
        AdvisoryCheck::warning("Nitrogen is high. Reduce fertilizer.")
    } else {
        AdvisoryCheck::good("Nitrogen level is adequate.")
    };

    let phosphorus = if sample.phosphorus < 25.0 {
        AdvisoryCheck::critical("Phosphorus is deficient. Apply DAP.")
    } else if sample.phosphorus > 70.0 {
        AdvisoryCheck::warning("Phosphorus is high.")
    } else {
        AdvisoryCheck::good("Phosphorus level is adequate.")
    };

    let potassium = if sample.potassium < 30.0 {
        AdvisoryCheck::critical("Potassium is deficient. Apply MOP.")
    } else if sample.potassium > 75.0 {
        AdvisoryCheck::warning("Potassium is high.")
    } else {
        AdvisoryCheck::good("Potassium level is adequate.")
    };

    let mut recommendations = GENERAL_PRACTICES.to_vec();
    recommendations.extend(site_notes(sample));

    FieldAdvisory {
        ph,
        moisture,
        nitrogen,
        phosphorus,
        potassium,
        recommended_crops: recommended_crops(sample),
        recommendations,
    }
}

fn recommended_crops(sample: &SoilSample) -> Vec<&'static str> {
    if (6.0..=7.5).contains(&sample.ph) && sample.moisture >= 40.0 && sample.nitrogen >= 40.0 {
        vec!["Rice", "Wheat", "Maize"]
    } else if (6.5..=8.0).contains(&sample.ph) {
        vec!["Pulses", "Oilseeds", "Vegetables"]
    } else {
        vec!["Mixed cropping", "Fodder crops"]
    }
}

fn site_notes(sample: &SoilSample) -> Vec<&'static str> {
    let mut notes = Vec::new();

    if sample.organic_matter < 1.0 {
        notes.push("Organic matter is low. Use more green manure and compost.");
    } else if sample.organic_matter > 3.0 {
        notes.push("Organic matter is high. Reduce nitrogen fertilizer.");
    }

    if sample.electrical_conductivity > 2.0 {
        notes.push("Soil salinity is high. Improve drainage and apply gypsum.");
    } else if sample.electrical_conductivity < 0.3 {
        notes.push("Soil salinity is low. Apply micronutrients.");
    }

    if sample.zinc < 0.5 {
        notes.push("Zinc is deficient. Apply zinc sulfate.");
    }
    if sample.iron < 5.0 {
        notes.push("Iron is deficient. Apply ferrous sulfate.");
    }
    if sample.calcium < 150.0 {
        notes.push("Calcium is deficient. Apply gypsum or lime.");
    }
    if sample.magnesium < 30.0 {
        notes.push("Magnesium is deficient. Apply magnesium sulfate.");
    }
    if sample.sulfur < 10.0 {
        notes.push("Sulfur is deficient. Apply gypsum or ammonium sulfate.");
    }

    match sample.soil_texture {
        SoilTexture::Clay => {
            notes.push("Clay soil. Improve drainage and mix in sand.");
        }
        SoilTexture::Sandy => {
            notes.push("Sandy soil. Add organic matter and irrigate more often.");
        }
        _ => {}
    }

    if sample.drainage == Drainage::Poor {
        notes.push("Drainage is poor. Dig drainage channels and apply gypsum.");
    }
    if sample.slope > 5.0 {
        notes.push("Slope is steep. Adopt contour farming and terracing.");
    }
    if sample.irrigation_type == IrrigationType::Rainfed && sample.rainfall < 1000.0 {
        notes.push("Rainfall is low. Develop an irrigation source.");
    }
    if sample.tillage_practice == TillagePractice::Conventional && sample.organic_matter < 1.5 {
        notes.push("Adopt minimum tillage to conserve organic matter.");
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::classify::tests::healthy_sample;

    #[test]
    fn test_healthy_sample_advisory() {
        let advisory = field_advisory(&healthy_sample());

        assert_eq!(advisory.ph.level, AdvisoryLevel::Good);
        assert_eq!(advisory.moisture.level, AdvisoryLevel::Good);
        // Absolute thresholds: 120 kg/ha N is "high" here even when it meets the crop target.
        assert_eq!(advisory.nitrogen.level, AdvisoryLevel::Warning);
        assert_eq!(advisory.phosphorus.level, AdvisoryLevel::Good);
        assert_eq!(advisory.potassium.level, AdvisoryLevel::Good);
        assert_eq!(advisory.recommended_crops, vec!["Rice", "Wheat", "Maize"]);
        assert_eq!(advisory.recommendations, GENERAL_PRACTICES.to_vec());
    }

    #[test]
    fn test_critical_levels() {
        let sample = SoilSample {
            ph: 5.5,
            moisture: 20.0,
            nitrogen: 10.0,
            phosphorus: 10.0,
            potassium: 10.0,
            ..healthy_sample()
        };
        let advisory = field_advisory(&sample);

        assert_eq!(advisory.ph.level, AdvisoryLevel::Critical);
        assert_eq!(advisory.moisture.level, AdvisoryLevel::Critical);
        assert_eq!(advisory.nitrogen.level, AdvisoryLevel::Critical);
        assert_eq!(advisory.phosphorus.level, AdvisoryLevel::Critical);
        assert_eq!(advisory.potassium.level, AdvisoryLevel::Critical);
        assert_eq!(advisory.recommended_crops, vec!["Mixed cropping", "Fodder crops"]);
    }

    #[test]
    fn test_alkaline_soil_suggests_pulses() {
        let sample = SoilSample {
            ph: 7.8,
            ..healthy_sample()
        };
        let advisory = field_advisory(&sample);
        assert_eq!(advisory.recommended_crops, vec!["Pulses", "Oilseeds", "Vegetables"]);
    }

    #[test]
    fn test_site_notes_follow_conditions() {
        let sample = SoilSample {
            organic_matter: 0.8,
            soil_texture: SoilTexture::Sandy,
            drainage: Drainage::Poor,
            irrigation_type: IrrigationType::Rainfed,
            rainfall: 600.0,
            ..healthy_sample()
        };
        let notes = site_notes(&sample);

        assert_eq!(
            notes,
            vec![
                "Organic matter is low. Use more green manure and compost.",
                "Sandy soil. Add organic matter and irrigate more often.",
                "Drainage is poor. Dig drainage channels and apply gypsum.",
                "Rainfall is low. Develop an irrigation source.",
                "Adopt minimum tillage to conserve organic matter.",
            ]
        );
    }

    #[test]
    fn test_no_till_skips_tillage_note() {
        let sample = SoilSample {
            organic_matter: 1.2,
            tillage_practice: TillagePractice::NoTill,
            ..healthy_sample()
        };
        assert!(site_notes(&sample).is_empty());
    }
}
