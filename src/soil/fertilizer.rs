//! Fertilizer dosing and cost for NPK deficiencies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A dose that cannot be priced in rupees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DosingError {
    #[error("fertilizer quantity of {quantity_kg} kg is too large to price")]
    QuantityOutOfRange { quantity_kg: f64 },
    #[error("total fertilizer cost is too large to represent")]
    TotalCostOverflow,
}

/// Carrier fertilizers used to correct NPK deficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fertilizer {
    /// Urea, 46% N.
    Urea,
    /// Di-ammonium phosphate, counted as 46% P.
    Dap,
    /// Muriate of potash, 60% K.
    Mop,
}

impl Fertilizer {
    /// Nutrient content by weight, in percent.
    pub fn nutrient_content_pct(self) -> f64 {
        match self {
            Self::Urea => 46.0,
            Self::Dap => 46.0,
            Self::Mop => 60.0,
        }
    }

    /// Price in rupees per kg.
    pub fn unit_price(self) -> Decimal {
        match self {
            Self::Urea => dec!(6),
            Self::Dap => dec!(24),
            Self::Mop => dec!(17),
        }
    }

    /// kg of product per hectare needed to supply `deficiency` kg/ha of nutrient.
    pub fn per_hectare(self, deficiency: f64) -> f64 {
        if deficiency > 0.0 {
            deficiency * 100.0 / self.nutrient_content_pct()
        } else {
            0.0
        }
    }
}

/// One fertilizer line of the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerLine {
    pub per_ha_kg: f64,
    pub total_kg: f64,
    /// Rupees
    pub cost: Decimal,
}

impl FertilizerLine {
    pub fn new(
        fertilizer: Fertilizer,
        deficiency: f64,
        hectares: f64,
    ) -> Result<Self, DosingError> {
        let per_ha_kg = fertilizer.per_hectare(deficiency);
        let total_kg = per_ha_kg * hectares;
        Ok(Self {
            per_ha_kg,
            total_kg,
            cost: cost_of(total_kg, fertilizer.unit_price())?,
        })
    }
}

/// Urea, DAP and MOP quantities with costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerPlan {
    pub urea: FertilizerLine,
    pub dap: FertilizerLine,
    pub mop: FertilizerLine,
    pub total_cost: Decimal,
}

impl FertilizerPlan {
    pub fn new(
        n_deficiency: f64,
        p_deficiency: f64,
        k_deficiency: f64,
        hectares: f64,
    ) -> Result<Self, DosingError> {
        let urea = FertilizerLine::new(Fertilizer::Urea, n_deficiency, hectares)?;
        let dap = FertilizerLine::new(Fertilizer::Dap, p_deficiency, hectares)?;
        let mop = FertilizerLine::new(Fertilizer::Mop, k_deficiency, hectares)?;
        let total_cost = urea
            .cost
            .checked_add(dap.cost)
            .and_then(|sum| sum.checked_add(mop.cost))
            .ok_or(DosingError::TotalCostOverflow)?;

        Ok(Self {
            urea,
            dap,
            mop,
            total_cost,
        })
    }
}

/// One-sided shortfall of a nutrient against its requirement.
pub fn deficiency(required: f64, measured: f64) -> f64 {
    (required - measured).max(0.0)
}

fn cost_of(quantity_kg: f64, price: Decimal) -> Result<Decimal, DosingError> {
    Decimal::from_f64_retain(quantity_kg)
        .and_then(|quantity| quantity.checked_mul(price))
        .ok_or(DosingError::QuantityOutOfRange { quantity_kg })
}

/// Lower edge of the optimal measured/required band (inclusive).
pub const OPTIMAL_RATIO_LOW: f64 = 0.8;
/// Upper edge of the optimal measured/required band (inclusive).
pub const OPTIMAL_RATIO_HIGH: f64 = 1.2;

/// Measured vs. required classification of a macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NutrientLevel {
    Deficient,
    Optimal,
    Excess,
}

impl NutrientLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < OPTIMAL_RATIO_LOW {
            Self::Deficient
        } else if ratio <= OPTIMAL_RATIO_HIGH {
            Self::Optimal
        } else {
            Self::Excess
        }
    }

    /// Display colour used by report renderers.
    pub fn color(self) -> &'static str {
        match self {
            Self::Deficient => "#F44336",
            Self::Optimal => "#4CAF50",
            Self::Excess => "#FF9800",
        }
    }
}

/// Status block for one macronutrient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientStatus {
    pub status: NutrientLevel,
    pub color: &'static str,
    pub text: String,
}

impl NutrientStatus {
    pub fn classify(measured: f64, required: f64) -> Self {
        let status = NutrientLevel::from_ratio(measured / required);
        let text = match status {
            NutrientLevel::Optimal => "Optimal".to_string(),
            NutrientLevel::Deficient => {
                format!("Deficient ({:.2} kg/ha needed)", required - measured)
            }
            NutrientLevel::Excess => format!("Excess ({:.2} kg/ha extra)", measured - required),
        };

        Self {
            status,
            color: status.color(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficiency_is_one_sided() {
        assert_eq!(deficiency(120.0, 60.0), 60.0);
        assert_eq!(deficiency(120.0, 120.0), 0.0);
        assert_eq!(deficiency(120.0, 300.0), 0.0);
    }

    #[test]
    fn test_per_hectare_quantities() {
        assert!((Fertilizer::Urea.per_hectare(60.0) - 130.434_782_6).abs() < 1e-6);
        assert!((Fertilizer::Dap.per_hectare(46.0) - 100.0).abs() < 1e-9);
        assert!((Fertilizer::Mop.per_hectare(30.0) - 50.0).abs() < 1e-9);
        assert_eq!(Fertilizer::Urea.per_hectare(0.0), 0.0);
    }

    #[test]
    fn test_line_scales_by_area_and_price() {
        let line = FertilizerLine::new(Fertilizer::Urea, 60.0, 2.0).unwrap();

        assert!((line.total_kg - 260.869_565).abs() < 1e-5);
        assert_eq!(line.total_kg, line.per_ha_kg * 2.0);
        assert_eq!(line.cost.round_dp(2), dec!(1565.22));
    }

    #[test]
    fn test_plan_total_is_sum_of_lines() {
        let plan = FertilizerPlan::new(10.0, 20.0, 30.0, 1.5).unwrap();
        assert_eq!(plan.total_cost, plan.urea.cost + plan.dap.cost + plan.mop.cost);
        assert!(plan.mop.cost > Decimal::ZERO);
    }

    #[test]
    fn test_zero_deficiency_costs_nothing() {
        let plan = FertilizerPlan::new(0.0, 0.0, 0.0, 10.0).unwrap();
        assert_eq!(plan.urea.total_kg, 0.0);
        assert_eq!(plan.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_quantity_and_cost_increase_with_deficiency() {
        let mut previous = FertilizerLine::new(Fertilizer::Dap, 0.0, 3.0).unwrap();
        for step in 1..50 {
            let line = FertilizerLine::new(Fertilizer::Dap, step as f64 * 0.37, 3.0).unwrap();
            assert!(line.total_kg > previous.total_kg);
            assert!(line.cost > previous.cost);
            previous = line;
        }
    }

    #[test]
    fn test_unpriceable_quantity_is_an_error() {
        let err = FertilizerLine::new(Fertilizer::Dap, 60.0, 1e30).unwrap_err();
        assert!(matches!(err, DosingError::QuantityOutOfRange { .. }));

        // Each line fits, the sum does not.
        assert!(FertilizerLine::new(Fertilizer::Dap, 60.0, 2e25).is_ok());
        assert_eq!(
            FertilizerPlan::new(0.0, 60.0, 60.0, 2e25).unwrap_err(),
            DosingError::TotalCostOverflow
        );
    }

    #[test]
    fn test_ratio_band_edges() {
        assert_eq!(NutrientLevel::from_ratio(0.8), NutrientLevel::Optimal);
        assert_eq!(NutrientLevel::from_ratio(0.79999), NutrientLevel::Deficient);
        assert_eq!(NutrientLevel::from_ratio(1.2), NutrientLevel::Optimal);
        assert_eq!(NutrientLevel::from_ratio(1.20001), NutrientLevel::Excess);
    }

    #[test]
    fn test_ratio_from_measurements_hits_band_edges() {
        assert_eq!(NutrientStatus::classify(96.0, 120.0).status, NutrientLevel::Optimal);
        assert_eq!(NutrientStatus::classify(144.0, 120.0).status, NutrientLevel::Optimal);
    }

    #[test]
    fn test_status_text() {
        let deficient = NutrientStatus::classify(60.0, 120.0);
        assert_eq!(deficient.text, "Deficient (60.00 kg/ha needed)");
        assert_eq!(deficient.color, "#F44336");

        let excess = NutrientStatus::classify(200.0, 120.0);
        assert_eq!(excess.text, "Excess (80.00 kg/ha extra)");
        assert_eq!(excess.color, "#FF9800");

        let optimal = NutrientStatus::classify(120.0, 120.0);
        assert_eq!(optimal.text, "Optimal");
        assert_eq!(optimal.color, "#4CAF50");
    }
}
