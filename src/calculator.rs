//! Blue carbon calculator.
//!
//! A stateless conversion from a meadow area to the carbon it stores and a
//! relatable equivalent (smartphone charges). The renderer re-runs the
//! conversion on every keystroke; nothing here is cached or mutated.

use serde::{Deserialize, Serialize};

/// Units the visitor can enter an area in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AreaUnit {
    /// The native unit of the carbon-density constant
    Hectares,
    /// Familiar stand-in unit, converted to hectares first
    FootballFields,
}

/// Conversion constants, injectable so tests and alternate exhibits can
/// swap scenarios without touching the logic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Mg of carbon stored per hectare of meadow
    pub carbon_per_hectare: f64,
    /// Hectares in one football field
    pub football_field_in_hectares: f64,
    /// Smartphone charges equivalent to one Mg of stored carbon
    pub charges_per_mg_carbon: f64,
}

impl Default for CalculatorConfig {
    /// Reference exhibit constants: the Southeast Asian average carbon
    /// density of 121.95 Mg C/ha, a 0.714 ha football field, and 500,000
    /// charges per Mg C.
    fn default() -> Self {
        Self {
            carbon_per_hectare: 121.95,
            football_field_in_hectares: 0.714,
            charges_per_mg_carbon: 500_000.0,
        }
    }
}

/// Derived quantities for a given area input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonEstimate {
    /// Carbon stored, in Mg C
    pub carbon_mg: f64,
    /// Equivalent number of smartphone charges
    pub smartphone_charges: f64,
}

impl CarbonEstimate {
    /// The neutral "no valid input yet" estimate.
    pub const ZERO: Self = Self {
        carbon_mg: 0.0,
        smartphone_charges: 0.0,
    };
}

/// The conversion engine. Holds only its configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarbonCalculator {
    config: CalculatorConfig,
}

impl CarbonCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Convert an area to its carbon estimate.
    ///
    /// Total and deterministic. A non-finite or negative quantity yields
    /// [`CarbonEstimate::ZERO`] rather than an error; renderers treat the
    /// zero estimate as "no valid input yet".
    pub fn convert(&self, quantity: f64, unit: AreaUnit) -> CarbonEstimate {
        if !quantity.is_finite() || quantity < 0.0 {
            return CarbonEstimate::ZERO;
        }

        let hectares = match unit {
            AreaUnit::Hectares => quantity,
            AreaUnit::FootballFields => quantity * self.config.football_field_in_hectares,
        };

        let carbon_mg = hectares * self.config.carbon_per_hectare;
        CarbonEstimate {
            carbon_mg,
            smartphone_charges: carbon_mg * self.config.charges_per_mg_carbon,
        }
    }
}
