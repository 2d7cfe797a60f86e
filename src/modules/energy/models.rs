use serde::Deserialize;

/// Price entry for a single fuel in the GET /ENSEK/energy table
#[derive(Debug, Clone, Deserialize)]
pub struct EnergyPrice {
    pub energy_id: u32,
    pub price_per_unit: f64,
}

/// The full energy price reference table, keyed by fuel name
#[derive(Debug, Clone, Deserialize)]
pub struct EnergyPrices {
    pub gas: EnergyPrice,
    pub nuclear: EnergyPrice,
    pub electric: EnergyPrice,
    pub oil: EnergyPrice,
}

impl EnergyPrices {
    pub fn by_fuel(&self, fuel: Fuel) -> &EnergyPrice {
        match fuel {
            Fuel::Gas => &self.gas,
            Fuel::Nuclear => &self.nuclear,
            Fuel::Electric => &self.electric,
            Fuel::Oil => &self.oil,
        }
    }
}

/// The fixed set of energy categories served by the remote API.
///
/// The numeric ids are stable reference data: gas=1, nuclear=2, electric=3,
/// oil=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuel {
    Gas,
    Nuclear,
    Electric,
    Oil,
}

impl Fuel {
    pub const ALL: [Fuel; 4] = [Fuel::Gas, Fuel::Nuclear, Fuel::Electric, Fuel::Oil];

    pub fn energy_id(self) -> u32 {
        match self {
            Fuel::Gas => 1,
            Fuel::Nuclear => 2,
            Fuel::Electric => 3,
            Fuel::Oil => 4,
        }
    }

    /// Fuel label as it appears in order records and the price table
    pub fn name(self) -> &'static str {
        match self {
            Fuel::Gas => "gas",
            Fuel::Nuclear => "nuclear",
            Fuel::Electric => "electric",
            Fuel::Oil => "oil",
        }
    }

    /// Fuels that can actually be bought; nuclear purchases are always
    /// rejected by the remote service.
    pub fn purchasable() -> impl Iterator<Item = Fuel> {
        Self::ALL.into_iter().filter(|fuel| *fuel != Fuel::Nuclear)
    }
}
