use core::str::FromStr;

use serde::{Deserialize, Serialize};

use aquawash_core::DomainError;

/// Wash-pricing category of a vehicle.
///
/// The set is closed: pricing rules and the price table match on it
/// exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Car,
    Gli,
    Xli,
    Carry,
}

impl VehicleType {
    /// Every vehicle type, in the order the counter lists them.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Bike,
        VehicleType::Car,
        VehicleType::Gli,
        VehicleType::Xli,
        VehicleType::Carry,
    ];

    /// Stable identifier used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            VehicleType::Bike => "bike",
            VehicleType::Car => "car",
            VehicleType::Gli => "gli",
            VehicleType::Xli => "xli",
            VehicleType::Carry => "carry",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Car => "Car",
            VehicleType::Gli => "GLI",
            VehicleType::Xli => "XLI",
            VehicleType::Carry => "Carry",
        }
    }
}

impl core::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| DomainError::unknown_vehicle(s))
    }
}
