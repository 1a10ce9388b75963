use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};

use aquawash_core::ValueObject;

use crate::VehicleType;

/// Vehicle-dependent scaling factor applied to a service's base price.
///
/// Held as an exact number of tenths so pricing never touches floating point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier {
    tenths: u64,
}

impl ValueObject for Multiplier {}

impl Multiplier {
    /// Lighter vehicles: 0.7.
    pub const DISCOUNT: Multiplier = Multiplier { tenths: 7 };
    /// 1.0.
    pub const STANDARD: Multiplier = Multiplier { tenths: 10 };
    /// Larger vehicles: 1.3.
    pub const SURCHARGE: Multiplier = Multiplier { tenths: 13 };

    /// Multiplier for an optional active vehicle; no vehicle prices at 1.0.
    pub fn for_vehicle(vehicle: Option<VehicleType>) -> Self {
        vehicle.map_or(Multiplier::STANDARD, price_multiplier)
    }

    pub fn tenths(self) -> u64 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        self.tenths as f64 / 10.0
    }

    /// `round(base × self)`, rounding halves up.
    pub fn apply(self, base: u64) -> u64 {
        let scaled = u128::from(base) * u128::from(self.tenths) + 5;
        u64::try_from(scaled / 10).unwrap_or(u64::MAX)
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Bikes wash at 0.7, carries at 1.3, everything else at 1.0.
pub fn price_multiplier(vehicle: VehicleType) -> Multiplier {
    match vehicle {
        VehicleType::Bike => Multiplier::DISCOUNT,
        VehicleType::Carry => Multiplier::SURCHARGE,
        VehicleType::Car | VehicleType::Gli | VehicleType::Xli => Multiplier::STANDARD,
    }
}

/// Price of a service for a given vehicle.
pub fn service_price(service_base_price: u64, vehicle: VehicleType) -> u64 {
    price_multiplier(vehicle).apply(service_base_price)
}

/// Base price per vehicle type.
///
/// One field per vehicle keeps every vehicle mapped to exactly one price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub bike: u64,
    pub car: u64,
    pub gli: u64,
    pub xli: u64,
    pub carry: u64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            bike: 150,
            car: 300,
            gli: 400,
            xli: 350,
            carry: 500,
        }
    }
}

impl PriceTable {
    /// Build a table by asking for each vehicle's price.
    pub fn from_fn(mut price: impl FnMut(VehicleType) -> u64) -> Self {
        Self {
            bike: price(VehicleType::Bike),
            car: price(VehicleType::Car),
            gli: price(VehicleType::Gli),
            xli: price(VehicleType::Xli),
            carry: price(VehicleType::Carry),
        }
    }

    pub fn get(&self, vehicle: VehicleType) -> u64 {
        match vehicle {
            VehicleType::Bike => self.bike,
            VehicleType::Car => self.car,
            VehicleType::Gli => self.gli,
            VehicleType::Xli => self.xli,
            VehicleType::Carry => self.carry,
        }
    }

    /// `(vehicle, base price)` pairs in catalog order.
    pub fn entries(&self) -> [(VehicleType, u64); 5] {
        VehicleType::ALL.map(|v| (v, self.get(v)))
    }
}

/// Raw value typed into the price editor.
///
/// The editor accepts JSON numbers or text; anything else is kept as
/// [`PriceInput::Other`]. Every variant coerces to a price without failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Integer(i64),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl PriceInput {
    pub fn coerce(&self) -> u64 {
        match self {
            PriceInput::Integer(n) => u64::try_from(*n).unwrap_or(0),
            PriceInput::Number(n) if n.is_finite() && *n > 0.0 => n.trunc() as u64,
            PriceInput::Number(_) => 0,
            PriceInput::Text(s) => coerce_price(s),
            PriceInput::Other(_) => 0,
        }
    }
}

/// Integer-prefix parse of price text.
///
/// Leading whitespace and a sign are allowed, then the leading run of digits
/// is taken (`"12abc"` is 12). No digits, or a negative value, is 0.
pub fn coerce_price(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    digits.bytes().fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}
