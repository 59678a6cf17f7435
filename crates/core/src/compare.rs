//! Side-by-side comparison verdicts.
//!
//! For each attribute the comparison names the bike with the better
//! value. Missing or zero values are never "better": the attribute is reported
//! as `equal` so the storefront does not highlight unknown data.

use serde::Serialize;

/// Which side of a comparison wins an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Bike1,
    Bike2,
    Equal,
}

/// Direction in which an attribute improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Higher,
    Lower,
}

/// Decide a single attribute.
pub fn verdict(bike1: Option<f64>, bike2: Option<f64>, preference: Preference) -> Verdict {
    let (Some(a), Some(b)) = (bike1, bike2) else {
        return Verdict::Equal;
    };
    if a == 0.0 || b == 0.0 || a == b {
        return Verdict::Equal;
    }
    let bike1_wins = match preference {
        Preference::Higher => a > b,
        Preference::Lower => a < b,
    };
    if bike1_wins {
        Verdict::Bike1
    } else {
        Verdict::Bike2
    }
}

/// The comparable attributes of one bike.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompareMetrics {
    pub price_on_road: Option<f64>,
    pub engine_cc: Option<f64>,
    pub mileage: Option<f64>,
    pub top_speed: Option<f64>,
    pub weight: Option<f64>,
    pub fuel_capacity: Option<f64>,
    pub gears: Option<f64>,
}

/// Per-attribute verdicts for a pair of bikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdicts {
    pub price_on_road: Verdict,
    pub engine_cc: Verdict,
    pub mileage: Verdict,
    pub top_speed: Verdict,
    pub weight: Verdict,
    pub fuel_capacity: Verdict,
    pub gears: Verdict,
}

impl Verdicts {
    /// Compare two bikes attribute by attribute.
    pub fn between(bike1: &CompareMetrics, bike2: &CompareMetrics) -> Self {
        use Preference::{Higher, Lower};

        Self {
            price_on_road: verdict(bike1.price_on_road, bike2.price_on_road, Lower),
            engine_cc: verdict(bike1.engine_cc, bike2.engine_cc, Higher),
            mileage: verdict(bike1.mileage, bike2.mileage, Higher),
            top_speed: verdict(bike1.top_speed, bike2.top_speed, Higher),
            weight: verdict(bike1.weight, bike2.weight, Lower),
            fuel_capacity: verdict(bike1.fuel_capacity, bike2.fuel_capacity, Higher),
            gears: verdict(bike1.gears, bike2.gears, Higher),
        }
    }
}
