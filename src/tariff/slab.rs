use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

/// One band of a rate schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffSlab {
    /// Inclusive.
    pub min: KilowattHours,

    /// Inclusive, `None` for the open-ended top slab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<KilowattHours>,

    pub rate: KilowattHourRate,

    /// Flat add-on charged when the total consumption falls into this slab.
    #[serde(default)]
    pub fixed_charge: Cost,
}

impl TariffSlab {
    pub const fn bounded(min: f64, max: f64, rate: f64) -> Self {
        Self {
            min: KilowattHours(min),
            max: Some(KilowattHours(max)),
            rate: KilowattHourRate(rate),
            fixed_charge: Cost::ZERO,
        }
    }

    pub const fn unbounded(min: f64, rate: f64) -> Self {
        Self {
            min: KilowattHours(min),
            max: None,
            rate: KilowattHourRate(rate),
            fixed_charge: Cost::ZERO,
        }
    }

    #[must_use]
    pub const fn with_fixed_charge(mut self, fixed_charge: Cost) -> Self {
        self.fixed_charge = fixed_charge;
        self
    }

    /// Number of units the slab spans, `None` when it is open-ended.
    pub fn width(&self) -> Option<KilowattHours> {
        self.max.map(|max| max - self.min + KilowattHours::ONE)
    }

    pub fn contains(&self, units: KilowattHours) -> bool {
        (self.min <= units) && self.max.is_none_or(|max| units <= max)
    }
}
