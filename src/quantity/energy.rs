use std::ops::Mul;

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(KilowattHours, "kWh");

impl KilowattHours {
    /// Billing unit step: slab bounds are whole units and inclusive on both ends.
    pub const ONE: Self = Self(1.0);

    /// Round to 6 decimals, the precision the meter aggregates are stored with.
    pub fn round_to_micros(self) -> Self {
        Self((self.0 * 1_000_000.0).round() / 1_000_000.0)
    }

    /// Whole billable units.
    pub fn floor(self) -> Self {
        Self(self.0.floor())
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}
