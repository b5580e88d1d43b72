use crate::quantity::energy::KilowattHours;

quantity!(Kilowatts, "kW");

impl Kilowatts {
    pub const fn from_watts(watts: u32) -> Self {
        Self(watts as f64 / 1000.0)
    }

    /// Energy drawn when running at this power for the given number of hours.
    pub const fn for_hours(self, hours: f64) -> KilowattHours {
        KilowattHours(self.0 * hours)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_for_hours() {
        assert_abs_diff_eq!(Kilowatts::from_watts(1500).for_hours(2.0).0, 3.0);
        assert_abs_diff_eq!(Kilowatts::from_watts(75).for_hours(8.0).0, 0.6, epsilon = 1e-12);
    }
}
