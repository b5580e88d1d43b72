use serde::Serialize;

use crate::{
    bill::{BillingMode, billable_units},
    projection::DAYS_PER_MONTH,
    quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts},
    tariff::Tariffs,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Appliance {
    Fan,
    Fridge,
    #[display("TV")]
    Television,
    #[display("Air conditioner")]
    AirConditioner,
    #[display("Washing machine")]
    WashingMachine,
    Iron,
}

impl Appliance {
    pub const ALL: [Self; 6] = [
        Self::Fan,
        Self::Fridge,
        Self::Television,
        Self::AirConditioner,
        Self::WashingMachine,
        Self::Iron,
    ];

    /// Nominal power draw.
    pub const fn load(self) -> Kilowatts {
        match self {
            Self::Fan => Kilowatts::from_watts(75),
            Self::Fridge => Kilowatts::from_watts(150),
            Self::Television => Kilowatts::from_watts(100),
            Self::AirConditioner => Kilowatts::from_watts(1500),
            Self::WashingMachine => Kilowatts::from_watts(500),
            Self::Iron => Kilowatts::from_watts(1000),
        }
    }
}

/// Hours of use per day, per appliance.
#[derive(Copy, Clone, Debug, Default, PartialEq, bon::Builder)]
pub struct ApplianceUsage {
    #[builder(default)]
    pub fan: f64,

    #[builder(default)]
    pub fridge: f64,

    #[builder(default)]
    pub television: f64,

    #[builder(default)]
    pub air_conditioner: f64,

    #[builder(default)]
    pub washing_machine: f64,

    #[builder(default)]
    pub iron: f64,
}

impl ApplianceUsage {
    pub const fn hours(&self, appliance: Appliance) -> f64 {
        match appliance {
            Appliance::Fan => self.fan,
            Appliance::Fridge => self.fridge,
            Appliance::Television => self.television,
            Appliance::AirConditioner => self.air_conditioner,
            Appliance::WashingMachine => self.washing_machine,
            Appliance::Iron => self.iron,
        }
    }

    pub fn daily_consumption(&self) -> KilowattHours {
        Appliance::ALL
            .into_iter()
            .map(|appliance| appliance.load().for_hours(self.hours(appliance)))
            .sum()
    }

    /// Extrapolate the daily consumption to a month and bill it.
    ///
    /// The monthly consumption is billed in whole units.
    pub fn estimate(&self, tariffs: &Tariffs) -> Estimate {
        let daily = self.daily_consumption();
        let monthly = daily * DAYS_PER_MONTH;
        Estimate {
            daily,
            monthly,
            mode: BillingMode::of(billable_units(monthly)),
            cost: tariffs.bill(monthly).total,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub daily: KilowattHours,
    pub monthly: KilowattHours,
    pub mode: BillingMode,
    pub cost: Cost,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_idle_household() {
        let estimate = ApplianceUsage::default().estimate(&Tariffs::default());
        assert_eq!(estimate.daily, KilowattHours::ZERO);
        assert_eq!(estimate.cost, Cost::ZERO);
    }

    #[test]
    fn test_daily_consumption() {
        let usage = ApplianceUsage::builder().fan(8.0).fridge(24.0).television(4.0).build();
        assert_abs_diff_eq!(usage.daily_consumption().0, 0.6 + 3.6 + 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_telescopic_estimate() {
        let usage = ApplianceUsage::builder().fan(8.0).fridge(24.0).television(4.0).build();
        let estimate = usage.estimate(&Tariffs::default());
        assert_abs_diff_eq!(estimate.monthly.0, 138.0, epsilon = 1e-9);
        assert_eq!(estimate.mode, BillingMode::Telescopic);
        assert_abs_diff_eq!(
            estimate.cost.0,
            51.0 * 3.35 + 50.0 * 4.25 + 37.0 * 5.35,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_non_telescopic_estimate_bills_whole_units() {
        let usage = ApplianceUsage::builder().air_conditioner(6.7).build();
        let estimate = usage.estimate(&Tariffs::default());
        assert_abs_diff_eq!(estimate.monthly.0, 301.5, epsilon = 1e-9);
        assert_eq!(estimate.mode, BillingMode::NonTelescopic);
        assert_abs_diff_eq!(estimate.cost.0, 301.0 * 7.6, epsilon = 1e-9);
    }
}
