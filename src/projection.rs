use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{
    bill::progressive_total,
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::TariffSchedule,
};

/// Every month is projected as 30 days long, regardless of the calendar.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Full-month estimate extrapolated from the month-to-date consumption.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyProjection {
    pub month_to_date: KilowattHours,
    pub day_of_month: u32,
    pub per_day: KilowattHours,
    pub projected: KilowattHours,
    pub expected_bill: Cost,
}

impl MonthlyProjection {
    pub fn new(schedule: &TariffSchedule, month_to_date: KilowattHours, today: NaiveDate) -> Self {
        let day_of_month = today.day();
        let per_day = month_to_date / f64::from(day_of_month);
        let projected = per_day * DAYS_PER_MONTH;
        Self {
            month_to_date,
            day_of_month,
            per_day,
            projected,
            expected_bill: progressive_total(schedule, projected),
        }
    }
}

/// Cost of the consumption so far today, billed as if it were the whole consumption.
pub fn today_cost(schedule: &TariffSchedule, today: KilowattHours) -> Cost {
    progressive_total(schedule, today)
}
