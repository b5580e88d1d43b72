use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::quantity::energy::KilowattHours;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HourlyPoint {
    /// `0..24`, local time.
    pub hour: u32,
    pub kwh: KilowattHours,
}

impl HourlyPoint {
    pub fn label(&self) -> String {
        format!("{:02}", self.hour)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub kwh: KilowattHours,
}

impl DailyPoint {
    pub fn label(&self) -> String {
        self.date.day().to_string()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// `1..=12`.
    pub month: u32,
    pub kwh: KilowattHours,
}

impl MonthlyPoint {
    pub fn label(&self) -> String {
        format!("{:02}", self.month)
    }
}
