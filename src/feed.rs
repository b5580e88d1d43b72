//! Typed view over the meter aggregate documents.
//!
//! Documents are loosely shaped: a reading may be nested (`{"days": {"D05": {"kwh": 1.2}}}`)
//! or flattened into a dotted key (`{"days.D05.kwh": 1.2}`). Missing or non-numeric readings
//! become zero here, so nothing downstream has to deal with them.

mod series;
mod source;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

pub use self::{
    series::{DailyPoint, HourlyPoint, MonthlyPoint},
    source::{DocumentSource, JsonDirectory},
};
use crate::{prelude::*, quantity::energy::KilowattHours};

pub const HOURLY_COLLECTION: &str = "hourlyAggregates";
pub const DAILY_COLLECTION: &str = "dailyAggregates";
pub const MONTHLY_COLLECTION: &str = "monthlyAggregates";

/// Number of days in the week window, today included.
pub const WEEK_DAYS: u32 = 7;

/// Reading under `<group>.<key>.kwh`, nested form first.
fn lookup_kwh(document: &Value, group: &str, key: &str) -> Option<KilowattHours> {
    document
        .get(group)
        .and_then(|group| group.get(key))
        .and_then(|entry| entry.get("kwh"))
        .and_then(Value::as_f64)
        .or_else(|| document.get(format!("{group}.{key}.kwh").as_str()).and_then(Value::as_f64))
        .map(|kwh| KilowattHours(kwh).round_to_micros())
}

fn read_kwh(document: &Value, group: &str, key: &str) -> KilowattHours {
    lookup_kwh(document, group, key).unwrap_or(KilowattHours::ZERO)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) =
        if date.month() == 12 { (date.year() + 1, 1) } else { (date.year(), date.month() + 1) };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Today's consumption, hour by hour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourlyUsage {
    pub points: Vec<HourlyPoint>,

    /// Today's total, `None` when there is no document for today yet.
    pub total: Option<KilowattHours>,
}

impl HourlyUsage {
    pub fn zeros() -> Self {
        Self {
            points: (0..24).map(|hour| HourlyPoint { hour, kwh: KilowattHours::ZERO }).collect(),
            total: None,
        }
    }

    pub fn parse(document: &Value) -> Self {
        let points = (0..24)
            .map(|hour| HourlyPoint { hour, kwh: read_kwh(document, "hours", &format!("H{hour:02}")) })
            .collect();
        let total = document.get("totalKwh").and_then(Value::as_f64).unwrap_or_default();
        Self { points, total: Some(KilowattHours(total)) }
    }
}

/// This month's consumption, day by day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyUsage {
    /// The last [`WEEK_DAYS`] days up to today, without crossing into the previous month.
    pub week: Vec<DailyPoint>,

    /// Every day of the month, future days included.
    pub month: Vec<DailyPoint>,
}

impl DailyUsage {
    pub fn parse(document: &Value, today: NaiveDate) -> Self {
        let point = |day: u32| {
            today.with_day(day).map(|date| DailyPoint {
                date,
                kwh: read_kwh(document, "days", &format!("D{day:02}")),
            })
        };
        let week_start = today.day().saturating_sub(WEEK_DAYS - 1).max(1);
        Self {
            week: (week_start..=today.day()).filter_map(point).collect(),
            month: (1..=days_in_month(today)).filter_map(point).collect(),
        }
    }
}

/// This year's consumption, month by month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyUsage {
    pub months: Vec<MonthlyPoint>,

    /// Month-to-date consumption, `None` when the current month has no reading at all.
    pub current: Option<KilowattHours>,
}

impl MonthlyUsage {
    pub fn parse(document: &Value, today: NaiveDate) -> Self {
        let key = |month: u32| format!("M{month:02}");
        Self {
            months: (1..=12)
                .map(|month| MonthlyPoint { month, kwh: read_kwh(document, "months", &key(month)) })
                .collect(),
            current: lookup_kwh(document, "months", &key(today.month())),
        }
    }
}

/// Everything the dashboard reads for one device on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageSnapshot {
    pub today: NaiveDate,
    pub hourly: HourlyUsage,
    pub daily: Option<DailyUsage>,
    pub monthly: Option<MonthlyUsage>,
}

impl UsageSnapshot {
    #[instrument(skip(source))]
    pub fn fetch<S: DocumentSource>(source: &S, device_id: &str, today: NaiveDate) -> Result<Self> {
        let hourly_id = format!("{device_id}_{}", today.format("%Y-%m-%d"));
        let daily_id = format!("{device_id}_{}", today.format("%Y-%m"));
        let monthly_id = format!("{device_id}_{}", today.format("%Y"));

        let hourly = source
            .fetch(HOURLY_COLLECTION, &hourly_id)?
            .map_or_else(HourlyUsage::zeros, |document| HourlyUsage::parse(&document));
        let daily = source
            .fetch(DAILY_COLLECTION, &daily_id)?
            .map(|document| DailyUsage::parse(&document, today));
        let monthly = source
            .fetch(MONTHLY_COLLECTION, &monthly_id)?
            .map(|document| MonthlyUsage::parse(&document, today));

        Ok(Self { today, hourly, daily, monthly })
    }
}
