use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    bill::progressive_total,
    feed::{DailyPoint, HourlyPoint},
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::TariffSchedule,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Efficiency {
    Excellent,
    Good,
    Fair,
}

impl Efficiency {
    pub fn of(usage: KilowattHours) -> Self {
        if usage < KilowattHours(0.01) {
            Self::Excellent
        } else if usage < KilowattHours(0.05) {
            Self::Good
        } else {
            Self::Fair
        }
    }
}

/// Consumption split over the parts of the day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimeSegments {
    /// Hours 0 to 10.
    pub morning: KilowattHours,

    /// Hours 11 to 19.
    pub evening: KilowattHours,

    /// Hours 20 to 23.
    pub night: KilowattHours,
}

impl TimeSegments {
    /// Typical split when there is no hourly breakdown: a quarter, a half, and a quarter.
    pub fn typical(total: KilowattHours) -> Self {
        Self { morning: total * 0.25, evening: total * 0.5, night: total * 0.25 }
    }

    pub fn from_hourly(points: &[HourlyPoint]) -> Self {
        let sum = |hours: RangeInclusive<u32>| -> KilowattHours {
            points.iter().filter(|point| hours.contains(&point.hour)).map(|point| point.kwh).sum()
        };
        Self { morning: sum(0..=10), evening: sum(11..=19), night: sum(20..=23) }
    }

    pub fn peak_hour(&self) -> &'static str {
        if self.evening.0 > self.morning.0 && self.evening.0 > self.night.0 {
            "2:00 PM"
        } else if self.morning.0 > self.night.0 {
            "9:00 AM"
        } else {
            "10:00 PM"
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, bon::Builder)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub usage: KilowattHours,
    pub cost: Cost,
    pub segments: TimeSegments,
    pub efficiency: Efficiency,
}

impl DaySummary {
    /// Short weekday name, like `Mon`.
    pub fn day_name(&self) -> String {
        self.date.format("%a").to_string()
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub days: Vec<DaySummary>,
    pub total: KilowattHours,
    pub average: KilowattHours,
    pub peak_day: NaiveDate,
    pub lowest_day: NaiveDate,
    pub most_efficient_day: NaiveDate,
    pub average_segments: TimeSegments,
}

impl WeeklySummary {
    /// Summarize the week window. Today's split comes from the hourly series when there is one.
    ///
    /// Returns `None` for an empty window.
    pub fn new(
        schedule: &TariffSchedule,
        daily: &[DailyPoint],
        hourly: &[HourlyPoint],
        today: NaiveDate,
    ) -> Option<Self> {
        let days: Vec<DaySummary> = daily
            .iter()
            .map(|point| {
                let segments = if point.date == today && !hourly.is_empty() {
                    TimeSegments::from_hourly(hourly)
                } else {
                    TimeSegments::typical(point.kwh)
                };
                DaySummary::builder()
                    .date(point.date)
                    .usage(point.kwh)
                    .cost(progressive_total(schedule, point.kwh))
                    .segments(segments)
                    .efficiency(Efficiency::of(point.kwh))
                    .build()
            })
            .collect();
        let first = days.first()?;

        #[expect(clippy::cast_precision_loss)]
        let n_days = days.len() as f64;

        let total: KilowattHours = days.iter().map(|day| day.usage).sum();
        let peak_day =
            days.iter().fold(first, |max, day| if day.usage > max.usage { day } else { max }).date;
        let lowest_day =
            days.iter().fold(first, |min, day| if day.usage < min.usage { day } else { min }).date;
        let most_efficient_day = days
            .iter()
            .fold(first, |best, day| if day.efficiency == Efficiency::Excellent { day } else { best })
            .date;
        let average_segments = TimeSegments {
            morning: days.iter().map(|day| day.segments.morning).sum::<KilowattHours>() / n_days,
            evening: days.iter().map(|day| day.segments.evening).sum::<KilowattHours>() / n_days,
            night: days.iter().map(|day| day.segments.night).sum::<KilowattHours>() / n_days,
        };

        Some(Self {
            total,
            average: total / n_days,
            peak_day,
            lowest_day,
            most_efficient_day,
            average_segments,
            days,
        })
    }

    pub fn period(&self) -> String {
        format!("Last {} days", self.days.len())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::tariff::Tariffs;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    fn daily(values: &[(u32, f64)]) -> Vec<DailyPoint> {
        values.iter().map(|&(day, kwh)| DailyPoint { date: date(day), kwh: KilowattHours(kwh) }).collect()
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(Efficiency::of(KilowattHours(0.0)), Efficiency::Excellent);
        assert_eq!(Efficiency::of(KilowattHours(0.01)), Efficiency::Good);
        assert_eq!(Efficiency::of(KilowattHours(0.049)), Efficiency::Good);
        assert_eq!(Efficiency::of(KilowattHours(0.05)), Efficiency::Fair);
    }

    #[test]
    fn test_typical_segments() {
        let segments = TimeSegments::typical(KilowattHours(8.0));
        assert_eq!(segments, TimeSegments {
            morning: KilowattHours(2.0),
            evening: KilowattHours(4.0),
            night: KilowattHours(2.0),
        });
        assert_eq!(segments.peak_hour(), "2:00 PM");
    }

    #[test]
    fn test_segments_from_hourly() {
        let hourly: Vec<_> =
            (0..24).map(|hour| HourlyPoint { hour, kwh: KilowattHours(1.0) }).collect();
        let segments = TimeSegments::from_hourly(&hourly);
        assert_abs_diff_eq!(segments.morning.0, 11.0);
        assert_abs_diff_eq!(segments.evening.0, 9.0);
        assert_abs_diff_eq!(segments.night.0, 4.0);
        assert_eq!(segments.peak_hour(), "9:00 AM");
    }

    #[test]
    fn test_peak_hour_night() {
        let segments = TimeSegments::default();
        assert_eq!(segments.peak_hour(), "10:00 PM");
    }

    #[test]
    fn test_empty_week() {
        assert!(WeeklySummary::new(&Tariffs::default().weekly, &[], &[], date(1)).is_none());
    }

    #[test]
    fn test_summary() {
        let daily = daily(&[(8, 0.0), (9, 4.0), (10, 2.0), (11, 4.0), (12, 0.005), (13, 1.0), (14, 2.0)]);
        let hourly: Vec<_> = (0..24)
            .map(|hour| HourlyPoint { hour, kwh: KilowattHours(if hour == 21 { 2.0 } else { 0.0 }) })
            .collect();
        let summary =
            WeeklySummary::new(&Tariffs::default().weekly, &daily, &hourly, date(14)).unwrap();

        assert_eq!(summary.period(), "Last 7 days");
        assert_abs_diff_eq!(summary.total.0, 13.005, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.average.0, 13.005 / 7.0, epsilon = 1e-9);
        assert_eq!(summary.peak_day, date(9));
        assert_eq!(summary.lowest_day, date(8));
        assert_eq!(summary.most_efficient_day, date(12));

        let today = summary.days.last().unwrap();
        assert_eq!(today.segments.night, KilowattHours(2.0));
        assert_eq!(today.segments.peak_hour(), "10:00 PM");
        assert_abs_diff_eq!(today.cost.0, 2.0 * 6.40, epsilon = 1e-9);
        assert_eq!(today.efficiency, Efficiency::Fair);
        assert_eq!(summary.days[1].day_name(), "Tue");
        assert_eq!(summary.days[1].segments.evening, KilowattHours(2.0));
    }

    #[test]
    fn test_most_efficient_falls_back_to_first_day() {
        let daily = daily(&[(1, 3.0), (2, 1.0)]);
        let summary = WeeklySummary::new(&Tariffs::default().weekly, &daily, &[], date(2)).unwrap();
        assert_eq!(summary.most_efficient_day, date(1));
        assert_eq!(summary.lowest_day, date(2));
    }
}
