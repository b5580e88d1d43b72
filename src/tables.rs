use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    bill::{Bill, LineItemKind},
    estimator::{Appliance, ApplianceUsage, Estimate},
    quantity::energy::KilowattHours,
    projection::MonthlyProjection,
    weekly::{Efficiency, WeeklySummary},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_bill_table(bill: &Bill) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Item", "Rate", "Amount"]);
    for line_item in &bill.line_items {
        let color = match line_item.kind {
            LineItemKind::EnergyCharge => Color::Reset,
            LineItemKind::FixedCharge => Color::DarkYellow,
        };
        table.add_row(vec![
            Cell::new(&line_item.label).fg(color),
            Cell::new(&line_item.unit_note).add_attribute(Attribute::Dim),
            Cell::new(line_item.amount).set_alignment(CellAlignment::Right).fg(color),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(bill.total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_estimate_table(usage: &ApplianceUsage, estimate: &Estimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Appliance", "Load", "Hours", "Daily"]);
    for appliance in Appliance::ALL {
        let hours = usage.hours(appliance);
        if hours <= 0.0 {
            continue;
        }
        table.add_row(vec![
            Cell::new(appliance),
            Cell::new(appliance.load()).set_alignment(CellAlignment::Right),
            Cell::new(hours).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", appliance.load().for_hours(hours)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Monthly").add_attribute(Attribute::Bold),
        Cell::new(estimate.mode).add_attribute(Attribute::Dim),
        Cell::new(format!("{:.2}", estimate.monthly)).set_alignment(CellAlignment::Right),
        Cell::new(estimate.cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_projection_table(projection: &MonthlyProjection) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month to date", "Day", "Per day", "Projected", "Expected bill"]);
    table.add_row(vec![
        Cell::new(format!("{:.2}", projection.month_to_date)).set_alignment(CellAlignment::Right),
        Cell::new(projection.day_of_month).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", projection.per_day)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", projection.projected)).set_alignment(CellAlignment::Right),
        Cell::new(projection.expected_bill)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Labelled consumption series, one row per point.
pub fn build_series_table(
    label_header: &str,
    points: impl IntoIterator<Item = (String, KilowattHours)>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![label_header, "Usage"]);
    for (label, kwh) in points {
        let usage = Cell::new(format!("{kwh:.2}")).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(label),
            if kwh.is_positive() { usage } else { usage.add_attribute(Attribute::Dim) },
        ]);
    }
    table
}

pub fn build_weekly_table(summary: &WeeklySummary) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Day", "Date", "Usage", "Cost", "Morning", "Evening", "Night", "Peak", "Efficiency",
    ]);
    for day in &summary.days {
        let usage_color = if day.date == summary.peak_day {
            Color::Red
        } else if day.date == summary.lowest_day {
            Color::Green
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(day.day_name()),
            Cell::new(day.date.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.2}", day.usage))
                .set_alignment(CellAlignment::Right)
                .fg(usage_color),
            Cell::new(day.cost).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", day.segments.morning)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", day.segments.evening)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", day.segments.night)).set_alignment(CellAlignment::Right),
            Cell::new(day.segments.peak_hour()).add_attribute(Attribute::Dim),
            Cell::new(day.efficiency).fg(match day.efficiency {
                Efficiency::Excellent => Color::Green,
                Efficiency::Good => Color::DarkYellow,
                Efficiency::Fair => Color::Red,
            }),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use serde_json::json;

    use crate::{
        feed::{DailyPoint, DailyUsage, MonthlyUsage},
        tariff::Tariffs,
    };

    #[test]
    fn test_bill_table_rows() {
        let table = build_bill_table(&Tariffs::default().bill(KilowattHours(120.0)));
        assert_eq!(table.row_count(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("101-120 Units"));
        assert!(rendered.contains("₹485.00"));
    }

    #[test]
    fn test_estimate_table_skips_unused_appliances() {
        let usage = ApplianceUsage::builder().fan(8.0).iron(0.5).build();
        let table = build_estimate_table(&usage, &usage.estimate(&Tariffs::default()));
        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Iron"));
        assert!(!rendered.contains("Fridge"));
    }

    #[test]
    fn test_projection_table() {
        let projection = MonthlyProjection::new(
            &Tariffs::default().progressive,
            KilowattHours(150.0),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        );
        assert!(build_projection_table(&projection).to_string().contains("₹1920.00"));
    }

    #[test]
    fn test_month_series_table() {
        let daily = DailyUsage::parse(
            &json!({ "days.D02.kwh": 1.5 }),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        );
        let days = daily.month.iter().map(|point| (point.label(), point.kwh));
        let table = build_series_table("Day", days);
        assert_eq!(table.row_count(), 28);
        assert!(table.to_string().contains("1.50 kWh"));
    }

    #[test]
    fn test_year_series_table() {
        let monthly = MonthlyUsage::parse(
            &json!({ "months": { "M09": { "kwh": 150.0 } } }),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        );
        let table = build_series_table(
            "Month",
            monthly.months.iter().map(|point| (point.label(), point.kwh)),
        );
        assert_eq!(table.row_count(), 12);
        let rendered = table.to_string();
        assert!(rendered.contains("09"));
        assert!(rendered.contains("150.00 kWh"));
    }

    #[test]
    fn test_weekly_table_rows() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        let daily = [
            DailyPoint { date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), kwh: KilowattHours(1.0) },
            DailyPoint { date: today, kwh: KilowattHours(2.0) },
        ];
        let summary = WeeklySummary::new(&Tariffs::default().weekly, &daily, &[], today).unwrap();
        let table = build_weekly_table(&summary);
        assert_eq!(table.row_count(), 2);
        assert!(table.to_string().contains("Tue"));
    }
}
