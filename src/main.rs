mod cli;

use clap::{Parser, crate_version};
use energybill::{
    bill::{BillingMode, parse_units},
    estimator::ApplianceUsage,
    feed::{JsonDirectory, UsageSnapshot},
    prelude::*,
    projection::{MonthlyProjection, today_cost},
    quantity::energy::KilowattHours,
    tables::{
        build_bill_table,
        build_estimate_table,
        build_projection_table,
        build_series_table,
        build_weekly_table,
    },
    tariff::Tariffs,
    weekly::WeeklySummary,
};

use crate::cli::{Args, BillArgs, Command, DashboardArgs, EstimateArgs, ProjectArgs};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let tariffs = args.tariff.load()?;

    match args.command {
        Command::Bill(args) => bill(&tariffs, &args)?,
        Command::Estimate(args) => estimate(&tariffs, *args),
        Command::Project(args) => project(&tariffs, &args),
        Command::Dashboard(args) => dashboard(&tariffs, &args)?,
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(input = %args.input))]
fn bill(tariffs: &Tariffs, args: &BillArgs) -> Result {
    let bill = tariffs.bill_input(&args.input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&bill)?);
        return Ok(());
    }
    if bill.is_empty() {
        warn!("nothing to bill");
        return Ok(());
    }
    let mode = BillingMode::of(parse_units(&args.input));
    info!(%mode, total = %bill.total, "calculated");
    println!("{mode} billing");
    println!("{}", build_bill_table(&bill));
    Ok(())
}

#[instrument(skip_all)]
fn estimate(tariffs: &Tariffs, args: EstimateArgs) {
    let usage = ApplianceUsage::from(args);
    let estimate = usage.estimate(tariffs);
    info!(daily = %estimate.daily, monthly = %estimate.monthly, cost = %estimate.cost, "estimated");
    println!("{}", build_estimate_table(&usage, &estimate));
}

#[instrument(skip_all, fields(month_to_date = %args.month_to_date))]
fn project(tariffs: &Tariffs, args: &ProjectArgs) {
    let projection =
        MonthlyProjection::new(&tariffs.progressive, args.month_to_date, args.date.resolve());
    println!("{}", build_projection_table(&projection));
}

#[instrument(skip_all, fields(device_id = %args.device_id))]
fn dashboard(tariffs: &Tariffs, args: &DashboardArgs) -> Result {
    let today = args.date.resolve();
    let source = JsonDirectory::new(args.snapshots.clone());
    let snapshot = UsageSnapshot::fetch(&source, &args.device_id, today)?;

    let usage_today = snapshot.hourly.total.unwrap_or(KilowattHours::ZERO);
    println!(
        "Today ({today}): {usage_today:.2}, {}",
        today_cost(&tariffs.progressive, usage_today),
    );

    match snapshot.monthly.as_ref().and_then(|monthly| monthly.current) {
        Some(month_to_date) => {
            let projection = MonthlyProjection::new(&tariffs.progressive, month_to_date, today);
            println!("{}", build_projection_table(&projection));
        }
        None => {
            warn!("no reading for the current month");
            println!("Expected bill: {}", args.fallback_expected_bill);
        }
    }

    let summary = snapshot.daily.as_ref().and_then(|daily| {
        WeeklySummary::new(&tariffs.weekly, &daily.week, &snapshot.hourly.points, today)
    });
    if let Some(summary) = summary {
        println!("{}, {:.2} in total, {:.2} per day", summary.period(), summary.total, summary.average);
        println!("{}", build_weekly_table(&summary));
    } else {
        warn!("no daily readings for the current month");
    }

    if args.series {
        print_series(&snapshot);
    }

    Ok(())
}

fn print_series(snapshot: &UsageSnapshot) {
    let hourly = snapshot.hourly.points.iter().map(|point| (point.label(), point.kwh));
    println!("{}", build_series_table("Hour", hourly));
    if let Some(daily) = &snapshot.daily {
        let days = daily.month.iter().map(|point| (point.label(), point.kwh));
        println!("{}", build_series_table("Day", days));
    }
    if let Some(monthly) = &snapshot.monthly {
        let months = monthly.months.iter().map(|point| (point.label(), point.kwh));
        println!("{}", build_series_table("Month", months));
    }
}
