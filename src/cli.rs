mod dashboard;
mod estimate;
mod tariff;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use energybill::quantity::energy::KilowattHours;

pub use self::{dashboard::DashboardArgs, estimate::EstimateArgs, tariff::TariffArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Itemize the monthly bill for the consumed units.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Estimate the monthly bill from daily appliance usage.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Project the full-month consumption and bill from the month-to-date consumption.
    #[clap(name = "project")]
    Project(ProjectArgs),

    /// Summarize a device's exported meter snapshots.
    #[clap(name = "dashboard")]
    Dashboard(Box<DashboardArgs>),
}

#[derive(Parser)]
pub struct BillArgs {
    /// Consumed units. Only the leading whole number counts, anything else bills nothing.
    #[clap(allow_hyphen_values = true)]
    pub input: String,

    /// Print the bill as JSON.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ProjectArgs {
    #[clap(long = "month-to-date-kwh", env = "MONTH_TO_DATE_KWH")]
    pub month_to_date: KilowattHours,

    #[clap(flatten)]
    pub date: DateArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct DateArgs {
    /// Day to report on, defaults to today.
    #[clap(long = "date", env = "REPORT_DATE")]
    date: Option<NaiveDate>,
}

impl DateArgs {
    pub fn resolve(self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use energybill::quantity::cost::Cost;

    use super::*;

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_bill() {
        let args = Args::try_parse_from(["energybill", "bill", "-5", "--json"]).unwrap();
        let Command::Bill(args) = args.command else { panic!("expected `bill`") };
        assert_eq!(args.input, "-5");
        assert!(args.json);
    }

    #[test]
    fn test_parse_project() {
        let args = Args::try_parse_from([
            "energybill",
            "project",
            "--month-to-date-kwh",
            "150",
            "--date",
            "2025-09-15",
        ])
        .unwrap();
        let Command::Project(args) = args.command else { panic!("expected `project`") };
        assert_eq!(args.month_to_date, KilowattHours(150.0));
        assert_eq!(args.date.resolve(), NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
    }

    #[test]
    fn test_parse_dashboard_series() {
        let args = Args::try_parse_from([
            "energybill",
            "dashboard",
            "--snapshots",
            "snapshots",
            "--device-id",
            "meter-1",
            "--series",
        ])
        .unwrap();
        let Command::Dashboard(args) = args.command else { panic!("expected `dashboard`") };
        assert!(args.series);
        assert_eq!(args.fallback_expected_bill, Cost(750.0));
    }
}
