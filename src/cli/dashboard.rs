use std::path::PathBuf;

use clap::Parser;
use energybill::quantity::cost::Cost;

use crate::cli::DateArgs;

#[derive(Parser)]
pub struct DashboardArgs {
    /// Directory with the exported aggregate documents, one subdirectory per collection.
    #[clap(long = "snapshots", env = "SNAPSHOTS_DIR")]
    pub snapshots: PathBuf,

    #[clap(long = "device-id", env = "DEVICE_ID")]
    pub device_id: String,

    #[clap(flatten)]
    pub date: DateArgs,

    /// Also print today's hourly, this month's daily, and this year's monthly consumption.
    #[clap(long = "series", env = "DASHBOARD_SERIES")]
    pub series: bool,

    /// Expected bill to show when there is no reading for the current month.
    #[clap(long = "fallback-expected-bill", default_value = "750", env = "FALLBACK_EXPECTED_BILL")]
    pub fallback_expected_bill: Cost,
}
