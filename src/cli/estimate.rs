use clap::Parser;
use energybill::estimator::ApplianceUsage;

/// Daily hours of use per appliance.
#[derive(Copy, Clone, Parser)]
pub struct EstimateArgs {
    #[clap(long = "fan-hours", default_value = "0", env = "FAN_HOURS")]
    pub fan: f64,

    #[clap(long = "fridge-hours", default_value = "0", env = "FRIDGE_HOURS")]
    pub fridge: f64,

    #[clap(long = "tv-hours", default_value = "0", env = "TV_HOURS")]
    pub television: f64,

    #[clap(long = "ac-hours", default_value = "0", env = "AC_HOURS")]
    pub air_conditioner: f64,

    #[clap(long = "washing-machine-hours", default_value = "0", env = "WASHING_MACHINE_HOURS")]
    pub washing_machine: f64,

    #[clap(long = "iron-hours", default_value = "0", env = "IRON_HOURS")]
    pub iron: f64,
}

impl From<EstimateArgs> for ApplianceUsage {
    fn from(args: EstimateArgs) -> Self {
        Self::builder()
            .fan(args.fan)
            .fridge(args.fridge)
            .television(args.television)
            .air_conditioner(args.air_conditioner)
            .washing_machine(args.washing_machine)
            .iron(args.iron)
            .build()
    }
}
