use std::path::PathBuf;

use clap::Parser;
use energybill::{prelude::*, tariff::Tariffs};

#[derive(Parser)]
pub struct TariffArgs {
    /// TOML file overriding the built-in tariff schedules.
    #[clap(long = "tariff-file", env = "TARIFF_FILE", global = true)]
    pub tariff_file: Option<PathBuf>,
}

impl TariffArgs {
    pub fn load(&self) -> Result<Tariffs> {
        self.tariff_file.as_deref().map_or_else(|| Ok(Tariffs::default()), Tariffs::read_from)
    }
}
