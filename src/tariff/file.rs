use std::path::Path;

use serde::Deserialize;

use crate::{
    prelude::*,
    tariff::{TariffSchedule, TariffSlab, Tariffs},
};

/// Tariff file layout: every schedule is optional and falls back to the built-in one.
///
/// ```toml
/// [[telescopic]]
/// min = 0
/// max = 50
/// rate = 3.35
/// ```
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TariffFile {
    telescopic: Option<Vec<TariffSlab>>,
    non_telescopic: Option<Vec<TariffSlab>>,
    progressive: Option<Vec<TariffSlab>>,
    weekly: Option<Vec<TariffSlab>>,
}

impl Tariffs {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the tariff file `{}`", path.display()))?;
        let tariffs = Self::from_toml(&contents)
            .with_context(|| format!("invalid tariff file `{}`", path.display()))?;
        info!("loaded the tariff file");
        Ok(tariffs)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: TariffFile = toml::from_str(contents)?;
        let mut tariffs = Self::default();
        for (name, slabs, schedule) in [
            ("telescopic", file.telescopic, &mut tariffs.telescopic),
            ("non_telescopic", file.non_telescopic, &mut tariffs.non_telescopic),
            ("progressive", file.progressive, &mut tariffs.progressive),
            ("weekly", file.weekly, &mut tariffs.weekly),
        ] {
            if let Some(slabs) = slabs {
                *schedule = TariffSchedule::try_new(slabs)
                    .with_context(|| format!("invalid `{name}` schedule"))?;
                debug!(schedule = name, n_slabs = schedule.len(), "overridden");
            }
        }
        Ok(tariffs)
    }
}
