use itertools::Itertools;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::TariffSlab,
};

/// Ordered, contiguous slabs, ascending by their lower bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[serde(transparent)]
pub struct TariffSchedule(#[into_iterator(owned, ref)] Vec<TariffSlab>);

impl TariffSchedule {
    /// Trusted constructor for the built-in tables.
    pub(crate) fn from_static(slabs: &[TariffSlab]) -> Self {
        Self(slabs.to_vec())
    }

    /// Build a schedule from untrusted slabs, checking that they form a proper schedule.
    pub fn try_new(slabs: Vec<TariffSlab>) -> Result<Self> {
        ensure!(!slabs.is_empty(), "a tariff schedule needs at least one slab");

        let last_index = slabs.len() - 1;
        for (index, slab) in slabs.iter().enumerate() {
            ensure!(slab.min.0.is_finite(), "slab #{index}: lower bound must be finite");
            ensure!(
                slab.rate.0.is_finite() && (slab.rate >= KilowattHourRate::ZERO),
                "slab #{index}: rate must be finite and non-negative",
            );
            ensure!(
                slab.fixed_charge.0.is_finite() && (slab.fixed_charge >= Cost::ZERO),
                "slab #{index}: fixed charge must be finite and non-negative",
            );
            match slab.max {
                Some(max) => {
                    ensure!(
                        max.0.is_finite() && (max >= slab.min),
                        "slab #{index}: upper bound {max} is below the lower bound {}",
                        slab.min,
                    );
                }
                None => {
                    ensure!(index == last_index, "slab #{index}: only the last slab may be open-ended");
                }
            }
        }

        for (previous, next) in slabs.iter().tuple_windows() {
            let Some(previous_max) = previous.max else {
                bail!("an open-ended slab must be the last one");
            };
            ensure!(
                next.min == previous_max + KilowattHours::ONE,
                "slab starting at {} must start right after {previous_max}",
                next.min,
            );
        }

        Ok(Self(slabs))
    }

    /// Spread the units over the slabs in ascending order, filling each one up before moving on.
    ///
    /// Units above the top of a bounded schedule are not yielded.
    pub fn walk(
        &self,
        units: KilowattHours,
    ) -> impl Iterator<Item = (&TariffSlab, KilowattHours)> + '_ {
        let mut remaining = units;
        self.0
            .iter()
            .map_while(move |slab| {
                if !remaining.is_positive() {
                    return None;
                }
                let in_slab = slab.width().map_or(remaining, |width| remaining.min(width));
                remaining -= in_slab;
                Some((slab, in_slab))
            })
            .filter(|(_, in_slab)| in_slab.is_positive())
    }

    /// The first slab whose inclusive range contains the units.
    pub fn slab_containing(&self, units: KilowattHours) -> Option<&TariffSlab> {
        self.0.iter().find(|slab| slab.contains(units))
    }
}
