//! Slab-based bill calculation.
//!
//! Every function here is total: invalid or non-positive consumption yields an empty bill
//! (or a zero cost) rather than an error.

mod line_item;
mod units;

use itertools::Itertools;
use serde::Serialize;

pub use self::{
    line_item::{BillLineItem, LineItemKind},
    units::parse_units,
};
use crate::{
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::{TariffSchedule, Tariffs},
};

/// Consumption up to and including this is billed telescopically, anything above is not.
pub const TELESCOPIC_LIMIT: KilowattHours = KilowattHours(250.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    /// Every slab's units at that slab's own rate.
    #[display("Telescopic")]
    Telescopic,

    /// All units at the rate of the slab containing the total.
    #[display("Non-Telescopic")]
    NonTelescopic,
}

impl BillingMode {
    pub fn of(units: KilowattHours) -> Self {
        if units <= TELESCOPIC_LIMIT { Self::Telescopic } else { Self::NonTelescopic }
    }
}

/// Itemized bill. The total is always the sum of the line item amounts.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub line_items: Vec<BillLineItem>,
    pub total: Cost,
}

impl Default for Bill {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bill {
    pub const fn empty() -> Self {
        Self { line_items: Vec::new(), total: Cost::ZERO }
    }

    fn from_line_items(line_items: Vec<BillLineItem>) -> Self {
        let total = line_items.iter().map(|line_item| line_item.amount).sum();
        Self { line_items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Charge each slab's share of the units at that slab's rate.
///
/// The slab containing the whole consumption contributes its fixed charge, if any.
///
/// The units must not exceed the top of a bounded schedule: the excess is not charged.
pub fn telescopic(schedule: &TariffSchedule, units: KilowattHours) -> Bill {
    let mut line_items = schedule
        .walk(units)
        .map(|(slab, units_in_slab)| {
            let end = slab.min + units_in_slab;
            let end = slab.max.map_or(end, |max| max.min(end));
            BillLineItem::energy(
                format!("{}-{} Units", slab.min.0, end.0),
                slab.rate,
                units_in_slab * slab.rate,
            )
        })
        .collect_vec();
    if let Some(slab) = schedule.slab_containing(units)
        && slab.fixed_charge.is_positive()
    {
        line_items.push(BillLineItem::fixed_charge(slab.fixed_charge));
    }
    Bill::from_line_items(line_items)
}

/// Charge all units at the rate of the single slab containing them.
pub fn non_telescopic(schedule: &TariffSchedule, units: KilowattHours) -> Bill {
    let Some(slab) = schedule.slab_containing(units) else {
        return Bill::empty();
    };
    let mut line_items =
        vec![BillLineItem::energy(format!("{} Units", units.0), slab.rate, units * slab.rate)];
    if slab.fixed_charge.is_positive() {
        line_items.push(BillLineItem::fixed_charge(slab.fixed_charge));
    }
    Bill::from_line_items(line_items)
}

/// Total cost of the units walked progressively over the schedule, without itemization.
pub fn progressive_total(schedule: &TariffSchedule, units: KilowattHours) -> Cost {
    if units.is_positive() { telescopic(schedule, units).total } else { Cost::ZERO }
}

/// Whole units billed for the consumption: fractions are dropped after rounding away float noise.
pub fn billable_units(units: KilowattHours) -> KilowattHours {
    units.round_to_micros().floor()
}

impl Tariffs {
    /// Pick the billing mode for the whole billable units and bill them.
    pub fn bill(&self, units: KilowattHours) -> Bill {
        let units = billable_units(units);
        if !units.is_positive() {
            return Bill::empty();
        }
        match BillingMode::of(units) {
            BillingMode::Telescopic => telescopic(&self.telescopic, units),
            BillingMode::NonTelescopic => non_telescopic(&self.non_telescopic, units),
        }
    }

    /// Bill typed-in consumption, see [`parse_units`].
    pub fn bill_input(&self, input: &str) -> Bill {
        self.bill(parse_units(input))
    }
}
