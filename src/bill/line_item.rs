use serde::Serialize;

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    EnergyCharge,
    FixedCharge,
}

/// One row of an itemized bill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BillLineItem {
    pub label: String,
    pub unit_note: String,
    pub amount: Cost,
    pub kind: LineItemKind,
}

impl BillLineItem {
    pub fn energy(label: String, rate: KilowattHourRate, amount: Cost) -> Self {
        Self {
            label,
            unit_note: format!("@ ₹{}/unit", rate.0),
            amount,
            kind: LineItemKind::EnergyCharge,
        }
    }

    pub fn fixed_charge(amount: Cost) -> Self {
        Self {
            label: "Fixed Charge".to_owned(),
            unit_note: "Monthly fixed charge".to_owned(),
            amount,
            kind: LineItemKind::FixedCharge,
        }
    }
}
